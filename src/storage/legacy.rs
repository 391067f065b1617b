//! Legacy single-file account export
//!
//! Accounts only, written as `ID;Phone;Balance` records each terminated by
//! `|`, with no trailing newline.

use std::fs;
use std::path::Path;

use crate::error::{WalletError, WalletResult};
use crate::models::Account;

use super::file_io::{read_records, write_records, RecordTerminator};

/// Write all accounts to a single file, replacing its contents
pub fn write_accounts<P: AsRef<Path>>(path: P, accounts: &[Account]) -> WalletResult<()> {
    write_records(path, accounts, RecordTerminator::Pipe)
}

/// Read every account from a legacy export file
///
/// A final record without its `|` terminator is still accepted, and trailing
/// whitespace after the last terminator is ignored.
pub fn read_accounts<P: AsRef<Path>>(path: P) -> WalletResult<Vec<Account>> {
    let path = path.as_ref();

    let content = fs::read_to_string(path)
        .map_err(|e| WalletError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    read_records(content.trim_end().as_bytes(), path, RecordTerminator::Pipe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountId, Money};
    use tempfile::TempDir;

    fn account(id: i64, phone: &str, balance: i64) -> Account {
        let mut account = Account::new(AccountId::new(id), phone.into());
        account.balance = Money::from_minor(balance);
        account
    }

    #[test]
    fn test_write_format() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.txt");

        write_accounts(&path, &[account(1, "79000000001", 10000), account(2, "79000000002", 0)])
            .unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "1;79000000001;10000|2;79000000002;0|"
        );
    }

    #[test]
    fn test_read_original_layout() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.txt");
        fs::write(&path, "1;992000000001;100|2;992000000002;250|\n").unwrap();

        let accounts = read_accounts(&path).unwrap();
        assert_eq!(accounts, vec![account(1, "992000000001", 100), account(2, "992000000002", 250)]);
    }

    #[test]
    fn test_read_unterminated_last_record() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.txt");
        fs::write(&path, "1;992000000001;100|2;992000000002;250").unwrap();

        assert_eq!(read_accounts(&path).unwrap().len(), 2);
    }

    #[test]
    fn test_empty_file_has_no_accounts() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.txt");
        write_accounts(&path, &[]).unwrap();

        assert!(read_accounts(&path).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_accounts(temp_dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, WalletError::Io(_)));
    }

    #[test]
    fn test_bad_balance_is_dump_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.txt");
        fs::write(&path, "1;992000000001;lots|").unwrap();

        assert!(matches!(read_accounts(&path), Err(WalletError::Dump(_))));
    }
}
