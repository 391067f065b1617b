//! Directory dump of the whole ledger
//!
//! One newline-delimited file per entity type inside a directory:
//!
//! - `accounts.dump`: `ID;Phone;Balance`
//! - `payments.dump`: `ID;AccountID;Amount;Category;Status`
//! - `favorites.dump`: `ID;AccountID;Name;Amount;Category`

use std::fs::{self, File};
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{WalletError, WalletResult};
use crate::models::{Account, Favorite, Payment};

use super::file_io::{read_records, write_records, RecordTerminator};

pub const ACCOUNTS_FILE: &str = "accounts.dump";
pub const PAYMENTS_FILE: &str = "payments.dump";
pub const FAVORITES_FILE: &str = "favorites.dump";

/// Locations of the dump files inside a directory
#[derive(Debug, Clone)]
pub struct DumpPaths {
    dir: PathBuf,
}

impl DumpPaths {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn accounts(&self) -> PathBuf {
        self.dir.join(ACCOUNTS_FILE)
    }

    pub fn payments(&self) -> PathBuf {
        self.dir.join(PAYMENTS_FILE)
    }

    pub fn favorites(&self) -> PathBuf {
        self.dir.join(FAVORITES_FILE)
    }
}

/// Outcome of loading one dump file
#[derive(Debug)]
pub enum DumpFile<T> {
    /// The file does not exist
    Missing,
    /// The file exists but could not be opened
    Unreadable(String),
    /// Every record in the file
    Records(Vec<T>),
}

/// Write the ledger into `dir`, creating the directory if needed
///
/// Empty collections are skipped, so their files are neither created nor
/// truncated. A failure part-way leaves the files already written in place.
pub fn write_dump(
    dir: &Path,
    accounts: &[Account],
    payments: &[Payment],
    favorites: &[Favorite],
) -> WalletResult<()> {
    fs::create_dir_all(dir).map_err(|e| {
        WalletError::Io(format!("Failed to create directory {}: {}", dir.display(), e))
    })?;

    let paths = DumpPaths::new(dir);

    if !accounts.is_empty() {
        write_records(paths.accounts(), accounts, RecordTerminator::Newline)?;
    }
    if !payments.is_empty() {
        write_records(paths.payments(), payments, RecordTerminator::Newline)?;
    }
    if !favorites.is_empty() {
        write_records(paths.favorites(), favorites, RecordTerminator::Newline)?;
    }

    Ok(())
}

/// Load one dump file
///
/// Open failures are reported through [`DumpFile`] rather than as errors;
/// failures while reading or parsing an opened file are errors.
pub fn read_dump_file<T: DeserializeOwned>(path: &Path) -> WalletResult<DumpFile<T>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(DumpFile::Missing),
        Err(e) => {
            return Ok(DumpFile::Unreadable(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    let records = read_records(BufReader::new(file), path, RecordTerminator::Newline)?;
    Ok(DumpFile::Records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountId, Money, PaymentStatus};
    use tempfile::TempDir;

    fn sample_ledger() -> (Vec<Account>, Vec<Payment>, Vec<Favorite>) {
        let mut account = Account::new(AccountId::new(1), "79000000001".into());
        account.balance = Money::from_minor(8000);
        let payment = Payment::new(account.id, Money::from_minor(2000), "food".into());
        let favorite = Favorite::from_payment(&payment, "Lunch");
        (vec![account], vec![payment], vec![favorite])
    }

    #[test]
    fn test_write_dump_layout() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("nested").join("dump");
        let (accounts, payments, favorites) = sample_ledger();

        write_dump(&dir, &accounts, &payments, &favorites).unwrap();

        let paths = DumpPaths::new(&dir);
        assert_eq!(
            fs::read_to_string(paths.accounts()).unwrap(),
            "1;79000000001;8000\n"
        );
        assert_eq!(
            fs::read_to_string(paths.payments()).unwrap(),
            format!("{};1;2000;food;INPROGRESS\n", payments[0].id)
        );
        assert_eq!(
            fs::read_to_string(paths.favorites()).unwrap(),
            format!("{};1;Lunch;2000;food\n", favorites[0].id)
        );
    }

    #[test]
    fn test_empty_collections_not_written() {
        let temp_dir = TempDir::new().unwrap();
        let (accounts, _, _) = sample_ledger();

        write_dump(temp_dir.path(), &accounts, &[], &[]).unwrap();

        let paths = DumpPaths::new(temp_dir.path());
        assert!(paths.accounts().exists());
        assert!(!paths.payments().exists());
        assert!(!paths.favorites().exists());
    }

    #[test]
    fn test_read_dump_file_records() {
        let temp_dir = TempDir::new().unwrap();
        let (accounts, payments, favorites) = sample_ledger();
        write_dump(temp_dir.path(), &accounts, &payments, &favorites).unwrap();
        let paths = DumpPaths::new(temp_dir.path());

        match read_dump_file::<Payment>(&paths.payments()).unwrap() {
            DumpFile::Records(loaded) => assert_eq!(loaded, payments),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_read_dump_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DumpPaths::new(temp_dir.path());
        assert!(matches!(
            read_dump_file::<Account>(&paths.accounts()).unwrap(),
            DumpFile::Missing
        ));
    }

    #[test]
    fn test_read_dump_file_unreadable() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DumpPaths::new(temp_dir.path());
        // A directory where the file should be cannot be read as records
        fs::create_dir(paths.accounts()).unwrap();

        let result = read_dump_file::<Account>(&paths.accounts());
        assert!(matches!(
            result,
            Ok(DumpFile::Unreadable(_)) | Err(WalletError::Io(_))
        ));
    }

    #[test]
    fn test_parses_original_payment_lines() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DumpPaths::new(temp_dir.path());
        fs::write(
            paths.payments(),
            "550e8400-e29b-41d4-a716-446655440000;1;100000;auto;FAIL\n",
        )
        .unwrap();

        let DumpFile::Records(loaded) = read_dump_file::<Payment>(&paths.payments()).unwrap() else {
            panic!("expected records");
        };
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].status, PaymentStatus::Fail);
        assert_eq!(loaded[0].amount.minor(), 100000);
        assert_eq!(loaded[0].category.as_str(), "auto");
    }
}
