use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn wallet(base: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wallet").unwrap();
    cmd.env("WALLET_DATA_DIR", base);
    cmd
}

/// First field of every line in a dump file
fn dump_ids(base: &Path, file: &str) -> Vec<String> {
    fs::read_to_string(base.join("data").join(file))
        .unwrap()
        .lines()
        .map(|line| line.split(';').next().unwrap().to_string())
        .collect()
}

#[test]
fn test_register_deposit_pay_reject() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();

    wallet(base)
        .args(["account", "register", "79000000001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered account #1"));

    wallet(base)
        .args(["account", "deposit", "1", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New balance: $100.00"));

    wallet(base)
        .args(["payment", "pay", "1", "20", "food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INPROGRESS"));

    assert_eq!(
        fs::read_to_string(base.join("data").join("accounts.dump")).unwrap(),
        "1;79000000001;8000\n"
    );

    let payment_id = dump_ids(base, "payments.dump").remove(0);
    wallet(base)
        .args(["payment", "reject", &payment_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("$20.00 returned to account #1"));

    wallet(base)
        .args(["account", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$100.00"))
        .stdout(predicate::str::contains("FAIL"));
}

#[test]
fn test_duplicate_phone_fails() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();

    wallet(base)
        .args(["account", "register", "79000000001"])
        .assert()
        .success();

    wallet(base)
        .args(["account", "register", "79000000001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Phone already registered"));
}

#[test]
fn test_pay_without_funds_fails() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();

    wallet(base)
        .args(["account", "register", "79000000001"])
        .assert()
        .success();

    wallet(base)
        .args(["payment", "pay", "1", "5", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not enough balance"));
}

#[test]
fn test_favorite_and_pay_from_favorite() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();

    wallet(base).args(["account", "register", "79000000001"]).assert().success();
    wallet(base).args(["account", "deposit", "1", "100"]).assert().success();
    wallet(base).args(["payment", "pay", "1", "15", "mobile"]).assert().success();

    let payment_id = dump_ids(base, "payments.dump").remove(0);
    wallet(base)
        .args(["favorite", "add", &payment_id, "Phone bill"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Phone bill"));

    let favorite_id = dump_ids(base, "favorites.dump").remove(0);
    wallet(base)
        .args(["favorite", "pay", &favorite_id])
        .assert()
        .success();

    assert_eq!(dump_ids(base, "payments.dump").len(), 2);
    wallet(base)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$70.00"));
}

#[test]
fn test_unknown_payment_id_fails() {
    let temp_dir = TempDir::new().unwrap();

    wallet(temp_dir.path())
        .args(["payment", "repeat", "not-a-payment"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Payment not found: not-a-payment"));
}

#[test]
fn test_legacy_file_export_and_import() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().join("first");
    let other = temp_dir.path().join("second");
    let file = temp_dir.path().join("accounts.txt");

    wallet(&base).args(["account", "register", "79000000001"]).assert().success();
    wallet(&base).args(["account", "deposit", "1", "1.50"]).assert().success();
    wallet(&base)
        .args(["dump", "export-file", file.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&file).unwrap(), "1;79000000001;150|");

    wallet(&other)
        .args(["dump", "import-file", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 accounts"));

    wallet(&other)
        .args(["account", "register", "79000000002"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered account #2"));
}

#[test]
fn test_directory_import_skips_duplicates() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().join("wallet");
    let export_dir = temp_dir.path().join("export");

    wallet(&base).args(["account", "register", "79000000001"]).assert().success();
    wallet(&base)
        .args(["dump", "export", export_dir.to_str().unwrap()])
        .assert()
        .success();

    wallet(&base)
        .args(["dump", "import", export_dir.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Duplicates skipped: 1"));
}

#[test]
fn test_audit_log_records_operations() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();

    wallet(base).args(["account", "register", "79000000001"]).assert().success();
    wallet(base).args(["account", "deposit", "1", "10"]).assert().success();

    wallet(base)
        .args(["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Account 1"))
        .stdout(predicate::str::contains("balance: 0 -> 1000"));
}

#[test]
fn test_init_writes_settings() {
    let temp_dir = TempDir::new().unwrap();

    wallet(temp_dir.path()).arg("init").assert().success();

    assert!(temp_dir.path().join("config.json").exists());
    assert!(temp_dir.path().join("data").is_dir());
}

#[test]
fn test_deposit_overflow_fails() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();

    wallet(base).args(["account", "register", "79000000001"]).assert().success();
    wallet(base)
        .args(["account", "deposit", "1", "90000000000000000"])
        .assert()
        .success();

    wallet(base)
        .args(["account", "deposit", "1", "90000000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Balance overflow on account 1"));

    assert_eq!(
        fs::read_to_string(base.join("data").join("accounts.dump")).unwrap(),
        "1;79000000001;9000000000000000000\n"
    );
}

#[test]
fn test_oversized_amount_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();

    wallet(base).args(["account", "register", "79000000001"]).assert().success();

    wallet(base)
        .args(["account", "deposit", "1", "184467440737095517"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn test_config_and_log_before_init() {
    let temp_dir = TempDir::new().unwrap();

    wallet(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:    no"));

    wallet(temp_dir.path())
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("No audit log at"));

    wallet(temp_dir.path()).arg("init").assert().success();
    wallet(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:    yes"));
}
