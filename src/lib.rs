//! wallet - in-memory account and payment ledger
//!
//! Manages user accounts, records payments against them, supports payment
//! rejection and repetition, and lets users bookmark payments as favorites
//! for quick re-execution. State lives in memory and is saved to and loaded
//! from `;`-separated text dumps.
//!
//! # Architecture
//!
//! - `models`: accounts, payments, favorites, money and IDs
//! - `services`: the ledger and its operations
//! - `storage`: dump file formats
//! - `audit`: append-only audit log of mutations
//! - `config`: paths and user settings
//! - `cli` / `display`: command-line surface
//!
//! # Example
//!
//! ```
//! use wallet::models::Money;
//! use wallet::services::WalletService;
//!
//! let mut service = WalletService::new();
//! let account = service.register_account("79000000001").unwrap();
//! service.deposit(account.id, Money::from_minor(10_000)).unwrap();
//! let payment = service.pay(account.id, Money::from_minor(2_000), "food").unwrap();
//! service.reject(payment.id).unwrap();
//! assert_eq!(service.find_account_by_id(account.id).unwrap().balance.minor(), 10_000);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{WalletError, WalletResult};
pub use services::WalletService;
