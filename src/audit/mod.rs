//! Audit logging for the wallet ledger
//!
//! Records every mutation of the ledger (account registration, balance
//! changes, new payments, rejections, new favorites) in an append-only
//! JSONL file.
//!
//! # Example
//!
//! ```rust,ignore
//! use wallet::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! logger.log(&AuditEntry::update(
//!     EntityType::Account,
//!     account.id.to_string(),
//!     Some(account.phone.to_string()),
//!     &before,
//!     &account,
//! ))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
