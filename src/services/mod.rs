//! Service layer for the wallet ledger
//!
//! Business logic over the in-memory ledger: validation, balance updates
//! and the export/import entry points.

pub mod wallet;

pub use wallet::{ImportSummary, WalletService};
