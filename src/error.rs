//! Custom error types for the wallet ledger
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::{AccountId, Money, Phone};

/// The main error type for wallet operations
#[derive(Error, Debug)]
pub enum WalletError {
    /// An account with this phone number already exists
    #[error("Phone already registered: {0}")]
    PhoneAlreadyRegistered(Phone),

    /// Deposits and payments require a strictly positive amount
    #[error("Amount must be greater than zero, got {0}")]
    AmountMustBePositive(Money),

    /// No account with the given ID
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// The account balance does not cover the payment
    #[error("Not enough balance: need {needed}, have {available}")]
    NotEnoughBalance { needed: Money, available: Money },

    /// Crediting the account would exceed the largest representable balance
    #[error("Balance overflow on account {account}: cannot add {amount}")]
    BalanceOverflow { account: AccountId, amount: Money },

    /// No payment with the given ID
    #[error("Payment not found: {0}")]
    PaymentNotFound(String),

    /// No favorite with the given ID
    #[error("Favorite not found: {0}")]
    FavoriteNotFound(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Malformed dump file contents
    #[error("Dump error: {0}")]
    Dump(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid user input
    #[error("Validation error: {0}")]
    Validation(String),
}

impl WalletError {
    /// Check if this is one of the "not found" errors
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::AccountNotFound(_) | Self::PaymentNotFound(_) | Self::FavoriteNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::AmountMustBePositive(_))
    }
}

impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for WalletError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            Self::Io(err.to_string())
        } else {
            Self::Dump(err.to_string())
        }
    }
}

/// Result type alias for wallet operations
pub type WalletResult<T> = Result<T, WalletError>;
