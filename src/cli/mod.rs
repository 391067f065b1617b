//! CLI command handlers
//!
//! Bridges the clap argument parsing with the wallet service.

pub mod account;
pub mod dump;
pub mod favorite;
pub mod payment;

pub use account::{handle_account_command, AccountCommands};
pub use dump::{handle_dump_command, DumpCommands};
pub use favorite::{handle_favorite_command, FavoriteCommands};
pub use payment::{handle_payment_command, PaymentCommands};

use crate::error::{WalletError, WalletResult};
use crate::models::{AccountId, FavoriteId, Money, PaymentId};

/// Parse an account ID argument
pub fn parse_account_id(input: &str) -> WalletResult<AccountId> {
    input
        .parse()
        .map_err(|_| WalletError::Validation(format!("Invalid account ID: '{}'", input)))
}

/// Parse a payment ID argument; a malformed ID cannot match any payment
pub fn parse_payment_id(input: &str) -> WalletResult<PaymentId> {
    PaymentId::parse(input).map_err(|_| WalletError::PaymentNotFound(input.to_string()))
}

/// Parse a favorite ID argument; a malformed ID cannot match any favorite
pub fn parse_favorite_id(input: &str) -> WalletResult<FavoriteId> {
    FavoriteId::parse(input).map_err(|_| WalletError::FavoriteNotFound(input.to_string()))
}

/// Parse an amount argument such as "100" or "25.50"
pub fn parse_amount(input: &str) -> WalletResult<Money> {
    Money::parse(input).map_err(|e| {
        WalletError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '25.50' or '100'. Error: {}",
            input, e
        ))
    })
}
