//! Account CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_account_details, format_account_list};
use crate::error::WalletResult;
use crate::services::WalletService;

use super::{parse_account_id, parse_amount};

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Register a new account for a phone number
    Register {
        /// Phone number (must not be registered yet)
        phone: String,
    },
    /// Add funds to an account
    Deposit {
        /// Account ID
        account: String,
        /// Amount (e.g., "100.00" or "100")
        amount: String,
    },
    /// Show an account with its payments and favorites
    Show {
        /// Account ID
        account: String,
    },
    /// List all accounts
    List,
}

impl AccountCommands {
    /// Whether the command changes the ledger
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Register { .. } | Self::Deposit { .. })
    }
}

/// Handle an account command
pub fn handle_account_command(
    service: &mut WalletService,
    settings: &Settings,
    cmd: AccountCommands,
) -> WalletResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        AccountCommands::Register { phone } => {
            let account = service.register_account(phone.trim())?;
            println!("Registered account #{}", account.id);
            println!("  Phone:   {}", account.phone);
            println!("  Balance: {}", account.balance.format_with_symbol(symbol));
        }

        AccountCommands::Deposit { account, amount } => {
            let id = parse_account_id(&account)?;
            let amount = parse_amount(&amount)?;
            service.deposit(id, amount)?;

            let updated = service.find_account_by_id(id)?;
            println!(
                "Deposited {} to account #{}. New balance: {}",
                amount.format_with_symbol(symbol),
                id,
                updated.balance.format_with_symbol(symbol)
            );
        }

        AccountCommands::Show { account } => {
            let id = parse_account_id(&account)?;
            let found = service.find_account_by_id(id)?;
            let payments: Vec<_> = service.payments_for_account(id).collect();
            let favorites: Vec<_> = service.favorites_for_account(id).collect();
            print!("{}", format_account_details(found, &payments, &favorites, symbol));
        }

        AccountCommands::List => {
            print!("{}", format_account_list(service.accounts(), symbol));
        }
    }

    Ok(())
}
