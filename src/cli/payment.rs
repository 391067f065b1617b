//! Payment CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_payment_list, format_payment_row};
use crate::error::WalletResult;
use crate::services::WalletService;

use super::{parse_account_id, parse_amount, parse_payment_id};

/// Payment subcommands
#[derive(Subcommand)]
pub enum PaymentCommands {
    /// Pay from an account
    Pay {
        /// Account ID
        account: String,
        /// Amount (e.g., "20.00" or "20")
        amount: String,
        /// Category (e.g., food, auto, pharmacy)
        category: String,
    },
    /// Reject a payment and return its amount to the account
    Reject {
        /// Payment ID
        payment: String,
    },
    /// Make the same payment again
    Repeat {
        /// Payment ID
        payment: String,
    },
    /// List payments
    List {
        /// Only payments of this account
        #[arg(short, long)]
        account: Option<String>,
    },
}

impl PaymentCommands {
    /// Whether the command changes the ledger
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Self::List { .. })
    }
}

/// Handle a payment command
pub fn handle_payment_command(
    service: &mut WalletService,
    settings: &Settings,
    cmd: PaymentCommands,
) -> WalletResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        PaymentCommands::Pay {
            account,
            amount,
            category,
        } => {
            let id = parse_account_id(&account)?;
            let amount = parse_amount(&amount)?;
            let payment = service.pay(id, amount, category.as_str())?;
            println!("Created payment:");
            println!("  {}", format_payment_row(&payment, symbol));
        }

        PaymentCommands::Reject { payment } => {
            let id = parse_payment_id(&payment)?;
            service.reject(id)?;
            let rejected = service.find_payment_by_id(id)?;
            println!(
                "Rejected payment {}. {} returned to account #{}",
                id,
                rejected.amount.format_with_symbol(symbol),
                rejected.account_id
            );
        }

        PaymentCommands::Repeat { payment } => {
            let id = parse_payment_id(&payment)?;
            let repeated = service.repeat(id)?;
            println!("Repeated payment:");
            println!("  {}", format_payment_row(&repeated, symbol));
        }

        PaymentCommands::List { account } => {
            let payments: Vec<_> = match account {
                Some(account) => {
                    let id = parse_account_id(&account)?;
                    service.find_account_by_id(id)?;
                    service.payments_for_account(id).collect()
                }
                None => service.payments().iter().collect(),
            };
            print!("{}", format_payment_list(&payments, symbol));
        }
    }

    Ok(())
}
