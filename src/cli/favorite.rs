//! Favorite CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_favorite_list, format_favorite_row, format_payment_row};
use crate::error::WalletResult;
use crate::services::WalletService;

use super::{parse_favorite_id, parse_payment_id};

/// Favorite subcommands
#[derive(Subcommand)]
pub enum FavoriteCommands {
    /// Bookmark a payment under a name
    Add {
        /// Payment ID
        payment: String,
        /// Name for the favorite
        name: String,
    },
    /// Pay again from a favorite
    Pay {
        /// Favorite ID
        favorite: String,
    },
    /// List favorites
    List,
}

impl FavoriteCommands {
    /// Whether the command changes the ledger
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Self::List)
    }
}

/// Handle a favorite command
pub fn handle_favorite_command(
    service: &mut WalletService,
    settings: &Settings,
    cmd: FavoriteCommands,
) -> WalletResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        FavoriteCommands::Add { payment, name } => {
            let id = parse_payment_id(&payment)?;
            let favorite = service.favorite_payment(id, name)?;
            println!("Added favorite:");
            println!("  {}", format_favorite_row(&favorite, symbol));
        }

        FavoriteCommands::Pay { favorite } => {
            let id = parse_favorite_id(&favorite)?;
            let payment = service.pay_from_favorite(id)?;
            println!("Created payment:");
            println!("  {}", format_payment_row(&payment, symbol));
        }

        FavoriteCommands::List => {
            let favorites: Vec<_> = service.favorites().iter().collect();
            print!("{}", format_favorite_list(&favorites, symbol));
        }
    }

    Ok(())
}
