use anyhow::Result;
use clap::{Parser, Subcommand};

use wallet::audit::AuditLogger;
use wallet::cli::{
    handle_account_command, handle_dump_command, handle_favorite_command, handle_payment_command,
    AccountCommands, DumpCommands, FavoriteCommands, PaymentCommands,
};
use wallet::config::{paths::WalletPaths, settings::Settings};
use wallet::services::WalletService;
use wallet::WalletResult;

#[derive(Parser)]
#[command(
    name = "wallet",
    version,
    about = "In-memory account and payment ledger with flat-file dumps",
    long_about = "wallet keeps accounts, payments and favorite payments in a \
                  ledger that is loaded from and saved to plain ';'-separated \
                  dump files on every run."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management commands
    #[command(subcommand, alias = "acc")]
    Account(AccountCommands),

    /// Payment commands
    #[command(subcommand)]
    Payment(PaymentCommands),

    /// Favorite payment commands
    #[command(subcommand, alias = "fav")]
    Favorite(FavoriteCommands),

    /// Export and import dump files
    #[command(subcommand)]
    Dump(DumpCommands),

    /// Show recent audit log entries
    Log {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        count: usize,
    },

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = WalletPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("wallet - account and payment ledger");
        println!();
        println!("Run 'wallet --help' for usage information.");
        return Ok(());
    };

    match command {
        Commands::Init => {
            println!("Initializing wallet at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
        }
        Commands::Config => {
            println!("Wallet Configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!(
                "Initialized:    {}",
                if paths.is_initialized() { "yes" } else { "no (run 'wallet init')" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        Commands::Log { count } => {
            let logger = AuditLogger::new(paths.audit_log());
            if !logger.exists() {
                println!("No audit log at {}", logger.path().display());
                return Ok(());
            }

            let entries = logger.read_recent(count)?;
            if entries.is_empty() {
                println!("No audit entries.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        Commands::Account(cmd) => {
            let mutation = cmd.is_mutation();
            with_ledger(&paths, &settings, mutation, |service| {
                handle_account_command(service, &settings, cmd)
            })?;
        }
        Commands::Payment(cmd) => {
            let mutation = cmd.is_mutation();
            with_ledger(&paths, &settings, mutation, |service| {
                handle_payment_command(service, &settings, cmd)
            })?;
        }
        Commands::Favorite(cmd) => {
            let mutation = cmd.is_mutation();
            with_ledger(&paths, &settings, mutation, |service| {
                handle_favorite_command(service, &settings, cmd)
            })?;
        }
        Commands::Dump(cmd) => {
            let mutation = cmd.is_mutation();
            with_ledger(&paths, &settings, mutation, |service| {
                handle_dump_command(service, cmd)
            })?;
        }
    }

    Ok(())
}

/// Load the ledger saved by previous runs, run `action` on it and save it
/// back when the action mutates it
fn with_ledger<F>(paths: &WalletPaths, settings: &Settings, mutation: bool, action: F) -> Result<()>
where
    F: FnOnce(&mut WalletService) -> WalletResult<()>,
{
    paths.ensure_directories()?;

    let mut service = WalletService::new();
    if settings.audit_enabled {
        service = service.with_audit_log(paths.audit_log());
    }

    let summary = service.import(paths.data_dir())?;
    for warning in &summary.warnings {
        eprintln!("Warning: {}", warning);
    }

    action(&mut service)?;

    if mutation {
        service.export(paths.data_dir())?;
    }

    Ok(())
}
