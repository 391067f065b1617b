//! Configuration for the wallet CLI
//!
//! - Path resolution for the data directory, settings and audit log
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::WalletPaths;
pub use settings::Settings;
