//! Core data models for the wallet ledger
//!
//! Accounts, the payments made from them, favorites bookmarked from those
//! payments, and the money and ID types they share.

pub mod account;
pub mod favorite;
pub mod ids;
pub mod money;
pub mod payment;

pub use account::{Account, Phone};
pub use favorite::Favorite;
pub use ids::{AccountId, FavoriteId, PaymentId};
pub use money::{Money, MoneyParseError};
pub use payment::{Category, Payment, PaymentStatus};
