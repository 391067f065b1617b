//! Favorite model
//!
//! A named snapshot of a payment that can be paid again later.

use serde::{Deserialize, Serialize};

use super::ids::{AccountId, FavoriteId};
use super::money::Money;
use super::payment::{Category, Payment};

/// A bookmarked payment template
///
/// Field order matches the dump record layout
/// `ID;AccountID;Name;Amount;Category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: FavoriteId,
    pub account_id: AccountId,
    pub name: String,
    pub amount: Money,
    pub category: Category,
}

impl Favorite {
    /// Snapshot a payment under the given name
    pub fn from_payment(payment: &Payment, name: impl Into<String>) -> Self {
        Self {
            id: FavoriteId::new(),
            account_id: payment.account_id,
            name: name.into(),
            amount: payment.amount,
            category: payment.category.clone(),
        }
    }
}
