//! Account model
//!
//! A user account identified by a sequential ID and a unique phone number.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;

/// Phone number an account is registered under
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub fn new(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Phone {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A user account
///
/// Field order matches the dump record layout `ID;Phone;Balance`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub phone: Phone,
    /// Current balance, never negative
    pub balance: Money,
}

impl Account {
    /// Create a new account with a zero balance
    pub fn new(id: AccountId, phone: Phone) -> Self {
        Self {
            id,
            phone,
            balance: Money::zero(),
        }
    }

    /// Check whether the balance covers the given amount
    pub fn can_afford(&self, amount: Money) -> bool {
        self.balance >= amount
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} ({})", self.id, self.phone)
    }
}
