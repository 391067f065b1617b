//! Payment model
//!
//! A debit against an account in some spending category. Payments start
//! in progress and may later be rejected.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, PaymentId};
use super::money::Money;

/// Spending category a payment was made in (auto, food, pharmacy, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(category: impl Into<String>) -> Self {
        Self(category.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Status of a payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaymentStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "FAIL")]
    Fail,
    /// Every new payment starts here
    #[default]
    #[serde(rename = "INPROGRESS")]
    InProgress,
}

impl PaymentStatus {
    /// The literal used in dump files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Fail => "FAIL",
            Self::InProgress => "INPROGRESS",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A payment made from an account
///
/// Field order matches the dump record layout
/// `ID;AccountID;Amount;Category;Status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub account_id: AccountId,
    /// Always positive
    pub amount: Money,
    pub category: Category,
    pub status: PaymentStatus,
}

impl Payment {
    /// Create a new in-progress payment with a fresh ID
    pub fn new(account_id: AccountId, amount: Money, category: Category) -> Self {
        Self {
            id: PaymentId::new(),
            account_id,
            amount,
            category,
            status: PaymentStatus::InProgress,
        }
    }

    /// Mark this payment as failed
    pub fn fail(&mut self) {
        self.status = PaymentStatus::Fail;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_payment_in_progress() {
        let payment = Payment::new(AccountId::new(1), Money::from_minor(2000), "food".into());
        assert_eq!(payment.status, PaymentStatus::InProgress);
        assert_eq!(payment.amount.minor(), 2000);
        assert_eq!(payment.category.as_str(), "food");
    }

    #[test]
    fn test_fail() {
        let mut payment = Payment::new(AccountId::new(1), Money::from_minor(1), "auto".into());
        payment.fail();
        assert_eq!(payment.status, PaymentStatus::Fail);
    }

    #[test]
    fn test_status_literals() {
        assert_eq!(PaymentStatus::Ok.to_string(), "OK");
        assert_eq!(PaymentStatus::Fail.to_string(), "FAIL");
        assert_eq!(PaymentStatus::InProgress.to_string(), "INPROGRESS");
        assert_eq!(
            serde_json::to_string(&PaymentStatus::InProgress).unwrap(),
            "\"INPROGRESS\""
        );
        let status: PaymentStatus = serde_json::from_str("\"FAIL\"").unwrap();
        assert_eq!(status, PaymentStatus::Fail);
    }
}
