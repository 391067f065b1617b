//! Strongly-typed ID wrappers for all entity types
//!
//! Accounts use sequential numeric IDs handed out by the service; payments
//! and favorites use random UUID tokens. Newtypes keep them from being mixed
//! up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use uuid::Uuid;

/// Sequential account identifier, starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn value(&self) -> i64 {
        self.0
    }

    /// The ID that follows this one
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Macro to generate UUID-backed ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse an ID from its hyphenated string form
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(Uuid::parse_str(s.trim())?))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

define_id!(PaymentId);
define_id!(FavoriteId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_sequence() {
        let id = AccountId::new(1);
        assert_eq!(id.next(), AccountId::new(2));
        assert_eq!(id.to_string(), "1");
        assert_eq!("42".parse::<AccountId>().unwrap().value(), 42);
        assert!("abc".parse::<AccountId>().is_err());
    }

    #[test]
    fn test_payment_id_creation() {
        let id = PaymentId::new();
        assert!(!id.as_uuid().is_nil());
        assert_ne!(id, PaymentId::new());
    }

    #[test]
    fn test_id_display_is_full_uuid() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = FavoriteId::parse(uuid_str).unwrap();
        assert_eq!(id.to_string(), uuid_str);
        assert_eq!(uuid_str.parse::<FavoriteId>().unwrap(), id);
    }

    #[test]
    fn test_id_serialization() {
        let id = PaymentId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
        let deserialized: PaymentId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_invalid_id_rejected() {
        assert!(PaymentId::parse("not-a-uuid").is_err());
    }
}
