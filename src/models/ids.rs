//! Strongly-typed ID wrappers for expense and budget records
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! record types at compile time. The underlying value is a prefixed string
//! combining a random component with a millisecond timestamp.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Generate a prefixed record identifier
///
/// The result combines the prefix, a random component drawn from a v4 UUID,
/// and the current time in base-36 milliseconds. Two calls in the same
/// millisecond still differ with overwhelming probability; no cross-device
/// uniqueness is guaranteed or needed for a single-user dataset.
pub fn generate_id(prefix: &str) -> String {
    let random = Uuid::new_v4().simple().to_string();
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    format!("{}_{}{}", prefix, &random[..7], to_base36(millis))
}

/// Render a number in lowercase base-36
fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize] as char);
        n /= 36;
    }
    buf.iter().rev().collect()
}

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a new random ID
            pub fn new() -> Self {
                Self(generate_id($prefix))
            }

            /// Wrap an existing identifier string
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// The prefix used when generating IDs of this type
            pub const fn prefix() -> &'static str {
                $prefix
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

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

define_id!(ExpenseId, "exp");
define_id!(BudgetId, "bud");
