//! Open currency codes.
//!
//! Codes are opaque, case-sensitive identifiers ("USD", "JPY"). No
//! normalization and no ISO 4217 validation happens here: two codes are
//! equal only when they match exactly, and the set of known codes is
//! whatever the rate feed currently carries.

use serde::{Deserialize, Serialize};

/// A currency code as it appears in transactions and rate feeds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Creates a code from its textual form, exactly as given.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}
