//! Conversion outcomes.

use cambio_shared::types::{CurrencyCode, Money};

/// Outcome of converting one transaction into the default currency.
///
/// An unknown currency is a routine outcome (no feed covers every code in
/// existence), so it is a value here rather than an error. Batch
/// conversion relies on this: every input slot gets exactly one outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// The converted amount in the default currency, rounded to two
    /// fractional digits.
    Converted(Money),

    /// The transaction's currency is absent from the rate table.
    UnknownCurrency(CurrencyCode),
}

impl Conversion {
    /// Returns the converted money, if any.
    #[must_use]
    pub const fn converted(&self) -> Option<&Money> {
        match self {
            Self::Converted(money) => Some(money),
            Self::UnknownCurrency(_) => None,
        }
    }

    /// Returns true for a successful conversion.
    #[must_use]
    pub const fn is_converted(&self) -> bool {
        matches!(self, Self::Converted(_))
    }
}

impl std::fmt::Display for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Converted(money) => write!(f, "{money}"),
            Self::UnknownCurrency(code) => write!(f, "unknown currency: {code}"),
        }
    }
}
