//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::currency::CurrencyCode;

/// Represents a monetary amount with currency.
///
/// Doubles as the transaction input (parsed from `"CHF 123.45"`) and as the
/// converted result in the default currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount, with whatever precision the source carried.
    pub amount: Decimal,
    /// Currency code for the amount.
    pub currency: CurrencyCode,
}

/// Errors from parsing the `"<CODE> <amount>"` text form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    /// No space separator, so no amount to parse.
    #[error("expected \"<CODE> <amount>\", found no amount")]
    MissingAmount,

    /// The separator was there but the code part was empty.
    #[error("currency code is empty")]
    EmptyCurrency,

    /// The amount part is not a decimal literal.
    #[error("invalid amount {0:?}")]
    InvalidAmount(String),
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative()
    }
}

impl std::fmt::Display for Money {
    /// Formats as the output text form: code, one space, amount with
    /// exactly two fractional digits and a `.` decimal point.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:.2}", self.currency, self.amount)
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    /// Parses the `"<CODE> <amount>"` form, single space separator.
    ///
    /// The code is taken exactly as written; the amount must be a plain
    /// decimal literal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (code, amount) = s.split_once(' ').ok_or(MoneyParseError::MissingAmount)?;
        if code.is_empty() {
            return Err(MoneyParseError::EmptyCurrency);
        }
        let amount = Decimal::from_str(amount)
            .map_err(|_| MoneyParseError::InvalidAmount(amount.to_string()))?;
        Ok(Self::new(amount, CurrencyCode::new(code)))
    }
}
