//! In-memory rate table.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use cambio_shared::types::CurrencyCode;

use super::snapshot::RateSnapshot;

/// Immutable mapping from currency code to exchange rate.
///
/// For a currency C, `amount_in_C * rate = amount_in_default_currency`.
/// A table is built wholesale from a single snapshot; entries with
/// non-positive rates never make it in. There is no partial update:
/// refresh means the converter swaps one table reference for another.
#[derive(Debug)]
pub struct RateTable {
    rates: HashMap<CurrencyCode, Decimal>,
    fetched_at: DateTime<Utc>,
}

impl RateTable {
    /// Builds a table from one snapshot, excluding non-positive rates.
    #[must_use]
    pub fn from_snapshot(snapshot: RateSnapshot) -> Self {
        let (rates, fetched_at) = snapshot.into_parts();
        let rates = rates
            .into_iter()
            .filter(|(_, rate)| *rate > Decimal::ZERO)
            .collect();
        Self { rates, fetched_at }
    }

    /// Looks up the rate for `code`. O(1), no I/O, no mutation.
    ///
    /// Lookup is case-sensitive exact match, like the codes themselves.
    #[must_use]
    pub fn lookup(&self, code: &CurrencyCode) -> Option<Decimal> {
        self.rates.get(code).copied()
    }

    /// Number of currencies in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table carries no rates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// When the snapshot behind this table was fetched.
    #[must_use]
    pub const fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    /// Returns true when the table's snapshot is older than `max_age`.
    #[must_use]
    pub fn is_stale(&self, max_age: Duration) -> bool {
        Utc::now() - self.fetched_at > max_age
    }
}
