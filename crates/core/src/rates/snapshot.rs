//! Whole-fetch rate snapshots.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use cambio_shared::types::CurrencyCode;

/// One complete read of a rate feed.
///
/// A snapshot always represents a whole fetch; partial snapshots do not
/// exist. Each rate converts one unit of the keyed currency into the
/// default currency.
#[derive(Debug, Clone)]
pub struct RateSnapshot {
    rates: HashMap<CurrencyCode, Decimal>,
    fetched_at: DateTime<Utc>,
}

impl RateSnapshot {
    /// Creates a snapshot stamped with the current time.
    #[must_use]
    pub fn new(rates: HashMap<CurrencyCode, Decimal>) -> Self {
        Self {
            rates,
            fetched_at: Utc::now(),
        }
    }

    /// Number of entries in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the snapshot carries no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// When this snapshot was fetched.
    #[must_use]
    pub const fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    pub(crate) fn into_parts(self) -> (HashMap<CurrencyCode, Decimal>, DateTime<Utc>) {
        (self.rates, self.fetched_at)
    }
}

impl FromIterator<(CurrencyCode, Decimal)> for RateSnapshot {
    fn from_iter<I: IntoIterator<Item = (CurrencyCode, Decimal)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
