//! Rate source contract and the fixed in-memory implementation.

use std::collections::HashMap;
use std::future::Future;

use rust_decimal::Decimal;

use cambio_shared::types::CurrencyCode;

use super::error::FetchError;
use super::snapshot::RateSnapshot;

/// External provider of whole currency-to-rate snapshots.
///
/// A fetch either yields the full snapshot or fails. Implementations skip
/// individually invalid records (non-positive or non-numeric rates) instead
/// of aborting the read, so a returned snapshot contains only valid
/// entries. Fetching has no side effect beyond the data call itself.
pub trait RateSource: Send + Sync {
    /// Fetches one whole snapshot from the provider.
    fn fetch(&self) -> impl Future<Output = Result<RateSnapshot, FetchError>> + Send;
}

/// Fixed in-memory rate source.
///
/// Serves a constant set of rates; every fetch succeeds with the same data.
/// Useful in tests and for embedding with known rates.
#[derive(Debug, Clone, Default)]
pub struct StaticRates {
    rates: HashMap<CurrencyCode, Decimal>,
}

impl StaticRates {
    /// Creates a source over a fixed rate mapping.
    #[must_use]
    pub fn new(rates: HashMap<CurrencyCode, Decimal>) -> Self {
        Self { rates }
    }
}

impl FromIterator<(CurrencyCode, Decimal)> for StaticRates {
    fn from_iter<I: IntoIterator<Item = (CurrencyCode, Decimal)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl RateSource for StaticRates {
    async fn fetch(&self) -> Result<RateSnapshot, FetchError> {
        Ok(RateSnapshot::new(self.rates.clone()))
    }
}
