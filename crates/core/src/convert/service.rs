//! The converter service.

use std::sync::{Arc, PoisonError, RwLock};

use cambio_shared::types::{CurrencyCode, Money, MoneyParseError};

use crate::rates::{RateSource, RateTable};

use super::error::ConverterError;
use super::rounding::convert_amount;
use super::types::Conversion;

/// Converts foreign-currency transactions into one default currency.
///
/// A converter owns its rate table exclusively. It is populated once at
/// construction and replaced wholesale by [`Converter::refresh`]; between
/// refreshes every conversion is a pure in-memory lookup, no I/O.
///
/// The table lives behind `RwLock<Arc<RateTable>>`: readers clone the
/// `Arc` under a read lock, refresh publishes a fully built table under a
/// write lock. Readers concurrent with a refresh see the entirely-old or
/// entirely-new table, never a mix.
#[derive(Debug)]
pub struct Converter<S> {
    default_currency: CurrencyCode,
    source: S,
    rates: RwLock<Arc<RateTable>>,
}

impl<S: RateSource> Converter<S> {
    /// Builds a converter by fetching the initial rate table from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`ConverterError::Initialization`] when the fetch fails; a
    /// converter without rate data cannot usefully serve conversions, so
    /// no instance exists on failure. Callers needing retry should retry
    /// construction.
    pub async fn connect(source: S, default_currency: CurrencyCode) -> Result<Self, ConverterError> {
        let snapshot = source
            .fetch()
            .await
            .map_err(ConverterError::Initialization)?;
        let table = RateTable::from_snapshot(snapshot);
        Ok(Self {
            default_currency,
            source,
            rates: RwLock::new(Arc::new(table)),
        })
    }

    /// Re-fetches the rate feed and swaps in the new table.
    ///
    /// The new table is built fully aside and published as a single
    /// reference swap. Returns the number of currencies now served.
    ///
    /// # Errors
    ///
    /// Returns [`ConverterError::Fetch`] when the fetch fails; the
    /// previous table stays in service untouched.
    pub async fn refresh(&self) -> Result<usize, ConverterError> {
        let snapshot = self.source.fetch().await.map_err(ConverterError::Fetch)?;
        let table = Arc::new(RateTable::from_snapshot(snapshot));
        let count = table.len();
        *self
            .rates
            .write()
            .unwrap_or_else(PoisonError::into_inner) = table;
        Ok(count)
    }

    /// Converts a single structured transaction.
    #[must_use]
    pub fn convert_one(&self, transaction: &Money) -> Conversion {
        Self::convert_with(&self.table(), &self.default_currency, transaction)
    }

    /// Converts an ordered batch of structured transactions.
    ///
    /// Output order matches input order, one outcome per input. The whole
    /// batch is evaluated against one table snapshot, so a concurrent
    /// refresh never splits a batch across two tables.
    #[must_use]
    pub fn convert_many<'a, I>(&self, transactions: I) -> Vec<Conversion>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        let table = self.table();
        transactions
            .into_iter()
            .map(|transaction| Self::convert_with(&table, &self.default_currency, transaction))
            .collect()
    }

    /// Parses one `"<CODE> <amount>"` line and converts it.
    ///
    /// # Errors
    ///
    /// Returns the parse error for malformed input; an unknown currency is
    /// not an error but a [`Conversion::UnknownCurrency`] outcome.
    pub fn convert_line(&self, line: &str) -> Result<Conversion, MoneyParseError> {
        line.parse::<Money>().map(|tx| self.convert_one(&tx))
    }

    /// Parses and converts an ordered batch of text lines.
    ///
    /// One slot per input line, in input order: a line that fails to parse
    /// occupies its slot with the error and never aborts its siblings.
    #[must_use]
    pub fn convert_lines<'a, I>(&self, lines: I) -> Vec<Result<Conversion, MoneyParseError>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let table = self.table();
        lines
            .into_iter()
            .map(|line| {
                line.parse::<Money>()
                    .map(|tx| Self::convert_with(&table, &self.default_currency, &tx))
            })
            .collect()
    }

    /// The currency every conversion resolves to.
    #[must_use]
    pub const fn default_currency(&self) -> &CurrencyCode {
        &self.default_currency
    }

    /// A read-only snapshot of the current rate table.
    #[must_use]
    pub fn rates(&self) -> Arc<RateTable> {
        self.table()
    }

    fn table(&self) -> Arc<RateTable> {
        Arc::clone(&self.rates.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn convert_with(
        table: &RateTable,
        default_currency: &CurrencyCode,
        transaction: &Money,
    ) -> Conversion {
        match table.lookup(&transaction.currency) {
            Some(rate) => Conversion::Converted(Money::new(
                convert_amount(transaction.amount, rate),
                default_currency.clone(),
            )),
            None => Conversion::UnknownCurrency(transaction.currency.clone()),
        }
    }
}
