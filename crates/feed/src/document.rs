//! Wire format of the rate feed document.
//!
//! The feed is a flat XML list of conversion records:
//!
//! ```xml
//! <conversions>
//!   <conversion><currency>CHF</currency><rate>1.1154</rate></conversion>
//! </conversions>
//! ```
//!
//! Individually invalid records are skipped so one bad entry cannot poison
//! a whole snapshot; only a document that fails to parse at all aborts the
//! fetch.

use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::warn;

use cambio_core::rates::{FetchError, RateSnapshot};
use cambio_shared::types::CurrencyCode;

#[derive(Debug, Deserialize)]
struct RatesDocument {
    #[serde(default, rename = "conversion")]
    conversions: Vec<ConversionRecord>,
}

/// One `<conversion>` record. Fields are optional so a single damaged
/// record cannot fail the whole document.
#[derive(Debug, Deserialize)]
struct ConversionRecord {
    currency: Option<String>,
    rate: Option<String>,
}

/// Parses a feed document into a snapshot of the valid entries.
pub(crate) fn parse(xml: &str) -> Result<RateSnapshot, FetchError> {
    let document: RatesDocument =
        quick_xml::de::from_str(xml).map_err(|e| FetchError::Malformed(e.to_string()))?;

    let mut rates = HashMap::new();
    for record in document.conversions {
        match valid_entry(&record) {
            Some((code, rate)) => {
                rates.insert(code, rate);
            }
            None => warn!(?record, "skipping invalid rate record"),
        }
    }
    Ok(RateSnapshot::new(rates))
}

/// Validates one record: a non-empty code and a strictly positive rate.
fn valid_entry(record: &ConversionRecord) -> Option<(CurrencyCode, Decimal)> {
    let currency = record.currency.as_deref()?.trim();
    if currency.is_empty() {
        return None;
    }
    let rate = Decimal::from_str(record.rate.as_deref()?.trim()).ok()?;
    if rate <= Decimal::ZERO {
        return None;
    }
    Some((CurrencyCode::new(currency), rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s)
    }

    #[test]
    fn test_parses_valid_records() {
        let xml = r"
            <conversions>
                <conversion><currency>AUD</currency><rate>0.9165</rate></conversion>
                <conversion><currency>JPY</currency><rate>0.00943</rate></conversion>
            </conversions>
        ";

        let snapshot = parse(xml).unwrap();
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn test_skips_non_positive_rates() {
        let xml = r"
            <conversions>
                <conversion><currency>CHF</currency><rate>1.1154</rate></conversion>
                <conversion><currency>XAA</currency><rate>0</rate></conversion>
                <conversion><currency>XBB</currency><rate>-3.5</rate></conversion>
            </conversions>
        ";

        let snapshot = parse(xml).unwrap();
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_skips_non_numeric_and_incomplete_records() {
        let xml = r"
            <conversions>
                <conversion><currency>CHF</currency><rate>lots</rate></conversion>
                <conversion><currency>NOK</currency></conversion>
                <conversion><rate>1.5</rate></conversion>
                <conversion><currency>CZK</currency><rate>0.04412</rate></conversion>
            </conversions>
        ";

        let snapshot = parse(xml).unwrap();
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_empty_document_is_an_empty_snapshot() {
        let snapshot = parse("<conversions/>").unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_garbage_is_malformed() {
        let result = parse("not a rate document");
        assert!(matches!(result, Err(FetchError::Malformed(_))));
    }

    #[test]
    fn test_rates_survive_the_round_trip() {
        let xml = r"
            <conversions>
                <conversion><currency>CZK</currency><rate>0.04412</rate></conversion>
            </conversions>
        ";

        let snapshot = parse(xml).unwrap();
        let table = cambio_core::rates::RateTable::from_snapshot(snapshot);
        assert_eq!(table.lookup(&code("CZK")), Some(dec!(0.04412)));
    }
}
