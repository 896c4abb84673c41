//! Tests for snapshots, the rate table, and the static source.

use chrono::Duration;
use rust_decimal_macros::dec;

use cambio_shared::types::CurrencyCode;

use super::snapshot::RateSnapshot;
use super::source::{RateSource, StaticRates};
use super::table::RateTable;

fn code(s: &str) -> CurrencyCode {
    CurrencyCode::new(s)
}

#[test]
fn test_lookup_hit_and_miss() {
    let snapshot: RateSnapshot = [(code("CHF"), dec!(1.1154))].into_iter().collect();
    let table = RateTable::from_snapshot(snapshot);

    assert_eq!(table.lookup(&code("CHF")), Some(dec!(1.1154)));
    assert_eq!(table.lookup(&code("AUD")), None);
}

#[test]
fn test_lookup_is_case_sensitive() {
    let snapshot: RateSnapshot = [(code("CHF"), dec!(1.1154))].into_iter().collect();
    let table = RateTable::from_snapshot(snapshot);

    assert_eq!(table.lookup(&code("chf")), None);
}

#[test]
fn test_non_positive_rates_are_excluded() {
    let snapshot: RateSnapshot = [
        (code("CHF"), dec!(1.1154)),
        (code("XAA"), dec!(0)),
        (code("XBB"), dec!(-2.5)),
    ]
    .into_iter()
    .collect();
    let table = RateTable::from_snapshot(snapshot);

    assert_eq!(table.len(), 1);
    assert_eq!(table.lookup(&code("XAA")), None);
    assert_eq!(table.lookup(&code("XBB")), None);
    assert_eq!(table.lookup(&code("CHF")), Some(dec!(1.1154)));
}

#[test]
fn test_empty_snapshot_builds_empty_table() {
    let table = RateTable::from_snapshot(RateSnapshot::new(std::collections::HashMap::new()));
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
}

#[test]
fn test_fresh_table_is_not_stale() {
    let snapshot: RateSnapshot = [(code("CHF"), dec!(1.1))].into_iter().collect();
    let table = RateTable::from_snapshot(snapshot);

    assert!(!table.is_stale(Duration::minutes(5)));
    // A negative allowance marks anything stale.
    assert!(table.is_stale(Duration::seconds(-1)));
}

#[test]
fn test_table_keeps_snapshot_timestamp() {
    let snapshot: RateSnapshot = [(code("CHF"), dec!(1.1))].into_iter().collect();
    let fetched_at = snapshot.fetched_at();
    let table = RateTable::from_snapshot(snapshot);

    assert_eq!(table.fetched_at(), fetched_at);
}

#[tokio::test]
async fn test_static_rates_serves_its_mapping() {
    let source: StaticRates = [(code("AUD"), dec!(0.9165)), (code("JPY"), dec!(0.00943))]
        .into_iter()
        .collect();

    let snapshot = source.fetch().await.unwrap();
    assert_eq!(snapshot.len(), 2);
    assert!(!snapshot.is_empty());
}
