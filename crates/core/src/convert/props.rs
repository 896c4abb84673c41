//! Property-based tests for conversion.

use proptest::prelude::*;
use rust_decimal::Decimal;

use cambio_shared::types::{CurrencyCode, Money};

use crate::rates::StaticRates;

use super::rounding::convert_amount;
use super::service::Converter;
use super::types::Conversion;

/// Strategy to generate positive amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

fn test_converter(rates: Vec<(String, Decimal)>) -> Converter<StaticRates> {
    let source: StaticRates = rates
        .into_iter()
        .map(|(c, r)| (CurrencyCode::new(c), r))
        .collect();
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
        .block_on(Converter::connect(source, CurrencyCode::new("USD")))
        .expect("a static source never fails to fetch")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A conversion result never carries more than two fractional digits.
    #[test]
    fn prop_result_has_at_most_two_decimals(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        let result = convert_amount(amount, rate);
        let scaled = result * Decimal::from(100);
        prop_assert_eq!(
            scaled,
            scaled.round(),
            "result {} should have at most 2 decimal places",
            result
        );
    }

    /// Converting the same input twice yields the same output.
    #[test]
    fn prop_conversion_is_deterministic(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        prop_assert_eq!(convert_amount(amount, rate), convert_amount(amount, rate));
    }

    /// A converted amount equals amount * rate rounded to the result scale.
    #[test]
    fn prop_converter_matches_rate_math(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        let converter = test_converter(vec![("CHF".to_string(), rate)]);
        let transaction = Money::new(amount, CurrencyCode::new("CHF"));
        match converter.convert_one(&transaction) {
            Conversion::Converted(money) => {
                prop_assert_eq!(money.amount, convert_amount(amount, rate));
                prop_assert_eq!(money.currency.as_str(), "USD");
            }
            Conversion::UnknownCurrency(code) => {
                prop_assert!(false, "CHF unexpectedly unknown: {}", code);
            }
        }
    }

    /// Batch output length always equals input length, known codes or not.
    #[test]
    fn prop_batch_length_matches_input(
        codes in prop::collection::vec("[A-Z]{3}", 0..16),
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        let converter = test_converter(vec![("AUD".to_string(), rate)]);
        let transactions: Vec<Money> = codes
            .iter()
            .map(|c| Money::new(amount, CurrencyCode::new(c.clone())))
            .collect();

        let results = converter.convert_many(&transactions);
        prop_assert_eq!(results.len(), transactions.len());
    }
}
