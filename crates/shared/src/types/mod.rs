//! Common types used across the application.

pub mod currency;
pub mod money;

pub use currency::CurrencyCode;
pub use money::{Money, MoneyParseError};
