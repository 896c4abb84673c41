//! Converter errors.

use thiserror::Error;

use crate::rates::FetchError;

/// Errors from constructing or refreshing a converter.
///
/// Per-transaction problems are not here: parse failures and unknown
/// currencies are reported per item and never abort a batch.
#[derive(Debug, Error)]
pub enum ConverterError {
    /// The construction-time fetch failed; no converter instance exists.
    #[error("initial rate fetch failed: {0}")]
    Initialization(FetchError),

    /// A refresh fetch failed; the previous table stays in service.
    #[error("rate refresh failed: {0}")]
    Fetch(FetchError),
}
