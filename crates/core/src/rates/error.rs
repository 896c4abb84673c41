//! Rate acquisition errors.

use thiserror::Error;

/// Errors from fetching a rate snapshot.
///
/// Always surfaced to whoever requested the fetch; a failed fetch never
/// touches an already-published table.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The feed endpoint could not be reached.
    #[error("transport error: {0}")]
    Transport(String),

    /// The fetch did not complete within the configured timeout.
    #[error("fetch timed out after {0}s")]
    Timeout(u64),

    /// The feed answered with a non-success HTTP status.
    #[error("rate feed returned status {0}")]
    Status(u16),

    /// The feed returned a document that could not be parsed at all.
    #[error("malformed rate document: {0}")]
    Malformed(String),
}
