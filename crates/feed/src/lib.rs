//! HTTP rate feed client for Cambio.
//!
//! Fetches currency-to-rate snapshots from a remote XML feed and exposes
//! them through the core `RateSource` contract. This is the only crate
//! that talks to the network.

pub mod client;
mod document;

pub use client::FeedClient;
