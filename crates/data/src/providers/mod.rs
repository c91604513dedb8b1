//! Data-source providers.
//!
//! A provider hands the store one complete [`MarketSnapshot`]. In a live
//! deployment this seam is an API client; this repository ships the
//! fixture-backed implementation.

mod fixture;

pub use fixture::FixtureProvider;

use crate::snapshot::MarketSnapshot;
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while loading a snapshot.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("malformed market data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Source of complete market snapshots.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Loads one complete snapshot.
    ///
    /// # Errors
    /// Returns a [`ProviderError`] if the source payload cannot be decoded.
    async fn load_snapshot(&self) -> Result<MarketSnapshot, ProviderError>;
}
