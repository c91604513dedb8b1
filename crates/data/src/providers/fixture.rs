//! Embedded fixture data standing in for a live market-data API.

use super::{MarketDataProvider, ProviderError};
use crate::snapshot::MarketSnapshot;
use async_trait::async_trait;
use tracing::info;

const SNAPSHOT_JSON: &str = include_str!("../../fixtures/snapshot.json");

/// Provider backed by the JSON fixture set compiled into the crate.
#[derive(Debug, Clone, Default)]
pub struct FixtureProvider {
    payload: Option<String>,
}

impl FixtureProvider {
    /// Provider over the built-in fixture set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider over a caller-supplied JSON payload. Used by tests to
    /// exercise the same decode path with custom data.
    #[must_use]
    pub fn from_json(payload: impl Into<String>) -> Self {
        Self {
            payload: Some(payload.into()),
        }
    }
}

#[async_trait]
impl MarketDataProvider for FixtureProvider {
    async fn load_snapshot(&self) -> Result<MarketSnapshot, ProviderError> {
        let payload = self.payload.as_deref().unwrap_or(SNAPSHOT_JSON);
        let snapshot: MarketSnapshot = serde_json::from_str(payload)?;
        info!(
            pools = snapshot.pools.len(),
            positions = snapshot.positions.len(),
            history = snapshot.history.len(),
            "loaded market snapshot from fixtures"
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_builtin_fixtures_decode() {
        let snapshot = FixtureProvider::new().load_snapshot().await.unwrap();
        assert!(!snapshot.pools.is_empty());
        assert!(!snapshot.positions.is_empty());
        assert!(!snapshot.history.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_payload_is_a_typed_error() {
        let result = FixtureProvider::from_json("{not json").load_snapshot().await;
        assert!(matches!(result, Err(ProviderError::Malformed(_))));
    }
}
