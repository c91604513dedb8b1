//! Market data for the dashboard: snapshot model, data-source providers
//! and the in-memory store the views read from.
//!
//! Data enters as a [`snapshot::MarketSnapshot`] loaded from a
//! [`providers::MarketDataProvider`] (here, embedded fixtures standing in
//! for a real API client) and is served through repository views that pin
//! one snapshot for their whole lifetime. Refreshes replace the snapshot
//! atomically; nothing is mutated in place.

pub mod providers;
pub mod repositories;
pub mod snapshot;

pub use providers::{FixtureProvider, MarketDataProvider, ProviderError};
pub use repositories::{MarketStore, PoolRepository, PositionRepository};
pub use snapshot::{IndexedSnapshot, MarketSnapshot};
