//! Read-only pool access over one pinned snapshot.

use crate::snapshot::IndexedSnapshot;
use poolboard_domain::entities::Pool;
use poolboard_domain::errors::DomainError;
use poolboard_domain::filter::{PoolFilter, filter_pools};
use std::sync::Arc;

/// Repository view for pools. Holds one snapshot for its whole lifetime,
/// so every read within a render observes the same data.
#[derive(Clone)]
pub struct PoolRepository {
    snapshot: Arc<IndexedSnapshot>,
}

impl PoolRepository {
    /// Creates a new PoolRepository over a pinned snapshot.
    #[must_use]
    pub fn new(snapshot: Arc<IndexedSnapshot>) -> Self {
        Self { snapshot }
    }

    /// All pools in fixture order.
    #[must_use]
    pub fn all(&self) -> &[Pool] {
        self.snapshot.pools()
    }

    /// Looks up a pool by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Pool> {
        self.snapshot.find_pool(id)
    }

    /// Looks up a pool by id, surfacing absence as a typed error.
    ///
    /// # Errors
    /// Returns [`DomainError::PoolNotFound`] for an unknown id.
    pub fn get(&self, id: &str) -> Result<&Pool, DomainError> {
        self.find(id).ok_or_else(|| DomainError::PoolNotFound {
            id: id.to_string(),
        })
    }

    /// Applies the screener filter to the pool list.
    #[must_use]
    pub fn screen(&self, filter: &PoolFilter) -> Vec<Pool> {
        filter_pools(self.snapshot.pools(), filter)
    }
}
