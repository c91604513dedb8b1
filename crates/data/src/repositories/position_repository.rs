//! Read-only position access over one pinned snapshot.

use crate::snapshot::IndexedSnapshot;
use poolboard_domain::entities::{ClosedPosition, Pool, Position, PositionId};
use poolboard_domain::errors::DomainError;
use poolboard_domain::metrics::{PortfolioSummary, pnl};
use std::sync::Arc;

/// Repository view for open and closed positions.
#[derive(Clone)]
pub struct PositionRepository {
    snapshot: Arc<IndexedSnapshot>,
}

impl PositionRepository {
    /// Creates a new PositionRepository over a pinned snapshot.
    #[must_use]
    pub fn new(snapshot: Arc<IndexedSnapshot>) -> Self {
        Self { snapshot }
    }

    /// All open positions in fixture order.
    #[must_use]
    pub fn open(&self) -> &[Position] {
        self.snapshot.positions()
    }

    /// All closed positions in fixture order.
    #[must_use]
    pub fn closed(&self) -> &[ClosedPosition] {
        self.snapshot.history()
    }

    /// Looks up an open position by id.
    #[must_use]
    pub fn find(&self, id: PositionId) -> Option<&Position> {
        self.snapshot.find_position(id)
    }

    /// Looks up an open position by id, surfacing absence as a typed error.
    ///
    /// # Errors
    /// Returns [`DomainError::PositionNotFound`] for an unknown id.
    pub fn get(&self, id: PositionId) -> Result<&Position, DomainError> {
        self.find(id)
            .ok_or(DomainError::PositionNotFound { id })
    }

    /// Resolves the pool a position belongs to. `None` when the position
    /// references a pool that is not in the snapshot.
    #[must_use]
    pub fn pool_for(&self, position: &Position) -> Option<&Pool> {
        self.snapshot.find_pool(&position.pool_id)
    }

    /// Portfolio header figures over all open positions.
    #[must_use]
    pub fn summary(&self) -> PortfolioSummary {
        pnl::summarize(self.snapshot.positions())
    }
}
