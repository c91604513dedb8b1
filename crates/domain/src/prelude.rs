//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use poolboard_domain::prelude::*;
//! ```

// Entities
pub use crate::entities::{ClosedPosition, Pool, PoolToken, Position, PositionId};

// Enums
pub use crate::enums::{AprBucket, HealthStatus, RiskLevel, SortKey};

// Errors
pub use crate::errors::DomainError;

// Filtering
pub use crate::filter::{PoolFilter, filter_pools};

// Metrics
pub use crate::metrics::{DepositEstimate, PortfolioSummary, WithdrawalEstimate};

// Thresholds
pub use crate::thresholds::{Thresholds, health_status};
