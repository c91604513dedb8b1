use crate::entities::PositionId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors surfaced by domain lookups and calculators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("pool not found: {id}")]
    PoolNotFound { id: String },

    #[error("position not found: {id}")]
    PositionNotFound { id: PositionId },

    #[error("amount must be positive, got {amount}")]
    NonPositiveAmount { amount: Decimal },

    #[error("percentage must be within [0, 100], got {value}")]
    PercentageOutOfRange { value: Decimal },
}
