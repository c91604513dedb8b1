use crate::metrics::pnl;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionId(pub Uuid);

impl std::fmt::Display for PositionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An open liquidity position. `pool_id` references a [`crate::entities::Pool`]
/// by id with no referential integrity; joins yield `None` when the pool is
/// missing and callers render a fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub id: PositionId,
    pub pool_id: String,
    pub amount_invested_usd: Decimal,
    pub current_value_usd: Decimal,
    pub value_24h_ago_usd: Option<Decimal>,
    pub pnl_usd: Decimal,
    pub pnl_24h_usd: Option<Decimal>,
    pub pnl_7d_usd: Option<Decimal>,
    pub opened_at: DateTime<Utc>,
}

impl Position {
    /// Unrealized P&L relative to the invested amount, in percent.
    #[must_use]
    pub fn pnl_pct(&self) -> Decimal {
        pnl::pnl_percent(self.pnl_usd, self.amount_invested_usd)
    }

    /// Value change over the trailing 24h, in percent. `None` when no
    /// 24h-ago value was recorded.
    #[must_use]
    pub fn change_24h_pct(&self) -> Option<Decimal> {
        self.value_24h_ago_usd
            .map(|prev| pnl::percent_change(self.current_value_usd, prev))
    }
}

/// A closed position shown on the history page. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClosedPosition {
    pub id: PositionId,
    pub pool_id: String,
    pub amount_invested_usd: Decimal,
    pub exit_value_usd: Decimal,
    pub pnl_usd: Decimal,
    pub opened_at: DateTime<Utc>,
    pub closed_at: DateTime<Utc>,
}

impl ClosedPosition {
    /// Realized P&L relative to the invested amount, in percent.
    #[must_use]
    pub fn pnl_pct(&self) -> Decimal {
        pnl::pnl_percent(self.pnl_usd, self.amount_invested_usd)
    }
}
