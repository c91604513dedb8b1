use crate::entities::token::PoolToken;
use crate::enums::RiskLevel;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A liquidity pool as shown on the dashboard. Loaded once from the data
/// source and treated as immutable afterwards; refreshed data arrives as a
/// whole new snapshot, never as in-place edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pool {
    pub id: String,
    pub name: String,
    pub token_a: PoolToken,
    pub token_b: PoolToken,
    pub tvl_usd: Decimal,
    pub apr_pct: Decimal,
    pub volume_24h_usd: Decimal,
    pub volume_7d_usd: Decimal,
    pub risk: RiskLevel,

    pub fees_24h_usd: Option<Decimal>,
    pub utilization_pct: Option<Decimal>,
    pub health_pct: Option<Decimal>,
}

impl Pool {
    /// Pair label in `"SOL/USDC"` form.
    #[must_use]
    pub fn pair_label(&self) -> String {
        format!("{}/{}", self.token_a.symbol, self.token_b.symbol)
    }
}
