//! The read-only market snapshot and its id-keyed index.

use poolboard_domain::entities::{ClosedPosition, Pool, Position, PositionId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Everything the dashboard reads, loaded in one piece: pools, open
/// positions and closed-position history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub pools: Vec<Pool>,
    pub positions: Vec<Position>,
    pub history: Vec<ClosedPosition>,
}

/// A snapshot plus id-keyed indices for O(1) pool and position lookup.
///
/// Lookups return `Option`; a position referencing an unknown pool id is
/// data the views must tolerate, not an error here.
#[derive(Debug)]
pub struct IndexedSnapshot {
    snapshot: MarketSnapshot,
    pools_by_id: HashMap<String, usize>,
    positions_by_id: HashMap<PositionId, usize>,
}

impl IndexedSnapshot {
    #[must_use]
    pub fn new(snapshot: MarketSnapshot) -> Self {
        let pools_by_id = snapshot
            .pools
            .iter()
            .enumerate()
            .map(|(i, pool)| (pool.id.clone(), i))
            .collect();
        let positions_by_id = snapshot
            .positions
            .iter()
            .enumerate()
            .map(|(i, position)| (position.id, i))
            .collect();
        Self {
            snapshot,
            pools_by_id,
            positions_by_id,
        }
    }

    #[must_use]
    pub fn pools(&self) -> &[Pool] {
        &self.snapshot.pools
    }

    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.snapshot.positions
    }

    #[must_use]
    pub fn history(&self) -> &[ClosedPosition] {
        &self.snapshot.history
    }

    #[must_use]
    pub fn find_pool(&self, id: &str) -> Option<&Pool> {
        self.pools_by_id.get(id).map(|&i| &self.snapshot.pools[i])
    }

    #[must_use]
    pub fn find_position(&self, id: PositionId) -> Option<&Position> {
        self.positions_by_id
            .get(&id)
            .map(|&i| &self.snapshot.positions[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use poolboard_domain::entities::PoolToken;
    use poolboard_domain::enums::RiskLevel;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn snapshot() -> MarketSnapshot {
        MarketSnapshot {
            pools: vec![Pool {
                id: "sol-usdc".to_string(),
                name: "SOL-USDC".to_string(),
                token_a: PoolToken::new("SOL", "Solana", dec!(200)),
                token_b: PoolToken::new("USDC", "USD Coin", dec!(1)),
                tvl_usd: dec!(2500000),
                apr_pct: dec!(12.4),
                volume_24h_usd: dec!(480000),
                volume_7d_usd: dec!(3150000),
                risk: RiskLevel::Medium,
                fees_24h_usd: Some(dec!(2250)),
                utilization_pct: None,
                health_pct: None,
            }],
            positions: vec![Position {
                id: PositionId(Uuid::nil()),
                pool_id: "orca-legacy".to_string(),
                amount_invested_usd: dec!(2000),
                current_value_usd: dec!(2040),
                value_24h_ago_usd: None,
                pnl_usd: dec!(40),
                pnl_24h_usd: None,
                pnl_7d_usd: None,
                opened_at: Utc::now(),
            }],
            history: Vec::new(),
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let indexed = IndexedSnapshot::new(snapshot());
        assert!(indexed.find_pool("sol-usdc").is_some());
        assert!(indexed.find_pool("orca-legacy").is_none());
        assert!(indexed.find_position(PositionId(Uuid::nil())).is_some());
        assert!(
            indexed
                .find_position(PositionId(Uuid::from_u128(7)))
                .is_none()
        );
    }

    #[test]
    fn test_dangling_pool_reference_is_none_not_error() {
        let indexed = IndexedSnapshot::new(snapshot());
        let position = &indexed.positions()[0];
        assert!(indexed.find_pool(&position.pool_id).is_none());
        assert_eq!(position.pnl_usd, Decimal::from(40));
    }
}
