use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One leg of a pool pair: display symbol plus the spot price used to
/// split a deposit into token amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolToken {
    pub symbol: String,
    pub name: String,
    pub price_usd: Decimal,
}

impl PoolToken {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, price_usd: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            price_usd,
        }
    }
}
