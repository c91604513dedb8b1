//! The simulated deposit/withdraw executor.
//!
//! A submitted request is validated against the snapshot current at submit
//! time, held for the configured latency, then confirmed with a receipt.
//! At most one transaction per pool or position may be outstanding;
//! duplicates are rejected up front. Dropping the returned future cancels
//! the transaction and releases its in-flight slot.

use crate::notify::{Notifier, TracingNotifier};
use chrono::{DateTime, Utc};
use poolboard_data::MarketStore;
use poolboard_domain::entities::PositionId;
use poolboard_domain::errors::DomainError;
use poolboard_domain::metrics::{DepositEstimate, WithdrawalEstimate, deposit, pnl};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

/// A user-initiated action against a pool or position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransactionRequest {
    Deposit {
        pool_id: String,
        amount_usd: Decimal,
    },
    Withdraw {
        position_id: PositionId,
        percentage: Decimal,
    },
}

impl TransactionRequest {
    fn action_key(&self) -> ActionKey {
        match self {
            Self::Deposit { pool_id, .. } => ActionKey::Deposit(pool_id.clone()),
            Self::Withdraw { position_id, .. } => ActionKey::Withdraw(*position_id),
        }
    }

    fn target(&self) -> String {
        match self {
            Self::Deposit { pool_id, .. } => format!("pool {pool_id}"),
            Self::Withdraw { position_id, .. } => format!("position {position_id}"),
        }
    }
}

/// What a confirmed transaction produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TransactionOutcome {
    Deposited(DepositEstimate),
    Withdrawn(WithdrawalEstimate),
}

/// Terminal record of a confirmed transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionReceipt {
    pub id: Uuid,
    pub request: TransactionRequest,
    pub submitted_at: DateTime<Utc>,
    pub confirmed_at: DateTime<Utc>,
    pub outcome: TransactionOutcome,
}

/// Why a transaction was not confirmed.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// The request failed validation (unknown pool/position, bad amount
    /// or percentage).
    #[error(transparent)]
    Rejected(#[from] DomainError),

    /// Another transaction for the same pool or position is in flight.
    #[error("a transaction is already pending for {target}")]
    AlreadyPending { target: String },
}

/// Executor settings.
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Artificial confirmation latency.
    pub latency: Duration,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(1500),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ActionKey {
    Deposit(String),
    Withdraw(PositionId),
}

// Removes the key when the transaction finishes or its future is dropped.
struct InFlightGuard {
    key: ActionKey,
    in_flight: Arc<Mutex<HashSet<ActionKey>>>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.in_flight
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&self.key);
    }
}

/// Simulated transaction executor over the market store.
#[derive(Clone)]
pub struct TransactionSimulator {
    store: MarketStore,
    config: ExecutorConfig,
    notifier: Arc<dyn Notifier>,
    in_flight: Arc<Mutex<HashSet<ActionKey>>>,
}

impl TransactionSimulator {
    /// Creates a simulator with the default tracing notifier.
    #[must_use]
    pub fn new(store: MarketStore, config: ExecutorConfig) -> Self {
        Self {
            store,
            config,
            notifier: Arc::new(TracingNotifier),
            in_flight: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Replaces the terminal notifier.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Submits a request and awaits its single terminal result.
    ///
    /// # Errors
    /// Returns [`TransactionError::Rejected`] when validation fails and
    /// [`TransactionError::AlreadyPending`] when the same pool or position
    /// already has an outstanding transaction.
    pub async fn submit(
        &self,
        request: TransactionRequest,
    ) -> Result<TransactionReceipt, TransactionError> {
        let result = self.run(request.clone()).await;
        match &result {
            Ok(receipt) => self.notifier.on_confirmed(receipt),
            Err(error) => self.notifier.on_failed(&request, error),
        }
        result
    }

    async fn run(
        &self,
        request: TransactionRequest,
    ) -> Result<TransactionReceipt, TransactionError> {
        // Validate and price against the snapshot current at submit time.
        let outcome = self.evaluate(&request)?;
        let _guard = self.claim(&request)?;
        let submitted_at = Utc::now();

        debug!(action = %request.target(), "transaction submitted");
        tokio::time::sleep(self.config.latency).await;

        let receipt = TransactionReceipt {
            id: Uuid::new_v4(),
            request,
            submitted_at,
            confirmed_at: Utc::now(),
            outcome,
        };
        info!(id = %receipt.id, action = %receipt.request.target(), "transaction confirmed");
        Ok(receipt)
    }

    fn evaluate(&self, request: &TransactionRequest) -> Result<TransactionOutcome, TransactionError> {
        match request {
            TransactionRequest::Deposit { pool_id, amount_usd } => {
                if *amount_usd <= Decimal::ZERO {
                    return Err(DomainError::NonPositiveAmount {
                        amount: *amount_usd,
                    }
                    .into());
                }
                let pools = self.store.pools();
                let pool = pools.get(pool_id)?;
                Ok(TransactionOutcome::Deposited(deposit::estimate_deposit(
                    pool,
                    *amount_usd,
                )))
            }
            TransactionRequest::Withdraw {
                position_id,
                percentage,
            } => {
                let positions = self.store.positions();
                let position = positions.get(*position_id)?;
                let estimate = pnl::withdrawal_estimate(
                    position.current_value_usd,
                    position.pnl_usd,
                    *percentage,
                )?;
                Ok(TransactionOutcome::Withdrawn(estimate))
            }
        }
    }

    fn claim(&self, request: &TransactionRequest) -> Result<InFlightGuard, TransactionError> {
        let key = request.action_key();
        let mut in_flight = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        if !in_flight.insert(key.clone()) {
            return Err(TransactionError::AlreadyPending {
                target: request.target(),
            });
        }
        Ok(InFlightGuard {
            key,
            in_flight: self.in_flight.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use poolboard_data::MarketSnapshot;
    use poolboard_domain::entities::{Pool, PoolToken, Position};
    use poolboard_domain::enums::RiskLevel;
    use rust_decimal_macros::dec;

    fn position_id() -> PositionId {
        PositionId(Uuid::from_u128(1))
    }

    fn store() -> MarketStore {
        let snapshot = MarketSnapshot {
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
                id: position_id(),
                pool_id: "sol-usdc".to_string(),
                amount_invested_usd: dec!(10000),
                current_value_usd: dec!(12500),
                value_24h_ago_usd: None,
                pnl_usd: dec!(2500),
                pnl_24h_usd: None,
                pnl_7d_usd: None,
                opened_at: Utc::now(),
            }],
            history: Vec::new(),
        };
        MarketStore::new(snapshot)
    }

    fn simulator() -> TransactionSimulator {
        TransactionSimulator::new(store(), ExecutorConfig::default())
    }

    #[tokio::test(start_paused = true)]
    async fn test_deposit_confirms_with_estimate() {
        let receipt = simulator()
            .submit(TransactionRequest::Deposit {
                pool_id: "sol-usdc".to_string(),
                amount_usd: dec!(10000),
            })
            .await
            .unwrap();

        match receipt.outcome {
            TransactionOutcome::Deposited(est) => {
                assert_eq!(est.daily_yield_usd, dec!(9.00));
                assert_eq!(est.yearly_yield_usd, dec!(3285.00));
                assert_eq!(est.apr_pct, dec!(32.85));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_withdraw_confirms_with_proportional_split() {
        let receipt = simulator()
            .submit(TransactionRequest::Withdraw {
                position_id: position_id(),
                percentage: dec!(50),
            })
            .await
            .unwrap();

        match receipt.outcome {
            TransactionOutcome::Withdrawn(est) => {
                assert_eq!(est.amount_usd, dec!(6250));
                assert_eq!(est.pnl_usd, dec!(1250));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_validation_failures_are_typed() {
        let simulator = simulator();

        let unknown_pool = simulator
            .submit(TransactionRequest::Deposit {
                pool_id: "nope".to_string(),
                amount_usd: dec!(100),
            })
            .await;
        assert!(matches!(
            unknown_pool,
            Err(TransactionError::Rejected(DomainError::PoolNotFound { .. }))
        ));

        let zero_amount = simulator
            .submit(TransactionRequest::Deposit {
                pool_id: "sol-usdc".to_string(),
                amount_usd: Decimal::ZERO,
            })
            .await;
        assert!(matches!(
            zero_amount,
            Err(TransactionError::Rejected(
                DomainError::NonPositiveAmount { .. }
            ))
        ));

        let bad_percentage = simulator
            .submit(TransactionRequest::Withdraw {
                position_id: position_id(),
                percentage: dec!(120),
            })
            .await;
        assert!(matches!(
            bad_percentage,
            Err(TransactionError::Rejected(
                DomainError::PercentageOutOfRange { .. }
            ))
        ));

        let unknown_position = simulator
            .submit(TransactionRequest::Withdraw {
                position_id: PositionId(Uuid::from_u128(9)),
                percentage: dec!(10),
            })
            .await;
        assert!(matches!(
            unknown_position,
            Err(TransactionError::Rejected(
                DomainError::PositionNotFound { .. }
            ))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_duplicate_submission_is_rejected_while_pending() {
        let simulator = simulator();
        let request = TransactionRequest::Deposit {
            pool_id: "sol-usdc".to_string(),
            amount_usd: dec!(100),
        };

        let first = tokio::spawn({
            let simulator = simulator.clone();
            let request = request.clone();
            async move { simulator.submit(request).await }
        });
        // Let the first submission register and park in its latency sleep.
        tokio::task::yield_now().await;

        let second = simulator.submit(request.clone()).await;
        assert!(matches!(
            second,
            Err(TransactionError::AlreadyPending { .. })
        ));

        assert!(first.await.unwrap().is_ok());

        // The slot is released after confirmation.
        assert!(simulator.submit(request).await.is_ok());
    }
}
