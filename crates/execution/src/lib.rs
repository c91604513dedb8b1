//! Simulated transaction execution.
//!
//! This crate models the dashboard's deposit/withdraw actions as awaitable
//! units of work: validate against the current snapshot, wait a configured
//! artificial latency, compute the outcome with the domain calculator and
//! surface exactly one terminal result. The mock never talks to a chain
//! and defines no retry or rollback semantics.

/// Terminal notification seam.
pub mod notify;
/// Transaction requests, receipts and the simulator.
pub mod transaction;

pub use notify::{Notifier, TracingNotifier};
pub use transaction::{
    ExecutorConfig, TransactionError, TransactionOutcome, TransactionReceipt, TransactionRequest,
    TransactionSimulator,
};
