//! Terminal transaction notifications.
//!
//! Each submitted transaction produces exactly one notification: confirmed
//! or failed. The UI layer plugs its toast system in here; the default
//! implementation writes to the tracing log.

use crate::transaction::{TransactionError, TransactionReceipt, TransactionRequest};
use tracing::{info, warn};

/// Receiver of terminal transaction events.
pub trait Notifier: Send + Sync {
    fn on_confirmed(&self, receipt: &TransactionReceipt);
    fn on_failed(&self, request: &TransactionRequest, error: &TransactionError);
}

/// Notifier that logs through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn on_confirmed(&self, receipt: &TransactionReceipt) {
        info!(id = %receipt.id, "transaction confirmed");
    }

    fn on_failed(&self, request: &TransactionRequest, error: &TransactionError) {
        warn!(?request, %error, "transaction failed");
    }
}
