//! Bulk execution: all-settle fan-out over the dispatch registry
//!
//! The fan-out is an explicit task group: one independent dispatch per
//! item, issued back-to-back, joined as a set, and folded into aggregate
//! counts. Every leg settles regardless of siblings' outcomes; a partial
//! result is a valid terminal outcome, reported verbatim with no retry
//! and no rollback. Bulk results deliberately carry aggregate counts
//! only, never per-item detail.

use crate::model::ApprovalItem;
use crate::reason::RejectReason;
use crate::registry::BackendRegistry;
use futures::future::join_all;
use serde::{Deserialize, Serialize};

/// The binary decision applied to one or many items
///
/// A reject always carries an already-validated reason; in bulk mode the
/// same reason is applied to every item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalAction {
    Approve,
    Reject(RejectReason),
}

impl ApprovalAction {
    /// Short tag for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalAction::Approve => "approve",
            ApprovalAction::Reject(_) => "reject",
        }
    }
}

/// Aggregate result of one bulk invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkOutcome {
    /// Items whose transition was accepted by their backend
    pub succeeded: usize,
    /// Items whose transition failed; already final, never retried
    pub failed: usize,
}

/// Fan out one dispatch per item and fold the settled outcomes
///
/// Order of completion between items is neither guaranteed nor needed;
/// the fold is a sum of booleans. Per-item failures are logged at debug
/// and counted, not returned.
pub async fn execute_bulk(
    registry: &BackendRegistry,
    items: &[ApprovalItem],
    action: &ApprovalAction,
) -> BulkOutcome {
    let legs = items
        .iter()
        .map(|item| async move { (item.key(), registry.dispatch(item, action).await) });

    let mut succeeded = 0;
    let mut failed = 0;
    for (key, settled) in join_all(legs).await {
        match settled {
            Ok(()) => succeeded += 1,
            Err(err) => {
                tracing::debug!(
                    item_key = %key,
                    err.code = err.code(),
                    "bulk leg failed: {}",
                    err
                );
                failed += 1;
            }
        }
    }

    BulkOutcome { succeeded, failed }
}
