//! Per-type backend interface
//!
//! The engine consumes, not owns, the per-type collections. Each
//! `RequestType` contributes one implementation of this trait; the
//! engine never sees transport details (HTTP+JSON, RPC, in-process)
//! behind it.

use crate::errors::Result;
use crate::model::ApprovalItem;
use async_trait::async_trait;

/// Backend for one request type's pending collection
///
/// Implementations map transport failures into the engine taxonomy:
/// `SourceUnavailable` for listing failures, `ActionRejected` for a
/// failed approve/reject call.
#[async_trait]
pub trait ApprovalBackend: Send + Sync {
    /// List pending items for this backend's type
    ///
    /// Items must already be filtered to pending-like status and, when a
    /// search needle is given, to case-insensitive substring matches
    /// against number/title/description.
    ///
    /// # Errors
    ///
    /// Returns `SourceUnavailable` if the backing collection fails to
    /// answer; the aggregator degrades rather than failing the page.
    async fn list_pending(&self, search: Option<&str>) -> Result<Vec<ApprovalItem>>;

    /// Approve one pending item by its in-type id
    ///
    /// Performs exactly one external state transition; no retry.
    ///
    /// # Errors
    ///
    /// Returns `ActionRejected` if the transition fails (validation,
    /// conflict, network).
    async fn approve(&self, id: i64) -> Result<()>;

    /// Reject one pending item with a caller-validated, non-empty reason
    ///
    /// Performs exactly one external state transition; no retry.
    ///
    /// # Errors
    ///
    /// Returns `ActionRejected` if the transition fails (validation,
    /// conflict, network).
    async fn reject(&self, id: i64, reason: &str) -> Result<()>;
}
