//! Error taxonomy for approval engine operations
//!
//! Each variant maps to a stable `ERR_*` code usable for programmatic
//! handling, testing, and external API responses. Propagation policy:
//! local validation errors are resolved before any dispatch, per-item
//! action errors are collected (not thrown) during bulk runs, and
//! aggregator-level source failures degrade the view rather than abort it.

use crate::model::{ItemKey, RequestType};
use thiserror::Error;

/// Result type alias using ApprovalError
pub type Result<T> = std::result::Result<T, ApprovalError>;

/// Comprehensive error taxonomy for approval engine operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApprovalError {
    /// One backing source failed to answer during aggregation
    ///
    /// Handled internally by degrading the view (the source's items are
    /// omitted and its count bucket reports zero); surfaced to callers
    /// only through `AggregatedView::degraded_sources` and logs.
    #[error("Source unavailable for {request_type}: {message}")]
    SourceUnavailable {
        request_type: RequestType,
        message: String,
    },

    /// A single approve/reject call failed (validation, conflict, network)
    ///
    /// Surfaced immediately for that one item; never affects sibling
    /// operations in a bulk run.
    #[error("Action rejected for {key}: {message}")]
    ActionRejected { key: ItemKey, message: String },

    /// Rejection reason was empty or whitespace-only
    ///
    /// Caught locally before any network call is issued.
    #[error("Rejection reason must be a non-empty, non-whitespace string")]
    InvalidReason,

    /// Invalid query or boundary input (zero page, unknown type tag, ...)
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// An action referenced a key that is not on the currently loaded page
    ///
    /// Selection and action targets are confined to loaded items, so this
    /// indicates a caller bug, not a recoverable condition.
    #[error("Item {key} is not on the loaded page")]
    ItemNotLoaded { key: ItemKey },

    /// A bulk operation was invoked while another one is still running
    #[error("A bulk operation is already running")]
    BulkInFlight,

    /// A bulk operation was invoked with an empty selection
    #[error("No items selected for bulk action")]
    EmptySelection,

    /// Generic internal invariant breach
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ApprovalError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ApprovalError::SourceUnavailable { .. } => "ERR_SOURCE_UNAVAILABLE",
            ApprovalError::ActionRejected { .. } => "ERR_ACTION_REJECTED",
            ApprovalError::InvalidReason => "ERR_INVALID_REASON",
            ApprovalError::InvalidInput { .. } => "ERR_INVALID_INPUT",
            ApprovalError::ItemNotLoaded { .. } => "ERR_ITEM_NOT_LOADED",
            ApprovalError::BulkInFlight => "ERR_BULK_IN_FLIGHT",
            ApprovalError::EmptySelection => "ERR_EMPTY_SELECTION",
            ApprovalError::Internal { .. } => "ERR_INTERNAL",
        }
    }
}
