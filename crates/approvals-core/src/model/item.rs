//! Normalized approval item and its composite identity
//!
//! Numeric ids are unique only within a source type; the `(type, id)`
//! pair is the sole stable identity across the aggregated queue. All
//! keying (selection, action-target lookup) goes through `ItemKey`.

use crate::model::RequestType;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Composite identity of an approval item across heterogeneous sources
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ItemKey {
    /// Source type whose ID space `id` belongs to
    pub request_type: RequestType,
    /// Numeric id, unique only within `request_type`
    pub id: i64,
}

impl ItemKey {
    /// Create a new composite key
    pub fn new(request_type: RequestType, id: i64) -> Self {
        Self { request_type, id }
    }
}

impl std::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.request_type, self.id)
    }
}

/// A pending business request normalized for the unified queue
///
/// Regardless of source type, items surface here with a document number,
/// a short title/description, the money amount at stake, and the
/// source-reported (pending-like) status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalItem {
    /// Source type this item came from
    pub request_type: RequestType,

    /// Numeric id within the source type's own ID space
    pub id: i64,

    /// Human document number (e.g. "PR-2024-0117")
    pub number: String,

    /// Short title
    pub title: String,

    /// Longer description
    pub description: String,

    /// Money amount at stake
    pub amount: Decimal,

    /// Source-reported status; always a pending-like state when surfaced here
    pub status: String,

    /// Creation timestamp, drives most-recent-first queue ordering
    pub created_at: DateTime<Utc>,

    /// Who raised the request
    pub created_by: String,

    /// Counterparty or department, when the source reports one
    pub entity_name: Option<String>,
}

impl ApprovalItem {
    /// Composite key identifying this item across the aggregated queue
    pub fn key(&self) -> ItemKey {
        ItemKey::new(self.request_type, self.id)
    }
}
