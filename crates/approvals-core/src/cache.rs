//! Explicit query-result cache with immutable snapshots
//!
//! The only shared mutable resource in the engine is the cached view.
//! It is never mutated in place: reads hand out `Arc` snapshots, and any
//! committing action invalidates the slot so the next read refetches.
//! Staleness between an item's real state and its displayed state is
//! accepted and bounded by one refresh cycle.

use crate::query::{AggregatedView, QueryFilter};
use std::sync::Arc;

/// Single-slot cache keyed by the exact filter that produced the view
#[derive(Debug, Clone, Default)]
pub struct ViewCache {
    slot: Option<(QueryFilter, Arc<AggregatedView>)>,
}

impl ViewCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot for `filter`, if the cached slot was produced by exactly it
    pub fn get(&self, filter: &QueryFilter) -> Option<Arc<AggregatedView>> {
        match &self.slot {
            Some((cached_filter, view)) if cached_filter == filter => Some(Arc::clone(view)),
            _ => None,
        }
    }

    /// Store the snapshot for `filter`, replacing any previous slot
    pub fn put(&mut self, filter: QueryFilter, view: Arc<AggregatedView>) {
        self.slot = Some((filter, view));
    }

    /// Drop the snapshot; the next read must refetch
    pub fn invalidate(&mut self) {
        self.slot = None;
    }
}
