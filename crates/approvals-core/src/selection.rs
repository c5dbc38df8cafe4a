//! Page-scoped selection model for bulk actions
//!
//! Selection keys are composite `(type, id)` pairs and are confined to
//! items on the currently loaded page. Navigating pages does not carry
//! selection across: stale keys are pruned against the newly loaded page
//! before any count is surfaced.

use crate::model::{ApprovalItem, ItemKey};
use std::collections::BTreeSet;

/// Set of composite keys chosen for a bulk action
///
/// BTreeSet keeps `keys()` iteration deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    keys: BTreeSet<ItemKey>,
}

impl SelectionSet {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one key; returns whether the key is selected afterwards
    pub fn toggle(&mut self, key: ItemKey) -> bool {
        if self.keys.remove(&key) {
            false
        } else {
            self.keys.insert(key);
            true
        }
    }

    /// Select-all checkbox semantics for the current page
    ///
    /// If every item on the page is already selected, deselects exactly
    /// those items; otherwise selects all of them. Keys belonging to
    /// other pages are never touched by this operation.
    pub fn toggle_all(&mut self, current_page_items: &[ApprovalItem]) {
        let page_keys: Vec<ItemKey> = current_page_items.iter().map(ApprovalItem::key).collect();
        let all_selected =
            !page_keys.is_empty() && page_keys.iter().all(|key| self.keys.contains(key));

        if all_selected {
            for key in &page_keys {
                self.keys.remove(key);
            }
        } else {
            self.keys.extend(page_keys);
        }
    }

    /// Drop every key not present on the newly loaded page
    ///
    /// Called on page load so the surfaced count never references
    /// unfetched items.
    pub fn retain_loaded(&mut self, current_page_items: &[ApprovalItem]) {
        let loaded: BTreeSet<ItemKey> =
            current_page_items.iter().map(ApprovalItem::key).collect();
        self.keys.retain(|key| loaded.contains(key));
    }

    /// Clear the whole selection
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Whether a key is currently selected
    pub fn is_selected(&self, key: ItemKey) -> bool {
        self.keys.contains(&key)
    }

    /// Number of selected keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Selected keys in deterministic `(type, id)` order
    pub fn keys(&self) -> Vec<ItemKey> {
        self.keys.iter().copied().collect()
    }
}
