//! Engine façade for the presentation layer
//!
//! `ApprovalEngine` ties the aggregator, selection model, bulk executor
//! and view cache together behind the narrow interface the UI calls:
//! `aggregated_view`, the selection operations, `run_single_action` and
//! `run_bulk_action`.
//!
//! ## Concurrency contract
//!
//! The engine targets UI-thread style cooperative scheduling: every
//! backend call is an async boundary, and the only true request
//! parallelism is the bulk fan-out. Internal locks are short-lived and
//! never held across an await. At most one bulk operation runs at a
//! time; a second invocation while one is running fails with
//! `BulkInFlight` rather than queueing. In-flight requests are not
//! aborted if the caller walks away; at-most-once per item is the
//! backends' contract, not enforced here.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use approvals_core_types::RequestId;

use crate::bulk::{execute_bulk, ApprovalAction, BulkOutcome};
use crate::cache::ViewCache;
use crate::errors::{ApprovalError, Result};
use crate::model::{ApprovalItem, ItemKey};
use crate::query::{aggregate, AggregatedView, QueryFilter};
use crate::registry::BackendRegistry;
use crate::selection::SelectionSet;
use crate::{log_op_end, log_op_error, log_op_start};

/// Unified approval workflow engine
///
/// Owns the dispatch registry, the page-scoped selection, the cached
/// view snapshot and the bulk running-flag. Cheap to share behind an
/// `Arc`; all methods take `&self`.
pub struct ApprovalEngine {
    registry: BackendRegistry,
    selection: Mutex<SelectionSet>,
    cache: Mutex<ViewCache>,
    loaded_page: Mutex<Vec<ApprovalItem>>,
    bulk_running: AtomicBool,
}

/// Resets the running flag when a bulk invocation settles, on any path
struct BulkGuard<'a>(&'a AtomicBool);

impl Drop for BulkGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ApprovalEngine {
    /// Create an engine over a complete backend registry
    pub fn new(registry: BackendRegistry) -> Self {
        Self {
            registry,
            selection: Mutex::new(SelectionSet::new()),
            cache: Mutex::new(ViewCache::new()),
            loaded_page: Mutex::new(Vec::new()),
            bulk_running: AtomicBool::new(false),
        }
    }

    /// One page of the unified queue plus global counts
    ///
    /// Serves from the cache when the exact same filter produced the
    /// current snapshot; otherwise queries every source. Loading a page
    /// prunes the selection against the new page so the surfaced count
    /// never references unfetched items.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a zero page or page size. Individual
    /// source failures degrade the view instead of erroring.
    pub async fn aggregated_view(&self, filter: QueryFilter) -> Result<Arc<AggregatedView>> {
        let request_id = RequestId::new();
        let started = Instant::now();
        log_op_start!(
            "aggregated_view",
            request_id = request_id,
            page = filter.page,
            page_size = filter.page_size,
        );

        if let Some(view) = lock(&self.cache).get(&filter) {
            lock(&self.selection).retain_loaded(&view.items);
            log_op_end!(
                "aggregated_view",
                request_id = request_id,
                duration_ms = started.elapsed().as_millis() as u64,
                cache_hit = true,
            );
            return Ok(view);
        }

        let view = match aggregate(&self.registry, &filter).await {
            Ok(view) => Arc::new(view),
            Err(err) => {
                log_op_error!(
                    "aggregated_view",
                    err,
                    request_id = request_id,
                    duration_ms = started.elapsed().as_millis() as u64
                );
                return Err(err);
            }
        };

        *lock(&self.loaded_page) = view.items.clone();
        lock(&self.selection).retain_loaded(&view.items);
        lock(&self.cache).put(filter, Arc::clone(&view));

        log_op_end!(
            "aggregated_view",
            request_id = request_id,
            duration_ms = started.elapsed().as_millis() as u64,
            total = view.total,
            degraded_sources = view.degraded_sources.len(),
        );
        Ok(view)
    }

    /// Flip one item's selection; returns whether it is selected afterwards
    ///
    /// # Errors
    ///
    /// Returns `ItemNotLoaded` if the key is not on the loaded page:
    /// selection never spans unfetched items.
    pub fn toggle_selection(&self, key: ItemKey) -> Result<bool> {
        let loaded = lock(&self.loaded_page);
        if !loaded.iter().any(|item| item.key() == key) {
            return Err(ApprovalError::ItemNotLoaded { key });
        }
        Ok(lock(&self.selection).toggle(key))
    }

    /// Select-all checkbox over the loaded page (tri-state)
    pub fn toggle_all_on_page(&self) {
        let loaded = lock(&self.loaded_page);
        lock(&self.selection).toggle_all(&loaded);
    }

    /// Clear the selection explicitly
    pub fn clear_selection(&self) {
        lock(&self.selection).clear();
    }

    /// Whether a key is currently selected
    pub fn is_selected(&self, key: ItemKey) -> bool {
        lock(&self.selection).is_selected(key)
    }

    /// Number of selected items
    pub fn selection_count(&self) -> usize {
        lock(&self.selection).len()
    }

    /// Selected keys in deterministic order
    pub fn selected_keys(&self) -> Vec<ItemKey> {
        lock(&self.selection).keys()
    }

    /// Approve or reject one loaded item
    ///
    /// Dispatches exactly one backend transition and invalidates the
    /// cached view on success so the next page load reflects the new
    /// server state.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotLoaded` for a key outside the loaded page, or the
    /// backend's `ActionRejected` with the specific cause for this item.
    pub async fn run_single_action(&self, key: ItemKey, action: &ApprovalAction) -> Result<()> {
        let request_id = RequestId::new();
        let started = Instant::now();
        log_op_start!(
            "run_single_action",
            request_id = request_id,
            item_key = %key,
            action = action.as_str(),
        );

        let item = self.loaded_item(key)?;
        match self.registry.dispatch(&item, action).await {
            Ok(()) => {
                lock(&self.cache).invalidate();
                log_op_end!(
                    "run_single_action",
                    request_id = request_id,
                    duration_ms = started.elapsed().as_millis() as u64,
                    item_key = %key,
                );
                Ok(())
            }
            Err(err) => {
                log_op_error!(
                    "run_single_action",
                    err,
                    request_id = request_id,
                    duration_ms = started.elapsed().as_millis() as u64
                );
                Err(err)
            }
        }
    }

    /// Approve or reject every selected item with all-settle semantics
    ///
    /// Resolves the whole selection against the loaded page before any
    /// dispatch, fans out one transition per item, waits for every leg
    /// to settle, and reports aggregate counts only. The selection is
    /// cleared and the cached view invalidated unconditionally, even on
    /// partial failure.
    ///
    /// # Errors
    ///
    /// Returns `BulkInFlight` if another bulk run is in progress,
    /// `EmptySelection` when nothing is selected, or `ItemNotLoaded` if
    /// a stale key survives pruning (caller bug); in the latter cases no
    /// backend call has been issued.
    pub async fn run_bulk_action(&self, action: &ApprovalAction) -> Result<BulkOutcome> {
        if self
            .bulk_running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ApprovalError::BulkInFlight);
        }
        let _guard = BulkGuard(&self.bulk_running);

        let request_id = RequestId::new();
        let started = Instant::now();

        let keys = lock(&self.selection).keys();
        log_op_start!(
            "run_bulk_action",
            request_id = request_id,
            action = action.as_str(),
            selected = keys.len(),
        );

        if keys.is_empty() {
            let err = ApprovalError::EmptySelection;
            log_op_error!(
                "run_bulk_action",
                err,
                request_id = request_id,
                duration_ms = started.elapsed().as_millis() as u64
            );
            return Err(err);
        }

        // Resolve everything up front: a stale key aborts before any
        // dispatch rather than partially applying the batch.
        let mut items = Vec::with_capacity(keys.len());
        for key in keys {
            match self.loaded_item(key) {
                Ok(item) => items.push(item),
                Err(err) => {
                    log_op_error!(
                        "run_bulk_action",
                        err,
                        request_id = request_id,
                        duration_ms = started.elapsed().as_millis() as u64
                    );
                    return Err(err);
                }
            }
        }

        let outcome = execute_bulk(&self.registry, &items, action).await;

        // Stale keys for now-decided items are meaningless, so the
        // selection goes even when some legs failed.
        lock(&self.selection).clear();
        lock(&self.cache).invalidate();

        log_op_end!(
            "run_bulk_action",
            request_id = request_id,
            duration_ms = started.elapsed().as_millis() as u64,
            succeeded = outcome.succeeded,
            failed = outcome.failed,
        );
        Ok(outcome)
    }

    fn loaded_item(&self, key: ItemKey) -> Result<ApprovalItem> {
        lock(&self.loaded_page)
            .iter()
            .find(|item| item.key() == key)
            .cloned()
            .ok_or(ApprovalError::ItemNotLoaded { key })
    }
}
