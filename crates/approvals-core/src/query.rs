//! Aggregator / query service
//!
//! Builds the unified pending queue: every type's backend is queried
//! concurrently, matched items are merged into one deterministically
//! ordered sequence, and pagination is applied after the merge so a page
//! is a single contiguous window across the whole queue. Per-type counts
//! are computed over the type-unfiltered universe so filter tiles show
//! true totals regardless of which tile is active.

use crate::errors::{ApprovalError, Result};
use crate::model::{ApprovalCounts, ApprovalItem, RequestType};
use crate::registry::BackendRegistry;
use futures::future::join_all;
use serde::{Deserialize, Serialize};

/// Filter describing one page request of the unified queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFilter {
    /// Restrict the item list to one type; counts stay global
    pub request_type: Option<RequestType>,
    /// Free-text needle, matched case-insensitively against
    /// number/title/description; empty means no search
    pub search: String,
    /// 1-based page number
    pub page: usize,
    /// Items per page, must be positive
    pub page_size: usize,
}

impl QueryFilter {
    /// First page over all types with no search
    pub fn first_page(page_size: usize) -> Self {
        Self {
            request_type: None,
            search: String::new(),
            page: 1,
            page_size,
        }
    }

    /// Validate the pagination inputs
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `page` or `page_size` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.page == 0 {
            return Err(ApprovalError::InvalidInput {
                message: "page must be >= 1".to_string(),
            });
        }
        if self.page_size == 0 {
            return Err(ApprovalError::InvalidInput {
                message: "page_size must be > 0".to_string(),
            });
        }
        Ok(())
    }

    /// Normalized search needle; `None` when the search box is blank
    pub fn search_needle(&self) -> Option<&str> {
        let trimmed = self.search.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}

/// One materialized page of the unified queue plus global counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedView {
    /// The page window, at most `page_size` items
    pub items: Vec<ApprovalItem>,
    /// Per-type counts over the search-filtered, type-unfiltered universe
    pub counts: ApprovalCounts,
    /// Matching items under the active type filter
    pub total: usize,
    /// `max(1, ceil(total / page_size))`
    pub total_pages: usize,
    /// Sources that failed to answer; their items are omitted and their
    /// count buckets report zero
    pub degraded_sources: Vec<RequestType>,
}

/// Case-insensitive substring match against number/title/description
pub fn matches_search(item: &ApprovalItem, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    item.number.to_lowercase().contains(&needle)
        || item.title.to_lowercase().contains(&needle)
        || item.description.to_lowercase().contains(&needle)
}

/// Query every source and assemble one page of the unified queue
///
/// Sources are fetched concurrently and independently; a failing source
/// degrades the view (logged at warn, recorded in `degraded_sources`)
/// instead of failing the whole query. Merged order is most-recent-first
/// by `created_at` with ties broken by `(type, id)` ascending, so paging
/// is deterministic.
///
/// # Errors
///
/// Returns `InvalidInput` for a zero page or page size. Source failures
/// never surface as errors here.
pub async fn aggregate(
    registry: &BackendRegistry,
    filter: &QueryFilter,
) -> Result<AggregatedView> {
    filter.validate()?;
    let needle = filter.search_needle();

    // Every type is fetched regardless of the active type filter: the
    // count tiles must reflect the whole universe.
    let fetches = RequestType::ALL.iter().map(|&request_type| async move {
        let fetched = registry.backend(request_type).list_pending(needle).await;
        (request_type, fetched)
    });

    let mut pool: Vec<ApprovalItem> = Vec::new();
    let mut counts = ApprovalCounts::new();
    let mut degraded_sources: Vec<RequestType> = Vec::new();

    for (request_type, fetched) in join_all(fetches).await {
        match fetched {
            Ok(items) => {
                for item in items {
                    // Backends filter by search themselves; re-checking
                    // here keeps counts and page content consistent with
                    // each other even when a source is sloppy about it.
                    if let Some(needle) = needle {
                        if !matches_search(&item, needle) {
                            continue;
                        }
                    }
                    counts.record(item.request_type);
                    pool.push(item);
                }
            }
            Err(err) => {
                tracing::warn!(
                    request_type = request_type.as_str(),
                    err.code = err.code(),
                    "approval source degraded: {}",
                    err
                );
                degraded_sources.push(request_type);
            }
        }
    }

    // Merge order: most-recent-first, deterministic tie-break
    pool.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.key().cmp(&b.key()))
    });

    let filtered: Vec<ApprovalItem> = match filter.request_type {
        Some(request_type) => pool
            .into_iter()
            .filter(|item| item.request_type == request_type)
            .collect(),
        None => pool,
    };

    let total = filtered.len();
    let total_pages = std::cmp::max(1, total.div_ceil(filter.page_size));
    let start = (filter.page - 1) * filter.page_size;
    let items: Vec<ApprovalItem> = filtered
        .into_iter()
        .skip(start)
        .take(filter.page_size)
        .collect();

    Ok(AggregatedView {
        items,
        counts,
        total,
        total_pages,
        degraded_sources,
    })
}
