//! Global per-type pending counts
//!
//! Counts are computed over the entire matching result set, independent
//! of the current page and of the active type filter, so that filter
//! tiles can show true totals while only one page of items is
//! materialized.

use crate::model::RequestType;
use serde::{Deserialize, Serialize};

/// One pending-count bucket per request type, plus the grand total
///
/// `record()` increments a bucket and `total` together, so the invariant
/// `total == sum(buckets)` holds by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalCounts {
    pub purchase_requisitions: usize,
    pub purchase_orders: usize,
    pub store_stock_transfers: usize,
    pub location_stock_transfers: usize,
    pub stock_transfers: usize,
    pub expenses: usize,
    pub cash_lodgements: usize,
    /// Sum of all buckets
    pub total: usize,
}

impl ApprovalCounts {
    /// Create counts with every bucket at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one pending item of the given type
    pub fn record(&mut self, request_type: RequestType) {
        *self.bucket_mut(request_type) += 1;
        self.total += 1;
    }

    /// Pending count for one request type
    pub fn for_type(&self, request_type: RequestType) -> usize {
        match request_type {
            RequestType::PurchaseRequisition => self.purchase_requisitions,
            RequestType::PurchaseOrder => self.purchase_orders,
            RequestType::StoreStockTransfer => self.store_stock_transfers,
            RequestType::LocationStockTransfer => self.location_stock_transfers,
            RequestType::StockTransfer => self.stock_transfers,
            RequestType::Expense => self.expenses,
            RequestType::CashLodgement => self.cash_lodgements,
        }
    }

    /// Sum of the per-type buckets, for invariant checking against `total`
    pub fn sum_of_buckets(&self) -> usize {
        RequestType::ALL
            .iter()
            .map(|ty| self.for_type(*ty))
            .sum()
    }

    fn bucket_mut(&mut self, request_type: RequestType) -> &mut usize {
        match request_type {
            RequestType::PurchaseRequisition => &mut self.purchase_requisitions,
            RequestType::PurchaseOrder => &mut self.purchase_orders,
            RequestType::StoreStockTransfer => &mut self.store_stock_transfers,
            RequestType::LocationStockTransfer => &mut self.location_stock_transfers,
            RequestType::StockTransfer => &mut self.stock_transfers,
            RequestType::Expense => &mut self.expenses,
            RequestType::CashLodgement => &mut self.cash_lodgements,
        }
    }
}
