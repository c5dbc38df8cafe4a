//! Closed dispatch table mapping request types to their backends
//!
//! The registry replaces string/tag dispatch with an interface table
//! built from a struct carrying one named field per `RequestType`:
//! adding a type without wiring its backend is a compile error, so there
//! is no runtime "unknown type" path inside the engine.

use crate::backend::ApprovalBackend;
use crate::bulk::ApprovalAction;
use crate::errors::Result;
use crate::model::{ApprovalItem, RequestType};
use std::sync::Arc;

/// One backend per request type, named so construction is exhaustive
pub struct RegistryBackends {
    pub purchase_requisitions: Arc<dyn ApprovalBackend>,
    pub purchase_orders: Arc<dyn ApprovalBackend>,
    pub store_stock_transfers: Arc<dyn ApprovalBackend>,
    pub location_stock_transfers: Arc<dyn ApprovalBackend>,
    pub stock_transfers: Arc<dyn ApprovalBackend>,
    pub expenses: Arc<dyn ApprovalBackend>,
    pub cash_lodgements: Arc<dyn ApprovalBackend>,
}

/// Type dispatch registry
///
/// Resolves a backend solely by `RequestType` via exhaustive match.
pub struct BackendRegistry {
    backends: RegistryBackends,
}

impl BackendRegistry {
    /// Build a registry from a complete backend set
    pub fn new(backends: RegistryBackends) -> Self {
        Self { backends }
    }

    /// Resolve the backend for a request type
    pub fn backend(&self, request_type: RequestType) -> &Arc<dyn ApprovalBackend> {
        match request_type {
            RequestType::PurchaseRequisition => &self.backends.purchase_requisitions,
            RequestType::PurchaseOrder => &self.backends.purchase_orders,
            RequestType::StoreStockTransfer => &self.backends.store_stock_transfers,
            RequestType::LocationStockTransfer => &self.backends.location_stock_transfers,
            RequestType::StockTransfer => &self.backends.stock_transfers,
            RequestType::Expense => &self.backends.expenses,
            RequestType::CashLodgement => &self.backends.cash_lodgements,
        }
    }

    /// Dispatch one approve/reject transition for an item
    ///
    /// Exactly one backend call; the same entry point serves single
    /// actions and each leg of a bulk fan-out.
    ///
    /// # Errors
    ///
    /// Returns `ActionRejected` when the backend refuses the transition.
    pub async fn dispatch(&self, item: &ApprovalItem, action: &ApprovalAction) -> Result<()> {
        let backend = self.backend(item.request_type);
        match action {
            ApprovalAction::Approve => backend.approve(item.id).await,
            ApprovalAction::Reject(reason) => backend.reject(item.id, reason.as_str()).await,
        }
    }
}
