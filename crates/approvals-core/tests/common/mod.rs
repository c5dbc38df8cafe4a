#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use approvals_core::{
    ApprovalBackend, ApprovalError, ApprovalItem, BackendRegistry, RegistryBackends, RequestType,
    Result,
};
use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use tokio::sync::Semaphore;

/// Scripted in-memory backend for one request type
///
/// Records every approve/reject call so tests can assert exactly which
/// transitions were dispatched and with which reason strings.
pub struct MockBackend {
    request_type: RequestType,
    items: Mutex<Vec<ApprovalItem>>,
    fail_listing: AtomicBool,
    failing_ids: Mutex<HashSet<i64>>,
    list_calls: AtomicUsize,
    approve_calls: Mutex<Vec<i64>>,
    reject_calls: Mutex<Vec<(i64, String)>>,
    gate: Mutex<Option<Arc<Semaphore>>>,
}

impl MockBackend {
    pub fn new(request_type: RequestType) -> Arc<Self> {
        Arc::new(Self {
            request_type,
            items: Mutex::new(Vec::new()),
            fail_listing: AtomicBool::new(false),
            failing_ids: Mutex::new(HashSet::new()),
            list_calls: AtomicUsize::new(0),
            approve_calls: Mutex::new(Vec::new()),
            reject_calls: Mutex::new(Vec::new()),
            gate: Mutex::new(None),
        })
    }

    /// Seed one pending item into this backend's collection
    pub fn push(&self, item: ApprovalItem) {
        assert_eq!(
            item.request_type, self.request_type,
            "Seeded item type must match the backend type"
        );
        self.items.lock().unwrap().push(item);
    }

    /// Make every list_pending call fail with SourceUnavailable
    pub fn fail_listing(&self) {
        self.fail_listing.store(true, Ordering::Relaxed);
    }

    /// Make approve/reject fail for one id
    pub fn fail_action_for(&self, id: i64) {
        self.failing_ids.lock().unwrap().insert(id);
    }

    /// Park approve/reject calls until the semaphore hands out permits
    pub fn hold_actions(&self, gate: Arc<Semaphore>) {
        *self.gate.lock().unwrap() = Some(gate);
    }

    pub fn list_call_count(&self) -> usize {
        self.list_calls.load(Ordering::Relaxed)
    }

    pub fn approve_calls(&self) -> Vec<i64> {
        self.approve_calls.lock().unwrap().clone()
    }

    pub fn reject_calls(&self) -> Vec<(i64, String)> {
        self.reject_calls.lock().unwrap().clone()
    }

    pub fn action_call_count(&self) -> usize {
        self.approve_calls.lock().unwrap().len() + self.reject_calls.lock().unwrap().len()
    }

    async fn pass_gate(&self) {
        let gate = self.gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            let permit = gate.acquire().await.expect("Gate semaphore closed");
            permit.forget();
        }
    }

    fn action_result(&self, id: i64) -> Result<()> {
        if self.failing_ids.lock().unwrap().contains(&id) {
            Err(ApprovalError::ActionRejected {
                key: approvals_core::ItemKey::new(self.request_type, id),
                message: "backend refused the transition".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ApprovalBackend for MockBackend {
    async fn list_pending(&self, search: Option<&str>) -> Result<Vec<ApprovalItem>> {
        self.list_calls.fetch_add(1, Ordering::Relaxed);
        if self.fail_listing.load(Ordering::Relaxed) {
            return Err(ApprovalError::SourceUnavailable {
                request_type: self.request_type,
                message: "scripted listing failure".to_string(),
            });
        }
        let items = self.items.lock().unwrap().clone();
        Ok(match search {
            Some(needle) => items
                .into_iter()
                .filter(|item| approvals_core::query::matches_search(item, needle))
                .collect(),
            None => items,
        })
    }

    async fn approve(&self, id: i64) -> Result<()> {
        self.pass_gate().await;
        self.approve_calls.lock().unwrap().push(id);
        self.action_result(id)
    }

    async fn reject(&self, id: i64, reason: &str) -> Result<()> {
        self.pass_gate().await;
        self.reject_calls
            .lock()
            .unwrap()
            .push((id, reason.to_string()));
        self.action_result(id)
    }
}

/// One mock backend per request type, plus a registry over them
pub struct MockSet {
    pub purchase_requisitions: Arc<MockBackend>,
    pub purchase_orders: Arc<MockBackend>,
    pub store_stock_transfers: Arc<MockBackend>,
    pub location_stock_transfers: Arc<MockBackend>,
    pub stock_transfers: Arc<MockBackend>,
    pub expenses: Arc<MockBackend>,
    pub cash_lodgements: Arc<MockBackend>,
}

impl MockSet {
    pub fn new() -> Self {
        Self {
            purchase_requisitions: MockBackend::new(RequestType::PurchaseRequisition),
            purchase_orders: MockBackend::new(RequestType::PurchaseOrder),
            store_stock_transfers: MockBackend::new(RequestType::StoreStockTransfer),
            location_stock_transfers: MockBackend::new(RequestType::LocationStockTransfer),
            stock_transfers: MockBackend::new(RequestType::StockTransfer),
            expenses: MockBackend::new(RequestType::Expense),
            cash_lodgements: MockBackend::new(RequestType::CashLodgement),
        }
    }

    pub fn backend(&self, request_type: RequestType) -> &Arc<MockBackend> {
        match request_type {
            RequestType::PurchaseRequisition => &self.purchase_requisitions,
            RequestType::PurchaseOrder => &self.purchase_orders,
            RequestType::StoreStockTransfer => &self.store_stock_transfers,
            RequestType::LocationStockTransfer => &self.location_stock_transfers,
            RequestType::StockTransfer => &self.stock_transfers,
            RequestType::Expense => &self.expenses,
            RequestType::CashLodgement => &self.cash_lodgements,
        }
    }

    pub fn registry(&self) -> BackendRegistry {
        BackendRegistry::new(RegistryBackends {
            purchase_requisitions: self.purchase_requisitions.clone(),
            purchase_orders: self.purchase_orders.clone(),
            store_stock_transfers: self.store_stock_transfers.clone(),
            location_stock_transfers: self.location_stock_transfers.clone(),
            stock_transfers: self.stock_transfers.clone(),
            expenses: self.expenses.clone(),
            cash_lodgements: self.cash_lodgements.clone(),
        })
    }

    /// Total approve/reject calls recorded across all backends
    pub fn total_action_calls(&self) -> usize {
        RequestType::ALL
            .iter()
            .map(|ty| self.backend(*ty).action_call_count())
            .sum()
    }
}

/// Build a pending item created `minutes_ago` before a fixed base time
///
/// The fixed base keeps ordering assertions deterministic across runs.
pub fn pending_item(
    request_type: RequestType,
    id: i64,
    number: &str,
    title: &str,
    minutes_ago: i64,
) -> ApprovalItem {
    let base = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
    ApprovalItem {
        request_type,
        id,
        number: number.to_string(),
        title: title.to_string(),
        description: format!("{} raised by depot operations", title),
        amount: Decimal::new(7_450_00, 2),
        status: "pending".to_string(),
        created_at: base - Duration::minutes(minutes_ago),
        created_by: "amusa".to_string(),
        entity_name: Some("Apapa Depot".to_string()),
    }
}
