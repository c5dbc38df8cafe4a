//! Closed enumeration of approvable business request types
//!
//! Each source type has its own backend collection and its own ID space.
//! Adding a type means adding one variant here, one registry field, and
//! one counts bucket; the exhaustive matches on this enum turn a missing
//! handler into a compile error rather than a runtime "unknown type" fault.

use crate::errors::ApprovalError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The kind of business document awaiting an approve/reject decision
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    /// Purchase requisition raised by a department
    PurchaseRequisition,
    /// Purchase order against an approved requisition
    PurchaseOrder,
    /// Stock transfer between stores
    StoreStockTransfer,
    /// Stock transfer between locations
    LocationStockTransfer,
    /// Generic stock transfer note
    StockTransfer,
    /// Expense claim
    Expense,
    /// Cash lodgement slip
    CashLodgement,
}

impl RequestType {
    /// All request types, in canonical declaration order
    pub const ALL: [RequestType; 7] = [
        RequestType::PurchaseRequisition,
        RequestType::PurchaseOrder,
        RequestType::StoreStockTransfer,
        RequestType::LocationStockTransfer,
        RequestType::StockTransfer,
        RequestType::Expense,
        RequestType::CashLodgement,
    ];

    /// Stable machine tag for this type (matches the serde representation)
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::PurchaseRequisition => "purchase_requisition",
            RequestType::PurchaseOrder => "purchase_order",
            RequestType::StoreStockTransfer => "store_stock_transfer",
            RequestType::LocationStockTransfer => "location_stock_transfer",
            RequestType::StockTransfer => "stock_transfer",
            RequestType::Expense => "expense",
            RequestType::CashLodgement => "cash_lodgement",
        }
    }

    /// Human-readable label for this type
    pub fn label(&self) -> &'static str {
        match self {
            RequestType::PurchaseRequisition => "Purchase Requisition",
            RequestType::PurchaseOrder => "Purchase Order",
            RequestType::StoreStockTransfer => "Store Stock Transfer",
            RequestType::LocationStockTransfer => "Location Stock Transfer",
            RequestType::StockTransfer => "Stock Transfer",
            RequestType::Expense => "Expense",
            RequestType::CashLodgement => "Cash Lodgement",
        }
    }
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RequestType {
    type Err = ApprovalError;

    /// Parse a machine tag at the API boundary
    ///
    /// Unknown tags only exist here; inside the engine every dispatch is
    /// an exhaustive match on the enum.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RequestType::ALL
            .iter()
            .copied()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| ApprovalError::InvalidInput {
                message: format!("Unknown request type tag: {}", s),
            })
    }
}
