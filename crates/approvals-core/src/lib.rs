//! Approvals Core - Unified approval workflow engine
//!
//! This crate aggregates heterogeneous pending business requests
//! (requisitions, orders, stock transfers, expenses, lodgements) from
//! independent per-type backends into a single reviewable queue and
//! performs polymorphic approve/reject transitions against them,
//! including bulk operations with partial-failure semantics.
//!
//! The engine is built from small, separately testable parts:
//! - Normalized item model with composite `(type, id)` identity
//! - A closed, compile-checked dispatch registry of per-type backends
//! - An aggregator producing paginated views plus global per-type counts
//! - A page-scoped selection model
//! - A bulk executor with all-settle fan-out and aggregate reporting
//! - A local rejection-reason gate that blocks empty reasons before dispatch

pub mod backend;
pub mod bulk;
pub mod cache;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod model;
pub mod query;
pub mod reason;
pub mod registry;
pub mod selection;

// Re-export commonly used types
pub use backend::ApprovalBackend;
pub use bulk::{ApprovalAction, BulkOutcome};
pub use engine::ApprovalEngine;
pub use errors::{ApprovalError, Result};
pub use model::{ApprovalCounts, ApprovalItem, ItemKey, RequestType};
pub use query::{AggregatedView, QueryFilter};
pub use reason::RejectReason;
pub use registry::{BackendRegistry, RegistryBackends};
pub use selection::SelectionSet;
