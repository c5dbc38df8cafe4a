//! Domain model for the unified approval queue
//!
//! The model normalizes heterogeneous pending business requests into a
//! single representation keyed by the composite `(type, id)` pair.

pub mod counts;
pub mod item;
pub mod request_type;

pub use counts::ApprovalCounts;
pub use item::{ApprovalItem, ItemKey};
pub use request_type::RequestType;
