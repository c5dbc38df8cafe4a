//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TRACE_ID: &str = "trace_id";

// Domain identifiers
pub const FIELD_REQUEST_TYPE: &str = "request_type";
pub const FIELD_ITEM_ID: &str = "item_id";
pub const FIELD_ITEM_KEY: &str = "item_key";

// Query fields
pub const FIELD_PAGE: &str = "page";
pub const FIELD_PAGE_SIZE: &str = "page_size";
pub const FIELD_TOTAL: &str = "total";
pub const FIELD_DEGRADED: &str = "degraded_sources";

// Bulk execution fields
pub const FIELD_SELECTED: &str = "selected";
pub const FIELD_SUCCEEDED: &str = "succeeded";
pub const FIELD_FAILED: &str = "failed";

// Error fields
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
