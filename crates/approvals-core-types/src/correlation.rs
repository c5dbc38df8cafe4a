//! Correlation types for request tracking and tracing
//!
//! These types enable correlation of engine operations across async
//! boundaries and provide context propagation for structured logging.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single engine operation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new random RequestId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trace identifier spanning a whole user interaction (page load, bulk run)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraceId(String);

impl TraceId {
    /// Generate a new random TraceId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for TraceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Correlation context carried through an engine operation
///
/// A fresh `RequestContext` is minted per operation; the trace id may be
/// inherited from an upstream caller so related operations share it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Identifier for this specific operation
    pub request_id: RequestId,
    /// Identifier shared across the interaction this operation belongs to
    pub trace_id: TraceId,
}

impl RequestContext {
    /// Create a fresh context with new request and trace ids
    pub fn new() -> Self {
        Self {
            request_id: RequestId::new(),
            trace_id: TraceId::new(),
        }
    }

    /// Create a context that continues an existing trace
    pub fn with_trace(trace_id: TraceId) -> Self {
        Self {
            request_id: RequestId::new(),
            trace_id,
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
