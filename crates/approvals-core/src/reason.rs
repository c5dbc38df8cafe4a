//! Rejection reason gate
//!
//! A reject action (single or bulk) carries a `RejectReason`, which can
//! only be constructed from a non-empty, non-whitespace string. The gate
//! therefore runs before any network call: an empty reason never reaches
//! a backend. In bulk mode the same reason string is applied identically
//! to every item; there is no per-item reason by design.

use crate::errors::{ApprovalError, Result};
use serde::{Deserialize, Serialize};

/// A validated, trimmed rejection reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectReason(String);

impl RejectReason {
    /// Validate and normalize a raw reason string
    ///
    /// Leading/trailing whitespace is trimmed; the interior is kept
    /// verbatim.
    ///
    /// # Errors
    ///
    /// Returns `InvalidReason` if the input is empty or whitespace-only.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ApprovalError::InvalidReason);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The validated reason text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_reason_is_trimmed() {
        let reason = RejectReason::new("  budget exceeded  ").unwrap();
        assert_eq!(reason.as_str(), "budget exceeded");
    }

    #[test]
    fn test_empty_reason_is_rejected() {
        assert_eq!(
            RejectReason::new("").unwrap_err(),
            ApprovalError::InvalidReason
        );
    }

    #[test]
    fn test_whitespace_only_reason_is_rejected() {
        assert_eq!(
            RejectReason::new(" \t\n ").unwrap_err(),
            ApprovalError::InvalidReason
        );
    }
}
