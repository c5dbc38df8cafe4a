//! Logging facility
//!
//! Provides a single initialization point for the tracing subscriber and
//! canonical operation-logging macros. Field keys and event names come
//! from `approvals-core-types::schema` so logs stay uniform across the
//! engine.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// No default subscriber; tests install their own capture
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Call once at application startup; later calls are no-ops.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt()
                    .with_env_filter(
                        EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| EnvFilter::new("approvals=debug")),
                    )
                    .init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(
                        EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| EnvFilter::new("approvals=info")),
                    )
                    .init();
            }
            Profile::Test => {
                tracing_subscriber::registry().init();
            }
        }
    });
}

/// Log the start of an engine operation
#[macro_export]
macro_rules! log_op_start {
    ($op:expr, request_id = $request_id:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = approvals_core_types::schema::EVENT_START,
            request_id = %$request_id,
        );
    };
    ($op:expr, request_id = $request_id:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = approvals_core_types::schema::EVENT_START,
            request_id = %$request_id,
            $($field)*
        );
    };
}

/// Log the successful end of an engine operation
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, request_id = $request_id:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = approvals_core_types::schema::EVENT_END,
            request_id = %$request_id,
            duration_ms = $duration,
        );
    };
    ($op:expr, request_id = $request_id:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = approvals_core_types::schema::EVENT_END,
            request_id = %$request_id,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an engine operation error with its stable code
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, request_id = $request_id:expr, duration_ms = $duration:expr) => {
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = approvals_core_types::schema::EVENT_END_ERROR,
            request_id = %$request_id,
            duration_ms = $duration,
            err.code = $err.code(),
            "{}",
            $err
        );
    };
}
