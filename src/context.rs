//! Request context for gateway operations.
//!
//! Each dispatched request gets a context carrying a unique identifier so
//! log lines from the router, the handler, and the directory provider can
//! be correlated.

use uuid::Uuid;

/// Per-request context threaded through dispatch.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique identifier for this request
    pub request_id: String,
}

impl RequestContext {
    /// Create a new request context with a specific request ID.
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }

    /// Create a new request context with a generated request ID.
    pub fn with_generated_id() -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::with_generated_id()
    }
}
