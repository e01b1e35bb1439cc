//! Transport response boundary.

use serde_json::Value;

/// Terminal response for a removal request.
///
/// The transport layer maps these onto its own wire format. `Custom` is
/// set by plugins that answer the request themselves and is opaque to the
/// core.
#[derive(Debug, Clone, PartialEq)]
pub enum RemovalResponse {
    /// The target was removed.
    Removed,
    /// No removal mechanism matched the target for this owner.
    NotFound { message: String },
    /// Plugin-set response.
    Custom { status: u16, body: Value },
}

impl RemovalResponse {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// HTTP-equivalent status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Removed => 204,
            Self::NotFound { .. } => 404,
            Self::Custom { status, .. } => *status,
        }
    }
}

/// Sink the orchestrator and plugins write terminal responses into.
pub trait ResponseSink: Send + Sync {
    fn send(&self, response: RemovalResponse);
}
