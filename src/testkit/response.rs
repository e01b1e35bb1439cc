//! Capturing response sink.

use parking_lot::Mutex;

use crate::port::{RemovalResponse, ResponseSink};

/// [`ResponseSink`] that captures everything sent through it.
#[derive(Default)]
pub struct CapturedResponses {
    sent: Mutex<Vec<RemovalResponse>>,
}

impl CapturedResponses {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All responses sent so far.
    pub fn sent(&self) -> Vec<RemovalResponse> {
        self.sent.lock().clone()
    }

    /// The single terminal response; panics if zero or several were sent.
    pub fn only(&self) -> RemovalResponse {
        let sent = self.sent.lock();
        assert_eq!(sent.len(), 1, "expected exactly one response, got {sent:?}");
        sent[0].clone()
    }
}

impl ResponseSink for CapturedResponses {
    fn send(&self, response: RemovalResponse) {
        self.sent.lock().push(response);
    }
}
