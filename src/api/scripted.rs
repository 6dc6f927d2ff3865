//! In-memory transport that replays canned responses and records requests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use super::transport::{HttpRequest, HttpResponse, Transport, TransportError};

/// Replays queued responses in order; clones share the queue and the log.
///
/// An exhausted queue answers with a [`TransportError`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedTransport {
    replies: Arc<Mutex<VecDeque<Result<HttpResponse, TransportError>>>>,
    sent: Arc<Mutex<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with `status` and `body`.
    #[must_use]
    pub fn reply(self, status: u16, body: impl Into<String>) -> Self {
        self.push(Ok(HttpResponse::new(status, body)));
        self
    }

    /// Queue a JSON response.
    #[must_use]
    pub fn reply_json(self, status: u16, body: &serde_json::Value) -> Self {
        self.reply(status, body.to_string())
    }

    /// Queue a failure to reach the server.
    #[must_use]
    pub fn fail(self, message: &str) -> Self {
        self.push(Err(TransportError::new(message)));
        self
    }

    /// Every request sent so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Number of requests sent so far.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn push(&self, reply: Result<HttpResponse, TransportError>) {
        self.replies.lock().unwrap_or_else(PoisonError::into_inner).push_back(reply);
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner).push(request);
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no scripted reply left")))
    }
}
