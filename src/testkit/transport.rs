//! Mock [`HttpTransport`] for client tests.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::ClientError;
use crate::port::outbound::transport::{HttpRequest, HttpResponse, HttpTransport};

/// A transport that replays queued results and records every request.
///
/// Clones share state, so a test can keep one handle for assertions while
/// the client owns another. Once the queue is exhausted every call fails
/// with a transport error.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    results: Arc<Mutex<VecDeque<Result<HttpResponse, ClientError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, response: HttpResponse) -> Self {
        self.results.lock().push_back(Ok(response));
        self
    }

    pub fn with_error(self, error: ClientError) -> Self {
        self.results.lock().push_back(Err(error));
        self
    }

    /// Requests seen so far, in order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        self.requests.lock().push(request);
        self.results
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Transport("no scripted response left".into())))
    }
}
