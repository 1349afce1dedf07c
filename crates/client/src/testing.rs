//! In-process transport for contract tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::client::ConsoleClient;
use crate::error::ApiResult;
use crate::request::RawRequest;
use crate::transport::Transport;

/// Records every request and answers from a queue of canned replies
/// (`null` once the queue is empty).
#[derive(Default)]
pub(crate) struct RecordingTransport {
    calls: Mutex<Vec<RawRequest>>,
    replies: Mutex<VecDeque<ApiResult<Value>>>,
}

impl RecordingTransport {
    pub(crate) fn push_reply(&self, reply: ApiResult<Value>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub(crate) fn calls(&self) -> Vec<RawRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn last(&self) -> RawRequest {
        self.calls
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: &RawRequest, _request_id: Uuid) -> ApiResult<Value> {
        self.calls.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(Value::Null))
    }
}

/// Client whose next call is answered with `reply`.
pub(crate) fn client_replying(reply: ApiResult<Value>) -> ConsoleClient<RecordingTransport> {
    let transport = RecordingTransport::default();
    transport.push_reply(reply);
    ConsoleClient::with_transport(transport)
}
