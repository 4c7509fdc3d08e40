//! Answer service doubles shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use royal_butler_core::{AnswerError, AnswerRequest, AnswerResponse, AnswerService};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use tokio::sync::oneshot;

pub type Reply = Result<AnswerResponse, AnswerError>;

/// Answers from a queue, in order, and records every request.
#[derive(Default)]
pub struct ScriptedService {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<AnswerRequest>>,
}

impl ScriptedService {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<AnswerRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnswerService for ScriptedService {
    async fn ask(&self, request: AnswerRequest) -> Result<AnswerResponse, AnswerError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AnswerError::invalid_response("script exhausted")))
    }
}

/// Holds each request until the test releases the reply for its message.
#[derive(Default)]
pub struct GatedService {
    gates: Mutex<HashMap<String, oneshot::Receiver<Reply>>>,
    requests: Mutex<Vec<AnswerRequest>>,
}

impl GatedService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a gate for `message`; send on the returned sender to release it.
    pub fn gate(&self, message: &str) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(message.to_string(), rx);
        tx
    }

    pub fn requests(&self) -> Vec<AnswerRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnswerService for GatedService {
    async fn ask(&self, request: AnswerRequest) -> Result<AnswerResponse, AnswerError> {
        let gate = self.gates.lock().unwrap().remove(&request.user_message);
        self.requests.lock().unwrap().push(request);
        match gate {
            Some(gate) => gate
                .await
                .unwrap_or_else(|_| Err(AnswerError::invalid_response("gate dropped"))),
            None => Err(AnswerError::invalid_response("no gate registered")),
        }
    }
}

/// Yield until `service` has seen `count` requests.
pub async fn wait_for_requests(service: &GatedService, count: usize) {
    while service.requests().len() < count {
        tokio::task::yield_now().await;
    }
}
