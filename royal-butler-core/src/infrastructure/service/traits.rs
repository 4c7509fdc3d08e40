//! Answer service trait

use super::types::{AnswerError, AnswerRequest, AnswerResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// Remote capability that answers one user message at a time.
///
/// Implementations are injected into [`ChatWidget`](crate::ChatWidget), so
/// tests can substitute a double for the network.
#[async_trait]
pub trait AnswerService: Send + Sync {
    /// Send the user's message with the current session token, if any
    async fn ask(&self, request: AnswerRequest) -> Result<AnswerResponse, AnswerError>;
}

#[async_trait]
impl<T: AnswerService + ?Sized> AnswerService for Arc<T> {
    async fn ask(&self, request: AnswerRequest) -> Result<AnswerResponse, AnswerError> {
        (**self).ask(request).await
    }
}
