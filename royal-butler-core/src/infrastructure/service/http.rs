//! HTTP answer service

use super::traits::AnswerService;
use super::types::{AnswerError, AnswerRequest, AnswerResponse};
use crate::config::ButlerConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

/// Posts each question as JSON to a single endpoint.
#[derive(Clone)]
pub struct HttpAnswerService {
    endpoint: String,
    api_key: Option<String>,
    http: Client,
}

impl HttpAnswerService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: None,
            http: Client::new(),
        }
    }

    /// Creates the service from loaded configuration.
    pub fn from_config(config: &ButlerConfig) -> Self {
        let service = Self::new(config.endpoint.clone());
        match config.api_key() {
            Some(key) => service.with_api_key(key),
            None => service,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn bearer(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }
}

#[async_trait]
impl AnswerService for HttpAnswerService {
    async fn ask(&self, request: AnswerRequest) -> Result<AnswerResponse, AnswerError> {
        info!(
            endpoint = self.endpoint.as_str(),
            has_session = request.session_id.is_some(),
            "Sending question to answer service"
        );

        let mut builder = self.http.post(&self.endpoint).json(&request);
        if let Some(key) = self.bearer() {
            builder = builder.header("Authorization", format!("Bearer {key}"));
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AnswerError::network(&self.endpoint, e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AnswerError::network(&self.endpoint, e))?;

        if !status.is_success() {
            debug!(status = status.as_u16(), body = body.as_str(), "Answer service error body");
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message);
            return Err(AnswerError::remote(Some(status.as_u16()), message));
        }

        debug!(body = body.as_str(), "Received answer service reply");
        serde_json::from_str(&body).map_err(|e| AnswerError::invalid_response(e.to_string()))
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}
