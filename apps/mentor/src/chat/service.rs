//! Chat completion service seam and its HTTP implementation.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::models::chat::{ChatReply, ChatRequest, ChatResponseBody};

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unreadable chat response (status {status}): {message}")]
    Malformed { status: u16, message: String },

    #[error("Chat response carried neither a reply nor an error")]
    EmptyResponse,
}

/// Anything that can answer a transcript with a reply.
#[async_trait]
pub trait ChatService: Send + Sync {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatReply, ChatError>;
}

/// Talks to a `POST /chat` endpoint.
#[derive(Clone)]
pub struct HttpChatService {
    client: Client,
    endpoint: String,
}

impl HttpChatService {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ChatError> {
        Ok(Self {
            client: Client::builder().build()?,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl ChatService for HttpChatService {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatReply, ChatError> {
        let response = self.client.post(&self.endpoint).json(request).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(status, messages = request.messages.len(), "Chat endpoint answered");

        // Error answers arrive with non-2xx statuses but still carry the JSON body.
        let parsed: ChatResponseBody =
            serde_json::from_str(&body).map_err(|e| ChatError::Malformed {
                status,
                message: e.to_string(),
            })?;

        parsed.into_reply().ok_or(ChatError::EmptyResponse)
    }
}
