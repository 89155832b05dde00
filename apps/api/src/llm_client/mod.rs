/// LLM Client — the single point of entry for all completion-API calls in Bioline.
///
/// ARCHITECTURAL RULE: No other module may call the OpenAI API directly.
/// All completion interactions MUST go through this module.
///
/// Model: gpt-3.5-turbo-0613 (hardcoded — do not make configurable to prevent drift)
use std::pin::Pin;

use async_trait::async_trait;
use futures::{Stream, StreamExt};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tracing::{debug, warn};

pub mod stream;

use stream::{SseDecoder, SseEvent};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// The model used for all completion calls in Bioline.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gpt-3.5-turbo-0613";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// A finite, lazy sequence of decoded text tokens. Not restartable.
pub type TokenStream = Pin<Box<dyn Stream<Item = Result<String, LlmError>> + Send>>;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    stream: bool,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

/// The seam between route handlers and the external completion API.
/// Production uses `OpenAiClient`; tests inject a stub.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Requests a streamed completion for a single `user` message and returns
    /// the decoded token stream. Fails without streaming when the upstream
    /// call is rejected before any token arrives. Not retried.
    async fn stream_chat(&self, prompt: &str) -> Result<TokenStream, LlmError>;
}

/// The completion client used by the chat route.
/// Wraps the OpenAI chat-completions API in streaming mode.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl CompletionBackend for OpenAiClient {
    async fn stream_chat(&self, prompt: &str) -> Result<TokenStream, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            stream: true,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse error message
            let message = serde_json::from_str::<OpenAiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!("Completion call accepted, relaying token stream");

        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        let mut upstream = response.bytes_stream();

        tokio::spawn(async move {
            let mut decoder = SseDecoder::new();
            let mut tokens_relayed = 0usize;

            while let Some(chunk) = upstream.next().await {
                let bytes = match chunk {
                    Ok(b) => b,
                    Err(e) => {
                        warn!("Completion stream aborted mid-transfer: {e}");
                        let _ = tx.send(Err(LlmError::Http(e)));
                        return;
                    }
                };

                for event in decoder.feed(&bytes) {
                    match event {
                        SseEvent::Token(token) => {
                            tokens_relayed += 1;
                            if tx.send(Ok(token)).is_err() {
                                // Receiver dropped — the request was superseded
                                // or the client disconnected.
                                return;
                            }
                        }
                        SseEvent::Done => {
                            debug!("Completion stream finished: {tokens_relayed} tokens");
                            return;
                        }
                    }
                }
            }

            debug!("Completion stream closed by upstream: {tokens_relayed} tokens");
        });

        Ok(Box::pin(UnboundedReceiverStream::new(rx)))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_wire_shape() {
        let request = ChatRequest {
            model: MODEL,
            stream: true,
            messages: vec![ChatMessage {
                role: "user",
                content: "Write me a bio",
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-3.5-turbo-0613");
        assert_eq!(value["stream"], true);
        assert_eq!(value["messages"].as_array().unwrap().len(), 1);
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "Write me a bio");
    }

    #[test]
    fn test_openai_error_body_parses() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
        let parsed: OpenAiError = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message, "Incorrect API key provided");
    }
}
