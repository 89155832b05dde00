#![allow(dead_code)]

//! Form Controller — the native client for the chat endpoint.
//!
//! Owns the single in-flight Generated Text buffer for one page view:
//! validates the form, submits it, appends each arriving chunk, and splits
//! the frozen text into bio cards on completion. The browser page carries the
//! same contract in JS; this type is the crate's testable rendition of it.

use futures::StreamExt;
use thiserror::Error;
use tracing::debug;

use crate::bio::form::{BioRequest, FieldError};
use crate::bio::splitter::{BioSplitter, MarkerSplitter};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("gateway rejected the request (status {status}): {message}")]
    Gateway { status: u16, message: String },

    #[error("stream ended abnormally mid-transfer")]
    StreamInterrupted(#[source] reqwest::Error),

    #[error("request was superseded by a newer submission")]
    Superseded,
}

/// Lifecycle of one page view's request flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Streaming,
    Complete,
    Error,
}

/// Identifies one submission. Callbacks carrying a stale ticket are ignored,
/// which keeps a superseded request's tokens out of the current buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// One page view's form session. There is exactly one producer (the active
/// stream) and one consumer (the renderer), serialized on the async runtime.
pub struct BioSession {
    endpoint: String,
    http: reqwest::Client,
    splitter: Box<dyn BioSplitter>,
    phase: Phase,
    buffer: String,
    generation: u64,
}

impl BioSession {
    /// `endpoint` is the full URL of the chat route, e.g.
    /// `http://localhost:8080/api/chat`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_splitter(endpoint, Box::new(MarkerSplitter))
    }

    pub fn with_splitter(endpoint: impl Into<String>, splitter: Box<dyn BioSplitter>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
            splitter,
            phase: Phase::Idle,
            buffer: String::new(),
            generation: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The partial or final generated text of the current submission.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Validates and submits the form, consuming the chunked response
    /// incrementally. Returns the split bios once the stream completes.
    /// Submission does not occur when validation fails.
    pub async fn submit(&mut self, request: &BioRequest) -> Result<Vec<String>, ClientError> {
        request.validate().map_err(ClientError::Validation)?;

        let ticket = self.begin();

        let response = match self.http.post(&self.endpoint).json(request).send().await {
            Ok(r) => r,
            Err(e) => {
                self.on_error(ticket);
                return Err(ClientError::Request(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            self.on_error(ticket);
            return Err(ClientError::Gateway {
                status: status.as_u16(),
                message,
            });
        }

        let mut chunks = response.bytes_stream();
        while let Some(chunk) = chunks.next().await {
            match chunk {
                Ok(bytes) => {
                    self.on_token(ticket, &String::from_utf8_lossy(&bytes));
                }
                Err(e) => {
                    self.on_error(ticket);
                    return Err(ClientError::StreamInterrupted(e));
                }
            }
        }

        self.on_complete(ticket).ok_or(ClientError::Superseded)
    }

    /// Starts a new submission, superseding any in-flight one. The old
    /// submission's response is dropped (which aborts its transfer); any
    /// tokens it already produced fail the ticket check below.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.buffer.clear();
        self.phase = Phase::Submitting;
        Ticket(self.generation)
    }

    /// Appends one arriving chunk and reports whether it was accepted.
    /// Stale tickets append nothing.
    pub fn on_token(&mut self, ticket: Ticket, chunk: &str) -> bool {
        if !self.is_current(ticket) {
            debug!("Dropping {} bytes from a superseded stream", chunk.len());
            return false;
        }
        self.phase = Phase::Streaming;
        self.buffer.push_str(chunk);
        true
    }

    /// Freezes the buffer and splits it into bios. `None` when superseded.
    pub fn on_complete(&mut self, ticket: Ticket) -> Option<Vec<String>> {
        if !self.is_current(ticket) {
            return None;
        }
        self.phase = Phase::Complete;
        Some(self.splitter.split(&self.buffer))
    }

    /// Discards the partial text — the split step never runs on incomplete
    /// text. A stale ticket leaves the current submission untouched.
    pub fn on_error(&mut self, ticket: Ticket) {
        if !self.is_current(ticket) {
            return;
        }
        self.phase = Phase::Error;
        self.buffer.clear();
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }
}
