//! Axum route handler for the Chat API.

use axum::{
    body::Body,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use futures::StreamExt;
use tracing::info;

use crate::bio::form::BioRequest;
use crate::bio::prompts::render_bio_prompt;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/chat
///
/// Validates the five form fields, renders the fixed prompt and relays the
/// upstream token stream as a chunked plain-text body. The first bytes go out
/// as soon as the upstream produces them; the reply is never buffered. An
/// upstream refusal before the first token becomes a non-streaming error
/// response.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<BioRequest>,
) -> Result<Response, AppError> {
    if let Err(errors) = request.validate() {
        let message = errors
            .iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join(", ");
        return Err(AppError::Validation(message));
    }

    let prompt = render_bio_prompt(&request);
    info!(
        "Generating bios: industry={:?}, job_title={:?}, prompt_len={}",
        request.industry,
        request.job_title,
        prompt.len()
    );

    let tokens = state.backend.stream_chat(&prompt).await?;
    let body = Body::from_stream(tokens.map(|token| token.map(Bytes::from)));

    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response())
}
