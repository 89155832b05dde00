pub mod health;
pub mod page;

use axum::{
    routing::{get, post},
    Router,
};

use crate::bio::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::page_handler))
        .route("/health", get(health::health_handler))
        .route("/api/chat", post(handlers::handle_chat))
        .with_state(state)
}
