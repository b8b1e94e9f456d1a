use axum::{
    Router,
    routing::{get, post},
};
use chat::ResponseGateway;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod error;
pub mod handlers;
pub mod settings;
pub mod startup;

use handlers::chat::chat_message;
use handlers::health::health;

pub struct AppState {
    pub gateway: ResponseGateway,
}

pub fn get_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/chat", post(chat_message))
        .route("/chat/", post(chat_message))
        .route("/chat/health", get(health))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}
