use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::ApiError;
use crate::handlers::{handle_demo, handle_translate};
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/translate", post(handle_translate))
        .route("/demo", get(handle_demo))
        // Health check
        .route("/api/health", get(health_check))
        .route("/api/languages", get(get_languages))
        .fallback(not_found)
}

/// Routes plus the HTTP middleware stack, ready to serve
pub fn build_app(state: AppState) -> Router {
    create_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn get_languages(State(state): State<AppState>) -> Json<Value> {
    let translator = &state.config.translator_config;
    Json(json!({
        "languages": translator.languages,
        "default_source_language": translator.default_source_language,
    }))
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
