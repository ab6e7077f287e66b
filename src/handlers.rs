use axum::{body::Bytes, extract::State, response::Html, Json};
use serde_json::{Map, Value};
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::demo::render_demo_page;
use crate::error::ApiError;
use crate::state::AppState;
use crate::translate::{LanguageSelection, TranslateError, TranslationRequest, TranslationResult};

/// Text fields accepted by `/translate`, in order of preference
const TEXT_FIELDS: [&str; 2] = ["source_text", "english_text"];

fn text_field(object: &Map<String, Value>) -> Option<&str> {
    TEXT_FIELDS
        .iter()
        .find_map(|key| object.get(*key).and_then(Value::as_str))
}

/// Validate a `/translate` payload without touching the network
pub fn parse_translation_request(
    payload: &Value,
    require_source_language: bool,
) -> Result<TranslationRequest, ApiError> {
    let object = payload.as_object().ok_or(ApiError::InvalidJson)?;

    let target = LanguageSelection::from_field(object.get("target_language"));
    let source = LanguageSelection::from_field(object.get("source_language"));
    let two_language = require_source_language || object.contains_key("source_language");

    if two_language && (source.is_unselected() || target.is_unselected()) {
        return Err(ApiError::LanguageNotSelected);
    }

    let text = text_field(object)
        .filter(|text| !text.trim().is_empty())
        .ok_or(ApiError::InvalidInput)?;
    let target_language = target.into_selected().ok_or(ApiError::InvalidInput)?;
    let source_language = source.into_selected();
    if two_language && source_language.is_none() {
        return Err(ApiError::InvalidInput);
    }

    Ok(TranslationRequest {
        text: text.to_string(),
        source_language,
        target_language,
    })
}

/// POST /translate
pub async fn handle_translate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TranslationResult>, ApiError> {
    let payload: Value = serde_json::from_slice(&body).map_err(|_| {
        warn!("Rejected translate request: body is not valid JSON");
        ApiError::InvalidJson
    })?;

    let request = parse_translation_request(
        &payload,
        state.config.translator_config.require_source_language,
    )
    .map_err(|e| {
        warn!("Rejected translate request: {}", e);
        e
    })?;

    let span = info_span!(
        "translate",
        request_id = %Uuid::new_v4(),
        source = request.source_language.as_deref().unwrap_or("default"),
        target = %request.target_language,
        text_chars = request.text.chars().count(),
    );

    async move {
        let translated = state
            .translator
            .translate(
                &request.text,
                &request.target_language,
                request.source_language.as_deref(),
            )
            .await
            .map_err(|e| {
                match &e {
                    TranslateError::InvalidInput(reason) => {
                        warn!("Translator rejected input: {}", reason)
                    }
                    TranslateError::Upstream(upstream) => {
                        error!("Translation failed: {}", upstream)
                    }
                }
                ApiError::from(e)
            })?;

        info!("Translation completed ({} chars)", translated.chars().count());
        Ok::<_, ApiError>(Json(TranslationResult {
            original: request.text,
            translated,
            target_language: request.target_language,
            source_language: request.source_language,
        }))
    }
    .instrument(span)
    .await
}

/// GET /demo
pub async fn handle_demo(State(state): State<AppState>) -> Html<String> {
    Html(render_demo_page(&state.config.translator_config))
}
