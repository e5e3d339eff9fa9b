// src/web/api.rs
// REST API handlers

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::TimecallError;
use crate::llm::{ChatTurn, GeminiClient};
use crate::web::state::AppState;

/// Request body for the ask endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub character_id: Option<String>,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub reply: String,
}

/// Text question endpoint backed by Gemini.
///
/// POST /api/ask
///
/// Expects JSON of the form:
/// {
///     "message": "...",            // required
///     "character_id": "einstein",  // optional, defaults per config
///     "history": [                 // optional list of {role, content}
///         {"role": "user", "content": "Hi"},
///         {"role": "assistant", "content": "Hello"}
///     ]
/// }
pub async fn ask(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AskResponse>, TimecallError> {
    // A missing or unparseable body becomes an empty request, so the caller
    // gets the useful "message is required" answer instead of a serde error.
    let req: AskRequest = serde_json::from_slice(&body).unwrap_or_default();

    let message = req.message.as_deref().unwrap_or("").trim();
    if message.is_empty() {
        return Err(TimecallError::InvalidInput(
            "message is required".to_string(),
        ));
    }

    let character_id = req
        .character_id
        .as_deref()
        .unwrap_or(&state.config.default_character);
    let character = state.roster.lookup(character_id).ok_or_else(|| {
        TimecallError::InvalidInput(format!("unknown character_id '{}'", character_id))
    })?;

    let client = GeminiClient::new(state.http.clone(), &state.config)?;
    let reply = client
        .generate_reply(character, &req.history, message)
        .await?;

    Ok(Json(AskResponse { reply }))
}

/// Roster listing for the frontend character picker. Presentation fields
/// only; steering prompts stay server-side.
///
/// GET /api/characters
pub async fn list_characters(State(state): State<AppState>) -> impl IntoResponse {
    let characters: Vec<serde_json::Value> = state
        .roster
        .list_all()
        .iter()
        .map(|c| {
            serde_json::json!({
                "id": c.id,
                "name": c.name,
                "short_bio": c.short_bio,
                "avatar_video_url": c.avatar_video_url,
                "avatar_image_url": c.avatar_image_url,
                "voice_description": c.voice_description,
            })
        })
        .collect();

    Json(serde_json::json!({ "characters": characters }))
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

impl IntoResponse for TimecallError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            TimecallError::InvalidInput(msg) => {
                (StatusCode::BAD_REQUEST, serde_json::json!({ "error": msg }))
            }
            // Operator problem: log the detail, keep the response generic.
            TimecallError::Config(detail) => {
                error!("Gemini configuration error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({
                        "error": "text generation is not configured on this server"
                    }),
                )
            }
            other => {
                error!("Gemini generation failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({
                        "error": "Failed to generate response from Gemini",
                        "details": other.to_string(),
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
