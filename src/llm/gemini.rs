// src/llm/gemini.rs
//! Character-steered chat replies via Gemini's generateContent API.
//!
//! One blocking round-trip per call: assemble the contents, post them,
//! pull the reply text back out. No retries, no streaming.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::characters::Character;
use crate::config::TimecallConfig;
use crate::error::{Result, TimecallError};
use crate::llm::ChatTurn;

/// Fallback voice note for characters without a voice description.
const GENERIC_VOICE: &str = "speak clearly and warmly.";

#[derive(Debug)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl GeminiClient {
    /// Build a client over the shared HTTP client.
    ///
    /// Fails when no API key is configured; that is an operator problem,
    /// reported before any request leaves the process.
    pub fn new(client: reqwest::Client, config: &TimecallConfig) -> Result<Self> {
        if config.gemini_api_key.is_empty() {
            return Err(TimecallError::Config(
                "GEMINI_API_KEY is not set. Set it in your environment before starting the server."
                    .to_string(),
            ));
        }

        Ok(Self {
            client,
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.gemini_timeout_secs),
        })
    }

    /// Generate a character-specific reply to `user_message`.
    ///
    /// `history` is the caller-supplied conversation so far; turns whose
    /// content trims to nothing are dropped. The message itself is assumed
    /// already validated non-empty by the caller.
    pub async fn generate_reply(
        &self,
        character: &Character,
        history: &[ChatTurn],
        user_message: &str,
    ) -> Result<String> {
        let api_request = GeminiRequest {
            contents: build_contents(character, history, user_message),
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&api_request)
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TimecallError::Generation(format!(
                "Gemini API error: {} - {}",
                status, body
            )));
        }

        let api_response: GeminiResponse = response.json().await?;

        if let Some(error) = api_response.error {
            return Err(TimecallError::Generation(format!(
                "Gemini error: {}",
                error.message
            )));
        }

        extract_reply(api_response)
    }
}

/// Map generic chat roles to Gemini roles. Anything that is not an
/// assistant turn counts as user input.
fn map_role(role: &str) -> &'static str {
    match role {
        "assistant" => "model",
        _ => "user",
    }
}

/// Fold the character definition into one instruction block.
fn steering_message(character: &Character) -> String {
    format!(
        "You are {}, appearing in a surreal but friendly video call. Stay strictly in \
         character. Bio: {}. Voice and style: {} Additional instructions: {}",
        character.name,
        character.short_bio,
        character
            .voice_description
            .as_deref()
            .unwrap_or(GENERIC_VOICE),
        character.system_prompt,
    )
}

/// Assemble the outbound contents: steering block first, filtered history
/// in original order, the new user message last.
///
/// The steering block goes out as a plain user turn rather than through
/// systemInstruction; not every backend has a native system role, and the
/// leading position carries the same weight.
fn build_contents(
    character: &Character,
    history: &[ChatTurn],
    user_message: &str,
) -> Vec<GeminiContent> {
    let mut contents = Vec::with_capacity(history.len() + 2);

    contents.push(GeminiContent {
        role: "user".to_string(),
        parts: vec![GeminiPart {
            text: steering_message(character),
        }],
    });

    for turn in history {
        let content = turn.content.trim();
        if content.is_empty() {
            continue;
        }
        contents.push(GeminiContent {
            role: map_role(&turn.role).to_string(),
            parts: vec![GeminiPart {
                text: content.to_string(),
            }],
        });
    }

    contents.push(GeminiContent {
        role: "user".to_string(),
        parts: vec![GeminiPart {
            text: user_message.to_string(),
        }],
    });

    contents
}

/// Pull the reply text out of a response: a direct text field wins, then
/// the first candidate's first part. Anything else is a failed generation.
fn extract_reply(response: GeminiResponse) -> Result<String> {
    if let Some(text) = &response.text {
        let text = text.trim();
        if !text.is_empty() {
            return Ok(text.to_string());
        }
    }

    let fallback = response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .and_then(|part| part.text);

    if let Some(text) = fallback {
        let text = text.trim();
        if !text.is_empty() {
            return Ok(text.to_string());
        }
    }

    Err(TimecallError::Generation(
        "Gemini response did not contain any text".to_string(),
    ))
}

// ============================================================================
// API Types
// ============================================================================

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Serialize, Clone, Debug)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
struct GeminiPart {
    text: String,
}

#[derive(Deserialize)]
struct GeminiResponse {
    text: Option<String>,
    candidates: Option<Vec<GeminiCandidate>>,
    error: Option<GeminiError>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiContentResponse,
}

#[derive(Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Deserialize)]
struct GeminiPartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct GeminiError {
    message: String,
}
