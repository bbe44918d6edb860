//! Request/response contract for the chat widget's text-generation call.
//!
//! Only the payload shapes and reply handling live here; the HTTP call itself
//! is made by the web frontend.

use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const EMPTY_REPLY: &str = "I'm sorry, I couldn't process that.";
pub const OFFLINE_REPLY: &str = "Systems offline. Please try again.";

/// Trimmed question, or `None` when there is nothing to send.
#[inline]
pub fn normalize_question(input: &str) -> Option<&str> {
    let q = input.trim();
    (!q.is_empty()).then_some(q)
}

pub fn build_prompt(persona: &str, resume_json: &str, question: &str) -> String {
    format!(
        "You are the AI persona of {persona}. Use this resume data: {resume_json}. \
         Be professional, futuristic, and helpful. \
         Answer the user's question based on this data. User: {question}"
    )
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct GenerationConfig {
    pub temperature: f32,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateRequest {
    pub fn new(prompt: String, temperature: f32) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig { temperature },
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Content,
}

/// Error object the service returns instead of candidates.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ServiceError {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub error: Option<ServiceError>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate, if it has any.
    pub fn text(&self) -> Option<String> {
        let text: String = self
            .candidates
            .first()?
            .content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

/// Turn a raw response body into the text shown to the user.
pub fn reply_from_body(body: &str) -> String {
    match serde_json::from_str::<GenerateResponse>(body) {
        Ok(GenerateResponse {
            error: Some(err), ..
        }) => {
            log::warn!("[chat] service error {:?}: {}", err.code, err.message);
            OFFLINE_REPLY.to_string()
        }
        Ok(resp) => resp.text().unwrap_or_else(|| EMPTY_REPLY.to_string()),
        Err(e) => {
            log::warn!("[chat] unreadable reply: {}", e);
            OFFLINE_REPLY.to_string()
        }
    }
}
