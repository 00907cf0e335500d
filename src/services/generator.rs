//! Reminder message generation
//!
//! Gemini-backed text generation for one reminder at a time. The generator
//! owns its fallback: if the API answers but produces no usable text, a
//! stock reminder line goes out instead. A transport or API failure is a
//! generation failure and the caller's pipeline stops there.

use crate::features::tones::ReminderPrompt;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use log::{debug, warn};
use regex::Regex;
use std::sync::OnceLock;
use uuid::Uuid;

static LABEL_PREFIX: OnceLock<Regex> = OnceLock::new();

/// Strip wrapping quotes/whitespace and a leading "message:"/"reminder:"
/// label some models prepend despite instructions.
fn clean_generated_text(raw: &str) -> String {
    let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == '"' || c == '\'');
    let re = LABEL_PREFIX.get_or_init(|| Regex::new(r"(?i)^(message|reminder):\s*").unwrap());
    re.replace(trimmed, "").to_string()
}

/// Seam to the external message-generation service.
#[async_trait]
pub trait MessageGenerator: Send + Sync {
    /// Generate one reminder message in the given tone. Must tolerate an
    /// absent display name.
    async fn generate(
        &self,
        user_id: Uuid,
        tone: &str,
        display_name: Option<&str>,
    ) -> Result<String>;
}

/// Gemini `generateContent` implementation.
pub struct GeminiGenerator {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiGenerator {
    pub fn new(client: reqwest::Client, api_key: &str, model: &str) -> Self {
        Self {
            client,
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            self.model
        )
    }

    fn fallback_message(tone: &str, display_name: Option<&str>) -> String {
        format!(
            "Hey {}, it's time for some water! (This is your {} reminder style)",
            display_name.unwrap_or("there"),
            tone.to_lowercase()
        )
    }
}

#[async_trait]
impl MessageGenerator for GeminiGenerator {
    async fn generate(
        &self,
        user_id: Uuid,
        tone: &str,
        display_name: Option<&str>,
    ) -> Result<String> {
        let prompt = ReminderPrompt::new(tone)
            .with_display_name(display_name)
            .build();

        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": 0.75,
                "topK": 1,
                "topP": 1,
                "maxOutputTokens": 60,
            },
        });

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .with_context(|| format!("generation request failed to send for {user_id}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("generation API returned HTTP {status}: {body}"));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .context("generation API returned malformed JSON")?;
        let text = json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(clean_generated_text)
            .unwrap_or_default();

        if text.trim().is_empty() {
            warn!("generator produced no usable text for {user_id}, using fallback line");
            return Ok(Self::fallback_message(tone, display_name));
        }
        debug!("generated reminder for {user_id}: {text:?}");
        Ok(text)
    }
}
