//! Gateway to the Gemini generateContent API.
//!
//! Both public calls absorb every failure: `converse` always hands back a
//! displayable string and `daily_verse` degrades to `None`. Nothing past this
//! boundary ever sees a transport or parse error.

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;

use crate::chat::{ChatRole, ChatTurn};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Shown when the model answers with empty text.
pub const EMPTY_REPLY: &str = "দুঃখিত, আমি এই মুহূর্তে উত্তর দিতে পারছি না।";
/// Shown when the request itself fails.
pub const FAILURE_REPLY: &str = "একটি ত্রুটি ঘটেছে। অনুগ্রহ করে আবার চেষ্টা করুন।";

const SYSTEM_INSTRUCTION: &str = "You are a helpful and respectful Islamic Scholar Assistant named 'Nur AI'. \
Provide accurate information based on the Quran and authentic Hadith. \
Always respond in Bengali. \
If a question is not related to Islam, politely redirect the conversation. \
Keep answers concise and educational.";

const VERSE_PROMPT: &str =
    "একটি অনুপ্রেরণামূলক কুরআনের আয়াত এবং তার অর্থ বাংলা ও আরবিতে দাও। সাথে একটি ছোট ব্যাখ্যাও দিও।";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<Value>,
}

#[derive(Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

impl Content {
    fn user(text: &str) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }

    fn system(text: &str) -> Self {
        Self {
            role: None,
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }

    fn from_turn(turn: &ChatTurn) -> Self {
        let role = match turn.role {
            ChatRole::User => "user",
            ChatRole::Assistant => "model",
        };
        Self {
            role: Some(role.to_string()),
            parts: vec![Part {
                text: turn.text.clone(),
            }],
        }
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

/// The daily-verse card. All four fields are required, so deserialization
/// never yields a partially populated record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerseRecord {
    pub arabic: String,
    pub bengali: String,
    pub reference: String,
    pub explanation: String,
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: &str, model: &str) -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key, model)
    }

    pub fn with_base_url(base_url: &str, api_key: &str, model: &str) -> Result<Self> {
        // A stalled request resolves to fallback text instead of leaving the
        // session pending forever.
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }

    /// Send the conversation so far plus a new user message and return the
    /// model's reply, or a fixed Bengali fallback string on any failure.
    pub async fn converse(&self, history: &[ChatTurn], message: &str) -> String {
        match self.send_chat(history, message).await {
            Ok(text) if text.trim().is_empty() => {
                log::warn!("model returned an empty reply");
                EMPTY_REPLY.to_string()
            }
            Ok(text) => text,
            Err(err) => {
                log::warn!("chat request failed: {err:#}");
                FAILURE_REPLY.to_string()
            }
        }
    }

    /// Fetch the daily verse as a schema-constrained JSON record. Any
    /// failure, including a record with a missing field, yields `None`.
    pub async fn daily_verse(&self) -> Option<VerseRecord> {
        match self.send_verse().await {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!("daily verse request failed: {err:#}");
                None
            }
        }
    }

    async fn send_chat(&self, history: &[ChatTurn], message: &str) -> Result<String> {
        let mut contents: Vec<Content> = history.iter().map(Content::from_turn).collect();
        contents.push(Content::user(message));

        let request = GenerateRequest {
            contents,
            system_instruction: Some(Content::system(SYSTEM_INSTRUCTION)),
            generation_config: Some(json!({
                "temperature": 0.7,
                "topP": 0.95,
            })),
        };

        let response = self.generate(&request).await?;
        Ok(extract_text(&response))
    }

    async fn send_verse(&self) -> Result<VerseRecord> {
        let request = GenerateRequest {
            contents: vec![Content::user(VERSE_PROMPT)],
            system_instruction: None,
            generation_config: Some(json!({
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "arabic": { "type": "STRING" },
                        "bengali": { "type": "STRING" },
                        "reference": { "type": "STRING" },
                        "explanation": { "type": "STRING" }
                    },
                    "required": ["arabic", "bengali", "reference", "explanation"]
                },
            })),
        };

        let response = self.generate(&request).await?;
        parse_verse(&extract_text(&response))
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow!("Gemini API error {}: {}", status, text));
        }

        Ok(response.json().await?)
    }
}

fn extract_text(response: &GenerateResponse) -> String {
    response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .map(|p| p.text.as_str())
                .collect::<Vec<_>>()
                .concat()
        })
        .unwrap_or_default()
}

fn parse_verse(text: &str) -> Result<VerseRecord> {
    Ok(serde_json::from_str(text.trim())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_client() -> GeminiClient {
        // Nothing listens on the discard port, so requests fail immediately.
        GeminiClient::with_base_url("http://127.0.0.1:9", "test-key", DEFAULT_MODEL).unwrap()
    }

    #[tokio::test]
    async fn converse_absorbs_transport_errors() {
        let client = unreachable_client();
        let reply = client.converse(&[], "আসসালামু আলাইকুম").await;
        assert_eq!(reply, FAILURE_REPLY);
    }

    #[tokio::test]
    async fn daily_verse_absorbs_transport_errors() {
        let client = unreachable_client();
        assert_eq!(client.daily_verse().await, None);
    }

    #[test]
    fn parse_verse_accepts_a_complete_record() {
        let record = parse_verse(
            r#"{
                "arabic": "بِسْمِ اللَّهِ",
                "bengali": "আল্লাহর নামে",
                "reference": "সূরা ফাতিহা ১:১",
                "explanation": "শুরু করার দোয়া।"
            }"#,
        )
        .unwrap();
        assert_eq!(record.reference, "সূরা ফাতিহা ১:১");
    }

    #[test]
    fn parse_verse_rejects_a_missing_field() {
        let result = parse_verse(r#"{"arabic": "x", "bengali": "y", "reference": "z"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn parse_verse_rejects_non_json_output() {
        assert!(parse_verse("sorry, I cannot do that").is_err());
    }

    #[test]
    fn response_text_concatenates_parts() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    { "content": { "parts": [ {"text": "আস"}, {"text": "সালাম"} ], "role": "model" } }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(extract_text(&response), "আসসালাম");
    }

    #[test]
    fn response_without_candidates_yields_empty_text() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(extract_text(&response), "");
    }

    #[test]
    fn history_roles_map_to_wire_roles() {
        let assistant = Content::from_turn(&ChatTurn {
            role: ChatRole::Assistant,
            text: "reply".to_string(),
        });
        assert_eq!(assistant.role.as_deref(), Some("model"));

        let user = Content::from_turn(&ChatTurn {
            role: ChatRole::User,
            text: "hi".to_string(),
        });
        assert_eq!(user.role.as_deref(), Some("user"));
    }
}
