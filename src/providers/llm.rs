use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProspectError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[async_trait]
pub trait LLMProvider: Send + Sync {
    async fn complete(&self, messages: Vec<Message>) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct GeminiProvider {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    prompt_feedback: Option<GeminiPromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl GeminiProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn build_request(messages: Vec<Message>) -> GeminiRequest {
        let contents = messages
            .into_iter()
            .map(|message| GeminiContent {
                role: Some(message.role),
                parts: vec![GeminiPart {
                    text: Some(message.content),
                }],
            })
            .collect();

        GeminiRequest { contents }
    }
}

fn response_text(response: GeminiResponse) -> Result<String> {
    if let Some(reason) = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        anyhow::bail!("Prompt blocked: {}", reason);
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("No candidates in Gemini response"))?;

    let text: String = candidate
        .content
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|part| part.text)
        .collect();

    if text.is_empty() {
        anyhow::bail!("No text in Gemini response");
    }

    Ok(text)
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    async fn complete(&self, messages: Vec<Message>) -> Result<String> {
        let request = Self::build_request(messages);

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.map_err(reqwest::Error::without_url)?;
            return Err(ProspectError::GenerativeApi { status, body }.into());
        }

        let result: GeminiResponse = response
            .json()
            .await
            .map_err(reqwest::Error::without_url)?;
        response_text(result)
    }
}

// Mock provider for testing
pub struct MockLLMProvider {
    response: Result<String, String>,
}

impl MockLLMProvider {
    pub fn new() -> Self {
        Self {
            response: Ok("Mock summary".to_string()),
        }
    }

    pub fn with_response(response: String) -> Self {
        Self {
            response: Ok(response),
        }
    }

    pub fn failing(error: impl Into<String>) -> Self {
        Self {
            response: Err(error.into()),
        }
    }
}

impl Default for MockLLMProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LLMProvider for MockLLMProvider {
    async fn complete(&self, _messages: Vec<Message>) -> Result<String> {
        self.response.clone().map_err(|e| anyhow::anyhow!(e))
    }
}
