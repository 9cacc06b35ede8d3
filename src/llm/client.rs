use crate::error::{ExtractorError, Result};
use crate::llm::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use reqwest::Client;

const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Temperature is pinned to zero so repeated runs over the same listing
/// produce the same extraction.
const COMPLETION_TEMPERATURE: f32 = 0.0;

#[derive(Clone)]
pub struct OpenRouterClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenRouterClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: OPENROUTER_BASE_URL.to_string(),
        }
    }

    /// Points the client at a different endpoint, e.g. a local test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sends a single-turn prompt and returns the first completion's text.
    pub async fn complete(&self, model: &str, prompt: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        let payload = ChatCompletionRequest {
            model: model.to_string(),
            messages: vec![ChatMessage::user(prompt)],
            temperature: COMPLETION_TEMPERATURE,
        };

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(ExtractorError::Api { status, body });
        }

        let body: ChatCompletionResponse = res.json().await?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                ExtractorError::MalformedResponse("no choices in completion response".to_string())
            })
    }
}
