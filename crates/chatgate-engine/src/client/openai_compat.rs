use anyhow::Result;
use serde::Deserialize;

use crate::client::ChatMessage;

/// One OpenAI-compatible upstream (llama.cpp server, vLLM, a hosted
/// API behind a proxy, ...), named so completions can be attributed
/// to it.
pub struct OpenAiCompatBackend {
    name: String,
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct UpstreamResponse {
    #[serde(default)]
    choices: Vec<UpstreamChoice>,
}

#[derive(Debug, Deserialize)]
struct UpstreamChoice {
    message: UpstreamMessage,
}

#[derive(Debug, Deserialize)]
struct UpstreamMessage {
    #[serde(default)]
    content: String,
}

impl OpenAiCompatBackend {
    pub fn new(name: impl Into<String>, base_url: impl Into<String>) -> Self {
        // Ensure base_url doesn't end with a slash
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            name: name.into(),
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn chat_completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    /// POST a completion request and extract the first choice's text
    pub async fn chat_completion(&self, model_id: &str, messages: &[ChatMessage]) -> Result<String> {
        let request = serde_json::json!({
            "model": model_id,
            "messages": messages,
        });

        let response = self
            .client
            .post(self.chat_completions_url())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "{} API error: {} - {}",
                self.name,
                status,
                error_text
            ));
        }

        let body: UpstreamResponse = response.json().await?;
        match body.choices.into_iter().next() {
            Some(choice) => Ok(choice.message.content),
            None => Err(anyhow::anyhow!("{}: no choices in response", self.name)),
        }
    }
}
