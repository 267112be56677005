use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use gamescout_core::config::ProviderConfig;
use gamescout_core::error::{self, Error};

/// Shared HTTP client for the OpenAI-compatible endpoints. Cheap to clone;
/// the underlying connection pool is reused across the embedder, translator
/// and generator.
#[derive(Clone)]
pub struct LlmClient {
    http: reqwest::Client,
    config: ProviderConfig,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
}

#[derive(Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: Message,
}

#[derive(Serialize)]
struct EmbedRequest {
    model: String,
    input: Vec<String>,
}

#[derive(Deserialize)]
struct EmbedResponse {
    data: Vec<EmbedData>,
}

#[derive(Deserialize)]
struct EmbedData {
    embedding: Vec<f32>,
}

impl LlmClient {
    pub fn new(config: ProviderConfig) -> error::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::InvalidConfig(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// One-shot chat completion: a single user message in, the first
    /// choice's content out.
    pub(crate) async fn chat(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/v1/chat/completions", self.config.base_url);
        let request = ChatRequest {
            model: self.config.chat_model.clone(),
            messages: vec![Message { role: "user".to_string(), content: prompt.to_string() }],
        };

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key()))
            .json(&request)
            .send()
            .await
            .context("failed to call chat API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("chat API returned {status}: {body}");
        }

        let body: ChatResponse = response.json().await.context("failed to parse chat response")?;
        first_choice(body)
    }

    /// Embed a single text via `/v1/embeddings`.
    pub(crate) async fn embed_raw(&self, text: &str) -> Result<Vec<f32>> {
        let url = format!("{}/v1/embeddings", self.config.base_url);
        let request = EmbedRequest {
            model: self.config.embedding_model.clone(),
            input: vec![text.to_string()],
        };

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key()))
            .json(&request)
            .send()
            .await
            .context("failed to call embeddings API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("embeddings API returned {status}: {body}");
        }

        let body: EmbedResponse =
            response.json().await.context("failed to parse embeddings response")?;
        body.data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .context("embeddings response contained no data")
    }

    fn api_key(&self) -> &str {
        self.config.api_key.as_deref().unwrap_or_default()
    }
}

fn first_choice(response: ChatResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .context("chat response contained no choices")
}
