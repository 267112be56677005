use async_trait::async_trait;

use gamescout_core::error::{Error, Result};
use gamescout_core::traits::RecommendationGenerator;

use crate::client::LlmClient;

/// `RecommendationGenerator` backed by a chat completion. The output is
/// opaque text; no parsing or validation happens here or downstream.
#[derive(Clone)]
pub struct LlmGenerator {
    client: LlmClient,
}

impl LlmGenerator {
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecommendationGenerator for LlmGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.client
            .chat(prompt)
            .await
            .map_err(|e| Error::GenerationUnavailable(e.to_string()))
    }
}
