use async_trait::async_trait;

use gamescout_core::error::{Error, Result};
use gamescout_core::traits::EmbeddingProvider;

use crate::client::LlmClient;

/// `EmbeddingProvider` backed by the `/v1/embeddings` endpoint. The
/// dimensionality is fixed by configuration; a response of any other width
/// is treated as a provider failure.
#[derive(Clone)]
pub struct LlmEmbedder {
    client: LlmClient,
}

impl LlmEmbedder {
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EmbeddingProvider for LlmEmbedder {
    fn dim(&self) -> usize {
        self.client.config().embedding_dim
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let vector = self
            .client
            .embed_raw(text)
            .await
            .map_err(|e| Error::EmbeddingUnavailable(e.to_string()))?;
        if vector.len() != self.dim() {
            return Err(Error::EmbeddingUnavailable(format!(
                "provider returned dimension {}, expected {}",
                vector.len(),
                self.dim()
            )));
        }
        Ok(vector)
    }
}
