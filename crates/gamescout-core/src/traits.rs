//! Collaborator interfaces consumed by the retrieval core.
//!
//! Transport and storage details stay behind these seams so the merge and
//! orchestration logic can be exercised with in-memory fakes.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{DistanceMetric, LexicalHit, VectorHit};

/// Converts text into a fixed-length embedding vector.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Dimensionality of every vector this provider returns.
    fn dim(&self) -> usize;

    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

/// Converts query text into the lexical index's working language.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String>;
}

/// k-nearest-neighbor search over stored embeddings. Hits come back sorted
/// ascending by distance.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    async fn knn_search(
        &self,
        query: &[f32],
        k: usize,
        metric: DistanceMetric,
    ) -> Result<Vec<VectorHit>>;
}

/// Full-text search over the corpus. Hits come back sorted descending by
/// relevance score.
#[async_trait]
pub trait LexicalIndex: Send + Sync {
    async fn text_search(&self, query: &str, k: usize) -> Result<Vec<LexicalHit>>;
}

/// Turns a prompt into opaque recommendation text. The core never parses or
/// validates the generated content.
#[async_trait]
pub trait RecommendationGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}
