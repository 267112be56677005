//! Search orchestration: fan out to both retrieval branches, apply the
//! branch-failure policy, hand the surviving hit lists to the merger.

use tracing::{debug, warn};

use gamescout_core::config::{BranchFailurePolicy, RecallConfig};
use gamescout_core::error::{Error, Result};
use gamescout_core::traits::{EmbeddingProvider, LexicalIndex, TranslationProvider, VectorIndex};
use gamescout_core::types::{LexicalHit, MergedResult, Query, VectorHit};

use crate::merge::merge_recall;

/// Orchestrates one retrieval request over explicitly owned collaborator
/// handles. Holds no per-request state; safe to share across concurrent
/// queries.
pub struct HybridRetriever<T, E, L, V> {
    translator: T,
    embedder: E,
    lexical: L,
    vector: V,
    settings: RecallConfig,
}

impl<T, E, L, V> HybridRetriever<T, E, L, V>
where
    T: TranslationProvider,
    E: EmbeddingProvider,
    L: LexicalIndex,
    V: VectorIndex,
{
    pub fn new(translator: T, embedder: E, lexical: L, vector: V, settings: RecallConfig) -> Self {
        Self { translator, embedder, lexical, vector, settings }
    }

    /// Run both search branches and merge their hits.
    ///
    /// The branches have no data dependency on each other and run
    /// concurrently; dropping the returned future abandons both in-flight
    /// calls. The merge never sees a partial branch unless the configured
    /// policy explicitly allows degrading to the surviving side.
    pub async fn retrieve(&self, raw_query: &str) -> Result<MergedResult> {
        let query = Query::new(raw_query)?;

        let (lexical_hits, vector_hits) =
            futures::join!(self.lexical_branch(&query), self.vector_branch(&query));

        match (lexical_hits, vector_hits) {
            (Ok(lex), Ok(vec)) => {
                debug!(lexical = lex.len(), vector = vec.len(), "both branches returned");
                Ok(merge_recall(&lex, &vec, self.settings.cap))
            }
            (Ok(lex), Err(e)) if self.degraded_allowed() => {
                warn!(error = %e, "vector branch failed, merging lexical hits only");
                Ok(merge_recall(&lex, &[], self.settings.cap))
            }
            (Err(e), Ok(vec)) if self.degraded_allowed() => {
                warn!(error = %e, "lexical branch failed, merging vector hits only");
                Ok(merge_recall(&[], &vec, self.settings.cap))
            }
            (Ok(_), Err(e)) | (Err(e), Ok(_)) => Err(e),
            (Err(lex_err), Err(vec_err)) => Err(Error::RetrievalUnavailable(format!(
                "both search branches failed: {lex_err}; {vec_err}"
            ))),
        }
    }

    /// Translate the query into the lexical index's working language, then
    /// run the full-text search. Hits arrive in the index's descending
    /// relevance order and are not re-ranked.
    async fn lexical_branch(&self, query: &Query) -> Result<Vec<LexicalHit>> {
        let translated = self
            .translator
            .translate(query.as_str(), &self.settings.target_language)
            .await?;
        self.lexical
            .text_search(&translated, self.settings.lexical_k)
            .await
    }

    /// Embed the original (untranslated) query text, then run k-NN search.
    /// Hits arrive in the index's ascending distance order.
    async fn vector_branch(&self, query: &Query) -> Result<Vec<VectorHit>> {
        let embedding = self.embedder.embed(query.as_str()).await?;
        self.vector
            .knn_search(&embedding, self.settings.knn_k, self.settings.metric)
            .await
    }

    fn degraded_allowed(&self) -> bool {
        self.settings.on_branch_failure == BranchFailurePolicy::Degrade
    }
}
