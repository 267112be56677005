//! Domain types shared by the retrieval branches and the merge step.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A validated free-text query in the user's own language.
///
/// Construction rejects empty or whitespace-only input so the invalid-query
/// case is caught before any provider or index is contacted. The derived
/// forms (translated text, embedding vector) are computed once per request
/// by the orchestration and never stored back here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidQuery("query text is empty".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A persisted corpus record, ingested once and never mutated.
///
/// `name` is the identity key: ingestion guarantees the same name is written
/// to both indexes for the same logical game, which is what makes
/// cross-source deduplication possible. `description_translated` carries an
/// optional second language variant of the descriptive text. The precomputed
/// embedding is not part of this struct; it lives only in the vector store
/// row alongside these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub description_translated: Option<String>,
    pub hardware: String,
    pub image_url: String,
}

/// A vector-index result. Lower distance is better; the index returns hits
/// already sorted ascending.
#[derive(Debug, Clone)]
pub struct VectorHit {
    pub record: GameRecord,
    pub distance: f32,
}

/// A lexical-index result. Higher score is better; the index returns hits
/// already sorted descending.
#[derive(Debug, Clone)]
pub struct LexicalHit {
    pub record: GameRecord,
    pub score: f32,
}

/// Which search path first surfaced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecallSource {
    Lexical,
    Vector,
}

/// A record that survived merging and deduplication, eligible for
/// recommendation generation.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub record: GameRecord,
    pub source: RecallSource,
}

/// The ordered outcome of one merge. Length is min(cap, distinct names seen
/// across both hit lists) and no two candidates share a name.
#[derive(Debug, Clone, Default)]
pub struct MergedResult {
    pub candidates: Vec<Candidate>,
}

impl MergedResult {
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.candidates.iter().map(|c| c.record.name.as_str()).collect()
    }
}

/// Distance metric for k-NN search. Scores under different metrics (and
/// lexical relevance scores) are never compared against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    #[default]
    Euclidean,
    Cosine,
    Dot,
}
