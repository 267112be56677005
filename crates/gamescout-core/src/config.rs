//! Layered configuration loader and path helpers.
//!
//! Figment merges `config.toml` + `config.<env>.toml` (selected by
//! `RUST_ENV`) + `GAMESCOUT_*` environment variables into the typed
//! sections below. `expand_path` expands `~` and `${VAR}` in the
//! user-provided paths.

use std::env;
use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::DistanceMetric;

/// What the orchestration does when exactly one search branch fails.
/// `Degrade` merges the surviving branch's hits with a warning; `Fail`
/// propagates the branch error. Partial results are opt-in, never silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchFailurePolicy {
    #[default]
    Fail,
    Degrade,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub corpus_file: String,
    pub lexical_index_dir: String,
    pub vector_index_dir: String,
    pub vector_table: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            corpus_file: "data/games.json".to_string(),
            lexical_index_dir: "data/indexes/tantivy".to_string(),
            vector_index_dir: "data/indexes/lancedb".to_string(),
            vector_table: "games".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub chat_model: String,
    pub embedding_model: String,
    pub embedding_dim: usize,
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            api_key: None,
            chat_model: "gpt-4o-mini".to_string(),
            embedding_model: "text-embedding-3-small".to_string(),
            embedding_dim: 1536,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RecallConfig {
    /// Maximum number of merged candidates surfaced per query.
    pub cap: usize,
    /// k for the k-NN query against the vector index.
    pub knn_k: usize,
    /// Result limit for the lexical query.
    pub lexical_k: usize,
    pub metric: DistanceMetric,
    /// Working language of the lexical index; queries are translated into it.
    pub target_language: String,
    pub on_branch_failure: BranchFailurePolicy,
}

impl Default for RecallConfig {
    fn default() -> Self {
        Self {
            cap: 2,
            knn_k: 2,
            lexical_k: 2,
            metric: DistanceMetric::Euclidean,
            target_language: "en".to_string(),
            on_branch_failure: BranchFailurePolicy::Fail,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data: DataConfig,
    pub provider: ProviderConfig,
    pub recall: RecallConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("GAMESCOUT_").split("__"));

        Self::from_figment(figment)
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        figment
            .extract()
            .map_err(|e| Error::InvalidConfig(e.to_string()))
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}
