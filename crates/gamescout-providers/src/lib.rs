//! gamescout-providers
//!
//! LLM-backed collaborators over an OpenAI-compatible HTTP API: embedding,
//! query translation, and recommendation generation, plus the cosmetic
//! display-asset fetch. Timeout policy lives here, at the external-call
//! boundary.

pub mod assets;
pub mod client;
pub mod embeddings;
pub mod generate;
pub mod translate;

pub use assets::fetch_asset;
pub use client::LlmClient;
pub use embeddings::LlmEmbedder;
pub use generate::LlmGenerator;
pub use translate::LlmTranslator;
