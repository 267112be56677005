//! gamescout-text
//!
//! Tantivy-based lexical indexing and search over the game corpus. The
//! writer is used by offline ingestion; `TantivyLexicalIndex` implements
//! the `LexicalIndex` seam consumed by the retrieval core.

pub mod index;
pub mod schema;
pub mod search;

pub use index::LexicalIndexWriter;
pub use search::TantivyLexicalIndex;
