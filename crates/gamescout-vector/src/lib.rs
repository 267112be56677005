//! gamescout-vector
//!
//! LanceDB-backed vector storage and k-NN search. The writer is used by
//! offline ingestion; `LanceVectorIndex` implements the `VectorIndex` seam
//! consumed by the retrieval core.

pub mod schema;
pub mod search;
pub mod writer;

pub use search::LanceVectorIndex;
pub use writer::VectorIndexWriter;
