//! gamescout-recall
//!
//! The hybrid retrieval core: two-way recall merging (`merge`), search
//! orchestration over the collaborator seams (`orchestrate`), and
//! per-candidate recommendation fan-out (`recommend`).

pub mod merge;
pub mod orchestrate;
pub mod recommend;

pub use merge::merge_recall;
pub use orchestrate::HybridRetriever;
pub use recommend::{build_prompt, recommend_candidates, Recommendation};
