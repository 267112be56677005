//! Per-candidate recommendation generation.
//!
//! Downstream consumer of the merge result. The generator's output is
//! opaque text; a failure for one candidate is captured in that
//! candidate's outcome and never discards the rest of the batch.

use tracing::warn;

use gamescout_core::error::Result;
use gamescout_core::traits::RecommendationGenerator;
use gamescout_core::types::{Candidate, GameRecord, MergedResult};

/// One candidate's generation outcome.
#[derive(Debug)]
pub struct Recommendation {
    pub candidate: Candidate,
    pub outcome: Result<String>,
}

/// Build the generation prompt deterministically from the record fields.
pub fn build_prompt(record: &GameRecord) -> String {
    format!(
        "You recommend video games. Based on the catalog entry below, write a \
         short, enthusiastic recommendation (2-3 sentences) explaining who \
         would enjoy this game and why.\n\n\
         Title: {}\n\
         Description: {}\n\
         Hardware requirements: {}",
        record.name, record.description, record.hardware
    )
}

/// Generate a recommendation for every merged candidate.
pub async fn recommend_candidates<G: RecommendationGenerator>(
    generator: &G,
    merged: &MergedResult,
) -> Vec<Recommendation> {
    let mut out = Vec::with_capacity(merged.len());
    for candidate in merged.iter() {
        let prompt = build_prompt(&candidate.record);
        let outcome = generator.generate(&prompt).await;
        if let Err(e) = &outcome {
            warn!(game = %candidate.record.name, error = %e, "recommendation generation failed");
        }
        out.push(Recommendation { candidate: candidate.clone(), outcome });
    }
    out
}
