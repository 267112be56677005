//! Two-way recall merge.
//!
//! Distance and relevance scores live on incommensurable scales, so no
//! numeric comparison happens across sources. The policy is fixed: lexical
//! hits first in their index order, then vector hits in theirs, one bounded
//! walk with name-keyed deduplication.

use std::collections::HashSet;

use gamescout_core::types::{Candidate, LexicalHit, MergedResult, RecallSource, VectorHit};

/// Merge the two best-first hit lists into at most `cap` distinct
/// candidates.
///
/// Pure function of its inputs: no I/O, no state across calls. Result
/// length is min(cap, distinct names across both lists); a name appearing
/// in both lists keeps its lexical-side position and provenance.
pub fn merge_recall(lexical: &[LexicalHit], vector: &[VectorHit], cap: usize) -> MergedResult {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut candidates = Vec::with_capacity(cap.min(lexical.len() + vector.len()));

    let prioritized = lexical
        .iter()
        .map(|h| (&h.record, RecallSource::Lexical))
        .chain(vector.iter().map(|h| (&h.record, RecallSource::Vector)));

    for (record, source) in prioritized {
        if candidates.len() >= cap {
            break;
        }
        if seen.insert(record.name.as_str()) {
            candidates.push(Candidate { record: record.clone(), source });
        }
    }

    MergedResult { candidates }
}
