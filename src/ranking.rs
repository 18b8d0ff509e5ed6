use std::cmp::Ordering;

use crate::state::Pick;

/// Display order for a slate: descending confidence, ties keeping their
/// relative order from the source document.
///
/// Pure and non-mutating; the caller re-runs it on every render pass, which
/// is cheap for a single day's slate (tens to low hundreds of entries).
/// Non-finite confidence values compare as equal and therefore also keep
/// their source position.
pub fn rank_picks(picks: &[Pick]) -> Vec<&Pick> {
    let mut ranked: Vec<&Pick> = picks.iter().collect();
    // Vec::sort_by is stable, which is what guarantees the tie-break.
    ranked.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });
    ranked
}
