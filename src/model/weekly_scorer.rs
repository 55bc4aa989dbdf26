use itertools::Itertools;
use tracing::debug;

use crate::model::{
    constants::DNF_POINTS,
    error::ProcessingError,
    scoring_table::average_points,
    structures::{
        participant_result::{ParticipantResult, Weekly},
        points::Points,
        rank_label::RankLabel
    }
};

/// # Weekly scoring
///
/// Annotates every eligible entry of a closed weekly with its rank and point award.
///
/// 1. Excluded entries are left out entirely.
/// 2. Finishers are sorted by time. Entries with identical times form a group that shares a
///     competition rank (the next group's rank skips by the group size) and splits the
///     point-table slots it occupies evenly.
/// 3. Entries without a time follow, ranked `DNF` with 0 points.
///
/// Scoring is a pure function of the entries: running it again yields the same annotations.
pub fn score_weekly(weekly: &Weekly) -> Result<Vec<ParticipantResult>, ProcessingError> {
    if let Some(player_id) = weekly.entries.iter().map(|e| e.player_id).duplicates().next() {
        return Err(ProcessingError::DuplicateParticipant {
            player_id,
            weekly_id: weekly.id
        });
    }

    let (finished, not_finished): (Vec<&ParticipantResult>, Vec<&ParticipantResult>) = weekly
        .entries
        .iter()
        .filter(|e| !e.excluded)
        .partition(|e| e.has_finished());

    let mut scored = Vec::with_capacity(finished.len() + not_finished.len());
    let mut slot = 0;

    let finished = finished.into_iter().sorted_by_key(|e| e.finish_time).collect_vec();
    for (_, group) in &finished.into_iter().chunk_by(|e| e.finish_time) {
        let group = group.collect_vec();
        let rank = RankLabel::Position(slot as u32 + 1);
        let points = average_points(slot, group.len());

        if group.len() > 1 {
            debug!(
                "Weekly {}: {} players tied at rank {}, {} points each",
                weekly.id,
                group.len(),
                rank,
                points
            );
        }

        scored.extend(group.iter().map(|e| e.scored(rank, points)));
        slot += group.len();
    }

    scored.extend(
        not_finished
            .into_iter()
            .map(|e| e.scored(RankLabel::Dnf, Points::new(DNF_POINTS)))
    );

    Ok(scored)
}

/// Scored entries in presentation order: highest award first, input order among equals
pub fn ranked_entries(results: &[ParticipantResult]) -> Vec<&ParticipantResult> {
    results
        .iter()
        .filter(|e| !e.excluded)
        .sorted_by(|a, b| b.points.cmp(&a.points))
        .collect()
}
