use indexmap::IndexMap;
use tracing::debug;

use crate::model::{
    error::ProcessingError,
    structures::{
        identifiers::{PlayerId, WeeklyNumber},
        included_weeklies::IncludedWeeklies,
        participant_result::ParticipantResult,
        points::Points,
        season_record::SeasonRecord
    }
};

/// Folds one scored weekly into the season records.
///
/// Every eligible entry upserts its player's points at `weekly`, creating the record on
/// first contact, and the player's discards and totals are rebuilt from scratch. Aggregating
/// the same weekly again overwrites the earlier contribution instead of adding to it.
///
/// All entries are validated before any record is touched. Returns the number of records updated.
///
/// Callers must not aggregate into the same season concurrently.
pub fn aggregate_weekly(
    records: &mut IndexMap<PlayerId, SeasonRecord>,
    weekly: WeeklyNumber,
    results: &[ParticipantResult],
    included: IncludedWeeklies
) -> Result<usize, ProcessingError> {
    let awards = results
        .iter()
        .filter(|r| !r.excluded)
        .map(|r| {
            r.points.map(|points| (r.player_id, points)).ok_or(ProcessingError::UnscoredResult {
                player_id: r.player_id,
                weekly
            })
        })
        .collect::<Result<Vec<(PlayerId, Points)>, ProcessingError>>()?;

    for (player_id, points) in &awards {
        let record = records
            .entry(*player_id)
            .or_insert_with(|| SeasonRecord::new(*player_id));
        record.record_weekly(weekly, *points, included);

        debug!(
            "Player {} weekly #{}: {} points, final {} / total {}",
            player_id,
            weekly,
            points,
            record.final_points,
            record.total_points
        );
    }

    Ok(awards.len())
}
