use std::collections::{BTreeMap, BTreeSet, HashMap};

use itertools::Itertools;
use tracing::{debug, warn};

use crate::model::{
    error::ProcessingError,
    structures::{
        finish_time::FinishTime,
        identifiers::{PlayerId, WeeklyNumber},
        points::Points,
        season_record::SeasonRecord,
        standing::{SeasonStandings, Standing, TiebreakKeys, TiebreakRecord}
    }
};

/// Source of the original finish times, needed only to break ties
pub trait FinishTimeLookup {
    fn finish_time(&self, weekly: WeeklyNumber, player_id: PlayerId) -> Option<FinishTime>;
}

impl FinishTimeLookup for HashMap<(WeeklyNumber, PlayerId), FinishTime> {
    fn finish_time(&self, weekly: WeeklyNumber, player_id: PlayerId) -> Option<FinishTime> {
        self.get(&(weekly, player_id)).copied()
    }
}

/// # Season ranking
///
/// Orders the records by final points. Each run of equal final points (a tie-block) is
/// resolved by comparing its members only on the weeklies they all counted:
///
/// 1. Members that share no counted weekly with any other member are set aside; they rank
///     behind the rest of the block.
/// 2. The common weeklies are the intersection of the remaining members' counted weeklies.
/// 3. Each member is keyed by its points in the common weeklies (more is better), then its
///     best time among them (faster is better, `23:59:59` when there are none).
/// 4. The block is stably sorted by these keys and split again wherever two neighbours differ.
///     Members with equal keys share a position.
///
/// Records keep their input order where nothing else distinguishes them.
pub fn rank_season<'a, I, L>(records: I, lookup: &L) -> Result<SeasonStandings, ProcessingError>
where
    I: IntoIterator<Item = &'a SeasonRecord>,
    L: FinishTimeLookup + ?Sized
{
    let sorted = records
        .into_iter()
        .sorted_by(|a, b| b.final_points.cmp(&a.final_points))
        .collect_vec();

    let mut standings = SeasonStandings {
        standings: Vec::with_capacity(sorted.len()),
        tiebreaks: BTreeMap::new()
    };
    let mut position = 1;

    for block in tie_blocks(&sorted) {
        if let [record] = block {
            standings.standings.push(Standing::new(record, position, None));
            position += 1;
            continue;
        }

        debug!(
            "{} players tied at {} points from position {}",
            block.len(),
            block[0].final_points,
            position
        );

        let (common, keyed) = tiebreak_keys(block, lookup)?;
        let keyed = keyed
            .into_iter()
            .sorted_by(|(_, k1), (_, k2)| k1.rank_cmp(k2))
            .collect_vec();

        standings.tiebreaks.insert(
            position,
            TiebreakRecord {
                common_weeklies: common.into_iter().collect(),
                players: keyed.iter().map(|(r, k)| (r.player_id, *k)).collect()
            }
        );

        for group in resolve_block(&keyed) {
            if group.len() > 1 {
                warn!(
                    "Players {} remain tied at position {}",
                    group.iter().map(|(r, _)| r.player_id).join(", "),
                    position
                );
            }

            for (record, keys) in group {
                standings
                    .standings
                    .push(Standing::new(record, position, Some(*keys)));
            }
            position += group.len() as u32;
        }
    }

    Ok(standings)
}

/// Maximal runs of equal final points in an already sorted slice
pub fn tie_blocks<'s, 'a>(sorted: &'s [&'a SeasonRecord]) -> Vec<&'s [&'a SeasonRecord]> {
    sorted
        .chunk_by(|a, b| a.final_points == b.final_points)
        .collect()
}

/// Computes the common weeklies of a tie-block and every member's comparison keys.
///
/// Returns the common weeklies and the members in block order with their keys.
pub fn tiebreak_keys<'a, L>(
    block: &[&'a SeasonRecord],
    lookup: &L
) -> Result<(BTreeSet<WeeklyNumber>, Vec<(&'a SeasonRecord, TiebreakKeys)>), ProcessingError>
where
    L: FinishTimeLookup + ?Sized
{
    let counted = block.iter().map(|r| r.counted_weeklies()).collect_vec();
    let isolated = (0..block.len())
        .map(|i| {
            counted
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .all(|(_, other)| counted[i].is_disjoint(other))
        })
        .collect_vec();

    let common = counted
        .iter()
        .zip(&isolated)
        .filter(|(_, isolated)| !**isolated)
        .map(|(weeklies, _)| weeklies.clone())
        .reduce(|acc, weeklies| acc.intersection(&weeklies).copied().collect())
        .unwrap_or_default();

    let keyed = block
        .iter()
        .zip(isolated)
        .map(|(record, isolated)| {
            let keys = if isolated {
                TiebreakKeys {
                    common_points: Points::ZERO,
                    minimum_time: FinishTime::MAX,
                    isolated
                }
            } else {
                member_keys(record, &common, lookup)?
            };

            Ok::<_, ProcessingError>((*record, keys))
        })
        .collect::<Result<Vec<_>, ProcessingError>>()?;

    Ok((common, keyed))
}

fn member_keys<L>(
    record: &SeasonRecord,
    common: &BTreeSet<WeeklyNumber>,
    lookup: &L
) -> Result<TiebreakKeys, ProcessingError>
where
    L: FinishTimeLookup + ?Sized
{
    let common_points: Points = common.iter().filter_map(|w| record.points_for(*w)).sum();

    let mut minimum_time = FinishTime::MAX;
    for weekly in common {
        let time = lookup
            .finish_time(*weekly, record.player_id)
            .ok_or(ProcessingError::MissingFinishTime {
                player_id: record.player_id,
                weekly: *weekly
            })?;
        minimum_time = minimum_time.min(time);
    }

    Ok(TiebreakKeys {
        common_points,
        minimum_time,
        isolated: false
    })
}

/// Splits a block sorted by its keys wherever two neighbours have different keys.
/// Equality is checked explicitly per adjacent pair rather than trusted from the sort.
pub fn resolve_block<'s, 'a>(
    sorted: &'s [(&'a SeasonRecord, TiebreakKeys)]
) -> Vec<&'s [(&'a SeasonRecord, TiebreakKeys)]> {
    sorted.chunk_by(|(_, k1), (_, k2)| k1 == k2).collect()
}
