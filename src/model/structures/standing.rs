use std::{
    cmp::Ordering,
    collections::BTreeMap
};

use serde::{Deserialize, Serialize};

use crate::model::structures::{
    finish_time::{deserialize_seconds, serialize_seconds, FinishTime},
    identifiers::{PlayerId, WeeklyNumber},
    points::Points,
    season_record::{SeasonRecord, WeeklyContribution}
};

/// Comparison keys of one member of a tie-block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TiebreakKeys {
    /// Points earned in the weeklies common to the block
    pub common_points: Points,
    /// Best finish time among the common weeklies, `23:59:59` when there are none.
    /// Published as seconds of the day.
    #[serde(serialize_with = "serialize_seconds", deserialize_with = "deserialize_seconds")]
    pub minimum_time: FinishTime,
    /// The player shares no counted weekly with any other member of the block
    pub isolated: bool
}

impl TiebreakKeys {
    /// Better keys order first
    pub fn rank_cmp(&self, other: &TiebreakKeys) -> Ordering {
        self.isolated
            .cmp(&other.isolated)
            .then(other.common_points.cmp(&self.common_points))
            .then(self.minimum_time.cmp(&other.minimum_time))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub player_id: PlayerId,
    /// 1-based, tied players share a position
    pub position: u32,
    pub final_points: Points,
    pub total_points: Points,
    pub weeklies: BTreeMap<WeeklyNumber, WeeklyContribution>,
    pub tiebreak: Option<TiebreakKeys>
}

impl Standing {
    pub fn new(record: &SeasonRecord, position: u32, tiebreak: Option<TiebreakKeys>) -> Standing {
        Standing {
            player_id: record.player_id,
            position,
            final_points: record.final_points,
            total_points: record.total_points,
            weeklies: record.weeklies.clone(),
            tiebreak
        }
    }
}

/// Why a tie-block was ordered the way it was
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TiebreakRecord {
    /// Ascending
    pub common_weeklies: Vec<WeeklyNumber>,
    /// Block members in their resolved order
    pub players: Vec<(PlayerId, TiebreakKeys)>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonStandings {
    pub standings: Vec<Standing>,
    /// Keyed by the first position of each tie-block
    pub tiebreaks: BTreeMap<u32, TiebreakRecord>
}

impl SeasonStandings {
    pub fn get(&self, player_id: PlayerId) -> Option<&Standing> {
        self.standings.iter().find(|s| s.player_id == player_id)
    }

    pub fn position_of(&self, player_id: PlayerId) -> Option<u32> {
        self.get(player_id).map(|s| s.position)
    }
}
