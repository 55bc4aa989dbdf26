use serde::{Deserialize, Serialize};

use crate::model::structures::{
    finish_time::FinishTime,
    identifiers::{PlayerId, WeeklyId},
    points::Points,
    rank_label::RankLabel
};

/// One player's entry in a weekly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantResult {
    pub player_id: PlayerId,
    /// `None` means the player did not finish
    #[serde(default)]
    pub finish_time: Option<FinishTime>,
    /// Set when the player opted out of season scoring at registration
    #[serde(default)]
    pub excluded: bool,
    /// Assigned once, when the weekly is scored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<RankLabel>,
    /// Assigned once, when the weekly is scored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Points>
}

impl ParticipantResult {
    pub fn new(player_id: PlayerId, finish_time: Option<FinishTime>) -> ParticipantResult {
        ParticipantResult {
            player_id,
            finish_time,
            excluded: false,
            rank: None,
            points: None
        }
    }

    pub fn has_finished(&self) -> bool {
        self.finish_time.is_some()
    }

    /// A copy of this entry annotated with its rank and point award
    pub fn scored(&self, rank: RankLabel, points: Points) -> ParticipantResult {
        ParticipantResult {
            rank: Some(rank),
            points: Some(points),
            ..self.clone()
        }
    }
}

/// A closed weekly and its entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weekly {
    pub id: WeeklyId,
    #[serde(default)]
    pub entries: Vec<ParticipantResult>
}
