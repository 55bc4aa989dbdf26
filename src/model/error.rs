use crate::model::structures::identifiers::{PlayerId, WeeklyId, WeeklyNumber};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    #[error("Included weeklies must be at least 1, got {0}")]
    InvalidIncludedWeeklies(i64),

    #[error("Invalid finish time '{input}', expected H:MM:SS")]
    InvalidFinishTime { input: String },

    #[error("Invalid rank label '{input}', expected a position or DNF")]
    InvalidRankLabel { input: String },

    #[error("Player {player_id} is registered more than once in weekly {weekly_id}")]
    DuplicateParticipant { player_id: PlayerId, weekly_id: WeeklyId },

    #[error("Player {player_id} has no point award for weekly #{weekly}")]
    UnscoredResult { player_id: PlayerId, weekly: WeeklyNumber },

    #[error("Weekly {weekly_id} is not part of this season")]
    UnknownWeekly { weekly_id: WeeklyId },

    #[error("Weekly #{weekly} has not been processed in this season")]
    UnprocessedWeekly { weekly: WeeklyNumber },

    #[error("No finish time recorded for player {player_id} in weekly #{weekly}")]
    MissingFinishTime { player_id: PlayerId, weekly: WeeklyNumber },

    #[error("Season is closed, weekly {weekly_id} cannot be processed")]
    SeasonClosed { weekly_id: WeeklyId }
}
