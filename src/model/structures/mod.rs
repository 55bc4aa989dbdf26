pub mod finish_time;
pub mod identifiers;
pub mod included_weeklies;
pub mod participant_result;
pub mod player_status;
pub mod points;
pub mod rank_label;
pub mod season_record;
pub mod season_status;
pub mod standing;
