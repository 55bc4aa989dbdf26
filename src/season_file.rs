use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::model::{
    error::ProcessingError,
    season::SeasonTracker,
    structures::{
        identifiers::PlayerId, included_weeklies::IncludedWeeklies, participant_result::Weekly,
        player_status::PlayerStatus, season_status::SeasonStatus
    }
};

#[derive(Debug, Error)]
pub enum SeasonFileError {
    #[error("Failed to read season file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse season file: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Processing(#[from] ProcessingError)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub id: PlayerId,
    #[serde(default)]
    pub status: PlayerStatus
}

/// A season as exported by the bot: its configuration, known players and closed weeklies.
/// Weeklies are listed in the order they closed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonFile {
    pub included_weeklies: IncludedWeeklies,
    #[serde(default)]
    pub status: SeasonStatus,
    #[serde(default)]
    pub players: Vec<PlayerEntry>,
    #[serde(default)]
    pub weeklies: Vec<Weekly>
}

impl SeasonFile {
    pub fn load(path: &Path) -> Result<SeasonFile, SeasonFileError> {
        let contents = fs::read_to_string(path)?;
        let season_file: SeasonFile = serde_json::from_str(&contents)?;

        info!(
            "Loaded season with {} weeklies and {} players from {}",
            season_file.weeklies.len(),
            season_file.players.len(),
            path.display()
        );

        Ok(season_file)
    }

    /// Replays every weekly into a fresh tracker.
    /// A closed season is closed only after its weeklies are replayed.
    pub fn into_tracker(self, included_override: Option<IncludedWeeklies>) -> Result<SeasonTracker, SeasonFileError> {
        let mut tracker = SeasonTracker::new(included_override.unwrap_or(self.included_weeklies));
        for player in &self.players {
            tracker.set_player_status(player.id, player.status);
        }

        tracker.process(&self.weeklies)?;

        if self.status == SeasonStatus::Closed {
            tracker.close();
        }

        Ok(tracker)
    }
}
