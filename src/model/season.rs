use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use tracing::{debug, info, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::{
    model::{
        error::ProcessingError,
        season_aggregator::aggregate_weekly,
        season_ranker::{rank_season, FinishTimeLookup},
        structures::{
            finish_time::FinishTime,
            identifiers::{PlayerId, WeeklyId, WeeklyNumber},
            included_weeklies::IncludedWeeklies,
            participant_result::{ParticipantResult, Weekly},
            player_status::PlayerStatus,
            season_record::SeasonRecord,
            season_status::SeasonStatus,
            standing::SeasonStandings
        },
        weekly_scorer::score_weekly
    },
    utils::progress_utils::progress_style
};

/// One season held in memory.
///
/// Weeklies are numbered in the order they are first processed; processing a weekly again
/// reuses its number and replaces everything it contributed. Records are kept in the order
/// players were first seen and are never removed.
///
/// The tracker does no locking of its own. Callers serialize processing per season.
pub struct SeasonTracker {
    included_weeklies: IncludedWeeklies,
    status: SeasonStatus,
    // Weekly id -> sequence number. The number is the weekly's index + 1.
    weeklies: IndexMap<WeeklyId, WeeklyNumber>,
    records: IndexMap<PlayerId, SeasonRecord>,
    // Scored entries of every processed weekly. This is what tiebreaks read finish times from.
    results: HashMap<WeeklyNumber, Vec<ParticipantResult>>,
    player_statuses: HashMap<PlayerId, PlayerStatus>
}

impl SeasonTracker {
    pub fn new(included_weeklies: IncludedWeeklies) -> SeasonTracker {
        SeasonTracker {
            included_weeklies,
            status: SeasonStatus::Open,
            weeklies: IndexMap::new(),
            records: IndexMap::new(),
            results: HashMap::new(),
            player_statuses: HashMap::new()
        }
    }

    pub fn included_weeklies(&self) -> IncludedWeeklies {
        self.included_weeklies
    }

    pub fn status(&self) -> SeasonStatus {
        self.status
    }

    /// No further weeklies can be processed once the season is closed
    pub fn close(&mut self) {
        self.status = SeasonStatus::Closed;
    }

    /// Returns the weekly's sequence number, assigning the next one if the weekly is new
    pub fn register_weekly(&mut self, weekly_id: WeeklyId) -> WeeklyNumber {
        if let Some(number) = self.weekly_number(weekly_id) {
            return number;
        }

        let number = self.weeklies.len() as WeeklyNumber + 1;
        self.weeklies.insert(weekly_id, number);

        number
    }

    pub fn weekly_number(&self, weekly_id: WeeklyId) -> Option<WeeklyNumber> {
        self.weeklies.get(&weekly_id).copied()
    }

    pub fn weekly_count(&self) -> usize {
        self.weeklies.len()
    }

    /// Scored entries of a processed weekly, in scoring order.
    /// Empty when every entry was excluded.
    pub fn weekly_results(&self, weekly: WeeklyNumber) -> Result<&[ParticipantResult], ProcessingError> {
        self.results
            .get(&weekly)
            .map(Vec::as_slice)
            .ok_or(ProcessingError::UnprocessedWeekly { weekly })
    }

    pub fn set_player_status(&mut self, player_id: PlayerId, status: PlayerStatus) {
        self.player_statuses.insert(player_id, status);
    }

    /// Players without a recorded status are active
    pub fn player_status(&self, player_id: PlayerId) -> PlayerStatus {
        self.player_statuses.get(&player_id).copied().unwrap_or_default()
    }

    pub fn get_record(&self, player_id: PlayerId) -> Option<&SeasonRecord> {
        self.records.get(&player_id)
    }

    pub fn records(&self) -> impl Iterator<Item = &SeasonRecord> {
        self.records.values()
    }

    pub fn process(&mut self, weeklies: &[Weekly]) -> Result<(), ProcessingError> {
        let span = info_span!("process_weeklies");
        if let Some(style) = progress_style() {
            span.pb_set_style(&style);
        }
        span.pb_set_length(weeklies.len() as u64);
        span.pb_set_message("Processing weeklies");
        let _enter = span.enter();

        for weekly in weeklies {
            self.process_weekly(weekly)?;
            span.pb_inc(1);
        }

        Ok(())
    }

    /// # Weekly processing
    ///
    /// Runs when a weekly closes: the weekly is scored, numbered, and folded into the
    /// records of everyone who took part. Running it again for a corrected weekly is a
    /// full replace. Players missing from the corrected entries lose that weekly.
    pub fn process_weekly(&mut self, weekly: &Weekly) -> Result<Vec<ParticipantResult>, ProcessingError> {
        if self.status == SeasonStatus::Closed {
            return Err(ProcessingError::SeasonClosed { weekly_id: weekly.id });
        }

        let scored = score_weekly(weekly)?;
        let number = self.register_weekly(weekly.id);
        self.aggregate(weekly.id, &scored)?;

        info!(
            "Processed weekly {} as #{} with {} scored entries",
            weekly.id,
            number,
            scored.len()
        );

        Ok(scored)
    }

    /// Folds already scored entries of a registered weekly into the records
    pub fn aggregate(&mut self, weekly_id: WeeklyId, scored: &[ParticipantResult]) -> Result<(), ProcessingError> {
        let number = self
            .weekly_number(weekly_id)
            .ok_or(ProcessingError::UnknownWeekly { weekly_id })?;

        aggregate_weekly(&mut self.records, number, scored, self.included_weeklies)?;

        let eligible = scored.iter().filter(|r| !r.excluded).cloned().collect::<Vec<_>>();
        let current = eligible.iter().map(|r| r.player_id).collect::<HashSet<_>>();
        let previous = self.results.insert(number, eligible).unwrap_or_default();

        for stale in previous.iter().filter(|r| !current.contains(&r.player_id)) {
            if let Some(record) = self.records.get_mut(&stale.player_id) {
                record.remove_weekly(number, self.included_weeklies);
                debug!("Player {} no longer part of weekly #{}", stale.player_id, number);
            }
        }

        Ok(())
    }

    /// Standings of every active player
    pub fn standings(&self) -> Result<SeasonStandings, ProcessingError> {
        rank_season(
            self.records
                .values()
                .filter(|r| self.player_status(r.player_id).is_rankable()),
            self
        )
    }
}

impl FinishTimeLookup for SeasonTracker {
    fn finish_time(&self, weekly: WeeklyNumber, player_id: PlayerId) -> Option<FinishTime> {
        self.results
            .get(&weekly)?
            .iter()
            .find(|r| r.player_id == player_id)
            .and_then(|r| r.finish_time)
    }
}
