use crate::model::structures::{
    finish_time::FinishTime,
    identifiers::{PlayerId, WeeklyId, WeeklyNumber},
    included_weeklies::IncludedWeeklies,
    participant_result::{ParticipantResult, Weekly},
    points::Points,
    season_record::SeasonRecord
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

pub fn finisher(player_id: PlayerId, time: &str) -> ParticipantResult {
    let finish_time = time
        .parse::<FinishTime>()
        .unwrap_or_else(|e| panic!("Invalid test finish time: {}", e));

    ParticipantResult::new(player_id, Some(finish_time))
}

pub fn dnf(player_id: PlayerId) -> ParticipantResult {
    ParticipantResult::new(player_id, None)
}

pub fn excluded(player_id: PlayerId, time: &str) -> ParticipantResult {
    ParticipantResult {
        excluded: true,
        ..finisher(player_id, time)
    }
}

/// A season record built by recording each `(weekly, points)` pair in order
pub fn generate_record(player_id: PlayerId, points: &[(WeeklyNumber, f64)], included: i64) -> SeasonRecord {
    let included = IncludedWeeklies::new(included).unwrap_or_else(|e| panic!("{}", e));
    let mut record = SeasonRecord::new(player_id);

    for (weekly, p) in points {
        record.record_weekly(*weekly, Points::new(*p), included);
    }

    record
}

/// Finish time lookup from `(weekly, player, H:MM:SS)` triples
pub fn time_lookup(times: &[(WeeklyNumber, PlayerId, &str)]) -> HashMap<(WeeklyNumber, PlayerId), FinishTime> {
    times
        .iter()
        .map(|(weekly, player_id, time)| {
            let finish_time = time
                .parse::<FinishTime>()
                .unwrap_or_else(|e| panic!("Invalid test finish time: {}", e));
            ((*weekly, *player_id), finish_time)
        })
        .collect()
}

/// Generates a weekly where most of the given players take part.
///
/// Times are drawn on a 30 second grid between 50 minutes and 2.5 hours, so ties happen.
/// Roughly one in ten participants does not finish and one in twenty is excluded.
pub fn generate_weekly(id: WeeklyId, player_ids: &[PlayerId], seed: u64) -> Weekly {
    // Initialize seeded RNG for reproducible results
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut entries = Vec::with_capacity(player_ids.len());

    for player_id in player_ids {
        if rng.random_bool(0.2) {
            continue;
        }

        let finish_time = if rng.random_bool(0.1) {
            None
        } else {
            Some(FinishTime::from_seconds(rng.random_range(100..300) * 30))
        };

        entries.push(ParticipantResult {
            excluded: rng.random_bool(0.05),
            ..ParticipantResult::new(*player_id, finish_time)
        });
    }

    Weekly { id, entries }
}

/// Generates `n_weeklies` weeklies for players `1..=n_players`
pub fn generate_season(n_players: u64, n_weeklies: u64, seed: u64) -> Vec<Weekly> {
    let player_ids = (1..=n_players).collect::<Vec<_>>();

    (0..n_weeklies)
        .map(|i| generate_weekly(1000 + i, &player_ids, seed.wrapping_add(i)))
        .collect()
}
