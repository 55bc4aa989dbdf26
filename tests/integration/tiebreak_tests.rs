use std::collections::HashMap;

use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;
use season_standings::{
    model::{
        rank_season,
        season::SeasonTracker,
        structures::{
            included_weeklies::IncludedWeeklies, participant_result::Weekly, player_status::PlayerStatus,
            points::Points, season_record::SeasonRecord
        }
    },
    utils::test_utils::{finisher, generate_season}
};

use crate::common::init_test_env;

const A: u64 = 1;
const B: u64 = 2;
const C: u64 = 3;
const FILLER: u64 = 99;

fn weekly(id: u64, entries: &[(u64, &str)]) -> Weekly {
    Weekly {
        id,
        entries: entries.iter().map(|(player, time)| finisher(*player, time)).collect()
    }
}

#[test]
fn test_isolated_player_ranks_behind_exact_tie() {
    init_test_env();
    let mut tracker = SeasonTracker::new(IncludedWeeklies::new(2).unwrap());
    tracker.set_player_status(FILLER, PlayerStatus::Banned);

    // A and B tie twice for 14 points each; C collects 15 + 13 on weeklies they skipped
    tracker
        .process(&[
            weekly(1, &[(A, "1:00:00"), (B, "1:00:00")]),
            weekly(2, &[(B, "0:58:00"), (A, "0:58:00")]),
            weekly(3, &[(C, "0:30:00")]),
            weekly(4, &[(FILLER, "0:20:00"), (C, "0:21:00")]),
        ])
        .unwrap();

    let standings = tracker.standings().unwrap();
    for player in [A, B, C] {
        assert_eq!(standings.get(player).unwrap().final_points, Points::from(28));
    }

    assert_eq!(standings.position_of(A), Some(1));
    assert_eq!(standings.position_of(B), Some(1));
    assert_eq!(standings.position_of(C), Some(3));
    assert!(standings.get(C).unwrap().tiebreak.unwrap().isolated);

    let tiebreak = &standings.tiebreaks[&1];
    assert_eq!(tiebreak.common_weeklies, vec![1, 2]);
    assert_eq!(tiebreak.players.len(), 3);
}

#[test]
fn test_common_points_decide_before_time() {
    init_test_env();
    let mut tracker = SeasonTracker::new(IncludedWeeklies::new(2).unwrap());

    // A: 15 + 13, B: 13 + 15 on the same weeklies, tied at 28 with equal common points.
    // B's best time is faster, so B takes the block.
    tracker
        .process(&[
            weekly(1, &[(A, "1:00:00"), (B, "1:01:00")]),
            weekly(2, &[(B, "0:40:00"), (A, "0:45:00")]),
        ])
        .unwrap();

    let standings = tracker.standings().unwrap();
    assert_eq!(standings.position_of(B), Some(1));
    assert_eq!(standings.position_of(A), Some(2));

    let keys = standings.get(B).unwrap().tiebreak.unwrap();
    assert_eq!(keys.common_points, Points::from(28));
    assert_eq!(keys.minimum_time.to_string(), "0:40:00");
}

fn positions(records: &[&SeasonRecord], tracker: &SeasonTracker) -> HashMap<u64, u32> {
    rank_season(records.iter().copied(), tracker)
        .unwrap()
        .standings
        .iter()
        .map(|s| (s.player_id, s.position))
        .collect()
}

#[test]
fn test_positions_independent_of_input_order() {
    init_test_env();
    let mut tracker = SeasonTracker::new(IncludedWeeklies::new(3).unwrap());
    tracker.process(&generate_season(80, 6, 11)).unwrap();

    let mut records = tracker.records().collect::<Vec<_>>();
    let expected = positions(&records, &tracker);

    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..5 {
        records.shuffle(&mut rng);
        assert_eq!(positions(&records, &tracker), expected);
    }
}

#[test]
fn test_generated_standings_use_competition_ranking() {
    init_test_env();
    for seed in 0..5 {
        let mut tracker = SeasonTracker::new(IncludedWeeklies::new(3).unwrap());
        tracker.process(&generate_season(50, 6, seed)).unwrap();
        let standings = tracker.standings().unwrap().standings;

        assert_eq!(standings[0].position, 1);
        for (i, pair) in standings.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            assert!(prev.final_points >= next.final_points);

            if next.position == prev.position {
                assert_eq!(next.final_points, prev.final_points);
                assert_eq!(next.tiebreak, prev.tiebreak);
            } else {
                assert_eq!(next.position as usize, i + 2, "seed {}", seed);
            }
        }
    }
}
