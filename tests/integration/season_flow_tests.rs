use std::collections::HashMap;

use indexmap::IndexMap;
use season_standings::{
    model::{
        aggregate_weekly, rank_season, score_weekly,
        season::SeasonTracker,
        structures::{
            included_weeklies::IncludedWeeklies, participant_result::Weekly, player_status::PlayerStatus,
            points::Points, rank_label::RankLabel
        },
        ProcessingError
    },
    utils::test_utils::{dnf, finisher, generate_season}
};

use crate::common::init_test_env;

const P1: u64 = 1;
const P2: u64 = 2;

/// P1 scores 15, 10 and a DNF; P2 scores 13, 9 and 15. Players 3 to 5 only fill the
/// top of weekly 2 and are banned from the standings.
fn scenario_weeklies() -> Vec<Weekly> {
    vec![
        Weekly {
            id: 9001,
            entries: vec![finisher(P2, "1:12:00"), finisher(P1, "1:05:00")]
        },
        Weekly {
            id: 9002,
            entries: vec![
                finisher(3, "0:50:00"),
                finisher(4, "0:55:00"),
                finisher(5, "0:58:00"),
                finisher(P1, "1:01:00"),
                finisher(P2, "1:02:00"),
            ]
        },
        Weekly {
            id: 9003,
            entries: vec![dnf(P1), finisher(P2, "1:00:00")]
        },
    ]
}

fn scenario_tracker() -> SeasonTracker {
    let mut tracker = SeasonTracker::new(IncludedWeeklies::new(2).unwrap());
    for filler in 3..=5 {
        tracker.set_player_status(filler, PlayerStatus::Banned);
    }

    tracker.process(&scenario_weeklies()).unwrap();
    tracker
}

#[test]
fn test_end_to_end_scenario() {
    init_test_env();
    let tracker = scenario_tracker();

    let p1 = tracker.get_record(P1).unwrap();
    assert_eq!(p1.points_for(1), Some(Points::from(15)));
    assert_eq!(p1.points_for(2), Some(Points::from(10)));
    assert_eq!(p1.points_for(3), Some(Points::ZERO));
    assert!(p1.weeklies[&3].discarded);
    assert_eq!(p1.final_points, Points::from(25));

    let p2 = tracker.get_record(P2).unwrap();
    assert_eq!(p2.points_for(2), Some(Points::from(9)));
    assert!(p2.weeklies[&2].discarded);
    assert_eq!(p2.final_points, Points::from(28));
    assert_eq!(p2.total_points, Points::from(37));

    let standings = tracker.standings().unwrap();
    assert_eq!(standings.standings.len(), 2);
    assert_eq!(standings.position_of(P2), Some(1));
    assert_eq!(standings.position_of(P1), Some(2));
    assert!(standings.tiebreaks.is_empty());
}

#[test]
fn test_scenario_through_engine_functions() {
    init_test_env();
    let included = IncludedWeeklies::new(2).unwrap();
    let mut records = IndexMap::new();
    let mut times = HashMap::new();

    for (i, weekly) in scenario_weeklies().iter().enumerate() {
        let number = i as u32 + 1;
        let scored = score_weekly(weekly).unwrap();
        for entry in &scored {
            if let Some(time) = entry.finish_time {
                times.insert((number, entry.player_id), time);
            }
        }
        aggregate_weekly(&mut records, number, &scored, included).unwrap();
    }

    let standings = rank_season(records.values().filter(|r| r.player_id <= 2), &times).unwrap();

    assert_eq!(standings.position_of(P2), Some(1));
    assert_eq!(standings.position_of(P1), Some(2));
    assert_eq!(standings.get(P1).unwrap().final_points, Points::from(25));
}

#[test]
fn test_reprocessing_weekly_changes_nothing() {
    init_test_env();
    let mut tracker = scenario_tracker();
    let before = tracker.standings().unwrap();
    let records = tracker.records().cloned().collect::<Vec<_>>();

    let weekly = scenario_weeklies().remove(1);
    let rescored = tracker.process_weekly(&weekly).unwrap();

    assert_eq!(tracker.weekly_number(weekly.id), Some(2));
    assert_eq!(tracker.weekly_count(), 3);
    assert_eq!(tracker.records().cloned().collect::<Vec<_>>(), records);
    assert_eq!(tracker.standings().unwrap(), before);
    assert_eq!(rescored[3].rank, Some(RankLabel::Position(4)));
}

#[test]
fn test_corrected_weekly_reorders_standings() {
    init_test_env();
    let mut tracker = scenario_tracker();

    // P1 actually beat everyone in weekly 2
    let mut corrected = scenario_weeklies().remove(1);
    corrected.entries[3] = finisher(P1, "0:45:00");
    tracker.process_weekly(&corrected).unwrap();

    let p1 = tracker.get_record(P1).unwrap();
    assert_eq!(p1.points_for(2), Some(Points::from(15)));
    assert_eq!(p1.final_points, Points::from(30));

    let standings = tracker.standings().unwrap();
    assert_eq!(standings.position_of(P1), Some(1));
    assert_eq!(standings.position_of(P2), Some(2));
}

#[test]
fn test_closed_season_keeps_standings() {
    init_test_env();
    let mut tracker = scenario_tracker();
    let before = tracker.standings().unwrap();
    tracker.close();

    let late = Weekly {
        id: 9004,
        entries: vec![finisher(P1, "0:40:00")]
    };

    assert_eq!(
        tracker.process_weekly(&late),
        Err(ProcessingError::SeasonClosed { weekly_id: 9004 })
    );
    assert_eq!(tracker.standings().unwrap(), before);
}

#[test]
fn test_generated_season_invariants() {
    init_test_env();
    let included = IncludedWeeklies::new(4).unwrap();
    let mut tracker = SeasonTracker::new(included);
    tracker.process(&generate_season(60, 10, 3)).unwrap();

    for record in tracker.records() {
        let total: Points = record.weeklies.values().map(|c| c.points).sum();
        assert_eq!(record.total_points, total);

        let mut points = record.weeklies.values().map(|c| c.points).collect::<Vec<_>>();
        points.sort_by(|a, b| b.cmp(a));
        let best: Points = points.iter().take(included.get()).sum();
        assert_eq!(record.final_points, best, "player {}", record.player_id);

        let kept = record.weeklies.values().filter(|c| !c.discarded).count();
        assert_eq!(kept, record.weeklies.len().min(included.get()));
    }
}
