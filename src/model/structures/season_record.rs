use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::model::structures::{
    identifiers::{PlayerId, WeeklyNumber},
    included_weeklies::IncludedWeeklies,
    points::Points
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyContribution {
    pub points: Points,
    pub discarded: bool
}

/// A player's running aggregate within one season.
///
/// `total_points`, `final_points` and every `discarded` flag are derived from the
/// weekly points alone. They are rebuilt by [`SeasonRecord::recompute`] whenever the
/// weeklies change, because one new result can move older ones across the cutoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonRecord {
    pub player_id: PlayerId,
    pub weeklies: BTreeMap<WeeklyNumber, WeeklyContribution>,
    pub total_points: Points,
    pub final_points: Points
}

impl SeasonRecord {
    pub fn new(player_id: PlayerId) -> SeasonRecord {
        SeasonRecord {
            player_id,
            weeklies: BTreeMap::new(),
            total_points: Points::ZERO,
            final_points: Points::ZERO
        }
    }

    /// Sets the points of a weekly, replacing any earlier value for the same weekly
    pub fn record_weekly(&mut self, weekly: WeeklyNumber, points: Points, included: IncludedWeeklies) {
        self.weeklies.insert(
            weekly,
            WeeklyContribution {
                points,
                discarded: false
            }
        );
        self.recompute(included);
    }

    /// Drops a weekly from the record. Returns false if the player had no entry for it.
    pub fn remove_weekly(&mut self, weekly: WeeklyNumber, included: IncludedWeeklies) -> bool {
        let removed = self.weeklies.remove(&weekly).is_some();
        if removed {
            self.recompute(included);
        }

        removed
    }

    pub fn recompute(&mut self, included: IncludedWeeklies) {
        let order = counted_order(&self.weeklies);
        for (i, weekly) in order.iter().enumerate() {
            if let Some(contribution) = self.weeklies.get_mut(weekly) {
                contribution.discarded = i >= included.get();
            }
        }

        self.total_points = self.weeklies.values().map(|c| c.points).sum();
        self.final_points = self
            .weeklies
            .values()
            .filter(|c| !c.discarded)
            .map(|c| c.points)
            .sum();
    }

    pub fn points_for(&self, weekly: WeeklyNumber) -> Option<Points> {
        self.weeklies.get(&weekly).map(|c| c.points)
    }

    /// Weeklies that count towards the final points with a positive award.
    /// These are the only weeklies a tiebreak may compare.
    pub fn counted_weeklies(&self) -> BTreeSet<WeeklyNumber> {
        self.weeklies
            .iter()
            .filter(|(_, c)| !c.discarded && c.points.is_positive())
            .map(|(weekly, _)| *weekly)
            .collect()
    }
}

/// Weekly numbers ordered best first: points descending, earlier weekly first on equal points
pub fn counted_order(weeklies: &BTreeMap<WeeklyNumber, WeeklyContribution>) -> Vec<WeeklyNumber> {
    weeklies
        .iter()
        .sorted_by(|(n1, c1), (n2, c2)| c2.points.cmp(&c1.points).then(n1.cmp(n2)))
        .map(|(weekly, _)| *weekly)
        .collect()
}
