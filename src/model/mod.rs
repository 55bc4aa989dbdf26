//! The scoring and ranking engine.
//!
//! A closed weekly flows through [`weekly_scorer`] (finish order to point awards), then
//! [`season_aggregator`] (awards into each player's season record), and on demand the
//! records go through [`season_ranker`] (final standings with tiebreaks). [`season::SeasonTracker`]
//! wires the three together for one season.

pub mod constants;
pub mod error;
pub mod scoring_table;
pub mod season;
pub mod season_aggregator;
pub mod season_ranker;
pub mod structures;
pub mod weekly_scorer;

pub use error::ProcessingError;
pub use season::SeasonTracker;
pub use season_aggregator::aggregate_weekly;
pub use season_ranker::{rank_season, FinishTimeLookup};
pub use weekly_scorer::{ranked_entries, score_weekly};
