#[path = "../common/mod.rs"]
mod common;

mod season_flow_tests;
mod tiebreak_tests;
