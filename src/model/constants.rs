// Scoring constants
pub const POINTS_TABLE: [u32; 12] = [15, 13, 12, 10, 9, 8, 7, 6, 5, 4, 3, 2];
pub const OVERFLOW_POINTS: u32 = 1;
pub const DNF_POINTS: f64 = 0.0;
/// Points are compared in micro-points so that sums of averaged awards stay transitive
pub const POINTS_PRECISION: f64 = 1_000_000.0;
// Finish times
pub const FINISH_TIME_FORMAT: &str = "%H:%M:%S";
pub const MAX_FINISH_SECONDS: u32 = 23 * 3600 + 59 * 60 + 59;
pub const DNF_LABEL: &str = "DNF";
