/// Chat-platform snowflake of a player
pub type PlayerId = u64;

/// Persistence id of a weekly
pub type WeeklyId = u64;

/// 1-based position of a weekly inside its season, assigned the first time the weekly is aggregated
pub type WeeklyNumber = u32;
