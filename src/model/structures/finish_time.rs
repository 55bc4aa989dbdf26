use std::{fmt, str::FromStr};

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::{
    constants::{FINISH_TIME_FORMAT, MAX_FINISH_SECONDS},
    error::ProcessingError
};

/// A submitted finish time in whole seconds. Lower is better.
///
/// Times are collected as `H:MM:SS` (one or two hour digits, always two minute and second
/// digits) and never exceed `23:59:59`, which doubles as the tiebreak sentinel for players
/// without any common weekly. Leap seconds are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FinishTime(u32);

impl FinishTime {
    pub const MAX: FinishTime = FinishTime(MAX_FINISH_SECONDS);

    pub fn from_seconds(seconds: u32) -> FinishTime {
        FinishTime(seconds)
    }

    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> FinishTime {
        FinishTime(hours * 3600 + minutes * 60 + seconds)
    }

    pub fn seconds(self) -> u32 {
        self.0
    }
}

impl FromStr for FinishTime {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let padded = input.split(':').skip(1).all(|part| part.len() == 2);

        NaiveTime::parse_from_str(input, FINISH_TIME_FORMAT)
            .ok()
            // chrono reads `:60` as a leap second folded into the previous second
            .filter(|t| padded && t.nanosecond() < 1_000_000_000)
            .map(|t| FinishTime(t.num_seconds_from_midnight()))
            .ok_or_else(|| ProcessingError::InvalidFinishTime { input: s.to_string() })
    }
}

/// Serializes a finish time as whole seconds instead of `H:MM:SS`
pub fn serialize_seconds<S>(time: &FinishTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer
{
    serializer.serialize_u32(time.0)
}

pub fn deserialize_seconds<'de, D>(deserializer: D) -> Result<FinishTime, D::Error>
where
    D: Deserializer<'de>
{
    let seconds = u32::deserialize(deserializer)?;
    if seconds > MAX_FINISH_SECONDS {
        return Err(serde::de::Error::custom(format!(
            "finish time of {} seconds exceeds {}",
            seconds, MAX_FINISH_SECONDS
        )));
    }

    Ok(FinishTime(seconds))
}

impl TryFrom<String> for FinishTime {
    type Error = ProcessingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FinishTime> for String {
    fn from(value: FinishTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for FinishTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (minutes, seconds) = (self.0 / 60, self.0 % 60);
        write!(f, "{}:{:02}:{:02}", minutes / 60, minutes % 60, seconds)
    }
}
