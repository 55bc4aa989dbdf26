use serde::{Deserialize, Serialize};

use crate::model::error::ProcessingError;

/// How many of a player's best weeklies count towards their final season points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct IncludedWeeklies(u32);

impl IncludedWeeklies {
    pub fn new(count: i64) -> Result<IncludedWeeklies, ProcessingError> {
        match u32::try_from(count) {
            Ok(n) if n > 0 => Ok(IncludedWeeklies(n)),
            _ => Err(ProcessingError::InvalidIncludedWeeklies(count))
        }
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<i64> for IncludedWeeklies {
    type Error = ProcessingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        IncludedWeeklies::new(value)
    }
}

impl From<IncludedWeeklies> for i64 {
    fn from(value: IncludedWeeklies) -> Self {
        value.0 as i64
    }
}
