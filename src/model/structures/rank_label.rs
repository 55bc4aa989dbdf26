use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::model::{constants::DNF_LABEL, error::ProcessingError};

/// The rank shown for a weekly entry: a competition-ranking position or `DNF`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RankLabel {
    Position(u32),
    Dnf
}

impl fmt::Display for RankLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankLabel::Position(p) => write!(f, "{}", p),
            RankLabel::Dnf => f.write_str(DNF_LABEL)
        }
    }
}

impl FromStr for RankLabel {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(DNF_LABEL) {
            return Ok(RankLabel::Dnf);
        }

        match s.parse::<u32>() {
            Ok(p) if p > 0 => Ok(RankLabel::Position(p)),
            _ => Err(ProcessingError::InvalidRankLabel { input: s.to_string() })
        }
    }
}

impl TryFrom<String> for RankLabel {
    type Error = ProcessingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RankLabel> for String {
    fn from(value: RankLabel) -> Self {
        value.to_string()
    }
}
