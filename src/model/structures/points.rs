use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    iter::Sum,
    ops::{Add, AddAssign}
};

use serde::{Deserialize, Serialize};

use crate::model::constants::POINTS_PRECISION;

/// A point award or a sum of point awards.
///
/// Tied finishers share the average of the point slots they occupy, so awards can be
/// fractional. Equality, ordering and hashing go through a fixed-precision key; two sums
/// of the same awards compare equal no matter the order they were added in.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Points(f64);

impl Points {
    pub const ZERO: Points = Points(0.0);

    pub fn new(value: f64) -> Points {
        Points(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.key() > 0
    }

    fn key(self) -> i64 {
        (self.0 * POINTS_PRECISION).round() as i64
    }
}

impl From<u32> for Points {
    fn from(value: u32) -> Self {
        Points(value as f64)
    }
}

impl PartialEq for Points {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Points {}

impl PartialOrd for Points {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Points {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Hash for Points {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl Add for Points {
    type Output = Points;

    fn add(self, rhs: Self) -> Self::Output {
        Points(self.0 + rhs.0)
    }
}

impl AddAssign for Points {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Points {
    fn sum<I: Iterator<Item = Points>>(iter: I) -> Self {
        iter.fold(Points::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Points> for Points {
    fn sum<I: Iterator<Item = &'a Points>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
