use crate::model::{
    constants::{OVERFLOW_POINTS, POINTS_TABLE},
    structures::points::Points
};

/// Points for the 0-based point-table slot. Every slot past the table is worth the overflow value.
pub fn points_for_slot(slot: usize) -> Points {
    Points::from(POINTS_TABLE.get(slot).copied().unwrap_or(OVERFLOW_POINTS))
}

/// The award for a group of `len` finishers sharing one time, starting at `first_slot`.
/// The group splits the slots it occupies evenly; the result is not rounded.
pub fn average_points(first_slot: usize, len: usize) -> Points {
    if len == 0 {
        return Points::ZERO;
    }

    let total: Points = (first_slot..first_slot + len).map(points_for_slot).sum();
    Points::new(total.value() / len as f64)
}
