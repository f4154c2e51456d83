use maze_core::Point;

/// Straight-line distance rounded down to an integer.
///
/// Never exceeds the number of cardinal steps between the points, so it is an
/// admissible A* heuristic.
#[inline]
pub fn euclidean(a: Point, b: Point) -> u64 {
    let dx = u128::from(a.x.abs_diff(b.x));
    let dy = u128::from(a.y.abs_diff(b.y));
    // sqrt(2 * u32::MAX^2) fits in a u64.
    (dx * dx + dy * dy).isqrt() as u64
}

/// Squared straight-line distance, saturating at `u64::MAX`.
///
/// Preserves the ordering of [`euclidean`] but overestimates the remaining
/// step count beyond one step, so searches using it are greedy rather than
/// optimal.
#[inline]
pub fn squared_euclidean(a: Point, b: Point) -> u64 {
    let dx = u64::from(a.x.abs_diff(b.x));
    let dy = u64::from(a.y.abs_diff(b.y));
    (dx * dx).saturating_add(dy * dy)
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u64 {
    u64::from(a.x.abs_diff(b.x)) + u64::from(a.y.abs_diff(b.y))
}
