/// Length of one pulse animation cycle.
pub const DEFAULT_CYCLE_MS: u64 = 3000;

/// Normalised position within the repeating animation cycle.
///
/// A sawtooth of wall-clock time: rises linearly over `cycle_ms`
/// milliseconds, then wraps to zero. `phase(0, c) == phase(c, c) == 0`.
///
/// `cycle_ms` must be non-zero, validated at configuration load.
#[inline]
pub fn phase(now_ms: u64, cycle_ms: u64) -> f64 {
    debug_assert!(cycle_ms > 0, "cycle duration must be non-zero");
    (now_ms % cycle_ms) as f64 / cycle_ms as f64
}

/// Index into a route's precomputed interpolation points.
///
/// `floor(now_seconds * speed) mod points`, an integer in `[0, points)`.
/// Selecting from precomputed points keeps per-tick motion cost constant,
/// the continuous [`phase`] is not involved in plane placement.
#[inline]
pub fn frame_index(now_ms: u64, speed: f64, points: usize) -> usize {
    debug_assert!(points > 0, "route resolution must be non-zero");
    let ticks = (now_ms as f64 / 1000.0 * speed).floor();
    (ticks as u64 % points as u64) as usize
}
