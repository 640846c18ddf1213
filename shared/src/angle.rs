//! Sector <-> rotation math.
//!
//! Angles are degrees, measured clockwise from the pointer at 12 o'clock.
//! Sector `i` of `n` covers `[i * w, (i + 1) * w)` where `w = 360 / n`.

use crate::constants::{BOUNDARY_EPSILON_DEG, FULL_TURN_DEG};
use crate::random::RandomSource;

/// Reduces any finite angle into `[0, 360)`.
pub fn normalize(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(FULL_TURN_DEG);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if normalized >= FULL_TURN_DEG {
        0.0
    } else {
        normalized
    }
}

/// Nudge applied before flooring so an exact boundary always falls into the following sector.
/// Shrinks with the sector so it stays well inside the jitter margin of `w / 4`.
pub fn boundary_epsilon(sector_width: f64) -> f64 {
    BOUNDARY_EPSILON_DEG.min(sector_width / 8.0)
}

/// Absolute rotation for `sector_index` with an explicit jitter `offset`.
/// `offset` must lie in `[-w/4, w/4)`.
pub fn target_rotation_with_offset(
    sector_index: usize,
    sector_width: f64,
    revolutions: u32,
    offset: f64,
) -> f64 {
    let center = sector_index as f64 * sector_width + sector_width / 2.0;
    FULL_TURN_DEG * revolutions as f64 + center + offset
}

/// Absolute rotation that rests inside `sector_index`, jittered by up to a quarter sector.
pub fn target_rotation(
    sector_index: usize,
    sector_width: f64,
    revolutions: u32,
    rng: &mut dyn RandomSource,
) -> f64 {
    let max_offset = sector_width / 4.0;
    let offset = (rng.next_f64() * 2.0 - 1.0) * max_offset;
    target_rotation_with_offset(sector_index, sector_width, revolutions, offset)
}

/// Amount to add to `prior_angle` so the wheel comes to rest at `target` (mod 360).
///
/// The prior resting angle is first turned forward back to 0, so the result is
/// never less than the full revolutions already baked into `target`.
pub fn spin_delta(prior_angle: f64, target: f64) -> f64 {
    let realign = normalize(FULL_TURN_DEG - normalize(prior_angle));
    target + realign
}

/// Sector under the pointer for an absolute rotation.
pub fn resolve_sector(absolute_angle: f64, sector_count: usize) -> usize {
    let n = sector_count.max(1);
    let sector_width = FULL_TURN_DEG / n as f64;
    let safe_angle = normalize(absolute_angle) + boundary_epsilon(sector_width);
    ((safe_angle / sector_width).floor() as usize) % n
}

/// Lower and upper edges of a sector, in degrees.
pub fn sector_bounds(sector_index: usize, sector_width: f64) -> (f64, f64) {
    let start = sector_index as f64 * sector_width;
    (start, start + sector_width)
}
