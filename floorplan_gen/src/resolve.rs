// Constraint resolution: turning a room's bounds into sampled dimensions.
//
// `narrow_range` shrinks a [min, max] interval toward its midpoint according
// to the variety knob. `sample_room_dimensions` narrows the side-length range
// once and draws a width from it. The height floor is the larger of the
// minimum-area quotient and the narrowed low end, and the height is drawn from
// `[floor, narrowed high]` narrowed a second time. Both draws snap to the
// 10 cm grid.
//
// Arithmetic safety, not validation: a crossed range collapses onto
// `min_dimension`, and every sample is clamped into the room's original
// envelope. A floor above the narrowed high end makes the second narrowing
// meet between the two; an infeasible minimum area therefore ends up clamped
// to the maximum side and the area requirement goes unmet. Nothing here can
// fail.
//
// **Critical constraint: determinism.** Each call consumes exactly two draws,
// width first, then height.

use crate::config::RoomConstraints;
use crate::prng::{DEFAULT_STEP, SeedRng};

/// Sampled footprint of one room, before placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub w: f64,
    pub h: f64,
    pub area: f64,
}

/// Narrow `[min, max]` toward its midpoint. `variety` is clamped to [0, 1]:
/// 0 collapses to the midpoint, 1 returns the range unchanged. The low end
/// never goes negative and the high end never drops below the low end.
pub fn narrow_range(min: f64, max: f64, variety: f64) -> (f64, f64) {
    let midpoint = (min + max) * 0.5;
    let half_span = (max - min) * 0.5;
    let span = half_span * variety.clamp(0.0, 1.0);
    let low = (midpoint - span).max(0.0);
    let high = midpoint + span;
    (low, high.max(low))
}

/// Sample a width and height for one room.
pub fn sample_room_dimensions(
    constraints: &RoomConstraints,
    variety: f64,
    rng: &mut SeedRng,
) -> Dimensions {
    let min = constraints.min_dimension;
    // A crossed range degenerates to the single point `min`.
    let max = constraints.max_dimension.max(min);

    let (w_low, w_high) = narrow_range(min, max, variety);
    let w = rng
        .stepped_uniform(w_low, w_high, DEFAULT_STEP)
        .clamp(min, max);

    // `f64::max` ignores NaN, so a zero width with zero area falls back to `w_low`.
    let min_height = (constraints.min_area / w).max(w_low);
    let (h_low, h_high) = narrow_range(min_height, w_high, variety);
    let h = rng
        .stepped_uniform(h_low, h_high, DEFAULT_STEP)
        .clamp(min, max);

    Dimensions { w, h, area: w * h }
}
