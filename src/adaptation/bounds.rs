//! Numeric bounds shared by every adaptation component.
//!
//! Upstream scoring is heuristic and can drift slightly outside its nominal
//! range, so inputs are clamped rather than rejected.  NaN maps to the lower
//! bound.

/// Lower bound of every adjusted confidence value.
pub const MINIMUM_CONFIDENCE_LEVEL: f32 = 0.1;
/// Upper bound of every adjusted confidence value.
pub const MAXIMUM_CONFIDENCE_LEVEL: f32 = 1.0;
/// Lowest task complexity.
pub const MIN_COMPLEXITY: f32 = 1.0;
/// Highest task complexity.
pub const MAX_COMPLEXITY: f32 = 10.0;
/// Bound on the stress-driven confidence delta (symmetric).
pub const CONFIDENCE_BOOST_LIMIT: f32 = 0.3;

/// Clamp `value` into `[lo, hi]`; NaN becomes `lo`.
pub fn clamp_range(value: f32, lo: f32, hi: f32) -> f32 {
    if value.is_nan() {
        lo
    } else {
        value.clamp(lo, hi)
    }
}

/// Clamp into `[0.0, 1.0]`.
pub fn unit(value: f32) -> f32 {
    clamp_range(value, 0.0, 1.0)
}

/// Clamp a task complexity into `[1, 10]`.
pub fn complexity(value: f32) -> f32 {
    clamp_range(value, MIN_COMPLEXITY, MAX_COMPLEXITY)
}
