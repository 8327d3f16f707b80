//! Arc angle normalization.
//!
//! Raw arc specifications are ambiguous: angles are unbounded reals (a
//! caller may say "2π to 3π"), the pair may span several whole turns, and
//! drawing direction flips which endpoint is the start. Normalization
//! collapses every equivalent specification into a single canonical
//! `[start, start + sweep]` window so that point evaluation is one trig
//! call with no further case analysis.

use std::f64::consts::TAU;

use super::TOLERANCE;

/// Canonical form of an arc's angular range.
///
/// `sweep` is always a non-negative magnitude in `[0, 2π]`; direction is
/// folded into how the parameter maps to an angle, never into a negative
/// sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedArc {
    /// Angle (radians) at parameter t = 0 for a counter-clockwise arc.
    pub start_angle: f64,
    /// Angular extent of the arc, in `[0, 2π]`.
    pub sweep: f64,
    /// Whether the arc is traversed clockwise.
    pub clockwise: bool,
}

impl NormalizedArc {
    /// Maps a parameter `t` in `[0, 1]` to an angle in the canonical window.
    ///
    /// A clockwise arc traverses the same window in reverse, so `t` is
    /// flipped before the linear map.
    #[must_use]
    pub fn angle_at(&self, t: f64) -> f64 {
        let t = if self.clockwise { 1.0 - t } else { t };
        self.sweep * t + self.start_angle
    }
}

/// Returns whether two angles coincide modulo whole turns.
fn coincides_mod_tau(delta: f64) -> bool {
    let r = delta.rem_euclid(TAU);
    r < TOLERANCE || TAU - r < TOLERANCE
}

/// Normalizes a raw `(start_angle, end_angle, clockwise)` specification.
///
/// Executed once when an arc is configured:
///
/// 1. A clockwise arc swaps its endpoints, so that internally the window
///    always runs counter-clockwise.
/// 2. A span of one full turn or more is clamped to exactly one turn.
/// 3. Endpoints that coincide modulo whole turns form a zero-length arc.
/// 4. Otherwise the start is reduced into `[0, 2π)` and the end pulled
///    down into the single-turn window anchored at the reduced start.
/// 5. The sweep is the distance from start to end within that window,
///    wrapping past the 0/2π seam when the reduced start exceeds the end.
#[must_use]
pub fn normalize(start_angle: f64, end_angle: f64, clockwise: bool) -> NormalizedArc {
    let (mut start, mut end) = if clockwise {
        (end_angle, start_angle)
    } else {
        (start_angle, end_angle)
    };

    if end - start >= TAU {
        // Full circle (or more): clamp to exactly one turn.
        end = start + TAU;
    } else if (start - end).abs() > 0.0 {
        if coincides_mod_tau(start - end) {
            // Same angle some whole number of turns apart: zero-length arc.
            end = start;
        } else {
            start = start.rem_euclid(TAU);
            while end > start + TAU {
                end -= TAU;
            }
        }
    }

    let sweep = if start > end {
        // The window wraps past the 0/2π seam.
        TAU - start + end
    } else {
        end - start
    };

    NormalizedArc {
        start_angle: start,
        sweep,
        clockwise,
    }
}
