//! Decimal-place rounding of output coordinates.

/// Rounds `value` to `places` fractional digits, half away from zero.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn rounds_to_two_places() {
        assert!((round_to(1.234, 2) - 1.23).abs() < TOL);
        assert!((round_to(1.236, 2) - 1.24).abs() < TOL);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert!((round_to(0.125, 2) - 0.13).abs() < TOL);
        assert!((round_to(-0.125, 2) + 0.13).abs() < TOL);
    }

    #[test]
    fn zero_places_rounds_to_integer() {
        assert!((round_to(2.5, 0) - 3.0).abs() < TOL);
        assert!((round_to(-2.5, 0) + 3.0).abs() < TOL);
    }

    #[test]
    fn preserves_already_rounded_values() {
        assert!((round_to(150.0, 3) - 150.0).abs() < TOL);
    }
}
