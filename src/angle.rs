//! Angle utilities for the θ axis of the line parameter space.

use std::f32::consts::{FRAC_PI_2, PI};

/// Folds an angle into the range [−π/2, π/2).
///
/// Line orientations are π-periodic, so a gradient direction anywhere in
/// (−π, π] maps onto the θ axis by repeated shifts of π. The upper endpoint
/// folds to −π/2 to keep the interval half-open.
#[inline]
pub fn fold_half_turn(angle: f32) -> f32 {
    let mut folded = (angle + FRAC_PI_2).rem_euclid(PI) - FRAC_PI_2;
    if folded >= FRAC_PI_2 {
        folded = -FRAC_PI_2;
    }
    folded
}

/// Computes the smallest unsigned difference between two line orientations,
/// treating antipodal directions as equivalent (i.e. π apart → 0).
#[inline]
pub fn orientation_difference(a: f32, b: f32) -> f32 {
    let mut diff = (a - b).abs();
    if diff > PI {
        diff = diff.rem_euclid(PI);
    }
    if diff > FRAC_PI_2 {
        PI - diff
    } else {
        diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn fold_half_turn_identity_inside_range() {
        assert!(approx_eq(fold_half_turn(0.3), 0.3));
        assert!(approx_eq(fold_half_turn(-1.2), -1.2));
    }

    #[test]
    fn fold_half_turn_wraps_by_pi() {
        assert!(approx_eq(fold_half_turn(FRAC_PI_2 + 0.1), -FRAC_PI_2 + 0.1));
        assert!(approx_eq(fold_half_turn(PI), 0.0));
        assert!(approx_eq(fold_half_turn(-PI + 0.2), 0.2));
        assert!(approx_eq(fold_half_turn(3.0 * FRAC_PI_4), -FRAC_PI_4));
    }

    #[test]
    fn fold_half_turn_upper_endpoint_is_excluded() {
        assert!(approx_eq(fold_half_turn(FRAC_PI_2), -FRAC_PI_2));
    }

    #[test]
    fn orientation_difference_is_symmetric() {
        let a = 0.25f32;
        let b = 1.4f32;
        assert!(approx_eq(
            orientation_difference(a, b),
            orientation_difference(b, a)
        ));
    }

    #[test]
    fn orientation_difference_handles_wrap() {
        assert!(approx_eq(orientation_difference(0.0, PI), 0.0));
        assert!(approx_eq(
            orientation_difference(FRAC_PI_4, -FRAC_PI_4),
            FRAC_PI_2
        ));
    }
}
