//! Trigonometric approximations used during filter design.
//!
//! Based on the Bhaskara I sine approximation, see
//! <https://en.wikipedia.org/wiki/Bhaskara_I%27s_sine_approximation_formula>.
//! Accurate enough for coefficient computation while keeping the flash
//! footprint free of a float math library.

#[allow(unused_imports)]
use micromath::F32Ext as _;

use core::f32::consts::{FRAC_PI_2, PI};

// Tangent saturates at this value instead of growing unbounded near its
// asymptotes. Designs close to the nyquist frequency stay finite, only
// less accurate.
const TAN_LIMIT: f32 = 10_000.0;
const COS_THRESHOLD: f32 = 1e-5;

/// Approximated sine.
///
/// The argument is reduced into `[-PI, PI]` and passed through the rational
/// formula `16x(PI - x) / (5 PI^2 - 4x(PI - x))`, exploiting odd symmetry
/// for the negative half. The absolute error stays below 0.0016 over
/// `[0, PI]`.
pub fn sin(x: f32) -> f32 {
    let mut x = x;
    while x > PI {
        x -= 2.0 * PI;
    }
    while x < -PI {
        x += 2.0 * PI;
    }

    let (x, sign) = if x < 0.0 { (-x, -1.0) } else { (x, 1.0) };

    let numerator = 16.0 * x * (PI - x);
    let denominator = 5.0 * PI * PI - 4.0 * x * (PI - x);
    sign * numerator / denominator
}

/// Approximated cosine, expressed as phase-shifted sine.
pub fn cos(x: f32) -> f32 {
    sin(x + FRAC_PI_2)
}

/// Approximated tangent, saturated near its asymptotes.
pub fn tan(x: f32) -> f32 {
    let c = cos(x);
    if c.abs() < COS_THRESHOLD {
        TAN_LIMIT
    } else {
        sin(x) / c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn given_argument_within_half_period_when_approximating_sine_it_stays_close_to_the_reference() {
        for i in 0..=1000 {
            let x = PI * i as f32 / 1000.0;
            let error = (sin(x) - libm::sinf(x)).abs();
            assert!(error < 0.0017, "error {} at {}", error, x);
        }
    }

    #[test]
    fn given_negative_argument_when_approximating_sine_it_keeps_odd_symmetry() {
        for i in 0..=100 {
            let x = PI * i as f32 / 100.0;
            assert_relative_eq!(sin(-x), -sin(x));
        }
    }

    #[test]
    fn given_argument_outside_half_period_when_approximating_sine_it_reduces_the_argument() {
        for k in 1..=5 {
            let offset = 2.0 * PI * k as f32;
            assert_abs_diff_eq!(sin(1.0 + offset), sin(1.0), epsilon = 1e-4);
            assert_abs_diff_eq!(sin(-1.0 - offset), sin(-1.0), epsilon = 1e-4);
        }
    }

    #[test]
    fn given_any_argument_when_approximating_cosine_it_follows_the_reference() {
        for i in 0..=1000 {
            let x = -PI + 2.0 * PI * i as f32 / 1000.0;
            assert_abs_diff_eq!(cos(x), libm::cosf(x), epsilon = 0.0017);
        }
    }

    #[test]
    fn given_argument_away_from_asymptotes_when_approximating_tangent_it_follows_the_reference() {
        for i in 0..=100 {
            let x = -1.2 + 2.4 * i as f32 / 100.0;
            assert_abs_diff_eq!(tan(x), libm::tanf(x), epsilon = 0.06);
        }
    }

    #[test]
    fn given_argument_at_asymptote_when_approximating_tangent_it_saturates() {
        assert_relative_eq!(tan(FRAC_PI_2), 10_000.0);
    }

    proptest! {
        #[test]
        fn sine_of_any_argument_stays_within_unit_range(x in -1000.0f32..1000.0) {
            let y = sin(x);
            prop_assert!((-1.001..=1.001).contains(&y));
        }
    }
}
