//! Spread accuracy: the share of shots that land on a target of fixed size.
//!
//! Deviation angles are modelled as a zero-mean Gaussian with the weapon's
//! spread as standard deviation. A shot hits when its deviation is smaller
//! than the angle the target subtends at the given range.

use std::f64::consts::{FRAC_2_SQRT_PI, SQRT_2};

use crate::config::EngineConfig;

/// Fraction of shots hitting a target of radius [`EngineConfig::TARGET_RADIUS`].
///
/// ```text
/// angle  = atan2(radius, range) in degrees
/// factor = 2 × Φ(angle / spread) - 1
/// ```
///
/// A non-positive spread is perfectly accurate.
pub fn spread_factor(range: f64, spread_degrees: f64) -> f64 {
    if spread_degrees <= 0.0 || spread_degrees.is_nan() {
        return 1.0;
    }
    let angle = EngineConfig::TARGET_RADIUS.atan2(range).to_degrees();
    2.0 * standard_normal_cdf(angle / spread_degrees) - 1.0
}

/// Standard normal cumulative distribution function Φ.
pub fn standard_normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / SQRT_2))
}

/// Error function.
///
/// Uses the all-positive series
/// `erf(x) = 2/√π · e^(-x²) · Σ (2x²)^n · x / (1·3·…·(2n+1))`,
/// which avoids cancellation; beyond |x| = 6 the result is ±1 in f64.
pub fn erf(x: f64) -> f64 {
    const SATURATION: f64 = 6.0;
    const MAX_TERMS: u32 = 1000;

    if x.is_nan() {
        return f64::NAN;
    }
    let ax = x.abs();
    if ax >= SATURATION {
        return x.signum();
    }

    let two_x_sq = 2.0 * ax * ax;
    let mut term = ax;
    let mut sum = ax;
    for n in 1..MAX_TERMS {
        term *= two_x_sq / f64::from(2 * n + 1);
        sum += term;
        if term <= sum * f64::EPSILON {
            break;
        }
    }

    let value = FRAC_2_SQRT_PI * (-ax * ax).exp() * sum;
    value.min(1.0).copysign(x)
}
