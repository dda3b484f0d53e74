//! Quantized parameter-space axes for line and circle voting.
//!
//! The line axes cover θ ∈ [−π/2, π/2] and ρ ∈ [−D, D] with D the image
//! diagonal, both inclusive of their endpoints. Quantization back from a
//! real value to a bin index uses `floor` with clamping into range so that
//! boundary overshoot at ρ = ±D (floating-point rounding) lands in the
//! outermost bin instead of being dropped.
use crate::angle::fold_half_turn;
use crate::error::{DetectError, Result};
use serde::Serialize;
use std::f32::consts::{FRAC_PI_2, PI};

/// `count` values uniformly spaced over [lo, hi], both ends included.
fn linspace(lo: f32, hi: f32, count: usize) -> Vec<f32> {
    if count == 1 {
        return vec![lo];
    }
    let step = (hi - lo) / (count - 1) as f32;
    (0..count).map(|i| lo + step * i as f32).collect()
}

/// Axis values of the ρ–θ accumulator for a given image size.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineAxes {
    /// θ bin values in radians, `n_bins_theta` entries over [−π/2, π/2]
    pub theta: Vec<f32>,
    /// ρ bin values in pixels, `n_bins_rho` entries over [−D, D]
    pub rho: Vec<f32>,
    /// Image diagonal length D = √(H² + W²)
    pub diagonal: f32,
}

impl LineAxes {
    /// Build axes for an `h × w` image with the requested bin counts.
    ///
    /// Both counts must be at least 2 so each axis has distinct endpoints.
    pub fn new(h: usize, w: usize, n_bins_rho: usize, n_bins_theta: usize) -> Result<Self> {
        if n_bins_rho < 2 || n_bins_theta < 2 {
            return Err(DetectError::InvalidConfiguration(format!(
                "bin counts must be >= 2, got n_bins_rho={n_bins_rho} n_bins_theta={n_bins_theta}"
            )));
        }
        if w == 0 || h == 0 {
            return Err(DetectError::InvalidConfiguration(format!(
                "image dimensions must be positive, got {w}x{h}"
            )));
        }
        let diagonal = ((h * h + w * w) as f32).sqrt();
        Ok(Self {
            theta: linspace(-FRAC_PI_2, FRAC_PI_2, n_bins_theta),
            rho: linspace(-diagonal, diagonal, n_bins_rho),
            diagonal,
        })
    }

    #[inline]
    pub fn n_bins_rho(&self) -> usize {
        self.rho.len()
    }

    #[inline]
    pub fn n_bins_theta(&self) -> usize {
        self.theta.len()
    }

    /// Quantize a ρ value to its row index, clamped into range.
    ///
    /// Fails only when ρ is non-finite and cannot be clamped at all.
    #[inline]
    pub fn rho_index(&self, rho: f32) -> Result<usize> {
        if !rho.is_finite() {
            return Err(DetectError::OutOfRangeIndex(format!(
                "rho is not finite: {rho}"
            )));
        }
        let n = self.rho.len();
        let raw = ((rho + self.diagonal) / (2.0 * self.diagonal) * n as f32).floor() as i64;
        Ok(raw.clamp(0, (n - 1) as i64) as usize)
    }

    /// Quantize an orientation angle to its θ column index, clamped into
    /// range. Angles outside [−π/2, π/2] are folded by π first, so any
    /// finite gradient direction is accepted; the inclusive +π/2 endpoint
    /// clamps into the last bin rather than folding, keeping axis values
    /// stable under re-quantization.
    #[inline]
    pub fn theta_index(&self, theta: f32) -> Result<usize> {
        if !theta.is_finite() {
            return Err(DetectError::OutOfRangeIndex(format!(
                "theta is not finite: {theta}"
            )));
        }
        let folded = if (-FRAC_PI_2..=FRAC_PI_2).contains(&theta) {
            theta
        } else {
            fold_half_turn(theta)
        };
        let n = self.theta.len();
        let raw = ((folded + FRAC_PI_2) / PI * n as f32).floor() as i64;
        Ok(raw.clamp(0, (n - 1) as i64) as usize)
    }
}

/// Radius bin values for circle voting.
///
/// The range is caller-supplied; a single-bin axis degenerates to `r_min`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadiusAxis {
    /// Radius bin values in pixels over [r_min, r_max]
    pub values: Vec<f32>,
}

impl RadiusAxis {
    pub fn new(r_min: f32, r_max: f32, n_bins_r: usize) -> Result<Self> {
        if n_bins_r == 0 {
            return Err(DetectError::InvalidConfiguration(
                "radius bin count must be positive".into(),
            ));
        }
        if !(r_min.is_finite() && r_max.is_finite()) || r_min <= 0.0 || r_max < r_min {
            return Err(DetectError::InvalidConfiguration(format!(
                "radius range must satisfy 0 < r_min <= r_max, got [{r_min}, {r_max}]"
            )));
        }
        Ok(Self {
            values: linspace(r_min, r_max, n_bins_r),
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
