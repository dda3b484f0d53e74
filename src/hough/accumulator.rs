//! Vote accumulation in quantized parameter space.
//!
//! Line mode walks every edge pixel and every θ bin, computing
//! ρ = x·cosθ + y·sinθ with per-bin trigonometry precomputed once. This is
//! the dominant compute path, O(H·W·n_bins_theta), written as tight nested
//! row iteration. Gradient-directed variants cast a single vote per pixel
//! (lines) or one vote pair per radius bin (circles) instead.
//!
//! With the `parallel` feature the line voting pass partitions the mask by
//! rows into per-worker partial accumulators that are reduced by summation,
//! so results are identical to the serial path.
use crate::angle::fold_half_turn;
use crate::error::{DetectError, Result};
use crate::hough::axes::{LineAxes, RadiusAxis};
use crate::image::{EdgeMask, ImageF32, ImageView};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// ρ-major grid of vote counts, one cell per (ρ bin, θ bin) pair.
///
/// Created zeroed, filled by exactly one voting pass, then read-only.
#[derive(Clone, Debug)]
pub struct Accumulator {
    n_rho: usize,
    n_theta: usize,
    data: Vec<u32>,
}

impl Accumulator {
    pub(crate) fn new(n_rho: usize, n_theta: usize) -> Self {
        Self {
            n_rho,
            n_theta,
            data: vec![0; n_rho * n_theta],
        }
    }

    pub(crate) fn from_counts(n_rho: usize, n_theta: usize, data: Vec<u32>) -> Self {
        debug_assert_eq!(data.len(), n_rho * n_theta);
        Self {
            n_rho,
            n_theta,
            data,
        }
    }

    #[inline]
    pub fn n_rho(&self) -> usize {
        self.n_rho
    }

    #[inline]
    pub fn n_theta(&self) -> usize {
        self.n_theta
    }

    #[inline]
    pub fn get(&self, rho_idx: usize, theta_idx: usize) -> u32 {
        self.data[rho_idx * self.n_theta + theta_idx]
    }

    #[inline]
    pub fn row(&self, rho_idx: usize) -> &[u32] {
        let start = rho_idx * self.n_theta;
        &self.data[start..start + self.n_theta]
    }

    /// Flat row-major view of all cells.
    #[inline]
    pub fn counts(&self) -> &[u32] {
        &self.data
    }

    /// Sum of all votes.
    pub fn total_votes(&self) -> u64 {
        self.data.iter().map(|&v| v as u64).sum()
    }
}

/// Per-θ-bin cosine/sine tables shared by every vote.
struct TrigTables {
    cos: Vec<f32>,
    sin: Vec<f32>,
}

impl TrigTables {
    fn new(axes: &LineAxes) -> Self {
        Self {
            cos: axes.theta.iter().map(|t| t.cos()).collect(),
            sin: axes.theta.iter().map(|t| t.sin()).collect(),
        }
    }
}

/// Cast one vote per θ bin for every edge pixel of a mask row.
fn vote_row(
    mask_row: &[bool],
    y: usize,
    axes: &LineAxes,
    trig: &TrigTables,
    counts: &mut [u32],
) -> Result<()> {
    let n_theta = axes.n_bins_theta();
    let yf = y as f32;
    for (x, &is_edge) in mask_row.iter().enumerate() {
        if !is_edge {
            continue;
        }
        let xf = x as f32;
        for t in 0..n_theta {
            let rho = xf * trig.cos[t] + yf * trig.sin[t];
            let r = axes.rho_index(rho)?;
            counts[r * n_theta + t] += 1;
        }
    }
    Ok(())
}

/// Accumulate direction-blind line votes over the whole mask.
pub fn vote_lines(mask: &EdgeMask, axes: &LineAxes) -> Result<Accumulator> {
    let trig = TrigTables::new(axes);
    let counts = vote_lines_counts(mask, axes, &trig)?;
    Ok(Accumulator::from_counts(
        axes.n_bins_rho(),
        axes.n_bins_theta(),
        counts,
    ))
}

#[cfg(not(feature = "parallel"))]
fn vote_lines_counts(mask: &EdgeMask, axes: &LineAxes, trig: &TrigTables) -> Result<Vec<u32>> {
    let mut counts = vec![0u32; axes.n_bins_rho() * axes.n_bins_theta()];
    for y in 0..mask.h {
        vote_row(mask.row(y), y, axes, trig, &mut counts)?;
    }
    Ok(counts)
}

#[cfg(feature = "parallel")]
fn vote_lines_counts(mask: &EdgeMask, axes: &LineAxes, trig: &TrigTables) -> Result<Vec<u32>> {
    let len = axes.n_bins_rho() * axes.n_bins_theta();
    (0..mask.h)
        .into_par_iter()
        .try_fold(
            || vec![0u32; len],
            |mut partial, y| {
                vote_row(mask.row(y), y, axes, trig, &mut partial)?;
                Ok(partial)
            },
        )
        .try_reduce(
            || vec![0u32; len],
            |mut left, right| {
                for (dst, src) in left.iter_mut().zip(&right) {
                    *dst += src;
                }
                Ok(left)
            },
        )
}

/// Accumulate one vote per edge pixel at the θ bin implied by the local
/// gradient direction, with ρ computed from that bin's θ value.
///
/// Trades recall for speed: each pixel touches a single cell instead of
/// `n_bins_theta`, at the cost of sensitivity to gradient noise.
pub fn vote_lines_directed(
    mask: &EdgeMask,
    directions: &ImageF32,
    axes: &LineAxes,
) -> Result<Accumulator> {
    let trig = TrigTables::new(axes);
    let n_theta = axes.n_bins_theta();
    let mut acc = Accumulator::new(axes.n_bins_rho(), n_theta);
    for y in 0..mask.h {
        let mask_row = mask.row(y);
        let dir_row = directions.row(y);
        let yf = y as f32;
        for (x, &is_edge) in mask_row.iter().enumerate() {
            if !is_edge {
                continue;
            }
            let t = axes.theta_index(dir_row[x])?;
            let rho = x as f32 * trig.cos[t] + yf * trig.sin[t];
            let r = axes.rho_index(rho)?;
            acc.data[r * n_theta + t] += 1;
        }
    }
    Ok(acc)
}

/// Radius-major stack of H×W center planes for circle voting.
#[derive(Clone, Debug)]
pub struct CircleAccumulator {
    w: usize,
    h: usize,
    n_r: usize,
    data: Vec<u32>,
}

impl CircleAccumulator {
    pub(crate) fn new(w: usize, h: usize, n_r: usize) -> Self {
        Self {
            w,
            h,
            n_r,
            data: vec![0; w * h * n_r],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    #[inline]
    pub fn n_radii(&self) -> usize {
        self.n_r
    }

    /// The H×W center plane of one radius bin.
    #[inline]
    pub fn plane(&self, r_idx: usize) -> &[u32] {
        let start = r_idx * self.w * self.h;
        &self.data[start..start + self.w * self.h]
    }

    #[inline]
    pub fn get(&self, r_idx: usize, cy: usize, cx: usize) -> u32 {
        self.data[(r_idx * self.h + cy) * self.w + cx]
    }

    pub fn total_votes(&self) -> u64 {
        self.data.iter().map(|&v| v as u64).sum()
    }
}

/// Accumulate circle-center votes from gradient directions.
///
/// Each edge pixel proposes two candidate centers per radius bin, one on
/// either side along the gradient. Centers are rounded to the pixel grid and
/// clamped into the plane so boundary candidates keep their votes.
pub fn vote_circles(
    mask: &EdgeMask,
    directions: &ImageF32,
    radii: &RadiusAxis,
) -> Result<CircleAccumulator> {
    let (w, h) = (mask.w, mask.h);
    let mut acc = CircleAccumulator::new(w, h, radii.len());
    for y in 0..h {
        let mask_row = mask.row(y);
        let dir_row = directions.row(y);
        for (x, &is_edge) in mask_row.iter().enumerate() {
            if !is_edge {
                continue;
            }
            let phi = dir_row[x];
            if !phi.is_finite() {
                return Err(DetectError::OutOfRangeIndex(format!(
                    "gradient direction at ({x}, {y}) is not finite: {phi}"
                )));
            }
            let (sin_phi, cos_phi) = fold_half_turn(phi).sin_cos();
            for (r_idx, &radius) in radii.values.iter().enumerate() {
                let dx = radius * cos_phi;
                let dy = radius * sin_phi;
                for (cx, cy) in [
                    (x as f32 + dx, y as f32 + dy),
                    (x as f32 - dx, y as f32 - dy),
                ] {
                    let cx = (cx.round() as i64).clamp(0, (w - 1) as i64) as usize;
                    let cy = (cy.round() as i64).clamp(0, (h - 1) as i64) as usize;
                    acc.data[(r_idx * h + cy) * w + cx] += 1;
                }
            }
        }
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_4;

    fn axes_5x5() -> LineAxes {
        LineAxes::new(5, 5, 10, 10).expect("axes")
    }

    #[test]
    fn empty_mask_yields_zero_accumulator() {
        let mask = EdgeMask::new(5, 5);
        let acc = vote_lines(&mask, &axes_5x5()).expect("vote");
        assert_eq!(acc.total_votes(), 0);
        assert!(acc.counts().iter().all(|&v| v == 0));
    }

    #[test]
    fn single_pixel_votes_once_per_theta_bin() {
        let mask = EdgeMask::from_points(5, 5, &[(2, 2)]);
        let axes = axes_5x5();
        let acc = vote_lines(&mask, &axes).expect("vote");
        assert_eq!(acc.total_votes(), axes.n_bins_theta() as u64);
        // One vote per column, each in exactly one row.
        for t in 0..axes.n_bins_theta() {
            let column_votes: u32 = (0..axes.n_bins_rho()).map(|r| acc.get(r, t)).sum();
            assert_eq!(column_votes, 1, "theta column {t}");
        }
        assert!(acc.counts().iter().all(|&v| v <= 1));
    }

    #[test]
    fn collinear_pixels_reinforce_a_common_cell() {
        // Pixels on the horizontal line y = 3: ρ = 3·sinθ, shared at θ = π/2.
        let mask = EdgeMask::from_points(9, 9, &[(1, 3), (4, 3), (7, 3)]);
        let axes = LineAxes::new(9, 9, 32, 32).expect("axes");
        let acc = vote_lines(&mask, &axes).expect("vote");
        let t = axes.theta_index(std::f32::consts::FRAC_PI_2).unwrap();
        let r = axes.rho_index(3.0).unwrap();
        assert!(
            acc.get(r, t) >= 2,
            "expected reinforcement at ({r}, {t}), got {}",
            acc.get(r, t)
        );
    }

    #[test]
    fn directed_voting_casts_one_vote_per_pixel() {
        let mask = EdgeMask::from_points(9, 9, &[(1, 3), (4, 3), (7, 3)]);
        // Horizontal line, gradient points straight up.
        let dirs = ImageF32::from_fn(9, 9, |_, _| std::f32::consts::FRAC_PI_2);
        let axes = LineAxes::new(9, 9, 32, 32).expect("axes");
        let acc = vote_lines_directed(&mask, &dirs, &axes).expect("vote");
        assert_eq!(acc.total_votes(), 3);
        let t = axes.theta_index(std::f32::consts::FRAC_PI_2).unwrap();
        let r = axes.rho_index(3.0 * axes.theta[t].sin()).unwrap();
        assert_eq!(acc.get(r, t), 3);
    }

    #[test]
    fn directed_voting_rejects_nan_direction() {
        let mask = EdgeMask::from_points(5, 5, &[(2, 2)]);
        let mut dirs = ImageF32::new(5, 5);
        dirs.set(2, 2, f32::NAN);
        let axes = axes_5x5();
        assert!(matches!(
            vote_lines_directed(&mask, &dirs, &axes),
            Err(DetectError::OutOfRangeIndex(_))
        ));
    }

    #[test]
    fn circle_voting_places_two_centers_per_radius() {
        let mask = EdgeMask::from_points(21, 21, &[(10, 6)]);
        // Gradient pointing along +y: centers at (10, 6 ± r).
        let dirs = ImageF32::from_fn(21, 21, |_, _| std::f32::consts::FRAC_PI_2);
        let radii = RadiusAxis::new(4.0, 4.0, 1).expect("radii");
        let acc = vote_circles(&mask, &dirs, &radii).expect("vote");
        assert_eq!(acc.total_votes(), 2);
        assert_eq!(acc.get(0, 10, 10), 1);
        assert_eq!(acc.get(0, 2, 10), 1);
    }

    #[test]
    fn circle_voting_clamps_offframe_centers() {
        let mask = EdgeMask::from_points(9, 9, &[(4, 1)]);
        let dirs = ImageF32::from_fn(9, 9, |_, _| std::f32::consts::FRAC_PI_2);
        let radii = RadiusAxis::new(5.0, 5.0, 1).expect("radii");
        let acc = vote_circles(&mask, &dirs, &radii).expect("vote");
        // (4, 6) stays in frame, (4, -4) clamps onto the top row.
        assert_eq!(acc.get(0, 6, 4), 1);
        assert_eq!(acc.get(0, 0, 4), 1);
    }

    #[test]
    fn diagonal_line_reinforces_at_minus_quarter_turn() {
        // y = x has normal angle −π/4 with ρ = 0.
        let mask = EdgeMask::from_points(16, 16, &[(2, 2), (7, 7), (12, 12)]);
        let axes = LineAxes::new(16, 16, 48, 48).expect("axes");
        let acc = vote_lines(&mask, &axes).expect("vote");
        let t = axes.theta_index(-FRAC_PI_4).unwrap();
        let r = axes.rho_index(0.0).unwrap();
        assert!(acc.get(r, t) >= 2);
    }
}
