//! Peak extraction: 2D non-maximum suppression and vote thresholding.
//!
//! Suppression keeps an interior cell iff its value is ≥ all 8 immediate
//! neighbors, so plateaus of equal values survive as ties. The outermost
//! one-cell border lacks a full neighborhood and is defined suppressed to
//! zero. Each cell's classification reads only its own neighborhood, so the
//! pass has no ordering dependency and is idempotent.
use crate::hough::accumulator::{Accumulator, CircleAccumulator};
use serde::Serialize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A surviving accumulator cell: bin indices plus its vote count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Peak {
    /// Row index into the ρ axis
    pub rho_idx: usize,
    /// Column index into the θ axis
    pub theta_idx: usize,
    /// Vote count of the cell
    pub votes: u32,
}

/// A surviving circle-accumulator cell: (radius, center) bin indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CirclePeak {
    /// Index into the radius axis
    pub r_idx: usize,
    /// Center row (y) in pixels
    pub cy: usize,
    /// Center column (x) in pixels
    pub cx: usize,
    /// Vote count of the cell
    pub votes: u32,
}

/// Suppress non-maxima on one row of a `w × h` plane.
///
/// Row 0 and row h−1 are border rows and stay zero; interior cells survive
/// when ≥ all 8 neighbors.
fn nms_row(src: &[u32], w: usize, y: usize, h: usize, out_row: &mut [u32]) {
    if y == 0 || y + 1 >= h {
        return;
    }
    let prev = &src[(y - 1) * w..y * w];
    let row = &src[y * w..(y + 1) * w];
    let next = &src[(y + 1) * w..(y + 2) * w];
    for x in 1..w - 1 {
        let v = row[x];
        let is_max = v >= prev[x - 1]
            && v >= prev[x]
            && v >= prev[x + 1]
            && v >= row[x - 1]
            && v >= row[x + 1]
            && v >= next[x - 1]
            && v >= next[x]
            && v >= next[x + 1];
        if is_max {
            out_row[x] = v;
        }
    }
}

/// 8-neighborhood non-maximum suppression over a flat `w × h` plane.
///
/// Returns a fresh plane; the input is not mutated. Planes narrower or
/// shorter than 3 cells have no interior and come back all zero.
pub(crate) fn nms2d_plane(src: &[u32], w: usize, h: usize) -> Vec<u32> {
    let mut out = vec![0u32; w * h];
    if w < 3 || h < 3 {
        return out;
    }
    #[cfg(feature = "parallel")]
    out.par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, out_row)| nms_row(src, w, y, h, out_row));
    #[cfg(not(feature = "parallel"))]
    for (y, out_row) in out.chunks_mut(w).enumerate() {
        nms_row(src, w, y, h, out_row);
    }
    out
}

/// Non-maximum suppression over a line accumulator.
pub fn nms2d(acc: &Accumulator) -> Accumulator {
    let counts = nms2d_plane(acc.counts(), acc.n_theta(), acc.n_rho());
    Accumulator::from_counts(acc.n_rho(), acc.n_theta(), counts)
}

/// Collect every non-zero cell with at least `threshold` votes.
///
/// Cells are visited in row-major order; callers needing a different order
/// must sort explicitly.
pub fn threshold_peaks(acc: &Accumulator, threshold: u32) -> Vec<Peak> {
    let mut peaks = Vec::new();
    for r in 0..acc.n_rho() {
        for (t, &votes) in acc.row(r).iter().enumerate() {
            if votes != 0 && votes >= threshold {
                peaks.push(Peak {
                    rho_idx: r,
                    theta_idx: t,
                    votes,
                });
            }
        }
    }
    peaks
}

/// Per-radius-slice suppression and thresholding of a circle accumulator.
///
/// Each radius bin's H×W center plane is suppressed independently with the
/// same 8-neighborhood rule, then thresholded.
pub fn circle_peaks(acc: &CircleAccumulator, threshold: u32) -> Vec<CirclePeak> {
    let (w, h) = (acc.width(), acc.height());
    let mut peaks = Vec::new();
    for r_idx in 0..acc.n_radii() {
        let suppressed = nms2d_plane(acc.plane(r_idx), w, h);
        for cy in 0..h {
            for cx in 0..w {
                let votes = suppressed[cy * w + cx];
                if votes != 0 && votes >= threshold {
                    peaks.push(CirclePeak {
                        r_idx,
                        cy,
                        cx,
                        votes,
                    });
                }
            }
        }
    }
    peaks
}
