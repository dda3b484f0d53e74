//! Accumulator-based curve detection: voting, suppression, materialization.
//!
//! The pipeline is strictly linear with no retries or backtracking:
//! quantize the parameter space, vote, suppress + threshold, materialize.
//! A failure at any stage aborts the whole run; no partial peak list is
//! ever returned.
//!
//! Inputs are validated up front so `InvalidConfiguration` fires before any
//! accumulation work begins.

pub mod accumulator;
pub mod axes;
pub mod circles;
pub mod lines;
pub mod params;
pub mod peaks;

pub use accumulator::{vote_circles, vote_lines, vote_lines_directed, Accumulator, CircleAccumulator};
pub use axes::{LineAxes, RadiusAxis};
pub use circles::{materialize_circles, Circle};
pub use lines::{materialize_lines, Line};
pub use params::{CircleParams, LineParams};
pub use peaks::{circle_peaks, nms2d, threshold_peaks, CirclePeak, Peak};

use crate::error::{DetectError, Result};
use crate::image::{EdgeMask, ImageF32, ImageView};
use log::debug;
use serde::Serialize;
use std::time::Instant;

/// Everything a line-detection run produces.
///
/// The accumulator and axes are exposed for external visualization; the
/// peak list keeps the bin indices behind each materialized line.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDetection {
    /// Detected lines, one per accepted peak
    pub lines: Vec<Line>,
    /// Accepted accumulator cells in row-major order
    pub peaks: Vec<Peak>,
    /// The populated vote grid, before suppression
    #[serde(skip)]
    pub accumulator: Accumulator,
    /// Axis values of the vote grid
    pub axes: LineAxes,
    /// Time spent in the voting pass
    pub vote_ms: f64,
    /// Time spent in suppression + thresholding + materialization
    pub peak_ms: f64,
}

/// Everything a circle-detection run produces.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleDetection {
    /// Detected circles, one per accepted peak
    pub circles: Vec<Circle>,
    /// Accepted accumulator cells in radius-major, row-major order
    pub peaks: Vec<CirclePeak>,
    /// The populated vote grid, before suppression
    #[serde(skip)]
    pub accumulator: CircleAccumulator,
    /// Radius axis values of the vote grid
    pub radii: RadiusAxis,
    /// Time spent in the voting pass
    pub vote_ms: f64,
    /// Time spent in suppression + thresholding + materialization
    pub peak_ms: f64,
}

fn validate_mask(mask: &EdgeMask) -> Result<()> {
    if mask.w == 0 || mask.h == 0 {
        return Err(DetectError::InvalidConfiguration(format!(
            "edge mask must be non-empty, got {}x{}",
            mask.w, mask.h
        )));
    }
    Ok(())
}

fn validate_directions(mask: &EdgeMask, directions: &ImageF32) -> Result<()> {
    if !mask.same_shape(directions) {
        return Err(DetectError::InvalidConfiguration(format!(
            "direction map shape {}x{} does not match edge mask {}x{}",
            directions.w, directions.h, mask.w, mask.h
        )));
    }
    Ok(())
}

fn extract_lines(
    accumulator: Accumulator,
    axes: LineAxes,
    threshold: u32,
    vote_ms: f64,
) -> LineDetection {
    let peak_start = Instant::now();
    let suppressed = nms2d(&accumulator);
    let peaks = threshold_peaks(&suppressed, threshold);
    let lines = materialize_lines(&peaks, &axes);
    let peak_ms = peak_start.elapsed().as_secs_f64() * 1000.0;

    LineDetection {
        lines,
        peaks,
        accumulator,
        axes,
        vote_ms,
        peak_ms,
    }
}

/// Detect lines in a binary edge mask.
///
/// Every edge pixel votes once per θ bin. Peaks are accumulator cells that
/// survive 8-neighborhood suppression with at least `params.threshold`
/// votes.
pub fn detect_lines(mask: &EdgeMask, params: &LineParams) -> Result<LineDetection> {
    validate_mask(mask)?;
    let axes = LineAxes::new(mask.h, mask.w, params.n_bins_rho, params.n_bins_theta)?;

    let vote_start = Instant::now();
    let accumulator = vote_lines(mask, &axes)?;
    let vote_ms = vote_start.elapsed().as_secs_f64() * 1000.0;

    let detection = extract_lines(accumulator, axes, params.threshold, vote_ms);
    debug!(
        "detect_lines: {} edge px -> {} peaks, {} lines (vote {:.3} ms, peaks {:.3} ms)",
        mask.edge_count(),
        detection.peaks.len(),
        detection.lines.len(),
        detection.vote_ms,
        detection.peak_ms
    );
    Ok(detection)
}

/// Detect lines using a per-pixel gradient direction map.
///
/// Each edge pixel casts a single vote at the θ bin consistent with its
/// gradient orientation instead of sweeping all bins.
pub fn detect_lines_directed(
    mask: &EdgeMask,
    directions: &ImageF32,
    params: &LineParams,
) -> Result<LineDetection> {
    validate_mask(mask)?;
    validate_directions(mask, directions)?;
    let axes = LineAxes::new(mask.h, mask.w, params.n_bins_rho, params.n_bins_theta)?;

    let vote_start = Instant::now();
    let accumulator = vote_lines_directed(mask, directions, &axes)?;
    let vote_ms = vote_start.elapsed().as_secs_f64() * 1000.0;

    let detection = extract_lines(accumulator, axes, params.threshold, vote_ms);
    debug!(
        "detect_lines_directed: {} edge px -> {} peaks (vote {:.3} ms, peaks {:.3} ms)",
        mask.edge_count(),
        detection.peaks.len(),
        detection.vote_ms,
        detection.peak_ms
    );
    Ok(detection)
}

/// Detect circles from an edge mask and gradient direction map.
///
/// Each edge pixel proposes two candidate centers per radius bin along its
/// gradient; peaks are extracted per radius slice with the same suppression
/// rule as line mode.
pub fn detect_circles(
    mask: &EdgeMask,
    directions: &ImageF32,
    params: &CircleParams,
) -> Result<CircleDetection> {
    validate_mask(mask)?;
    validate_directions(mask, directions)?;
    let radii = RadiusAxis::new(params.r_min, params.r_max, params.n_bins_r)?;

    let vote_start = Instant::now();
    let accumulator = vote_circles(mask, directions, &radii)?;
    let vote_ms = vote_start.elapsed().as_secs_f64() * 1000.0;

    let peak_start = Instant::now();
    let peaks = circle_peaks(&accumulator, params.threshold);
    let circles = materialize_circles(&peaks, &radii);
    let peak_ms = peak_start.elapsed().as_secs_f64() * 1000.0;

    debug!(
        "detect_circles: {} edge px, {} radii -> {} peaks (vote {:.3} ms, peaks {:.3} ms)",
        mask.edge_count(),
        radii.len(),
        peaks.len(),
        vote_ms,
        peak_ms
    );
    Ok(CircleDetection {
        circles,
        peaks,
        accumulator,
        radii,
        vote_ms,
        peak_ms,
    })
}
