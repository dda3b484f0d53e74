//! Parameter types configuring the detection pipeline.
//!
//! Defaults aim for sensible behaviour at common resolutions; the vote
//! thresholds are the knobs to tune first. All structs deserialize from
//! config files with per-field defaults.
use serde::{Deserialize, Serialize};

/// Knobs for line detection.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LineParams {
    /// Number of ρ bins (>= 2).
    pub n_bins_rho: usize,
    /// Number of θ bins (>= 2).
    pub n_bins_theta: usize,
    /// Minimum votes for a suppressed cell to count as a peak.
    pub threshold: u32,
}

impl Default for LineParams {
    fn default() -> Self {
        Self {
            n_bins_rho: 180,
            n_bins_theta: 180,
            threshold: 50,
        }
    }
}

/// Knobs for gradient-directed circle detection.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleParams {
    /// Smallest candidate radius in pixels (> 0).
    pub r_min: f32,
    /// Largest candidate radius in pixels (>= r_min).
    pub r_max: f32,
    /// Number of radius bins (>= 1).
    pub n_bins_r: usize,
    /// Minimum votes for a suppressed cell to count as a peak.
    pub threshold: u32,
}

impl Default for CircleParams {
    fn default() -> Self {
        Self {
            r_min: 5.0,
            r_max: 50.0,
            n_bins_r: 10,
            threshold: 20,
        }
    }
}
