//! Image-space line parameters materialized from accumulator peaks.
use crate::hough::axes::LineAxes;
use crate::hough::peaks::Peak;
use nalgebra::Point2;
use serde::Serialize;

/// A detected line in normal form `x·cosθ + y·sinθ = ρ`.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    /// Perpendicular distance from the origin in pixels
    pub rho: f32,
    /// Normal angle in radians, in [−π/2, π/2]
    pub theta: f32,
    /// Number of edge pixels that voted for this line
    pub votes: u32,
}

impl Line {
    /// Signed distance from a point to the line in pixels.
    #[inline]
    pub fn signed_distance(&self, p: &Point2<f32>) -> f32 {
        p.x * self.theta.cos() + p.y * self.theta.sin() - self.rho
    }

    /// Intersect the infinite line with a `w × h` image rectangle.
    ///
    /// Returns the two boundary crossing points for drawing, or `None` when
    /// the line misses the frame entirely.
    pub fn clip_to_frame(&self, w: usize, h: usize) -> Option<(Point2<f32>, Point2<f32>)> {
        let cos_t = self.theta.cos();
        let sin_t = self.theta.sin();
        let (wf, hf) = (w as f32, h as f32);
        let mut points: Vec<Point2<f32>> = Vec::with_capacity(4);

        // Crossings with x = 0 and x = w.
        if sin_t.abs() > 1e-6 {
            for x in [0.0, wf] {
                let y = (self.rho - x * cos_t) / sin_t;
                if (0.0..=hf).contains(&y) {
                    points.push(Point2::new(x, y));
                }
            }
        }
        // Crossings with y = 0 and y = h.
        if cos_t.abs() > 1e-6 {
            for y in [0.0, hf] {
                let x = (self.rho - y * sin_t) / cos_t;
                if (0.0..=wf).contains(&x) {
                    points.push(Point2::new(x, y));
                }
            }
        }

        points.dedup_by(|a, b| (a.x - b.x).abs() < 1.0 && (a.y - b.y).abs() < 1.0);
        if points.len() >= 2 {
            Some((points[0], points[1]))
        } else {
            None
        }
    }
}

/// Map accepted peaks to line parameters by direct axis indexing.
///
/// Pure mapping, one record per peak, no further filtering.
pub fn materialize_lines(peaks: &[Peak], axes: &LineAxes) -> Vec<Line> {
    peaks
        .iter()
        .map(|p| Line {
            rho: axes.rho[p.rho_idx],
            theta: axes.theta[p.theta_idx],
            votes: p.votes,
        })
        .collect()
}
