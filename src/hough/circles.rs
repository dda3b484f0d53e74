//! Image-space circle parameters materialized from accumulator peaks.
use crate::hough::axes::RadiusAxis;
use crate::hough::peaks::CirclePeak;
use nalgebra::Point2;
use serde::Serialize;

/// A detected circle with center in pixel coordinates.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Circle {
    /// Center x in pixels
    pub cx: f32,
    /// Center y in pixels
    pub cy: f32,
    /// Radius in pixels
    pub radius: f32,
    /// Number of edge pixels that voted for this circle
    pub votes: u32,
}

impl Circle {
    #[inline]
    pub fn center(&self) -> Point2<f32> {
        Point2::new(self.cx, self.cy)
    }
}

/// Map accepted circle peaks to circle parameters.
///
/// Center bins are pixel coordinates already; the radius comes from direct
/// indexing into the radius axis.
pub fn materialize_circles(peaks: &[CirclePeak], radii: &RadiusAxis) -> Vec<Circle> {
    peaks
        .iter()
        .map(|p| Circle {
            cx: p.cx as f32,
            cy: p.cy as f32,
            radius: radii.values[p.r_idx],
            votes: p.votes,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn materialize_uses_radius_axis() {
        let radii = RadiusAxis::new(4.0, 12.0, 5).expect("radii");
        let peaks = vec![CirclePeak {
            r_idx: 2,
            cy: 17,
            cx: 23,
            votes: 31,
        }];
        let circles = materialize_circles(&peaks, &radii);
        assert_eq!(circles.len(), 1);
        let c = circles[0];
        assert_eq!(c.center(), Point2::new(23.0, 17.0));
        assert_eq!(c.radius, radii.values[2]);
        assert_eq!(c.votes, 31);
    }
}
