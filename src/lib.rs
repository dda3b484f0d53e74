#![doc = include_str!("../README.md")]

pub mod angle;
pub mod error;
pub mod filters;
pub mod hough;
pub mod image;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::DetectError;
pub use crate::hough::{
    detect_circles, detect_lines, detect_lines_directed, Circle, CircleDetection, CircleParams,
    Line, LineDetection, LineParams,
};
pub use crate::image::{EdgeMask, EdgeSource, ImageF32};

/// Small prelude for quick experiments.
///
/// ```
/// use hough_detector::prelude::*;
///
/// let mut mask = EdgeMask::new(64, 64);
/// for y in 4..60 {
///     mask.set(32, y, true);
/// }
/// let detection = detect_lines(&mask, &LineParams { threshold: 30, ..Default::default() })
///     .expect("detection");
/// assert!(!detection.lines.is_empty());
/// ```
pub mod prelude {
    pub use crate::hough::{
        detect_circles, detect_lines, detect_lines_directed, CircleParams, LineParams,
    };
    pub use crate::image::{EdgeMask, EdgeSource, ImageF32};
}
