//! Smoothing collaborator interface.
//!
//! Callers may blur an intensity image before running their edge detector.
//! That stage lives outside this crate; the trait below is the seam through
//! which a separable pre-filter is described. Any correct separable
//! convolution over [`crate::image::ImageF32`] that preserves the image
//! shape and applies the same taps per channel satisfies the contract.

/// Trait implemented by separable 1D filters used as smoothing pre-filters.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order). The kernel is assumed to
    /// be normalized (taps summing to 1) so smoothing preserves intensity.
    fn taps(&self) -> &[f32];
}

/// Simple wrapper around a static filter kernel.
#[derive(Clone, Copy, Debug)]
pub struct StaticSeparableFilter {
    taps: &'static [f32],
}

impl Default for StaticSeparableFilter {
    fn default() -> Self {
        GAUSSIAN_5TAP
    }
}

impl StaticSeparableFilter {
    pub const fn new(taps: &'static [f32]) -> Self {
        Self { taps }
    }
}

impl SeparableFilter for StaticSeparableFilter {
    #[inline]
    fn taps(&self) -> &[f32] {
        self.taps
    }
}

/// Normalised 5-tap Gaussian filter `[1, 4, 6, 4, 1] / 16`.
pub const GAUSSIAN_5TAP: StaticSeparableFilter =
    StaticSeparableFilter::new(&[0.0625, 0.25, 0.375, 0.25, 0.0625]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaussian_5tap_is_normalized() {
        let sum: f32 = GAUSSIAN_5TAP.taps().iter().sum();
        assert!((sum - 1.0).abs() < 1e-6, "taps sum to {sum}");
    }
}
