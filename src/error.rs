use thiserror::Error;

/// Failure kinds surfaced by the detection pipeline.
///
/// The pipeline has no partial-success mode: either a complete accumulator
/// and peak set are produced, or the run aborts with one of these kinds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectError {
    /// Rejected before any accumulation work begins: non-positive or
    /// degenerate bin counts, a zero-size mask, or a direction map whose
    /// shape does not match the edge mask.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A computed bin index could not be clamped into range because the
    /// underlying geometry was degenerate (non-finite ρ or direction angle).
    #[error("bin index out of range: {0}")]
    OutOfRangeIndex(String),
}

pub type Result<T> = std::result::Result<T, DetectError>;
