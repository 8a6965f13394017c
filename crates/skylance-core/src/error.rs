use crate::Scalar;

/// Thrust-curve construction failures. Validation happens once, at table
/// creation; interpolation can then never fail.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CurveError {
    #[error("thrust curve has no samples")]
    Empty,
    #[error("thrust curve has {times} time samples but {forces} force samples")]
    LengthMismatch { times: usize, forces: usize },
    #[error("thrust curve times must be strictly increasing (sample {index})")]
    NotStrictlyIncreasing { index: usize },
}

/// Body construction failures. Force-to-acceleration conversion divides by
/// mass, so a non-positive mass is rejected before the body exists.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SpawnError {
    #[error("body mass must be strictly positive, got {0}")]
    NonPositiveMass(Scalar),
}
