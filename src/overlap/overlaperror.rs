use thiserror::Error;

/// Invalid-parameter failures. Every variant is fatal for the sweep that
/// raised it; numeric degeneracy (an all-zero curve) is never reported here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OverlapError {
    #[error("spread must be strictly positive, got {0}")]
    NonPositiveSpread(f64),

    #[error("parameter '{name}' must be finite, got {value}")]
    NonFiniteParameter {
        name: &'static str,
        value: f64
    },

    #[error("sample domain needs at least 2 samples, got {sample_count}")]
    EmptyDomain {
        sample_count: usize
    },

    #[error("sample domain bounds must satisfy lower < upper, got [{lower}, {upper}]")]
    InvalidDomainBounds {
        lower: f64,
        upper: f64
    },

    #[error("sweep step must be strictly positive, got {0}")]
    NonPositiveStep(f64),

    #[error("sweep end {end} lies before sweep start {start}")]
    InvertedSweep {
        start: f64,
        end: f64
    },

    #[error("sweep from {start} to {end} with step {step} exceeds the frame limit")]
    TooManyFrames {
        start: f64,
        end: f64,
        step: f64
    },

    #[error("curve lengths differ: {lhs} vs {rhs}")]
    LengthMismatch {
        lhs: usize,
        rhs: usize
    }
}

impl OverlapError {
    pub fn check_finite(name: &'static str, value: f64) -> Result<f64, OverlapError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(OverlapError::NonFiniteParameter { name, value })
        }
    }

    pub fn check_same_length(lhs: usize, rhs: usize) -> Result<(), OverlapError> {
        if lhs == rhs {
            Ok(())
        } else {
            Err(OverlapError::LengthMismatch { lhs, rhs })
        }
    }
}
