use thiserror::Error;

/// Everything that can go wrong while building a point store or blending its values.
#[derive(Debug, Error)]
pub enum InterpolateError {
    /// A key point was NaN or infinite.
    #[error("found a key point that is not a finite number: {key}")]
    InvalidKey { key: String },

    /// Two sequence values did not have the same length (or nested shape).
    #[error("cannot interpolate between values of different shape: expected {expected}, found {found}")]
    ShapeMismatch { expected: String, found: String },

    #[error("cannot interpolate an empty sequence")]
    EmptyOperand,

    /// The default blend was asked to blend a value that has no way of blending itself.
    #[error("found a value ({value}) that cannot be interpolated and no blend strategy was set")]
    NotInterpolatable { value: String },

    #[cfg(feature = "serde")]
    #[error("failed to read key points from JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl InterpolateError {
    pub(crate) fn invalid_key(key: f64) -> Self {
        InterpolateError::InvalidKey {
            key: key.to_string(),
        }
    }

    pub(crate) fn length_mismatch(expected: usize, found: usize) -> Self {
        InterpolateError::ShapeMismatch {
            expected: format!("length {expected}"),
            found: format!("length {found}"),
        }
    }
}
