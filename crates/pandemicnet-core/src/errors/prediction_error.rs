use super::error_code::{self, ErrorCode};

/// Classifier failures. Any of these fails the whole trace request;
/// the engine never degrades to a partial candidate list.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("classifier returned {value} for {candidate}, expected a probability in [0, 1]")]
    OutOfRange { candidate: String, value: f64 },

    #[error("classifier invocation failed: {reason}")]
    InvocationFailed { reason: String },

    #[error("invalid classifier artifact: {reason}")]
    InvalidArtifact { reason: String },

    #[error("classifier not initialized")]
    NotInitialized,
}

impl ErrorCode for PredictionError {
    fn error_code(&self) -> &'static str {
        error_code::PREDICTION_ERROR
    }
}
