//! Error handling for PandemicNet.
//! One error enum per subsystem, `thiserror` only, aggregated into `PandemicError`.

pub mod config_error;
pub mod error_code;
pub mod graph_error;
pub mod prediction_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use graph_error::GraphError;
pub use prediction_error::PredictionError;
pub use storage_error::StorageError;

/// Boundary error for every registration and trace operation.
///
/// Each variant is local to a single request. None is retried by the core.
#[derive(Debug, thiserror::Error)]
pub enum PandemicError {
    #[error("invalid {field}: {message}")]
    Validation { field: String, message: String },

    #[error("{entity} not found: {key}")]
    NotFound { entity: String, key: String },

    #[error("conflict: {message}")]
    Conflict { message: String },

    #[error("prediction failed: {0}")]
    Prediction(#[from] PredictionError),

    #[error("graph integrity violated: {0}")]
    Integrity(#[from] GraphError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl PandemicError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(entity: impl Into<String>, key: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            key: key.to_string(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// True for the "already exists" family, so callers can branch on it
    /// without inspecting messages.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

impl ErrorCode for PandemicError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => error_code::VALIDATION_ERROR,
            Self::NotFound { .. } => error_code::NOT_FOUND,
            Self::Conflict { .. } => error_code::CONFLICT,
            Self::Prediction(e) => e.error_code(),
            Self::Integrity(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Convenience alias used across the workspace.
pub type PandemicResult<T> = Result<T, PandemicError>;
