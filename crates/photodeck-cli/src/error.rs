//! CLI-specific error types and mappings.
//!
//! Maps service failures to exit codes and user-facing messages.

use photodeck_core::{PhotoApiError, PhotoServiceError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The photo service could not be reached.
    #[error("{0}")]
    Unavailable(String),

    /// The photo service answered with a failure.
    #[error("{0}")]
    Service(String),

    /// The requested photo does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Argument validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Configuration error (missing or rejected credential, bad paths).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local store error.
    #[error("Database error: {0}")]
    Database(String),
}

impl CliError {
    /// Map error to a sysexits-style exit code.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Service(_) => 1,
            Self::Arguments(_) => 2,   // EX_USAGE
            Self::NotFound(_) => 66,   // EX_NOINPUT
            Self::Unavailable(_) => 69, // EX_UNAVAILABLE
            Self::Database(_) => 73,   // EX_CANTCREAT
            Self::Config(_) => 78,     // EX_CONFIG
        }
    }
}

impl From<PhotoServiceError> for CliError {
    fn from(err: PhotoServiceError) -> Self {
        match err {
            PhotoServiceError::Api(api) => match api {
                PhotoApiError::Transport { .. } => Self::Unavailable(api.to_string()),
                PhotoApiError::NotFound { .. } => Self::NotFound(api.to_string()),
                PhotoApiError::Unauthorized => Self::Config(format!(
                    "{api}; set PHOTODECK_API_KEY or pass --api-key"
                )),
                PhotoApiError::RateLimited
                | PhotoApiError::Remote { .. }
                | PhotoApiError::InvalidResponse { .. } => Self::Service(api.to_string()),
            },
            PhotoServiceError::Storage(repo) => Self::Database(repo.to_string()),
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        Self::Config(format!("{err:#}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use photodeck_core::RepositoryError;

    #[test]
    fn test_transport_maps_to_unavailable() {
        let err = CliError::from(PhotoServiceError::Api(PhotoApiError::Transport {
            message: "connection refused".to_string(),
        }));
        assert!(matches!(err, CliError::Unavailable(_)));
        assert_eq!(err.exit_code(), 69);
        assert!(err.to_string().contains("connection"));
    }

    #[test]
    fn test_unauthorized_points_at_credential() {
        let err = CliError::from(PhotoServiceError::Api(PhotoApiError::Unauthorized));
        assert_eq!(err.exit_code(), 78);
        assert!(err.to_string().contains("PHOTODECK_API_KEY"));
    }

    #[test]
    fn test_not_found() {
        let err = CliError::from(PhotoServiceError::Api(PhotoApiError::NotFound { id: 5 }));
        assert_eq!(err.exit_code(), 66);
        assert_eq!(err.to_string(), "Photo 5 not found");
    }

    #[test]
    fn test_storage_maps_to_database() {
        let err = CliError::from(PhotoServiceError::Storage(RepositoryError::Storage(
            "disk I/O error".to_string(),
        )));
        assert_eq!(err.exit_code(), 73);
    }
}
