use reqwest::StatusCode;
use thiserror::Error;

/// Result alias for [`ProjectClient`](super::ProjectClient) calls.
pub type ProjectClientResult<T> = Result<T, ProjectClientError>;

/// Failures surfaced by [`ProjectClient`](super::ProjectClient).
#[derive(Debug, Error)]
pub enum ProjectClientError {
    /// The backend answered with a non-success status.
    ///
    /// The status is kept for diagnostics only; every failing status is
    /// reported the same way.
    #[error("Failed to create project")]
    CreationFailed { status: StatusCode },

    /// Transport or body decoding failure, passed through unchanged.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ProjectClientError {
    /// HTTP status behind the failure, when the backend responded at all.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::CreationFailed { status } => Some(*status),
            Self::Transport(err) => err.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_failure_message_is_fixed() {
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            let err = ProjectClientError::CreationFailed { status };
            assert_eq!(err.to_string(), "Failed to create project");
            assert_eq!(err.status(), Some(status));
        }
    }
}
