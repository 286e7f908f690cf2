use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend answered with a non-2xx status.
    #[error("Request failed: {0}")]
    Status(u16),

    #[error("Request failed: timed out")]
    Timeout,

    /// Connection refused, DNS failure, reset, etc.
    #[error("{0}")]
    Transport(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Invalid backend configuration: {0}")]
    Config(String),
}

pub type BackendResult<T> = Result<T, BackendError>;

impl BackendError {
    /// HTTP status carried by the error, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::Status(status) => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BackendError::Timeout
        } else if err.is_decode() {
            BackendError::Decode(err.to_string())
        } else if err.is_builder() {
            BackendError::Config(err.to_string())
        } else if let Some(status) = err.status() {
            BackendError::Status(status.as_u16())
        } else {
            let message = err.to_string();
            if message.is_empty() {
                BackendError::Transport("Unknown error".to_string())
            } else {
                BackendError::Transport(message)
            }
        }
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        BackendError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_name_the_code() {
        let err = BackendError::Status(500);
        assert_eq!(err.to_string(), "Request failed: 500");
        assert_eq!(err.status(), Some(500));
        assert!(!err.is_not_found());
        assert!(BackendError::Status(404).is_not_found());
    }

    #[test]
    fn timeout_reads_as_request_failure() {
        assert_eq!(BackendError::Timeout.to_string(), "Request failed: timed out");
        assert_eq!(BackendError::Timeout.status(), None);
    }
}
