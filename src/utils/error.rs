use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Database(String),
    Unavailable(String),
    NotFound(String),
    InvalidRequest(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Database(msg) => write!(f, "Database error: {}", msg),
            AppError::Unavailable(msg) => write!(f, "Database not ready: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        match err.kind.as_ref() {
            // No reachable server within the selection timeout: the cluster
            // is down or unreachable, not a fault of this request.
            mongodb::error::ErrorKind::ServerSelection { message, .. } => {
                AppError::Unavailable(message.clone())
            }
            _ => AppError::Database(err.to_string()),
        }
    }
}

/// True when the server rejected the write over a unique index (code 11000).
pub fn is_duplicate_key_error(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        mongodb::error::ErrorKind::Write(mongodb::error::WriteFailure::WriteError(we)) => {
            we.code == 11000
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        assert_eq!(
            AppError::Database("socket closed".into()).to_string(),
            "Database error: socket closed"
        );
        assert_eq!(
            AppError::Unavailable("no servers available".into()).to_string(),
            "Database not ready: no servers available"
        );
        assert_eq!(
            AppError::NotFound("meal kit 42".into()).to_string(),
            "Not found: meal kit 42"
        );
        assert_eq!(
            AppError::InvalidRequest("missing email".into()).to_string(),
            "Invalid request: missing email"
        );
    }
}
