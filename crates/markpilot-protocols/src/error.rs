//! Error types for the automation core.
//!
//! "Goal not achieved" outcomes (marker not found, timeout lapsed) are
//! boolean results, not errors. These variants cover collaborator
//! failures only, which are fatal for the current invocation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AutomationError {
    #[error("Detection backend failed: {0}")]
    Detection(String),

    #[error("Input injection failed: {0}")]
    Input(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_error_display() {
        let err = AutomationError::Detection("capture device lost".to_string());
        assert!(err.to_string().contains("Detection backend failed"));
        assert!(err.to_string().contains("capture device lost"));
    }

    #[test]
    fn test_input_error_display() {
        let err = AutomationError::Input("no pointer device".to_string());
        assert!(err.to_string().contains("Input injection failed"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: AutomationError = io.into();
        assert!(matches!(err, AutomationError::Io(_)));
    }
}
