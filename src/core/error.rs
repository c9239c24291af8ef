use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Command '{0}' not found")]
    UnknownCommand(String),

    #[error("Modifier '{0}' not found")]
    UnknownModifier(String),

    #[error("Record '{0}' not found")]
    RecordNotFound(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Sink error: {0}")]
    Sink(String),

    #[error("Execution error: {0}")]
    Execution(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Lock error: {0}")]
    Lock(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),

    /// Failure carrying a multi-line diagnostic dump next to its summary.
    #[error("{message}")]
    Detailed { message: String, detail: String },
}

impl ScriptError {
    pub fn detailed(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Detailed {
            message: message.into(),
            detail: detail.into(),
        }
    }

    /// Structured detail attached to the error, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Detailed { detail, .. } => Some(detail),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScriptError>;

impl<T> From<std::sync::PoisonError<T>> for ScriptError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        Self::Lock(err.to_string())
    }
}

impl From<std::io::Error> for ScriptError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ScriptError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_only_on_detailed_errors() {
        let plain = ScriptError::Execution("boom".into());
        assert!(plain.detail().is_none());
        assert_eq!(plain.to_string(), "Execution error: boom");

        let detailed = ScriptError::detailed("store offline", "retries: 3\nlast: timeout");
        assert_eq!(detailed.to_string(), "store offline");
        assert_eq!(detailed.detail(), Some("retries: 3\nlast: timeout"));
    }

    #[test]
    fn test_json_error_conversion() {
        let err: ScriptError = serde_json::from_str::<serde_json::Value>("{oops")
            .unwrap_err()
            .into();
        assert!(matches!(err, ScriptError::Json(_)));
    }
}
