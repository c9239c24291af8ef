use crate::core::ExitStatus;
use serde::Serialize;

/// Outcome of one script line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Exit code: the command's own terminal code on success
    pub code: i32,
    /// Concatenated command output, in production order
    pub output: String,
    /// Diagnostic line produced by the dispatcher, if any
    pub diagnostic: Option<String>,
}

impl RunReport {
    pub fn completed(code: i32, output: String) -> Self {
        Self {
            code,
            output,
            diagnostic: None,
        }
    }

    pub fn failed(status: ExitStatus, output: String, diagnostic: String) -> Self {
        Self {
            code: status.code(),
            output,
            diagnostic: Some(diagnostic),
        }
    }

    pub fn status(&self) -> Option<ExitStatus> {
        ExitStatus::from_code(self.code)
    }

    pub fn is_success(&self) -> bool {
        self.code == ExitStatus::Success.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_status_and_json_shape() {
        let report = RunReport::failed(
            ExitStatus::UnknownCommand,
            String::new(),
            "❌ CommandNotFound: x".to_string(),
        );
        assert_eq!(report.status(), Some(ExitStatus::UnknownCommand));
        assert!(!report.is_success());

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["code"], 127);
        assert_eq!(value["diagnostic"], "❌ CommandNotFound: x");

        let done = RunReport::completed(9, "out".into());
        assert_eq!(done.status(), None);
        assert!(!done.is_success());
        assert!(RunReport::completed(0, String::new()).is_success());
    }
}
