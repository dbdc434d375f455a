use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReplaceError {
    #[error("{message}")]
    UsageError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Cannot open input file '{path}': {source}")]
    InputError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot create output file '{path}': {source}")]
    OutputError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Matcher build error: {0}")]
    MatcherError(#[from] aho_corasick::BuildError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Validation,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// 使用方式錯誤，印出說明後正常結束
    Low,
    /// 無法繼續執行
    High,
}

impl ReplaceError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReplaceError::UsageError { .. } => ErrorCategory::Usage,
            ReplaceError::ValidationError { .. } | ReplaceError::MatcherError(_) => {
                ErrorCategory::Validation
            }
            ReplaceError::InputError { .. }
            | ReplaceError::OutputError { .. }
            | ReplaceError::IoError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Usage => ErrorSeverity::Low,
            ErrorCategory::Validation | ErrorCategory::Io => ErrorSeverity::High,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ReplaceError::UsageError { .. } => {
                "Pass replacements as pairs: oldstring1 newstring1 oldstring2 newstring2 ..."
            }
            ReplaceError::ValidationError { .. } => {
                "Every old string must contain at least one character"
            }
            ReplaceError::InputError { .. } => "Check that the input file exists and is readable",
            ReplaceError::OutputError { .. } => {
                "Check that the output directory exists and is writable"
            }
            ReplaceError::IoError(_) => "Check that the output destination is still open",
            ReplaceError::MatcherError(_) => "Try shorter old strings",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReplaceError::UsageError { message } => message.clone(),
            ReplaceError::ValidationError { message } => message.clone(),
            ReplaceError::InputError { path, .. } => format!("Cannot read input file: {}", path),
            ReplaceError::OutputError { path, .. } => {
                format!("Cannot write output file: {}", path)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReplaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_error_exits_cleanly() {
        let err = ReplaceError::UsageError {
            message: "usage".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Usage);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_fatal_errors_exit_nonzero() {
        let validation = ReplaceError::ValidationError {
            message: "old strings to replace must be non-empty".to_string(),
        };
        assert_eq!(validation.exit_code(), 1);

        let input = ReplaceError::InputError {
            path: "missing.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(input.category(), ErrorCategory::Io);
        assert_eq!(input.exit_code(), 1);
        assert!(input.user_friendly_message().contains("missing.txt"));

        let io: ReplaceError =
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert_eq!(io.severity(), ErrorSeverity::High);
    }
}
