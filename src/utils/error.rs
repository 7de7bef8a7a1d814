use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Displays as the bare message so callers can match on it verbatim.
    #[error("{message}")]
    ValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl QuizError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        QuizError::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        QuizError::ConfigError {
            message: message.into(),
        }
    }

    /// The offending field for validation errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            QuizError::ValidationError { field, .. } => Some(field),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            QuizError::ValidationError { .. } => ErrorCategory::Validation,
            QuizError::ConfigError { .. } => ErrorCategory::Configuration,
            QuizError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            QuizError::ValidationError { .. } => ErrorSeverity::High,
            QuizError::ConfigError { .. } => ErrorSeverity::Critical,
            QuizError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            QuizError::ValidationError { field, .. } => {
                format!("Check the value given for '{}' and try again", field)
            }
            QuizError::ConfigError { .. } => {
                "Fix the [limits] table in the configuration file".to_string()
            }
            QuizError::IoError(_) => {
                "Make sure the file exists and is readable".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QuizError::ValidationError { field, message } => {
                format!("Invalid {}: {}", field, message)
            }
            QuizError::ConfigError { message } => format!("Bad configuration: {}", message),
            QuizError::IoError(e) => format!("Could not read file: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, QuizError>;
