use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrimeError {
    #[error("Invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    #[error("Input '{input}' is longer than {max_digits} digits")]
    InputTooLong { input: String, max_digits: usize },

    #[error("No number has been entered")]
    EmptyInput,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PrimeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PrimeError::InvalidInput { .. }
            | PrimeError::InputTooLong { .. }
            | PrimeError::EmptyInput => ErrorCategory::Input,
            PrimeError::TomlError(_)
            | PrimeError::ConfigError { .. }
            | PrimeError::ConfigValidationError { .. }
            | PrimeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PrimeError::IoError(_)
            | PrimeError::SerializationError(_)
            | PrimeError::CsvError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 空輸入只是提示，不算失敗
            PrimeError::EmptyInput => ErrorSeverity::Low,
            PrimeError::InvalidInput { .. } | PrimeError::InputTooLong { .. } => {
                ErrorSeverity::Medium
            }
            PrimeError::TomlError(_)
            | PrimeError::ConfigError { .. }
            | PrimeError::ConfigValidationError { .. }
            | PrimeError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            PrimeError::IoError(_)
            | PrimeError::SerializationError(_)
            | PrimeError::CsvError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PrimeError::InvalidInput { input, .. } => {
                format!("'{}' is not a number. Only digits are allowed.", input)
            }
            PrimeError::InputTooLong { max_digits, .. } => {
                format!("Please enter at most {} digits.", max_digits)
            }
            PrimeError::EmptyInput => "Enter a number first.".to_string(),
            PrimeError::IoError(e) => format!("Could not write the result: {}", e),
            PrimeError::SerializationError(_) | PrimeError::CsvError(_) => {
                "Could not format the result for export.".to_string()
            }
            PrimeError::TomlError(_) => "The configuration file is not valid TOML.".to_string(),
            PrimeError::ConfigError { message } => format!("Configuration problem: {}", message),
            PrimeError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            PrimeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Type a whole number such as 97 and confirm again.",
            ErrorCategory::Configuration => {
                "Check the command line flags and the TOML configuration file."
            }
            ErrorCategory::Output => "Make sure the output directory exists and is writable.",
        }
    }
}

pub type Result<T> = std::result::Result<T, PrimeError>;
