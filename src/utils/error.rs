use thiserror::Error;

#[derive(Error, Debug)]
pub enum TravelError {
    #[error("Place not found: {query}")]
    NotFound { query: String },

    #[error("Service unavailable: {service}")]
    ServiceUnavailable { service: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Empty input: {field}")]
    EmptyInput { field: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lookup,
    Input,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TravelError {
    pub fn not_found(query: impl Into<String>) -> Self {
        Self::NotFound {
            query: query.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn empty_input(field: impl Into<String>) -> Self {
        Self::EmptyInput {
            field: field.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } | Self::ServiceUnavailable { .. } | Self::ApiError(_) => {
                ErrorCategory::Lookup
            }
            Self::ValidationError { .. } | Self::EmptyInput { .. } => ErrorCategory::Input,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::Storage,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 使用者可以換個輸入再試一次
            Self::NotFound { .. }
            | Self::ValidationError { .. }
            | Self::EmptyInput { .. }
            | Self::ServiceUnavailable { .. } => ErrorSeverity::Low,
            Self::ApiError(_) => ErrorSeverity::Medium,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => ErrorSeverity::High,
            Self::IoError(_) | Self::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::NotFound { .. } => {
                "Place not found. Please try another search (e.g., Delhi, Goa, Mumbai)".to_string()
            }
            Self::ServiceUnavailable { .. } => {
                "The location service returned unusable data. Please try again.".to_string()
            }
            Self::ValidationError { message } => message.clone(),
            Self::EmptyInput { field } => format!("Please enter {}", field),
            Self::ApiError(_) => "An error occurred during search. Please try again.".to_string(),
            Self::IoError(_) | Self::SerializationError(_) => {
                "Local data could not be read or written.".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Lookup => "Check the spelling of the place name or try a nearby city",
            ErrorCategory::Input => "Correct the highlighted input and submit again",
            ErrorCategory::Storage => "Check that the data directory exists and is writable",
            ErrorCategory::Configuration => "Review the configuration file and CLI flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, TravelError>;
