use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("HTTP request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("HTTP {status} returned from {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Form state tokens (__VIEWSTATE/__EVENTVALIDATION) missing on {page}")]
    MissingFormStateError { page: String },

    #[error("Markup anchor '{anchor}' not found")]
    MissingAnchorError { anchor: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Parsing,
    Configuration,
    Storage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::ApiError(_) | EtlError::HttpStatusError { .. } => ErrorCategory::Network,
            EtlError::MissingFormStateError { .. } | EtlError::MissingAnchorError { .. } => {
                ErrorCategory::Parsing
            }
            EtlError::ConfigValidationError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            EtlError::IoError(_) | EtlError::SerializationError(_) => ErrorCategory::Storage,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // ağ hataları genelde geçici, tekrar çalıştırmak yeterli
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Parsing | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::ApiError(_) => {
                "Check network connectivity and that the endpoint is reachable"
            }
            EtlError::HttpStatusError { .. } => {
                "The service rejected the request; wait a while and run again"
            }
            EtlError::MissingFormStateError { .. } => {
                "The page layout may have changed; inspect the returned HTML for hidden fields"
            }
            EtlError::MissingAnchorError { .. } => {
                "Update the dropdown names in the [form] section of the config file"
            }
            EtlError::ConfigValidationError { .. } | EtlError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line arguments"
            }
            EtlError::IoError(_) => "Check that the output directory is writable",
            EtlError::SerializationError(_) => "Report this as a bug",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Sunucuya ulaşılamadı: {}", self),
            ErrorCategory::Parsing => format!("Sayfa içeriği çözümlenemedi: {}", self),
            ErrorCategory::Configuration => format!("Yapılandırma hatası: {}", self),
            ErrorCategory::Storage => format!("Dosya yazılamadı: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_is_network_category() {
        let err = EtlError::HttpStatusError {
            status: 500,
            url: "https://example.com/".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_missing_form_state_is_fatal_parsing() {
        let err = EtlError::MissingFormStateError {
            page: "root".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Parsing);
        assert!(err.severity() >= ErrorSeverity::High);
        assert!(err.user_friendly_message().starts_with("Sayfa"));
    }
}
