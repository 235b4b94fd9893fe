use crate::api::models::ApiResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("ClientError: {0}")]
    Client(#[from] ClientError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
}

/// Client-side validation failure raised before anything reaches the dispatcher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ConfigurationError(pub String);

impl ConfigurationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Errors surfaced through a binding's callback or future.
///
/// Only `Configuration` is produced locally. The other variants are built by
/// dispatchers and passed through untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("ConfigurationError: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("Connection error: {message}")]
    Connection { message: String },
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
    #[error("Response error: {status} {message}")]
    Response { status: u16, message: String },
    #[error("Serialization error: {message}")]
    Serialization { message: String },
    #[error("Request was dropped before completion")]
    Canceled,
}

impl ClientError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, ClientError::Configuration(_))
    }
}

/// A failed outcome: the error plus the result value that accompanies it.
#[derive(Error, Debug, Clone)]
#[error("{error}")]
pub struct Failure {
    pub error: ClientError,
    pub result: ApiResponse,
}

impl Failure {
    pub fn new(error: impl Into<ClientError>, result: ApiResponse) -> Self {
        Self {
            error: error.into(),
            result,
        }
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Client(client_error) => match client_error {
                ClientError::Configuration(_) => ErrorSeverity::High,
                ClientError::Response { status, .. } if *status >= 500 => ErrorSeverity::High,
                ClientError::Connection { .. } => ErrorSeverity::High,
                ClientError::Canceled => ErrorSeverity::Low,
                _ => ErrorSeverity::Medium,
            },
            AppError::Storage(_) => ErrorSeverity::Medium,
            AppError::Cli(_) => ErrorSeverity::Medium,
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Client(ClientError::Configuration(_)) => {
                Some("'percolate --help' lists the required parameters".to_string())
            }
            AppError::Client(ClientError::Timeout { .. }) => {
                Some("Raise request_timeout_ms in config.toml and try again".to_string())
            }
            AppError::Storage(StorageError::ConfigParseError { .. }) => {
                Some("Check config.toml for syntax errors".to_string())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = ConfigurationError::new("Missing required parameter: index");
        assert_eq!(format!("{}", err), "Missing required parameter: index");
        assert_eq!(err.message(), "Missing required parameter: index");
    }

    #[test]
    fn test_client_error_display() {
        let err = ClientError::from(ConfigurationError::new("Missing required parameter: type"));
        assert!(err.is_configuration());
        assert_eq!(
            format!("{}", err),
            "ConfigurationError: Missing required parameter: type"
        );

        let err = ClientError::Response {
            status: 404,
            message: "index_not_found_exception".to_string(),
        };
        assert!(!err.is_configuration());
        assert_eq!(
            format!("{}", err),
            "Response error: 404 index_not_found_exception"
        );

        let err = ClientError::Timeout { timeout_ms: 30000 };
        assert_eq!(format!("{}", err), "Request timed out after 30000ms");
    }

    #[test]
    fn test_failure_keeps_result() {
        let failure = Failure::new(
            ConfigurationError::new("Missing required parameter: index"),
            ApiResponse::default(),
        );
        assert!(failure.error.is_configuration());
        assert!(failure.result.body.is_none());
        assert_eq!(
            format!("{}", failure),
            "ConfigurationError: Missing required parameter: index"
        );
    }

    #[test]
    fn test_app_error_severity() {
        let app_err = AppError::Client(ClientError::Configuration(ConfigurationError::new(
            "Missing required parameter: index",
        )));
        assert_eq!(app_err.severity(), ErrorSeverity::High);
        assert!(app_err.troubleshooting_hint().is_some());

        let app_err = AppError::Client(ClientError::Response {
            status: 503,
            message: "unavailable".to_string(),
        });
        assert_eq!(app_err.severity(), ErrorSeverity::High);

        let app_err = AppError::Client(ClientError::Response {
            status: 409,
            message: "conflict".to_string(),
        });
        assert_eq!(app_err.severity(), ErrorSeverity::Medium);
        assert!(app_err.troubleshooting_hint().is_none());

        let app_err = AppError::Client(ClientError::Canceled);
        assert_eq!(app_err.severity(), ErrorSeverity::Low);
    }

    #[test]
    fn test_app_error_display_storage() {
        let app_err = AppError::Storage(StorageError::ConfigParseError {
            message: "expected `=`".to_string(),
        });
        assert_eq!(
            format!("{}", app_err),
            "StorageError: Configuration parse error: expected `=`"
        );
        assert_eq!(app_err.severity(), ErrorSeverity::Medium);
    }
}
