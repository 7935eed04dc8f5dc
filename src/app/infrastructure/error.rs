use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    #[error("Invalid font: {0}")]
    InvalidFont(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Relay error: {0}")]
    Relay(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("read-only"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let app_err: AppError = json_err.into();
        assert!(matches!(app_err, AppError::Json(_)));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::InvalidTheme("primary is not a hex colour".to_string());
        assert_eq!(err.to_string(), "Invalid theme: primary is not a hex colour");

        let err = AppError::InvalidFont("empty family".to_string());
        assert_eq!(err.to_string(), "Invalid font: empty family");

        let err = AppError::Relay("quota exceeded".to_string());
        assert_eq!(err.to_string(), "Relay error: quota exceeded");
    }
}
