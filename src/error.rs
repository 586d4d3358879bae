use std::path::PathBuf;
use thiserror::Error;

/// kwdoc error types
#[derive(Error, Debug)]
pub enum KwdocError {
    #[error("'{}' is not a file.", .0.display())]
    NotAFile(PathBuf),

    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for kwdoc operations
pub type Result<T> = std::result::Result<T, KwdocError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_a_file() {
        let err = KwdocError::NotAFile(PathBuf::from("/nonexistent/WELSPECS"));
        assert_eq!(err.to_string(), "'/nonexistent/WELSPECS' is not a file.");
    }

    #[test]
    fn test_error_display_parse() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{ not valid json }").unwrap_err();
        let detail = parse_err.to_string();
        let err = KwdocError::from(parse_err);
        assert_eq!(err.to_string(), format!("Failed to parse JSON: {}", detail));
    }

    #[test]
    fn test_error_display_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = KwdocError::from(io_err);
        assert_eq!(err.to_string(), "IO error: denied");
    }
}
