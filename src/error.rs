use thiserror::Error;

/// Unified error type for release-stamp operations
#[derive(Error, Debug)]
pub enum ReleaseStampError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Artifact error: {0}")]
    Artifact(String),

    #[error("No version tags found: {0}")]
    NoVersionTags(String),

    #[error("Ambiguous latest version {version}: tags {tags:?} share the same precedence")]
    AmbiguousVersion { version: String, tags: Vec<String> },

    #[error("HEAD error: {0}")]
    Head(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-stamp
pub type Result<T> = std::result::Result<T, ReleaseStampError>;

impl ReleaseStampError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseStampError::Config(msg.into())
    }

    /// Create an artifact error with context
    pub fn artifact(msg: impl Into<String>) -> Self {
        ReleaseStampError::Artifact(msg.into())
    }

    /// Create a HEAD error with context
    pub fn head(msg: impl Into<String>) -> Self {
        ReleaseStampError::Head(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReleaseStampError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReleaseStampError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_git() {
        let git_err = git2::Error::from_str("could not find repository");
        let err: ReleaseStampError = git_err.into();
        assert!(err.to_string().starts_with("Git operation failed"));
    }

    #[test]
    fn test_ambiguous_version_lists_tags() {
        let err = ReleaseStampError::AmbiguousVersion {
            version: "1.0.0".to_string(),
            tags: vec!["v1.0.0+a".to_string(), "v1.0.0+b".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("1.0.0"));
        assert!(msg.contains("v1.0.0+a"));
        assert!(msg.contains("v1.0.0+b"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ReleaseStampError::config("x"), "Configuration error"),
            (ReleaseStampError::artifact("x"), "Artifact error"),
            (ReleaseStampError::head("x"), "HEAD error"),
            (
                ReleaseStampError::NoVersionTags("x".to_string()),
                "No version tags found",
            ),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
