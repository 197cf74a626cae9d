use thiserror::Error;

/// Unified error type for release-notes generation
#[derive(Error, Debug)]
pub enum ReleaseNotesError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Repository access failed: {0}")]
    Repository(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid {field} exclusion pattern '{pattern}': {source}")]
    Pattern {
        field: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in git-release-notes
pub type Result<T> = std::result::Result<T, ReleaseNotesError>;

impl ReleaseNotesError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseNotesError::Config(msg.into())
    }

    /// Create a repository access error with context
    pub fn repository(msg: impl Into<String>) -> Self {
        ReleaseNotesError::Repository(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReleaseNotesError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReleaseNotesError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_pattern_error_names_offending_pattern() {
        let source = regex::Regex::new("(unclosed").unwrap_err();
        let err = ReleaseNotesError::Pattern {
            field: "title",
            pattern: "(unclosed".to_string(),
            source,
        };

        let msg = err.to_string();
        assert!(msg.starts_with("Invalid title exclusion pattern '(unclosed'"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ReleaseNotesError::config("x"), "Configuration error"),
            (ReleaseNotesError::repository("x"), "Repository access failed"),
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

    #[test]
    fn test_error_special_characters_in_messages() {
        let special_chars = vec![
            "message with\nnewline",
            "message with 'quotes'",
            "message with unicode: ñ",
        ];

        for msg in special_chars {
            let err = ReleaseNotesError::repository(msg);
            assert!(err.to_string().contains(msg));
        }
    }
}
