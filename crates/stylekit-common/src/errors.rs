use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures reported by an option store backing the token registry.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("option '{key}' has unexpected shape: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("option '{0}' could not be written")]
    WriteFailed(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum StylekitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("registry error: {0}")]
    Registry(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("sanitizer.max_depth = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: sanitizer.max_depth = 0"
        );
    }

    #[test]
    fn store_error_display() {
        let err = StoreError::InvalidValue {
            key: "stylekit_tokens_registry".into(),
            reason: "expected an array".into(),
        };
        assert_eq!(
            err.to_string(),
            "option 'stylekit_tokens_registry' has unexpected shape: expected an array"
        );

        let err = StoreError::WriteFailed("stylekit_tokens_css".into());
        assert_eq!(
            err.to_string(),
            "option 'stylekit_tokens_css' could not be written"
        );
    }

    #[test]
    fn stylekit_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: StylekitError = config_err.into();
        assert!(matches!(err, StylekitError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn stylekit_error_from_store() {
        let store_err = StoreError::WriteFailed("tokens".into());
        let err: StylekitError = store_err.into();
        assert!(matches!(err, StylekitError::Store(_)));
        assert!(err.to_string().contains("tokens"));
    }

    #[test]
    fn stylekit_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: StylekitError = io_err.into();
        assert!(matches!(err, StylekitError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn stylekit_error_other_variants() {
        let err = StylekitError::Registry("2 duplicate groups".into());
        assert_eq!(err.to_string(), "registry error: 2 duplicate groups");

        let err = StylekitError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
