use thiserror::Error;

/// Startup configuration error.
/// Both variants are fatal: the caller is expected to log and exit.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load env file: {file}")]
    EnvFile {
        file: String,
        #[source]
        source: dotenvy::Error,
    },

    #[error("{0} is empty")]
    MissingVariable(&'static str),
}

impl ConfigError {
    /// Name of the variable that was missing, if that is what went wrong.
    pub fn missing_key(&self) -> Option<&'static str> {
        match self {
            ConfigError::MissingVariable(key) => Some(key),
            ConfigError::EnvFile { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_missing_variable_message_names_key() {
        let err = ConfigError::MissingVariable("REDIS_HOST");
        assert_eq!(err.to_string(), "REDIS_HOST is empty");
        assert_eq!(err.missing_key(), Some("REDIS_HOST"));
    }

    #[test]
    fn test_env_file_message_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "nope");
        let err = ConfigError::EnvFile {
            file: ".env.dev".to_string(),
            source: dotenvy::Error::Io(io),
        };
        assert_eq!(err.to_string(), "failed to load env file: .env.dev");
        assert!(err.source().is_some());
        assert_eq!(err.missing_key(), None);
    }
}
