use std::fmt;

const DEVELOPMENT: &str = "development";
const PRODUCTION: &str = "production";

const DEV_ENV_FILE: &str = ".env.dev";
const PROD_ENV_FILE: &str = ".env.prod";

/// Deployment environment selected by `DEPLOYMENT_ENV`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeploymentMode {
    Development,
    Production,
    /// Unrecognised identifier, kept verbatim. Loads the development file.
    Other(String),
}

impl DeploymentMode {
    /// Resolves the raw selector value. Unset or blank falls back to development.
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw.map(str::trim).unwrap_or_default() {
            "" | DEVELOPMENT => DeploymentMode::Development,
            PRODUCTION => DeploymentMode::Production,
            other => DeploymentMode::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DeploymentMode::Development => DEVELOPMENT,
            DeploymentMode::Production => PRODUCTION,
            DeploymentMode::Other(name) => name,
        }
    }

    /// Environment file loaded for this mode.
    pub fn env_file(&self) -> &'static str {
        match self {
            DeploymentMode::Production => PROD_ENV_FILE,
            DeploymentMode::Development | DeploymentMode::Other(_) => DEV_ENV_FILE,
        }
    }
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
