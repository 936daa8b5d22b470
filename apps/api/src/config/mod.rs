// Startup configuration: picks an env file by deployment mode, merges it into
// the process environment, then reads every variable into `Config`.
// Runs once in `main` before anything else is started.

pub mod keys;
pub mod mode;

use std::env;
use std::fmt;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::errors::ConfigError;

pub use mode::DeploymentMode;

const REDACTED: &str = "<redacted>";

/// Application configuration loaded from the environment.
/// Every `String` field is guaranteed non-empty once constructed.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub deployment_env: String,
    pub mongodb_uri: String,
    pub database: String,
    pub redis_host: String,
    pub redis_port: String,
    pub redis_password: String,
    pub redis_username: String,
    pub grpc_addr: String,
    pub grpc_web_addr: String,
    pub aws_region: String,
    pub aws_access_key: String,
    pub aws_secret_access_key: String,
    pub jwt_secret_key: String,
    pub s3_bucket_name: String,
    pub s3_bucket_url: String,
    pub email_enabled: bool,
    pub sender_email: String,
    pub zeptomail_token: String,
    pub stripe_publishable_key: String,
    pub stripe_secret_key: String,
    pub stripe_webhook_secret: String,
    pub connectycube_auth_key: String,
    pub aws_sqs_queue_url: String,
    pub google_api_key: String,
    pub sms_enabled: bool,
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    pub twilio_service_id: String,
}

impl Config {
    /// Builds the config from an arbitrary key lookup.
    ///
    /// Required keys are checked in [`keys::REQUIRED`] order and the first
    /// absent or empty one aborts the build. `EMAIL_ENABLED` and `SMS_ENABLED`
    /// never fail: only the exact string `"true"` turns them on.
    pub fn from_lookup<F>(mode: DeploymentMode, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &'static str| match lookup(key) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(ConfigError::MissingVariable(key)),
        };

        let email_enabled = read_flag(&lookup, keys::EMAIL_ENABLED);
        let sms_enabled = read_flag(&lookup, keys::SMS_ENABLED);

        Ok(Config {
            deployment_env: mode.as_str().to_string(),
            mongodb_uri: require(keys::MONGODB_URI)?,
            database: require(keys::DATABASE)?,
            redis_host: require(keys::REDIS_HOST)?,
            redis_port: require(keys::REDIS_PORT)?,
            redis_password: require(keys::REDIS_PASSWORD)?,
            redis_username: require(keys::REDIS_USERNAME)?,
            grpc_addr: require(keys::GRPC_ADDR)?,
            grpc_web_addr: require(keys::GRPC_WEB_ADDR)?,
            aws_region: require(keys::AWS_REGION)?,
            aws_access_key: require(keys::AWS_ACCESS_KEY)?,
            aws_secret_access_key: require(keys::AWS_SECRET_ACCESS_KEY)?,
            jwt_secret_key: require(keys::JWT_SECRET_KEY)?,
            s3_bucket_name: require(keys::S3_BUCKET_NAME)?,
            s3_bucket_url: require(keys::S3_BUCKET_URL)?,
            email_enabled,
            sender_email: require(keys::SENDER_EMAIL)?,
            zeptomail_token: require(keys::ZEPTOMAIL_TOKEN)?,
            google_api_key: require(keys::GOOGLE_API_KEY)?,
            stripe_publishable_key: require(keys::STRIPE_PUBLISHABLE_KEY)?,
            stripe_secret_key: require(keys::STRIPE_SECRET_KEY)?,
            stripe_webhook_secret: require(keys::STRIPE_WEBHOOK_SECRET)?,
            connectycube_auth_key: require(keys::CONNECTYCUBE_API_KEY)?,
            aws_sqs_queue_url: require(keys::AWS_SQS_QUEUE_URL)?,
            sms_enabled,
            twilio_account_sid: require(keys::TWILIO_ACCOUNT_SID)?,
            twilio_auth_token: require(keys::TWILIO_AUTH_TOKEN)?,
            twilio_service_id: require(keys::TWILIO_SERVICE_ID)?,
        })
    }

    pub fn deployment_mode(&self) -> DeploymentMode {
        DeploymentMode::resolve(Some(self.deployment_env.as_str()))
    }

    pub fn is_production(&self) -> bool {
        self.deployment_mode() == DeploymentMode::Production
    }

    /// `host:port` form for the Redis client.
    pub fn redis_address(&self) -> String {
        format!("{}:{}", self.redis_host, self.redis_port)
    }
}

fn read_flag<F>(lookup: &F, key: &'static str) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).unwrap_or_default().as_str() {
        "true" => true,
        "" | "false" => false,
        other => {
            warn!(key, value = other, "Unrecognised flag value, treating as false");
            false
        }
    }
}

// Credentials and tokens never reach the logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("deployment_env", &self.deployment_env)
            .field("mongodb_uri", &REDACTED)
            .field("database", &self.database)
            .field("redis_host", &self.redis_host)
            .field("redis_port", &self.redis_port)
            .field("redis_password", &REDACTED)
            .field("redis_username", &self.redis_username)
            .field("grpc_addr", &self.grpc_addr)
            .field("grpc_web_addr", &self.grpc_web_addr)
            .field("aws_region", &self.aws_region)
            .field("aws_access_key", &REDACTED)
            .field("aws_secret_access_key", &REDACTED)
            .field("jwt_secret_key", &REDACTED)
            .field("s3_bucket_name", &self.s3_bucket_name)
            .field("s3_bucket_url", &self.s3_bucket_url)
            .field("email_enabled", &self.email_enabled)
            .field("sender_email", &self.sender_email)
            .field("zeptomail_token", &REDACTED)
            .field("stripe_publishable_key", &self.stripe_publishable_key)
            .field("stripe_secret_key", &REDACTED)
            .field("stripe_webhook_secret", &REDACTED)
            .field("connectycube_auth_key", &REDACTED)
            .field("aws_sqs_queue_url", &self.aws_sqs_queue_url)
            .field("google_api_key", &REDACTED)
            .field("sms_enabled", &self.sms_enabled)
            .field("twilio_account_sid", &self.twilio_account_sid)
            .field("twilio_auth_token", &REDACTED)
            .field("twilio_service_id", &self.twilio_service_id)
            .finish()
    }
}

/// Loads [`Config`] from the env file selected by `DEPLOYMENT_ENV`.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    base_dir: PathBuf,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Looks for env files in the current working directory.
    pub fn new() -> Self {
        Self::with_base_dir(".")
    }

    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolves the mode, merges its env file into the process environment
    /// and reads the config from it.
    ///
    /// Variables already set in the process environment win over the file.
    /// Mutates process-wide state, so call it once before spawning anything.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let mode = DeploymentMode::resolve(env::var(keys::DEPLOYMENT_ENV).ok().as_deref());
        let file = mode.env_file();
        let path = self.base_dir.join(file);
        debug!(mode = %mode, path = %path.display(), "Resolved deployment mode");

        dotenvy::from_path(&path).map_err(|source| ConfigError::EnvFile {
            file: file.to_string(),
            source,
        })?;
        info!(file, "Environment file loaded");

        Config::from_lookup(mode, |key| env::var(key).ok())
    }
}
