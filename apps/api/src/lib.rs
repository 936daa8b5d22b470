//! Startup configuration for the mhride backend.
//!
//! [`config::ConfigLoader`] selects `.env.dev` or `.env.prod` from
//! `DEPLOYMENT_ENV`, merges it into the process environment and returns an
//! immutable [`config::Config`]. Hand the result to whatever needs it instead
//! of reading the environment again.

pub mod config;
pub mod errors;

pub use config::{Config, ConfigLoader, DeploymentMode};
pub use errors::ConfigError;
