//! Configuration module with business-specific sub-modules
//!
//! - `auth` - Session token lifetime and provisioned accounts
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration
//!
//! Configuration is layered, later sources overriding earlier ones:
//! 1. Built-in defaults for the detected environment
//! 2. Optional `config.<environment>.toml` in the working directory
//! 3. `APP__`-prefixed environment variables, e.g.
//!    `APP__AUTH__SESSION__TOKEN_TTL_SECONDS=900`

pub mod auth;
pub mod environment;
pub mod server;

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, SeedUser, SessionConfig, MAX_TOKEN_TTL_SECONDS};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;

/// Prefix for environment variable overrides
const ENV_PREFIX: &str = "APP";

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub environment: Environment,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Built-in defaults for an environment
    pub fn for_environment(environment: Environment) -> Self {
        let server = if environment.is_production() {
            ServerConfig::new("0.0.0.0", 8080)
        } else {
            ServerConfig::default()
        };

        Self {
            environment,
            server,
            auth: AuthConfig::default(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Load configuration from `.env`, the environment config file and
    /// `APP__` environment variables. Called once at process start.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let environment = Environment::from_env();

        let builder = Self::defaults_builder(environment)?
            .add_source(File::with_name(environment.config_file()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            );

        Self::finish(builder.build()?)
    }

    /// Load configuration from an in-memory TOML document layered over the
    /// environment defaults
    pub fn from_toml_str(environment: Environment, toml: &str) -> Result<Self, ConfigError> {
        let builder = Self::defaults_builder(environment)?
            .add_source(File::from_str(toml, FileFormat::Toml));

        Self::finish(builder.build()?)
    }

    /// Reject configurations the server cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.auth.session.has_valid_ttl() {
            return Err(ConfigError::Message(format!(
                "auth.session.token_ttl_seconds must be between 1 and {}, got {}",
                MAX_TOKEN_TTL_SECONDS, self.auth.session.token_ttl_seconds
            )));
        }

        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Message("server.host must not be empty".to_string()));
        }

        if let Some(user) = self.auth.users.iter().find(|u| u.username.is_empty()) {
            return Err(ConfigError::Message(format!(
                "auth.users entry with email {:?} has an empty username",
                user.email
            )));
        }

        Ok(())
    }

    fn defaults_builder(
        environment: Environment,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let defaults = Config::try_from(&Self::for_environment(environment))?;
        Ok(Config::builder().add_source(defaults))
    }

    fn finish(config: Config) -> Result<Self, ConfigError> {
        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }
}
