// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

use std::env;
use std::path::Path;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File};
use serde::Deserialize;
use sheets_auth::constants::DEFAULT_TOKEN_URI;
use sheets_auth::credentials::{CredentialError, CredentialSource};

use crate::constants::{
    DEFAULT_APPEND_RANGE, DEFAULT_LOG_LEVEL, DEFAULT_SHEETS_API_URL, SERVER_HOST, SERVER_PORT,
};

/// Environment variables and the config keys they override.
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("HOST", "host"),
    ("PORT", "port"),
    ("LOG_LEVEL", "log_level"),
    ("GOOGLE_CREDENTIALS", "google.credentials"),
    ("GOOGLE_SERVICE_ACCOUNT_EMAIL", "google.service_account_email"),
    ("GOOGLE_PRIVATE_KEY", "google.private_key"),
    ("GOOGLE_SHEET_ID", "google.sheet_id"),
    ("GOOGLE_APPEND_RANGE", "google.append_range"),
    ("GOOGLE_TOKEN_URI", "google.token_uri"),
    ("GOOGLE_SHEETS_API_URL", "google.api_base_url"),
];

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub google: GoogleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    /// Full service-account JSON key. Takes precedence over the split fields.
    pub credentials: Option<String>,
    pub service_account_email: Option<String>,
    pub private_key: Option<String>,
    pub sheet_id: Option<String>,
    pub append_range: String,
    pub token_uri: String,
    pub api_base_url: String,
}

impl GoogleConfig {
    pub fn credential_source(&self) -> Result<CredentialSource, CredentialError> {
        CredentialSource::resolve(
            self.credentials.as_deref(),
            self.service_account_email.as_deref(),
            self.private_key.as_deref(),
        )
    }
}

impl ServerConfig {
    /// Load configuration from `CONFIG_FILE` (or `config.yaml`) and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = env::var("CONFIG_FILE").ok();
        Self::from_sources(config_path.as_deref().map(Path::new), |key| {
            env::var(key).ok()
        })
    }

    /// Layer defaults, an optional YAML file, and environment overrides.
    ///
    /// `lookup` resolves environment variable names so tests don't have to
    /// touch the real process environment.
    pub fn from_sources<F>(config_path: Option<&Path>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = defaults()?;

        if let Some(path) = config_path {
            let path_str = path.to_str().ok_or_else(|| {
                ConfigError::Message("Invalid path: contains non-UTF8 characters".to_string())
            })?;
            builder = builder.add_source(File::with_name(path_str));
        } else {
            builder = builder
                .add_source(File::with_name("config.yaml").required(false))
                .add_source(File::with_name("config.yml").required(false));
        }

        for &(var, key) in ENV_OVERRIDES {
            builder = builder.set_override_option(key, lookup(var))?;
        }

        builder.build()?.try_deserialize()
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("host", SERVER_HOST)?
        .set_default("port", i64::from(SERVER_PORT))?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("google.append_range", DEFAULT_APPEND_RANGE)?
        .set_default("google.token_uri", DEFAULT_TOKEN_URI)?
        .set_default("google.api_base_url", DEFAULT_SHEETS_API_URL)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: SERVER_HOST.to_owned(),
            port: SERVER_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            google: GoogleConfig {
                credentials: None,
                service_account_email: None,
                private_key: None,
                sheet_id: None,
                append_range: DEFAULT_APPEND_RANGE.to_owned(),
                token_uri: DEFAULT_TOKEN_URI.to_owned(),
                api_base_url: DEFAULT_SHEETS_API_URL.to_owned(),
            },
        }
    }
}
