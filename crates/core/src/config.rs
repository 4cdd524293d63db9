//! Configuration management for DigiBot.
//!
//! Configuration is merged from several layers, lowest precedence first:
//! - Built-in defaults
//! - YAML config file (`DIGIBOT_CONFIG` or `./.digibot/config.yaml`)
//! - Environment variables
//! - Command-line flags (applied by the binary through [`AppConfig::with_overrides`])

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};
use crate::logging::LogFormat;
use crate::provider::ProviderType;

/// Default OpenAI-compatible endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

/// Default chat model.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default environment variable holding the provider API key.
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Remote provider ("openai", or "none" to answer from the FAQ only)
    pub provider: String,

    /// Model identifier sent to the provider
    pub model: String,

    /// Base URL of the OpenAI-compatible API
    pub endpoint: String,

    /// Name of the environment variable the API key is read from
    pub api_key_env: String,

    /// API key for the remote provider
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Sampling temperature (0.0 - 2.0)
    pub temperature: f32,

    /// Maximum tokens in a remote completion
    pub max_tokens: u32,

    /// Remote request timeout in seconds
    pub timeout_secs: u64,

    /// FAQ corpus file; the built-in corpus is used when unset
    pub faq_file: Option<PathBuf>,

    /// Log level override
    pub log_level: Option<String>,

    /// Log output format
    pub log_format: LogFormat,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    remote: Option<RemoteSection>,
    faq: Option<FaqSection>,
    logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteSection {
    provider: Option<String>,
    model: Option<String>,
    endpoint: Option<String>,
    api_key_env: Option<String>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    timeout: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct FaqSection {
    file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LoggingSection {
    level: Option<String>,
    color: Option<bool>,
    format: Option<LogFormat>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_file: None,
            provider: "openai".to_string(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
            temperature: 0.7,
            max_tokens: 1024,
            timeout_secs: 30,
            faq_file: None,
            log_level: None,
            log_format: LogFormat::Pretty,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the config file, environment variables and defaults.
    ///
    /// Environment variables:
    /// - `DIGIBOT_CONFIG`: Path to config file
    /// - `DIGIBOT_PROVIDER`: Remote provider ("openai" or "none")
    /// - `DIGIBOT_MODEL`: Model identifier
    /// - `DIGIBOT_ENDPOINT`: API base URL
    /// - `DIGIBOT_API_KEY`: API key (falls back to the `apiKeyEnv` variable)
    /// - `DIGIBOT_FAQ_FILE`: FAQ corpus file
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// # Example
    /// ```no_run
    /// use digibot_core::config::AppConfig;
    ///
    /// let config = AppConfig::load().expect("Failed to load config");
    /// println!("Provider: {}", config.provider);
    /// ```
    pub fn load() -> AppResult<Self> {
        let explicit = std::env::var("DIGIBOT_CONFIG").ok().map(PathBuf::from);
        Self::load_from(explicit.as_deref())
    }

    /// Load configuration using an explicit config file path if given.
    ///
    /// An explicitly named file must exist; the default location is optional.
    pub fn load_from(config_file: Option<&Path>) -> AppResult<Self> {
        let mut config = Self::default();

        match config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "Config file does not exist: {:?}",
                        path
                    )));
                }
                config.merge_yaml(path)?;
                config.config_file = Some(path.to_path_buf());
            }
            None => {
                let default_path = PathBuf::from(".digibot/config.yaml");
                if default_path.exists() {
                    config.merge_yaml(&default_path)?;
                    config.config_file = Some(default_path);
                }
            }
        }

        // Environment variables override YAML config
        if let Ok(provider) = std::env::var("DIGIBOT_PROVIDER") {
            config.provider = provider;
        }

        if let Ok(model) = std::env::var("DIGIBOT_MODEL") {
            config.model = model;
        }

        if let Ok(endpoint) = std::env::var("DIGIBOT_ENDPOINT") {
            config.endpoint = endpoint;
        }

        if let Ok(faq_file) = std::env::var("DIGIBOT_FAQ_FILE") {
            config.faq_file = Some(PathBuf::from(faq_file));
        }

        config.api_key = normalize_key(std::env::var("DIGIBOT_API_KEY").ok())
            .or_else(|| normalize_key(std::env::var(&config.api_key_env).ok()));

        if let Ok(level) = std::env::var("RUST_LOG") {
            config.log_level = Some(level);
        }

        if std::env::var_os("NO_COLOR").is_some() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge a YAML configuration file into this config.
    fn merge_yaml(&mut self, path: &Path) -> AppResult<()> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        if let Some(remote) = config_file.remote {
            if let Some(provider) = remote.provider {
                self.provider = provider;
            }
            if let Some(model) = remote.model {
                self.model = model;
            }
            if let Some(endpoint) = remote.endpoint {
                self.endpoint = endpoint;
            }
            if let Some(api_key_env) = remote.api_key_env {
                self.api_key_env = api_key_env;
            }
            if let Some(temperature) = remote.temperature {
                self.temperature = temperature;
            }
            if let Some(max_tokens) = remote.max_tokens {
                self.max_tokens = max_tokens;
            }
            if let Some(timeout) = remote.timeout {
                self.timeout_secs = timeout;
            }
        }

        if let Some(faq) = config_file.faq {
            if let Some(file) = faq.file {
                // Relative corpus paths are resolved against the config file's directory
                self.faq_file = Some(match path.parent() {
                    Some(dir) if file.is_relative() => dir.join(file),
                    _ => file,
                });
            }
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                self.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                self.no_color = !color;
            }
            if let Some(format) = logging.format {
                self.log_format = format;
            }
        }

        Ok(())
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// Flags take precedence over the config file and environment variables.
    #[allow(clippy::too_many_arguments)]
    pub fn with_overrides(
        mut self,
        provider: Option<String>,
        model: Option<String>,
        faq_file: Option<PathBuf>,
        log_level: Option<String>,
        log_format: Option<LogFormat>,
        verbose: bool,
        no_color: bool,
        offline: bool,
    ) -> Self {
        if let Some(provider) = provider {
            self.provider = provider;
        }

        if let Some(model) = model {
            self.model = model;
        }

        if let Some(faq_file) = faq_file {
            self.faq_file = Some(faq_file);
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if let Some(log_format) = log_format {
            self.log_format = log_format;
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        if offline {
            self.provider = "none".to_string();
        }

        self
    }

    /// Whether the responder should be given a remote client at all.
    ///
    /// A configured provider without an API key still counts as enabled: the
    /// remote attempt then fails with a missing credential and the FAQ answers.
    pub fn remote_enabled(&self) -> bool {
        ProviderType::parse(&self.provider) != Some(ProviderType::None)
    }

    /// Validate the merged configuration.
    pub fn validate(&self) -> AppResult<()> {
        if ProviderType::parse(&self.provider).is_none() {
            let supported: Vec<&str> = ProviderType::ALL.iter().map(ProviderType::as_str).collect();
            return Err(AppError::Config(format!(
                "Unknown provider: {}. Supported: {}",
                self.provider,
                supported.join(", ")
            )));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::Config(format!(
                "Temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            )));
        }

        if self.timeout_secs == 0 {
            return Err(AppError::Config(
                "Remote timeout must be at least 1 second".to_string(),
            ));
        }

        if self.remote_enabled() && self.api_key.is_none() {
            tracing::warn!(
                "No API key found in DIGIBOT_API_KEY or {}; answers will come from the FAQ",
                self.api_key_env
            );
        }

        Ok(())
    }
}

/// Trim a key and treat blank values as unset.
fn normalize_key(key: Option<String>) -> Option<String> {
    key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty())
}
