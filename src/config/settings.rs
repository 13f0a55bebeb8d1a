//! Application settings and configuration management

use crate::analysis::{DEFAULT_MOST_COMMON_LIMIT, DEFAULT_READING_SPEED_WPM};
use crate::error::{AppError, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub rate_limit: RateLimitConfig,
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout() -> u64 {
    30000
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_rps")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst_size: u32,
}

fn default_true() -> bool {
    true
}

fn default_rps() -> u32 {
    100
}

fn default_burst() -> u32 {
    200
}

/// Text analysis tunables; the defaults are the documented behavior of the
/// analyze endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_most_common_limit")]
    pub most_common_limit: usize,
    #[serde(default = "default_reading_speed")]
    pub reading_speed_wpm: u32,
}

fn default_most_common_limit() -> usize {
    DEFAULT_MOST_COMMON_LIMIT
}

fn default_reading_speed() -> u32 {
    DEFAULT_READING_SPEED_WPM
}

/// Seed data configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SeedConfig {
    /// Path to a YAML file with initial collection records
    #[serde(default)]
    pub path: Option<String>,
}

impl Settings {
    /// Load settings from the default configuration file and environment
    /// variables
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/textlab.yaml")
    }

    /// Load settings from a specific configuration file path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Determine file format
        let format = if path
            .extension()
            .map_or(false, |ext| ext == "yaml" || ext == "yml")
        {
            FileFormat::Yaml
        } else {
            FileFormat::Toml
        };

        let mut config_builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("server.request_timeout_ms", 30000)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "json")?
            .set_default("rate_limit.enabled", true)?
            .set_default("rate_limit.requests_per_second", 100)?
            .set_default("rate_limit.burst_size", 200)?
            .set_default("analysis.most_common_limit", 5)?
            .set_default("analysis.reading_speed_wpm", 200)?;

        if path.exists() {
            config_builder = config_builder.add_source(File::from(path).format(format));
        }

        // Add environment overrides
        config_builder = config_builder.add_source(
            Environment::with_prefix("TEXTLAB")
                .separator("__")
                .try_parsing(true),
        );

        let config = config_builder.build()?;
        let settings: Settings = config.try_deserialize()?;
        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "Server port cannot be 0".to_string(),
            )));
        }

        if self.analysis.reading_speed_wpm == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "Reading speed cannot be 0 words per minute".to_string(),
            )));
        }

        if self.rate_limit.enabled
            && (self.rate_limit.requests_per_second == 0 || self.rate_limit.burst_size == 0)
        {
            return Err(AppError::Config(config::ConfigError::Message(
                "Rate limit quota cannot be 0".to_string(),
            )));
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
                request_timeout_ms: default_request_timeout(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
            rate_limit: RateLimitConfig {
                enabled: true,
                requests_per_second: default_rps(),
                burst_size: default_burst(),
            },
            analysis: AnalysisConfig {
                most_common_limit: default_most_common_limit(),
                reading_speed_wpm: default_reading_speed(),
            },
            seed: SeedConfig::default(),
        }
    }
}
