//! Configuration module

pub mod settings;

pub use settings::{
    AnalysisConfig, LoggingConfig, RateLimitConfig, SeedConfig, ServerConfig, Settings,
};
