// src/config.rs
use serde::Deserialize;
use std::sync::OnceLock;

use crate::consts::DEFAULT_REPORT_PATH;
use crate::enums::ReportFormat;
use crate::error::CoreError;

/// Global config — loaded once at startup
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub report: Report,
    pub features: Features,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Report {
    pub path: String,
    pub pretty: bool,
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Features {
    pub include_failing: bool,
}

impl Config {
    /// Parse a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, CoreError> {
        Ok(toml::from_str(content)?)
    }
}

fn builtin_defaults() -> Config {
    Config {
        report: Report {
            path: DEFAULT_REPORT_PATH.into(),
            pretty: true,
            format: ReportFormat::default(),
        },
        features: Features {
            include_failing: true,
        },
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config at runtime — falls back to defaults if missing
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var("FIXTURES_CONFIG").unwrap_or_else(|_| "dev-config.toml".to_string());

        let mut conf: Config = if std::path::Path::new(&config_path).exists() {
            let content =
                std::fs::read_to_string(&config_path).expect("Failed to read dev-config.toml");
            Config::from_toml_str(&content).expect("Invalid TOML in dev-config.toml")
        } else {
            eprintln!("Warning: {config_path} not found — using built-in defaults");
            builtin_defaults()
        };

        // Critical for CI: reports must always cover the failure fixtures
        if std::env::var("FIXTURES_TEST_MODE").is_ok() {
            conf.features.include_failing = true;
        }

        #[cfg(feature = "logging")]
        tracing::debug!(path = %config_path, "config loaded");

        conf
    })
}
