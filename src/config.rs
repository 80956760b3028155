use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::{SourceWeights, WeightVector};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub sources: SourceSettings,
    #[serde(default)]
    pub ranking: RankingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_frontend_weight")]
    pub frontend: f64,
    #[serde(default = "default_backend_weight")]
    pub backend: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            frontend: default_frontend_weight(),
            backend: default_backend_weight(),
        }
    }
}

impl From<&WeightsConfig> for WeightVector {
    fn from(config: &WeightsConfig) -> Self {
        WeightVector::new(config.frontend, config.backend)
    }
}

fn default_frontend_weight() -> f64 { 0.5 }
fn default_backend_weight() -> f64 { 0.5 }

#[derive(Debug, Clone, Deserialize)]
pub struct SourceSettings {
    #[serde(default = "default_github_weight")]
    pub github_weight: f64,
    #[serde(default = "default_resume_weight")]
    pub resume_weight: f64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            github_weight: default_github_weight(),
            resume_weight: default_resume_weight(),
        }
    }
}

impl From<&SourceSettings> for SourceWeights {
    fn from(config: &SourceSettings) -> Self {
        SourceWeights {
            github: config.github_weight,
            resume: config.resume_weight,
        }
    }
}

fn default_github_weight() -> f64 { 2.0 }
fn default_resume_weight() -> f64 { 1.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct RankingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_limit() -> u16 { 10 }
fn default_max_limit() -> u16 { 100 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

/// Output layouts supported by the `tracing_subscriber::fmt` layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Compact,
    Full,
}

impl LogFormat {
    /// Unrecognized names fall back to the full single-line layout
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            "compact" => LogFormat::Compact,
            _ => LogFormat::Full,
        }
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with TEAM_MATCH)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., TEAM_MATCH__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("TEAM_MATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.frontend, 0.5);
        assert_eq!(weights.backend, 0.5);
        assert_eq!(WeightVector::from(&weights), WeightVector::default());
    }

    #[test]
    fn test_default_sources() {
        let sources = SourceWeights::from(&SourceSettings::default());
        assert_eq!(sources, SourceWeights::default());
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "compact");
        assert_eq!(LogFormat::parse(&format), LogFormat::Compact);
    }

    #[test]
    fn test_log_format_names() {
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse(" Compact "), LogFormat::Compact);
        assert_eq!(LogFormat::parse("full"), LogFormat::Full);
        assert_eq!(LogFormat::parse("json"), LogFormat::Full);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(
                "[server]\nport = 9100\n\n[scoring.weights]\nfrontend = 0.7\n",
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 9100);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.scoring.weights.frontend, 0.7);
        assert_eq!(settings.scoring.weights.backend, 0.5);
        assert_eq!(settings.ranking.max_limit, 100);
    }
}
