use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub profiles: ProfileSettings,
    pub matching: MatchingSettings,
    pub scoring: ScoringSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileSettings {
    /// Path to the scraped-profiles JSON file
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    pub default_limit: Option<usize>,
    pub max_limit: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skill_weight")]
    pub skill: f64,
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
    #[serde(default = "default_activity_weight")]
    pub activity: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skill: default_skill_weight(),
            experience: default_experience_weight(),
            activity: default_activity_weight(),
        }
    }
}

fn default_skill_weight() -> f64 { 0.5 }
fn default_experience_weight() -> f64 { 0.3 }
fn default_activity_weight() -> f64 { 0.2 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Configuration file (config/default.toml)
    /// 2. Local overrides (config/local.toml)
    /// 3. Environment variables (prefixed with TALENT_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with TALENT_)
            // e.g., TALENT_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("TALENT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("TALENT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply direct environment overrides that don't fit the prefixed scheme
///
/// `CANDIDATE_PROFILES_PATH` points at the scraped-profiles JSON file and
/// takes precedence over any configured path.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let profiles_path = env::var("CANDIDATE_PROFILES_PATH")
        .or_else(|_| env::var("TALENT_PROFILES__PATH"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(path) = profiles_path {
        builder = builder.set_override("profiles.path", path)?;
    }

    builder.build()
}
