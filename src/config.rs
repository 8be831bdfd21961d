use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::MatchWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub ingest: IngestSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            ingest: IngestSettings::default(),
            matching: MatchingSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
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

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Deserialize)]
pub struct IngestSettings {
    /// Default capture file for batch runs.
    #[serde(default = "default_messages_file")]
    pub messages_file: String,
    #[serde(default = "default_dedup_window_secs")]
    pub dedup_window_secs: i64,
    #[serde(default = "default_dedup_cache_size")]
    pub dedup_cache_size: usize,
}

impl Default for IngestSettings {
    fn default() -> Self {
        Self {
            messages_file: default_messages_file(),
            dedup_window_secs: default_dedup_window_secs(),
            dedup_cache_size: default_dedup_cache_size(),
        }
    }
}

fn default_messages_file() -> String {
    "messages.jsonl".to_string()
}
fn default_dedup_window_secs() -> i64 {
    120
}
fn default_dedup_cache_size() -> usize {
    4096
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_neighborhood_weight")]
    pub neighborhood: i32,
    #[serde(default = "default_price_weight")]
    pub price: i32,
    #[serde(default = "default_property_type_weight")]
    pub property_type: i32,
    #[serde(default = "default_bedrooms_weight")]
    pub bedrooms: i32,
    #[serde(default = "default_area_weight")]
    pub area_m2: i32,
    #[serde(default = "default_bedroom_mismatch_penalty")]
    pub bedroom_mismatch_penalty: i32,
    #[serde(default = "default_min_score")]
    pub min_score: i32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            neighborhood: default_neighborhood_weight(),
            price: default_price_weight(),
            property_type: default_property_type_weight(),
            bedrooms: default_bedrooms_weight(),
            area_m2: default_area_weight(),
            bedroom_mismatch_penalty: default_bedroom_mismatch_penalty(),
            min_score: default_min_score(),
        }
    }
}

impl WeightsConfig {
    pub fn to_weights(&self) -> MatchWeights {
        MatchWeights {
            neighborhood: self.neighborhood,
            price: self.price,
            property_type: self.property_type,
            bedrooms: self.bedrooms,
            area_m2: self.area_m2,
            bedroom_mismatch_penalty: self.bedroom_mismatch_penalty,
            min_score: self.min_score,
        }
    }
}

fn default_neighborhood_weight() -> i32 {
    10
}
fn default_price_weight() -> i32 {
    10
}
fn default_property_type_weight() -> i32 {
    5
}
fn default_bedrooms_weight() -> i32 {
    5
}
fn default_area_weight() -> i32 {
    5
}
fn default_bedroom_mismatch_penalty() -> i32 {
    20
}
fn default_min_score() -> i32 {
    20
}

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

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SENTINELA_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SENTINELA_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("SENTINELA")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SENTINELA")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
