use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::{CoordinateTable, MatchMethod};
use crate::error::MatchError;
use crate::models::{Coordinate, ScoringWeights, DEFAULT_STRICT_WEIGHT_THRESHOLD, DIMENSIONS};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub locations: Vec<LocationSettings>,
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
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_top_k")]
    pub default_top_k: usize,
    #[serde(default = "default_max_top_k")]
    pub max_top_k: usize,
    #[serde(default)]
    pub default_method: MatchMethod,
    #[serde(default = "default_true")]
    pub apply_filters: bool,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_top_k: default_top_k(),
            max_top_k: default_max_top_k(),
            default_method: MatchMethod::default(),
            apply_filters: true,
        }
    }
}

fn default_top_k() -> usize { 5 }
fn default_max_top_k() -> usize { 100 }
fn default_true() -> bool { true }

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default = "default_strict_threshold")]
    pub strict_threshold: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            strict_threshold: default_strict_threshold(),
        }
    }
}

fn default_strict_threshold() -> f64 { DEFAULT_STRICT_WEIGHT_THRESHOLD }

/// Per-dimension weights, in vector order
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_location_weight")]
    pub latitude: f64,
    #[serde(default = "default_location_weight")]
    pub longitude: f64,
    #[serde(default = "default_strict_weight")]
    pub gender: f64,
    #[serde(default = "default_budget_weight")]
    pub budget: f64,
    #[serde(default = "default_strict_weight")]
    pub lease_duration: f64,
    #[serde(default = "default_medium_weight")]
    pub room_type: f64,
    #[serde(default = "default_lifestyle_weight")]
    pub bathroom: f64,
    #[serde(default = "default_lifestyle_weight")]
    pub food: f64,
    #[serde(default = "default_lifestyle_weight")]
    pub alcohol: f64,
    #[serde(default = "default_lifestyle_weight")]
    pub smoke: f64,
    #[serde(default = "default_medium_weight")]
    pub utilities: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            latitude: default_location_weight(),
            longitude: default_location_weight(),
            gender: default_strict_weight(),
            budget: default_budget_weight(),
            lease_duration: default_strict_weight(),
            room_type: default_medium_weight(),
            bathroom: default_lifestyle_weight(),
            food: default_lifestyle_weight(),
            alcohol: default_lifestyle_weight(),
            smoke: default_lifestyle_weight(),
            utilities: default_medium_weight(),
        }
    }
}

fn default_location_weight() -> f64 { 3.0 }
fn default_strict_weight() -> f64 { 4.0 }
fn default_budget_weight() -> f64 { 3.0 }
fn default_medium_weight() -> f64 { 2.0 }
fn default_lifestyle_weight() -> f64 { 1.0 }

impl WeightsConfig {
    pub fn as_array(&self) -> [f64; DIMENSIONS] {
        [
            self.latitude,
            self.longitude,
            self.gender,
            self.budget,
            self.lease_duration,
            self.room_type,
            self.bathroom,
            self.food,
            self.alcohol,
            self.smoke,
            self.utilities,
        ]
    }
}

impl ScoringSettings {
    /// Validated weight profile
    pub fn to_weights(&self) -> Result<ScoringWeights, MatchError> {
        ScoringWeights::new(self.weights.as_array(), self.strict_threshold)
    }
}

/// Named coordinate added to (or replacing one in) the built-in table
#[derive(Debug, Clone, Deserialize)]
pub struct LocationSettings {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
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

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with HOMIE__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., HOMIE__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("HOMIE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("HOMIE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Built-in neighborhoods with configured locations layered on top
    pub fn coordinate_table(&self) -> CoordinateTable {
        let mut table = CoordinateTable::builtin().clone();
        let configured: CoordinateTable = self
            .locations
            .iter()
            .map(|loc| (loc.name.clone(), Coordinate::new(loc.lat, loc.lon)))
            .collect();
        table.merge(&configured);
        table
    }
}
