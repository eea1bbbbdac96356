use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use kilin_core::Latency;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub latency: LatencyConfig,
    #[serde(default)]
    pub booking: BookingRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    File,
    Redis,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_redis_url")]
    pub redis_url: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_redis_url() -> String {
    "redis://127.0.0.1/".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
            redis_url: default_redis_url(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LatencyConfig {
    pub auth_ms: u64,
    pub booking_ms: u64,
    pub payment_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self { auth_ms: 1000, booking_ms: 1500, payment_ms: 800 }
    }
}

impl LatencyConfig {
    pub fn to_latency(&self) -> Latency {
        Latency::from_millis(self.auth_ms, self.booking_ms, self.payment_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct BookingRules {
    /// How far ahead the wizard accepts a booking date.
    #[serde(default = "default_max_days_ahead")]
    pub max_days_ahead: i64,
    #[serde(default = "default_reference_prefix")]
    pub reference_prefix: String,
    #[serde(default = "default_max_reference_attempts")]
    pub max_reference_attempts: u32,
}

fn default_max_days_ahead() -> i64 { 30 }
fn default_reference_prefix() -> String { "KLN".to_string() }
fn default_max_reference_attempts() -> u32 { 10 }

impl Default for BookingRules {
    fn default() -> Self {
        Self {
            max_days_ahead: default_max_days_ahead(),
            reference_prefix: default_reference_prefix(),
            max_reference_attempts: default_max_reference_attempts(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default").required(false))
            // Add in the current environment file
            // Note that this file is _optional_
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of KILIN)
            // Eg.. `KILIN_STORAGE__BACKEND=redis` would set `storage.backend`
            .add_source(config::Environment::with_prefix("KILIN").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
