use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use cookbook_shopping::MergePolicy;
use serde::Deserialize;
use std::env;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub shopping: ShoppingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// JSON document holding recipes, favorites, ratings and the menu
    #[serde(default = "default_storage_path")]
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

fn default_storage_path() -> String {
    "cookbook.json".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ShoppingConfig {
    /// How quantities that cannot be summed are joined ("reference" or "scaled")
    #[serde(default)]
    pub merge_policy: MergePolicy,
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (COOKBOOK__STORAGE__PATH, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("storage.path", default_storage_path())?
            .set_default("observability.log_level", default_log_level())?
            .set_default("shopping.merge_policy", MergePolicy::default().to_string())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("COOKBOOK")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.storage.path.trim().is_empty() {
            return Err("Storage path must not be empty".to_string());
        }
        if let Err(e) = EnvFilter::try_new(&self.observability.log_level) {
            return Err(format!(
                "Invalid log level '{}': {}",
                self.observability.log_level, e
            ));
        }
        Ok(())
    }
}
