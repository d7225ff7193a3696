//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use hrmetrics_core::HrError;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides (not committed)
    /// 4. Environment variables with `HRMETRICS_` prefix
    pub fn new(config_dir: impl Into<String>) -> Result<Self, HrError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, HrError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    pub async fn reload(&self) -> Result<(), HrError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str) -> Result<AppConfig, HrError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("HRMETRICS_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        // 1. Load default configuration
        let default_path = format!("{}/default.toml", config_dir);
        if Path::new(&default_path).exists() {
            debug!("Loading default config from: {}", default_path);
            builder = builder.add_source(File::with_name(&default_path).required(false));
        }

        // 2. Load environment-specific configuration
        let env_path = format!("{}/{}.toml", config_dir, environment);
        if Path::new(&env_path).exists() {
            debug!("Loading environment config from: {}", env_path);
            builder = builder.add_source(File::with_name(&env_path).required(false));
        }

        // 3. Load local overrides (not committed to version control)
        let local_path = format!("{}/local.toml", config_dir);
        if Path::new(&local_path).exists() {
            debug!("Loading local config from: {}", local_path);
            builder = builder.add_source(File::with_name(&local_path).required(false));
        }

        // 4. Override with environment variables (HRMETRICS_ prefix)
        builder = builder.add_source(
            Environment::with_prefix("HRMETRICS")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_hr_error)?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_hr_error)?;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Validates the configuration.
    fn validate_config(config: &AppConfig) -> Result<(), HrError> {
        if config.database.url.is_empty() {
            return Err(HrError::Configuration(
                "Database URL is required".to_string(),
            ));
        }

        if !config.security.dev_mode && config.security.users.is_empty() {
            return Err(HrError::Configuration(
                "At least one basic-auth user is required when dev_mode is disabled".to_string(),
            ));
        }

        if config.security.dev_mode && config.app.environment == "production" {
            warn!("dev_mode is enabled in production: all requests bypass authentication");
        }

        Ok(())
    }
}

fn config_error_to_hr_error(err: ConfigError) -> HrError {
    HrError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_loader_with_missing_dir_falls_back_to_defaults() {
        let loader = ConfigLoader::new("./definitely-missing-config-dir").unwrap();
        let config = loader.get().await;
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.cache.ttl_secs, 300);
    }

    #[tokio::test]
    async fn test_loader_reads_default_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("default.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[server]\nhost = \"127.0.0.1\"\nport = 9100").unwrap();
        writeln!(file, "[cache]\nenabled = true\nttl_secs = 60").unwrap();

        let loader = ConfigLoader::new(dir.path().to_str().unwrap()).unwrap();
        let config = loader.get().await;
        assert_eq!(config.server.addr(), "127.0.0.1:9100");
        assert_eq!(config.cache.ttl_secs, 60);
    }

    #[test]
    fn test_validation_requires_users_outside_dev_mode() {
        let mut config = AppConfig::default();
        config.security.dev_mode = false;
        let result = ConfigLoader::validate_config(&config);
        assert!(result.is_err());

        config
            .security
            .users
            .insert("analyst".to_string(), "s3cret".to_string());
        assert!(ConfigLoader::validate_config(&config).is_ok());
    }
}
