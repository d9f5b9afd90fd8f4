//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (~/.config/bullyscan/config.toml)
//! 3. Project config (.bullyscan/config.toml)
//! 4. Environment variables (BULLYSCAN_* prefix, `__` separates sections)
//! 5. CLI overrides

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::types::Config;
use crate::types::{Result, ScanError};

const ENV_PREFIX: &str = "BULLYSCAN_";

/// Values supplied on the command line, merged last
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub service_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full resolution chain:
    /// defaults → global → project → env vars
    pub fn load() -> Result<Config> {
        Self::load_with(&ConfigOverrides::default())
    }

    /// Load configuration and apply CLI overrides on top
    pub fn load_with(overrides: &ConfigOverrides) -> Result<Config> {
        let figment = Self::figment(
            Self::global_config_path().as_deref(),
            &Self::project_config_path(),
        );
        Self::resolve(figment, overrides)
    }

    /// Merge overrides into `figment`, extract and validate
    fn resolve(mut figment: Figment, overrides: &ConfigOverrides) -> Result<Config> {
        if let Some(url) = &overrides.service_url {
            figment = figment.merge(Serialized::default("service.base_url", url));
        }
        if let Some(secs) = overrides.timeout_secs {
            figment = figment.merge(Serialized::default("service.timeout_secs", secs));
        }

        let config: Config = figment
            .extract()
            .map_err(|e| ScanError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file only
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| ScanError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    fn figment(global_path: Option<&Path>, project_path: &Path) -> Figment {
        // BULLYSCAN_SERVICE__BASE_URL -> service.base_url
        Self::file_figment(global_path, project_path)
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Defaults plus whichever config files exist, without the environment
    fn file_figment(global_path: Option<&Path>, project_path: &Path) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(global_path) = global_path
            && global_path.exists()
        {
            debug!("Loading global config from: {}", global_path.display());
            figment = figment.merge(Toml::file(global_path));
        }

        if project_path.exists() {
            debug!("Loading project config from: {}", project_path.display());
            figment = figment.merge(Toml::file(project_path));
        }

        figment
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Get path to global config directory
    pub fn global_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "bullyscan").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get path to global config file
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join("config.toml"))
    }

    /// Get project data directory
    pub fn project_dir() -> PathBuf {
        PathBuf::from(".bullyscan")
    }

    /// Get path to project config file
    pub fn project_config_path() -> PathBuf {
        Self::project_dir().join("config.toml")
    }

    // =========================================================================
    // Config Commands
    // =========================================================================

    /// Show config file paths
    pub fn show_path() {
        println!("Configuration paths:");
        println!();

        if let Some(global) = Self::global_config_path() {
            let exists = if global.exists() { "✓" } else { "✗" };
            println!("  Global:  {} {}", exists, global.display());
        } else {
            println!("  Global:  (not available)");
        }

        let project = Self::project_config_path();
        let exists = if project.exists() { "✓" } else { "✗" };
        println!("  Project: {} {}", exists, project.display());
    }

    /// Render the effective configuration as JSON or TOML
    pub fn render(config: &Config, as_json: bool) -> Result<String> {
        if as_json {
            Ok(serde_json::to_string_pretty(config)?)
        } else {
            toml::to_string_pretty(config).map_err(|e| ScanError::Config(e.to_string()))
        }
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Write a default config file, creating parent directories
    pub fn init_at(path: &Path, force: bool) -> Result<bool> {
        if path.exists() && !force {
            info!("Config exists: {}", path.display());
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, Self::default_config_content())?;
        info!("Created config: {}", path.display());
        Ok(true)
    }

    /// Initialize global configuration
    pub fn init_global(force: bool) -> Result<PathBuf> {
        let path = Self::global_config_path().ok_or_else(|| {
            ScanError::Config("Cannot determine global config directory".to_string())
        })?;
        Self::init_at(&path, force)?;
        Ok(path)
    }

    /// Initialize project configuration
    pub fn init_project(force: bool) -> Result<PathBuf> {
        let path = Self::project_config_path();
        Self::init_at(&path, force)?;
        Ok(path)
    }

    fn default_config_content() -> String {
        r#"# bullyscan Configuration
# Project settings in .bullyscan/config.toml override the global file.
# Environment variables use the BULLYSCAN_ prefix, e.g. BULLYSCAN_SERVICE__BASE_URL.

version = "1.0"

[service]
base_url = "http://localhost:5000"
predict_path = "/predict"
analyze_path = "/analyze_csv"
# timeout_secs = 60

[results]
download_name = "analyzed_results.csv"
publish_statistics = true
"#
        .to_string()
    }
}
