use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub dataset: DatasetConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    /// Path to the delimited source file with order transactions
    pub path: String,
    /// WHATWG encoding label of the source file
    #[serde(default = "default_encoding")]
    pub encoding: String,
    /// chrono format string for the date columns
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_encoding() -> String {
    "latin1".to_string()
}

fn default_date_format() -> String {
    "%m/%d/%Y".to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[dataset]
path = "data/orders.csv"
encoding = "latin1"
date_format = "%m/%d/%Y"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Get the dataset file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_dataset_path(config: &Config) -> anyhow::Result<PathBuf> {
    let dataset_path_str = &config.dataset.path;
    let dataset_path = Path::new(dataset_path_str);

    // If absolute path, use as is
    if dataset_path.is_absolute() {
        return Ok(dataset_path.to_path_buf());
    }

    // If relative path, resolve it relative to the executable directory
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved_path = exe_dir.join(dataset_path);
            return Ok(resolved_path);
        }
    }

    // Fallback: use relative to current directory
    Ok(PathBuf::from(dataset_path_str))
}
