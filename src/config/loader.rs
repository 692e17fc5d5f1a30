//! Configuration File Loading
//!
//! Finds a configuration file in the usual per-user locations (or takes an
//! explicit path), parses it as TOML or JSON, and validates the result.
//! A missing file is not an error: the built-in defaults are used.

use super::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest accepted screen dimension
const MAX_DIMENSION: u32 = 9999;

/// Longest accepted pause between ticks (one hour)
const MAX_INTERVAL_MS: u64 = 3_600_000;

/// Configuration file loader
pub struct ConfigLoader {
    /// Base paths searched for configuration files, extension omitted
    search_paths: Vec<PathBuf>,
    /// Supported configuration file formats, in preference order
    supported_formats: Vec<ConfigFormat>,
    /// Configuration file path (if one was loaded)
    current_path: Option<PathBuf>,
}

/// On-disk configuration format
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
}

impl ConfigFormat {
    /// Format implied by a file extension; anything unrecognized is TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }

    fn extension(self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ConfigFormat::Toml => "TOML",
            ConfigFormat::Json => "JSON",
        }
    }
}

impl ConfigLoader {
    /// Create a loader over the default search paths
    pub fn new() -> Self {
        Self {
            search_paths: Self::get_search_paths(),
            supported_formats: vec![ConfigFormat::Toml, ConfigFormat::Json],
            current_path: None,
        }
    }

    /// Load from the first configuration file found, or fall back to defaults
    pub fn load(&mut self) -> Result<Config> {
        let config = match self.find_and_load_config()? {
            Some((path, config)) => {
                info!("Configuration loaded from {}", path.display());
                self.current_path = Some(path);
                config
            }
            None => {
                debug!("No configuration file found, using defaults");
                Config::default()
            }
        };

        validate_config(&config)?;
        Ok(config)
    }

    /// Load and validate a specific file. The file must exist.
    pub fn load_from_path(&mut self, path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(Error::ConfigLoad {
                path: path.to_path_buf(),
                reason: "Configuration file does not exist".to_string(),
            });
        }

        let config = self.load_config_file(path, ConfigFormat::from_path(path))?;
        validate_config(&config)?;
        self.current_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Save configuration to a specific path, format chosen by extension
    pub fn save_to_path(&self, config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, render_config(config, ConfigFormat::from_path(path))?)?;
        Ok(())
    }

    /// Find and load configuration from search paths
    fn find_and_load_config(&self) -> Result<Option<(PathBuf, Config)>> {
        for path in &self.search_paths {
            for format in &self.supported_formats {
                let config_path = path.with_extension(format.extension());

                if config_path.exists() {
                    match self.load_config_file(&config_path, *format) {
                        Ok(config) => return Ok(Some((config_path, config))),
                        Err(e) => {
                            warn!(
                                "Failed to load config from {}: {}",
                                config_path.display(),
                                e
                            );
                            continue;
                        }
                    }
                }
            }
        }

        Ok(None)
    }

    /// Load a specific configuration file
    fn load_config_file(&self, path: &Path, format: ConfigFormat) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config = match format {
            ConfigFormat::Toml => toml::from_str(&content)?,
            ConfigFormat::Json => serde_json::from_str(&content)?,
        };
        Ok(config)
    }

    /// Get default search paths for configuration files
    fn get_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("blockclock").join("config"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".blockclock"));
        }

        paths
    }

    /// Get the configuration file path, if one was loaded
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// List all search paths
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Clear all search paths and add a single path
    pub fn set_search_path(&mut self, path: PathBuf) {
        self.search_paths = vec![path];
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize a configuration in the given format
pub fn render_config(config: &Config, format: ConfigFormat) -> Result<String> {
    let rendered = match format {
        ConfigFormat::Toml => toml::to_string_pretty(config).map_err(|e| e.to_string()),
        ConfigFormat::Json => serde_json::to_string_pretty(config).map_err(|e| e.to_string()),
    };

    rendered.map_err(|reason| Error::ConfigSerialize {
        format: format.label().to_string(),
        reason,
    })
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    let dimensions = [
        ("terminal.rows", config.terminal.rows),
        ("terminal.cols", config.terminal.cols),
    ];
    for (field, value) in dimensions {
        if value == 0 || value > MAX_DIMENSION {
            return Err(Error::ConfigValidation {
                field: field.to_string(),
                reason: format!("must be between 1 and {}", MAX_DIMENSION),
            });
        }
    }

    if config.blocks.colors.is_empty() {
        return Err(Error::ConfigValidation {
            field: "blocks.colors".to_string(),
            reason: "at least one block color is required".to_string(),
        });
    }

    let intervals = [
        ("blocks.interval_ms", config.blocks.interval_ms),
        ("clock.interval_ms", config.clock.interval_ms),
    ];
    for (field, value) in intervals {
        if value == 0 || value > MAX_INTERVAL_MS {
            return Err(Error::ConfigValidation {
                field: field.to_string(),
                reason: format!("must be between 1 and {} ms", MAX_INTERVAL_MS),
            });
        }
    }

    Ok(())
}
