//! Configuration file handling for modelgen.
//!
//! Looks for `.config/modelgen.toml` in the current directory or any
//! parent directory. All fields are mandatory; see
//! [`modelgen::DatabaseConfig`].

use modelgen::DatabaseConfig;
use std::path::{Path, PathBuf};

/// Load configuration from `.config/modelgen.toml`, searching up the
/// directory tree.
pub fn load() -> Result<(DatabaseConfig, PathBuf), ConfigError> {
    let cwd = std::env::current_dir().map_err(|e| ConfigError::Io(e.to_string()))?;
    load_from(&cwd)
}

/// Load configuration starting from a specific directory.
pub fn load_from(start: &Path) -> Result<(DatabaseConfig, PathBuf), ConfigError> {
    let config_path = find_config_file(start)?;
    load_path(&config_path)
}

/// Load configuration from an explicit file path.
pub fn load_path(path: &Path) -> Result<(DatabaseConfig, PathBuf), ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
    let config: DatabaseConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    Ok((config, path.to_path_buf()))
}

/// Find `.config/modelgen.toml` by searching up the directory tree.
fn find_config_file(start: &Path) -> Result<PathBuf, ConfigError> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(".config/modelgen.toml");
        if config_path.exists() {
            return Ok(config_path);
        }

        if !current.pop() {
            return Err(ConfigError::NotFound);
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// No `.config/modelgen.toml` found in any parent directory
    NotFound,
    /// I/O error reading the file
    Io(String),
    /// Parse error in the TOML file
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound => {
                write!(
                    f,
                    "No .config/modelgen.toml found in current directory or any parent"
                )
            }
            ConfigError::Io(e) => write!(f, "Failed to read configuration: {}", e),
            ConfigError::Parse(e) => write!(f, "Failed to parse configuration: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
        url = "postgres://db.internal:5432/shop"
        username = "app"
        password = "secret"
        model_package = "shop.models"
        output_directory = "generated"
    "#;

    #[test]
    fn test_load_from_searches_parents() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join(".config");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("modelgen.toml"), VALID).unwrap();

        let nested = dir.path().join("a/b/c");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, path) = load_from(&nested).unwrap();
        assert_eq!(config.model_package, "shop.models");
        assert!(path.ends_with(".config/modelgen.toml"));
    }

    #[test]
    fn test_load_from_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from(dir.path());
        assert!(matches!(result, Err(ConfigError::NotFound)));
    }

    #[test]
    fn test_load_path_rejects_incomplete_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("modelgen.toml");
        std::fs::write(&path, "url = \"postgres://db/shop\"").unwrap();

        let result = load_path(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
