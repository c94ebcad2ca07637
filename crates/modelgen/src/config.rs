//! The modelgen configuration record.

use crate::{Error, Result};
use camino::Utf8PathBuf;
use serde::Deserialize;

/// Connection and generation settings.
///
/// All fields are mandatory and there are no defaults; deserialization
/// fails on a missing or unknown field. The CLI loads this record from
/// `.config/modelgen.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Connection URL, e.g. `postgres://db.internal:5432/shop`.
    pub url: String,
    /// Database user, kept separate from the URL.
    pub username: String,
    /// Database password.
    pub password: String,
    /// Dotted package name for generated models, e.g. `shop.models`.
    pub model_package: String,
    /// Root directory generated files are written under.
    pub output_directory: Utf8PathBuf,
}

impl DatabaseConfig {
    /// Derive the database name from the connection URL: the portion after
    /// the last `/`.
    pub fn database_name(&self) -> Result<&str> {
        // rsplit always yields at least one fragment, the whole string
        // when there is no separator.
        let name = self.url.rsplit('/').next().unwrap_or_default();
        if name.is_empty() {
            return Err(Error::Configuration(format!(
                "connection URL {:?} has no database name",
                self.url
            )));
        }
        Ok(name)
    }

    /// Build the tokio-postgres connection config: the URL plus the
    /// separately held credentials.
    pub fn pg_config(&self) -> Result<tokio_postgres::Config> {
        let mut pg: tokio_postgres::Config = self
            .url
            .parse()
            .map_err(|e| Error::Configuration(format!("invalid connection URL: {e}")))?;
        pg.user(&self.username);
        pg.password(&self.password);
        Ok(pg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_url(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: url.to_string(),
            username: "app".to_string(),
            password: "secret".to_string(),
            model_package: "shop.models".to_string(),
            output_directory: Utf8PathBuf::from("generated"),
        }
    }

    #[test]
    fn test_database_name_trailing_segment() {
        let config = config_with_url("postgres://db.internal:5432/shop");
        assert_eq!(config.database_name().unwrap(), "shop");
    }

    #[test]
    fn test_database_name_without_separator() {
        let config = config_with_url("shop");
        assert_eq!(config.database_name().unwrap(), "shop");
    }

    #[test]
    fn test_database_name_missing() {
        let config = config_with_url("postgres://db.internal:5432/");
        let err = config.database_name().unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_all_fields_mandatory() {
        let incomplete = r#"
            url = "postgres://db.internal:5432/shop"
            username = "app"
            password = "secret"
            model_package = "shop.models"
        "#;
        let result: std::result::Result<DatabaseConfig, _> = toml::from_str(incomplete);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let extra = r#"
            url = "postgres://db.internal:5432/shop"
            username = "app"
            password = "secret"
            model_package = "shop.models"
            output_directory = "generated"
            retries = 3
        "#;
        let result: std::result::Result<DatabaseConfig, _> = toml::from_str(extra);
        assert!(result.is_err());
    }
}
