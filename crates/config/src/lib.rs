use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

const DEFAULT_CONFIG_FILES: &[&str] = &[
    "parley.toml",
    "config/parley.toml",
    "crates/config/parley.toml",
    "../parley.toml",
    "../config/parley.toml",
    "../crates/config/parley.toml",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub database: DatabaseConfig,
    pub pagination: PaginationConfig,
    pub validation: ValidationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            database: DatabaseConfig::default(),
            pagination: PaginationConfig::default(),
            validation: ValidationConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub address: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 7080,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://parley.db".to_string(),
            max_connections: 10,
        }
    }
}

/// Page-size bounds applied by the repository layer.
///
/// ```
/// use parley_config::PaginationConfig;
///
/// let pagination = PaginationConfig::default();
/// assert_eq!(pagination.default_page_size, 20);
/// assert_eq!(pagination.max_page_size, 100);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaginationConfig {
    #[serde(default = "PaginationConfig::default_page_size")]
    pub default_page_size: i64,
    #[serde(default = "PaginationConfig::default_max_page_size")]
    pub max_page_size: i64,
}

impl PaginationConfig {
    const fn default_page_size() -> i64 {
        20
    }

    const fn default_max_page_size() -> i64 {
        100
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: Self::default_page_size(),
            max_page_size: Self::default_max_page_size(),
        }
    }
}

/// Field-length bounds enforced by the validation rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default = "ValidationConfig::default_max_title_length")]
    pub max_title_length: usize,
    #[serde(default = "ValidationConfig::default_max_text_length")]
    pub max_text_length: usize,
}

impl ValidationConfig {
    const fn default_max_title_length() -> usize {
        200
    }

    const fn default_max_text_length() -> usize {
        5000
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_title_length: Self::default_max_title_length(),
            max_text_length: Self::default_max_text_length(),
        }
    }
}

/// Load the application configuration by combining defaults, files, and environment overrides.
///
/// ```
/// use parley_config::load;
///
/// std::env::remove_var("PARLEY_CONFIG");
///
/// let config = load().expect("configuration should load with defaults");
/// assert!(!config.http.address.is_empty());
/// assert_eq!(config.pagination.max_page_size, 100);
/// ```
pub fn load() -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::default();

    let mut builder = config::Config::builder();
    builder = builder
        .set_default("http.address", defaults.http.address.clone())
        .unwrap()
        .set_default("http.port", i64::from(defaults.http.port))
        .unwrap()
        .set_default("database.url", defaults.database.url.clone())
        .unwrap()
        .set_default(
            "database.max_connections",
            i64::from(defaults.database.max_connections),
        )
        .unwrap()
        .set_default(
            "pagination.default_page_size",
            defaults.pagination.default_page_size,
        )
        .unwrap()
        .set_default("pagination.max_page_size", defaults.pagination.max_page_size)
        .unwrap()
        .set_default(
            "validation.max_title_length",
            defaults.validation.max_title_length as i64,
        )
        .unwrap()
        .set_default(
            "validation.max_text_length",
            defaults.validation.max_text_length as i64,
        )
        .unwrap();

    let environment_overrides = config::Environment::with_prefix("PARLEY").separator("__");

    let mut config_file_attached = false;

    if let Ok(path) = std::env::var("PARLEY_CONFIG") {
        builder = builder.add_source(config::File::from(PathBuf::from(&path)));
        config_file_attached = true;
        debug!(path, "loading configuration via PARLEY_CONFIG");
    } else if let Ok(cwd) = std::env::current_dir() {
        let fallback = DEFAULT_CONFIG_FILES
            .iter()
            .map(|candidate| cwd.join(candidate))
            .find(|path| path.exists());

        if let Some(path) = fallback {
            debug!(path = %path.display(), "loading configuration file");
            builder = builder.add_source(config::File::from(path));
            config_file_attached = true;
        }
    }

    if !config_file_attached {
        debug!("no configuration file found, relying on defaults and environment overrides");
    }

    builder = builder.add_source(environment_overrides);

    let cfg = builder.build().context("unable to build configuration")?;

    let config = cfg
        .try_deserialize::<AppConfig>()
        .context("invalid configuration")?;

    if config.pagination.max_page_size <= 0 {
        anyhow::bail!("pagination.max_page_size must be positive");
    }
    if config.pagination.default_page_size <= 0
        || config.pagination.default_page_size > config.pagination.max_page_size
    {
        anyhow::bail!("pagination.default_page_size must be in 1..=max_page_size");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    #[serial]
    fn defaults_load_without_file() {
        std::env::remove_var("PARLEY_CONFIG");

        let config = load().unwrap();
        assert_eq!(config.pagination.default_page_size, 20);
        assert_eq!(config.pagination.max_page_size, 100);
        assert_eq!(config.validation.max_title_length, 200);
        assert_eq!(config.validation.max_text_length, 5000);
    }

    #[test]
    #[serial]
    fn config_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parley.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[database]\nurl = \"sqlite://custom.db\"\nmax_connections = 3\n\n[pagination]\ndefault_page_size = 10\nmax_page_size = 50\n"
        )
        .unwrap();

        std::env::set_var("PARLEY_CONFIG", &path);
        let config = load().unwrap();
        std::env::remove_var("PARLEY_CONFIG");

        assert_eq!(config.database.url, "sqlite://custom.db");
        assert_eq!(config.database.max_connections, 3);
        assert_eq!(config.pagination.default_page_size, 10);
        assert_eq!(config.pagination.max_page_size, 50);
    }

    #[test]
    #[serial]
    fn rejects_default_page_size_above_max() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parley.toml");
        std::fs::write(&path, "[pagination]\ndefault_page_size = 500\n").unwrap();

        std::env::set_var("PARLEY_CONFIG", &path);
        let result = load();
        std::env::remove_var("PARLEY_CONFIG");

        assert!(result.is_err());
    }
}
