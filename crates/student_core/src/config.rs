//! Database connection settings.
//!
//! # Responsibility
//! - Load store address and credentials from an external TOML source.
//! - Hand an immutable settings value to repository construction.
//!
//! # Invariants
//! - A loaded config always has a non-blank `url`.
//! - `Debug` output never contains the password.

use log::{error, info};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::path::{Path, PathBuf};

/// Connection parameters for the backing store.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct DbConfig {
    pub url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize)]
struct ConfigFile {
    db: DbConfig,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    NotFound(PathBuf),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(toml::de::Error),
    MissingUrl,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "config file not found: {}", path.display()),
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "failed to parse config: {err}"),
            Self::MissingUrl => write!(f, "config key `db.url` must not be blank"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::NotFound(_) | Self::MissingUrl => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Parse(value)
    }
}

impl DbConfig {
    /// Builds settings directly, e.g. from values resolved by the caller.
    ///
    /// # Errors
    /// - Returns `ConfigError::MissingUrl` when `url` is blank.
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> ConfigResult<Self> {
        Self {
            url: url.into(),
            username: username.into(),
            password: password.into(),
        }
        .validated()
    }

    /// Parses a TOML document with a `[db]` table.
    ///
    /// Missing `username`/`password` keys default to empty strings.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        file.db.validated()
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    /// - `NotFound` when `path` does not exist.
    /// - `Io` when the file cannot be read.
    /// - `Parse` / `MissingUrl` for malformed content.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let result = read_config(path);
        match &result {
            Ok(config) => info!(
                "event=config_load module=config status=ok path={} url={}",
                path.display(),
                config.url
            ),
            Err(err) => error!(
                "event=config_load module=config status=error path={} error={}",
                path.display(),
                err
            ),
        }
        result
    }

    fn validated(self) -> ConfigResult<Self> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::MissingUrl);
        }
        Ok(self)
    }
}

impl Debug for DbConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn read_config(path: &Path) -> ConfigResult<DbConfig> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    DbConfig::from_toml_str(&content)
}
