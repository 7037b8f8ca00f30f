use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Deserializer;

/// Config file location relative to the user's home directory.
const DEFAULT_RELATIVE_PATH: [&str; 3] = [".config", "md2html", "config.yaml"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to get home dir")]
    NoHome,

    #[error("failed to read config {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// User configuration, loaded once before rendering and read-only afterwards.
///
/// ```yaml
/// inline_styles:
///   table: "border-collapse: collapse"
///   blockquote: "border-left: 3px solid #ccc; padding-left: 1em"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// HTML tag name to a CSS declaration added to the tag's `style` attribute.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub inline_styles: BTreeMap<String, String>,
}

impl Config {
    /// Load `~/.config/md2html/config.yaml`, falling back to an empty config on any error.
    pub fn load() -> Config {
        match Self::default_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                tracing::warn!("{}; inline styles disabled", e);
                Config::default()
            }
        }
    }

    /// Load the config at `path`, falling back to an empty one on any error.
    ///
    /// A missing config file is expected and only logged at debug level,
    /// other failures are logged as warnings.
    pub fn load_from(path: &Path) -> Config {
        match Self::from_file(path) {
            Ok(config) => {
                tracing::debug!(
                    "loaded config {}: {} inline style(s)",
                    path.display(),
                    config.inline_styles.len()
                );
                config
            }
            Err(ConfigError::Read { path, source }) if source.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("no config at {}", path.display());
                Config::default()
            }
            Err(e) => {
                tracing::warn!("{}; inline styles disabled", e);
                Config::default()
            }
        }
    }

    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Self::default_path_in(dirs::home_dir())
    }

    fn default_path_in(home: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
        let home = home.ok_or(ConfigError::NoHome)?;
        Ok(DEFAULT_RELATIVE_PATH.iter().fold(home, |p, c| p.join(c)))
    }

    pub fn from_file(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a YAML document. An empty document is an empty config.
    pub fn from_yaml(content: &str) -> Result<Config, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(content)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let styles = Option::<BTreeMap<String, String>>::deserialize(deserializer)?;
    Ok(styles.unwrap_or_default())
}
