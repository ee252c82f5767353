//! User configuration, read from `ytreerc`.
//!
//! The file is TOML with a single `[ytree]` table:
//!
//! ```toml
//! [ytree]
//! test_data_dir = "/data/ytree"
//! ```

use crate::constants::{CONFIG_DIR_ENV, CONFIG_FILE_NAME};
use crate::types::{UtilError, UtilResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Settings under the `[ytree]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YtreeSection {
  /// Directory holding the sample halo catalogs used by tests.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub test_data_dir: Option<PathBuf>,
}

/// Parsed contents of `ytreerc`. A missing file gives the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
  /// The `[ytree]` table; always present, possibly empty.
  #[serde(default)]
  pub ytree: YtreeSection,
}

impl Config {
  /// Parses configuration text. `origin` only labels errors.
  pub fn from_toml_str(text: &str, origin: impl Into<PathBuf>) -> UtilResult<Self> {
    toml::from_str(text).map_err(|source| UtilError::ConfigParse {
      path: origin.into(),
      source,
    })
  }

  /// Reads `path`, falling back to the default when it does not exist.
  pub fn load_from(path: impl AsRef<Path>) -> UtilResult<Self> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
      Ok(text) => {
        log::debug!("Loading config from {}.", path.display());
        Self::from_toml_str(&text, path)
      }
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
      Err(e) => Err(UtilError::io(path, e)),
    }
  }

  /// Reads the user's `ytreerc` from [`config_path`].
  pub fn load() -> UtilResult<Self> {
    match config_path() {
      Some(path) => Self::load_from(path),
      None => Ok(Self::default()),
    }
  }
}

/// Directory searched for `ytreerc`.
///
/// `$XDG_CONFIG_HOME` when set, otherwise `~/.config/ytree`. `None` when
/// neither that variable nor a home directory is available.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
  if let Some(dir) = env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
    return Some(PathBuf::from(dir));
  }
  home_dir().map(|home| home.join(".config").join("ytree"))
}

/// Full path of `ytreerc`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
  config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

fn home_dir() -> Option<PathBuf> {
  ["HOME", "USERPROFILE"]
    .iter()
    .filter_map(|var| env::var_os(var))
    .find(|v| !v.is_empty())
    .map(PathBuf::from)
}
