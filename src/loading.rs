//! Locating sample data files.

use crate::config::Config;
use crate::constants::TEST_DATA_DIR_ENV;
use crate::types::{UtilError, UtilResult};
use std::env;
use std::path::{Path, PathBuf};

/// Directory holding the sample halo catalogs.
///
/// `$YTREE_TEST_DATA_DIR` wins, then `test_data_dir` from `ytreerc`, then the
/// current directory. An unreadable config file is logged and skipped.
#[must_use]
pub fn test_data_dir() -> PathBuf {
  if let Some(dir) = env::var_os(TEST_DATA_DIR_ENV) {
    return PathBuf::from(dir);
  }
  match Config::load() {
    Ok(cfg) => cfg.ytree.test_data_dir.unwrap_or_else(|| PathBuf::from(".")),
    Err(e) => {
      log::warn!("{e}");
      PathBuf::from(".")
    }
  }
}

/// Returns `filename` if it exists, else `data_dir/filename` if that exists.
pub fn check_path_in(filename: impl AsRef<Path>, data_dir: impl AsRef<Path>) -> UtilResult<PathBuf> {
  let filename = filename.as_ref();
  if filename.exists() {
    return Ok(filename.to_path_buf());
  }
  let candidate = data_dir.as_ref().join(filename);
  if candidate.exists() {
    return Ok(candidate);
  }
  Err(UtilError::FileNotFound(filename.to_path_buf()))
}

/// [`check_path_in`] against [`test_data_dir`].
pub fn check_path(filename: impl AsRef<Path>) -> UtilResult<PathBuf> {
  check_path_in(filename, test_data_dir())
}

/// Resolves every name with [`check_path`], stopping at the first missing one.
pub fn get_paths<P: AsRef<Path>>(filenames: &[P]) -> UtilResult<Vec<PathBuf>> {
  let data_dir = test_data_dir();
  filenames.iter().map(|f| check_path_in(f, &data_dir)).collect()
}
