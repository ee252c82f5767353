// src/io/paths.rs

use crate::types::{UtilError, UtilResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Directory part of `path`: everything before the last separator.
///
/// Works on the text of the path like `os.path.dirname`, so a trailing
/// separator counts (`"a/b/"` gives `"a/b"`, where `Path::parent` would give
/// `"a"`). Trailing separators are trimmed from the result unless it is all
/// separators, which keeps the root as `/`.
fn dirname_once(path: &Path) -> PathBuf {
  let Some(text) = path.to_str() else {
    // Not valid Unicode; component-wise parent is the best we can do.
    return path.parent().map(Path::to_path_buf).unwrap_or_default();
  };
  let head = match text.rfind(std::path::is_separator) {
    Some(i) => &text[..=i],
    None => "",
  };
  let trimmed = head.trim_end_matches(std::path::is_separator);
  if trimmed.is_empty() {
    PathBuf::from(head)
  } else {
    PathBuf::from(trimmed)
  }
}

/// Multi-level version of `os.path.dirname`.
///
/// Takes the directory part of `path` `level` times. The root and the empty
/// path are their own directory part, so asking for more levels than the
/// path has is not an error.
///
/// # Arguments
///
/// * `path` - The starting path.
/// * `level` - How many directories to go up; must be at least 1.
///
/// # Returns
///
/// The ancestor path, or `UtilError::InvalidLevel` if `level < 1`.
pub fn dirname(path: impl AsRef<Path>, level: i64) -> UtilResult<PathBuf> {
  if level < 1 {
    return Err(UtilError::InvalidLevel(level));
  }
  let mut current = path.as_ref().to_path_buf();
  for _ in 0..level {
    let parent = dirname_once(&current);
    if parent == current {
      break;
    }
    current = parent;
  }
  Ok(current)
}

/// Creates `path` and any missing parents, returning the path.
///
/// Safe to call from several processes at once: losing the race to another
/// creator is not an error.
pub fn ensure_dir(path: impl AsRef<Path>) -> UtilResult<PathBuf> {
  let path = path.as_ref();
  if path.exists() {
    return Ok(path.to_path_buf());
  }
  match fs::create_dir_all(path) {
    Ok(()) => {
      log::debug!("Created directory {}.", path.display());
      Ok(path.to_path_buf())
    }
    Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(path.to_path_buf()),
    Err(e) => Err(UtilError::io(path, e)),
  }
}
