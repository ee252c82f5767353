//! Core ytree-util data structures.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single line produced by [`TextBlockReader`](crate::io::text_block::TextBlockReader).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextLine {
  /// Line contents without the separator.
  pub text: String,
  /// Absolute byte offset of the first byte of the line in the source.
  pub offset: u64,
}

/// Errors raised by the fallible utilities of this crate.
///
/// The rounding functions are total and never produce one of these.
#[derive(Debug, thiserror::Error)]
pub enum UtilError {
  /// `dirname` was asked for a level below 1.
  #[error("level must be a positive integer: {0}.")]
  InvalidLevel(i64),
  /// A filesystem operation failed.
  #[error("I/O error on {}: {source}", .path.display())]
  Io {
    /// Path the operation was acting on.
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  /// Neither the path itself nor any of its fallbacks exist.
  #[error("File does not exist: {}.", .0.display())]
  FileNotFound(PathBuf),
  /// A data file had no content to read.
  #[error("Data file is empty: {}.", .0.display())]
  DataFileEmpty(PathBuf),
  /// The configuration file is not valid TOML.
  #[error("Cannot parse config file {}: {source}", .path.display())]
  ConfigParse {
    /// Path of the offending file.
    path: PathBuf,
    #[source]
    source: toml::de::Error,
  },
}

impl UtilError {
  pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    UtilError::Io {
      path: path.into(),
      source,
    }
  }
}

/// Result alias used throughout the crate.
pub type UtilResult<T> = Result<T, UtilError>;
