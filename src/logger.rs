//! Logging setup for applications built on this crate.
//!
//! The library itself only talks to the `log` facade. Call [`init`] (or
//! [`init_parallel`] under MPI-style runs) once to get lines such as
//!
//! ```text
//! ytree: [INFO     ] 2024-03-01T12:00:00Z Loading tree roots.
//! ```
//!
//! The filter is read from `$YTREE_LOG` and defaults to `info`.

use crate::constants::{LOGGER_NAME, LOG_ENV};
use env_logger::{Builder, Env, Target};
use log::{Level, LevelFilter};
use std::fmt::{Arguments, Display};
use std::io::Write;

/// Installs the stderr logger. Returns `false` if a logger was already set.
pub fn init() -> bool {
  install(String::new())
}

/// Installs the stderr logger, tagging lines with `P<rank>` when `size > 1`.
///
/// Only the first installed logger counts: if [`init`] (or another logger)
/// already ran, this returns `false` and existing lines keep no rank prefix.
pub fn init_parallel(rank: usize, size: usize) -> bool {
  install(rank_prefix(rank, size))
}

/// Prefix put before every line: `P<rank> ` for multi-process runs, else nothing.
fn rank_prefix(rank: usize, size: usize) -> String {
  if size <= 1 {
    String::new()
  } else {
    format!("P{rank:03} ")
  }
}

/// Writes one formatted log line, including the trailing newline.
fn write_line<W: Write>(
  out: &mut W,
  prefix: &str,
  level: Level,
  timestamp: impl Display,
  args: &Arguments<'_>,
) -> std::io::Result<()> {
  writeln!(out, "{prefix}{LOGGER_NAME}: [{level:<9}] {timestamp} {args}")
}

fn install(prefix: String) -> bool {
  Builder::from_env(Env::new().filter_or(LOG_ENV, "info"))
    .target(Target::Stderr)
    .format(move |buf, record| {
      let timestamp = buf.timestamp();
      write_line(buf, &prefix, record.level(), timestamp, record.args())
    })
    .try_init()
    .is_ok()
}

/// Quiets logging below ERROR for as long as it is alive.
///
/// Only applies when the current max level is more verbose than `min_level`
/// and not DEBUG or TRACE; someone debugging keeps seeing everything. The
/// previous level is restored on drop.
#[derive(Debug)]
#[must_use = "the log level is restored as soon as the guard is dropped"]
pub struct LogLevelGuard {
  previous: LevelFilter,
}

impl LogLevelGuard {
  /// Silences non-error output unless the level is already `min_level` or quieter.
  pub fn new(min_level: LevelFilter) -> Self {
    let previous = log::max_level();
    if previous < LevelFilter::Debug && previous > min_level {
      log::set_max_level(LevelFilter::Error);
    }
    Self { previous }
  }

  /// The level that will be restored.
  pub fn previous(&self) -> LevelFilter {
    self.previous
  }
}

impl Drop for LogLevelGuard {
  fn drop(&mut self) {
    log::set_max_level(self.previous);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  #[test]
  #[serial(log_level)]
  fn test_guard_quiets_info() {
    log::set_max_level(LevelFilter::Info);
    {
      let guard = LogLevelGuard::new(LevelFilter::Error);
      assert_eq!(log::max_level(), LevelFilter::Error, "info is silenced");
      assert_eq!(guard.previous(), LevelFilter::Info);
    }
    assert_eq!(log::max_level(), LevelFilter::Info, "restored on drop");
  }

  #[test]
  #[serial(log_level)]
  fn test_guard_leaves_debug_alone() {
    log::set_max_level(LevelFilter::Debug);
    {
      let _guard = LogLevelGuard::new(LevelFilter::Error);
      assert_eq!(log::max_level(), LevelFilter::Debug);
    }
    assert_eq!(log::max_level(), LevelFilter::Debug);
  }

  #[test]
  #[serial(log_level)]
  fn test_guard_leaves_quiet_levels_alone() {
    log::set_max_level(LevelFilter::Warn);
    {
      let _guard = LogLevelGuard::new(LevelFilter::Warn);
      assert_eq!(log::max_level(), LevelFilter::Warn, "already at the minimum");
    }
    log::set_max_level(LevelFilter::Info);
  }

  fn render(prefix: &str, level: Level, message: &str) -> String {
    let mut out = Vec::new();
    write_line(&mut out, prefix, level, "2024-03-01T12:00:00Z", &format_args!("{message}")).unwrap();
    String::from_utf8(out).unwrap()
  }

  #[test]
  fn test_line_format_single_process() {
    let prefix = rank_prefix(0, 1);
    assert_eq!(prefix, "");
    assert_eq!(
      render(&prefix, Level::Info, "Loading tree roots."),
      "ytree: [INFO     ] 2024-03-01T12:00:00Z Loading tree roots.\n"
    );
    assert_eq!(
      render(&prefix, Level::Warn, "x"),
      "ytree: [WARN     ] 2024-03-01T12:00:00Z x\n",
      "level padded to 9 columns"
    );
  }

  #[test]
  fn test_line_format_parallel() {
    let prefix = rank_prefix(7, 4);
    assert_eq!(prefix, "P007 ");
    assert_eq!(
      render(&prefix, Level::Error, "rank failed"),
      "P007 ytree: [ERROR    ] 2024-03-01T12:00:00Z rank failed\n"
    );
    assert_eq!(rank_prefix(12, 16), "P012 ");
    assert_eq!(rank_prefix(1234, 2048), "P1234 ", "wide ranks are not truncated");
  }

  #[test]
  #[serial(log_level)]
  fn test_init_is_idempotent() {
    let _ = init_parallel(3, 1);
    assert!(!init(), "second install is refused");
    log::set_max_level(LevelFilter::Info);
  }
}
