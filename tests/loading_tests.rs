// tests/loading_tests.rs

use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use ytree_util::config::{config_dir, config_path};
use ytree_util::*;

// These tests change process-wide environment variables.
struct EnvGuard {
  saved: Vec<(&'static str, Option<std::ffi::OsString>)>,
}

impl EnvGuard {
  fn set(vars: &[(&'static str, Option<&std::path::Path>)]) -> Self {
    let saved = vars.iter().map(|(k, _)| (*k, env::var_os(k))).collect();
    for (k, v) in vars {
      match v {
        Some(v) => env::set_var(k, v),
        None => env::remove_var(k),
      }
    }
    Self { saved }
  }
}

impl Drop for EnvGuard {
  fn drop(&mut self) {
    for (k, v) in &self.saved {
      match v {
        Some(v) => env::set_var(k, v),
        None => env::remove_var(k),
      }
    }
  }
}

#[test]
#[serial(env)]
fn test_env_var_wins() {
  let data = tempfile::tempdir().unwrap();
  let _env = EnvGuard::set(&[("YTREE_TEST_DATA_DIR", Some(data.path()))]);
  assert_eq!(test_data_dir(), data.path());
}

#[test]
#[serial(env)]
fn test_config_file_supplies_data_dir() {
  let cfg_dir = tempfile::tempdir().unwrap();
  let data = tempfile::tempdir().unwrap();
  fs::write(
    cfg_dir.path().join("ytreerc"),
    format!("[ytree]\ntest_data_dir = {:?}\n", data.path().to_str().unwrap()),
  )
  .unwrap();
  let _env = EnvGuard::set(&[
    ("YTREE_TEST_DATA_DIR", None),
    ("XDG_CONFIG_HOME", Some(cfg_dir.path())),
  ]);

  assert_eq!(config_dir(), Some(cfg_dir.path().to_path_buf()));
  assert_eq!(config_path(), Some(cfg_dir.path().join("ytreerc")));
  assert_eq!(test_data_dir(), data.path());

  fs::create_dir_all(data.path().join("ahf_halos")).unwrap();
  fs::write(data.path().join("ahf_halos/snap_N64L16_000.parameter"), "").unwrap();
  let found = check_path("ahf_halos/snap_N64L16_000.parameter").unwrap();
  assert_eq!(found, data.path().join("ahf_halos/snap_N64L16_000.parameter"));
}

#[test]
#[serial(env)]
fn test_defaults_to_current_dir() {
  let cfg_dir = tempfile::tempdir().unwrap();
  let _env = EnvGuard::set(&[
    ("YTREE_TEST_DATA_DIR", None),
    ("XDG_CONFIG_HOME", Some(cfg_dir.path())),
  ]);
  assert_eq!(test_data_dir(), PathBuf::from("."));
}

#[test]
#[serial(env)]
fn test_broken_config_falls_back() {
  let cfg_dir = tempfile::tempdir().unwrap();
  fs::write(cfg_dir.path().join("ytreerc"), "[ytree\n").unwrap();
  let _env = EnvGuard::set(&[
    ("YTREE_TEST_DATA_DIR", None),
    ("XDG_CONFIG_HOME", Some(cfg_dir.path())),
  ]);
  assert!(matches!(Config::load(), Err(UtilError::ConfigParse { .. })));
  assert_eq!(test_data_dir(), PathBuf::from("."));
}

#[test]
#[serial(env)]
fn test_get_paths_stops_at_first_missing() {
  let data = tempfile::tempdir().unwrap();
  fs::write(data.path().join("tree_0.dat"), "").unwrap();
  fs::write(data.path().join("tree_1.dat"), "").unwrap();
  let _env = EnvGuard::set(&[("YTREE_TEST_DATA_DIR", Some(data.path()))]);

  let found = get_paths(&["tree_0.dat", "tree_1.dat"]).unwrap();
  assert_eq!(found, vec![data.path().join("tree_0.dat"), data.path().join("tree_1.dat")]);

  match get_paths(&["tree_0.dat", "tree_2.dat", "tree_3.dat"]) {
    Err(UtilError::FileNotFound(p)) => assert_eq!(p, PathBuf::from("tree_2.dat")),
    other => panic!("expected FileNotFound, got {other:?}"),
  }
}
