#![deny(clippy::all)] // Enforce clippy lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // Often a matter of taste
#![allow(clippy::missing_errors_doc)] // Errors are documented on UtilError
#![allow(clippy::must_use_candidate)] // For functions where side effects are intended

//! `ytree-util` collects the small numeric and file helpers used around halo
//! merger-tree analysis.
//!
//! The centerpiece is [`fround`], a decimal rounding that always takes exact
//! halves up (`2.5 -> 3`, `-2.5 -> -2`) instead of rounding them to even or
//! away from zero. Around it sit the helpers the catalog readers lean on:
//! multi-level [`dirname`], race-free [`ensure_dir`], the block-wise
//! [`TextBlockReader`], test-data lookup, `ytreerc` configuration and logger
//! setup.

// Declare modules
pub mod catalog;
pub mod config;
pub mod constants;
pub mod io;
pub mod loading;
pub mod logger;
pub mod math;
pub mod types;

// Re-export key public types and functions for easier use
pub use config::Config;
pub use constants::{DEFAULT_BLOCK_SIZE, DEFAULT_DECIMALS, REDSHIFT_PRECISION};
pub use io::{dirname, ensure_dir, TextBlockOptions, TextBlockReader};
pub use loading::{check_path, get_paths, test_data_dir};
pub use logger::LogLevelGuard;
pub use math::{fround, fround_in_place, fround_slice, Fround};
pub use types::{TextLine, UtilError, UtilResult};
