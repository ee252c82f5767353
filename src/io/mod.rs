// src/io/mod.rs

pub mod paths;
pub mod text_block;

pub use paths::{dirname, ensure_dir};
pub use text_block::{TextBlockOptions, TextBlockReader};
