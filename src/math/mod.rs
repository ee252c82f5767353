// src/math/mod.rs
#![allow(clippy::module_name_repetitions)] // Common in math modules

pub mod extensions;
pub mod rounding;

pub use rounding::{fround, fround_in_place, fround_slice, Fround};
