//! Farasa CLI library
//!
//! This library provides the command-line interface for segmenting and
//! POS-tagging Arabic text with the Farasa toolkit.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod progress;

pub use error::{CliError, CliResult};
