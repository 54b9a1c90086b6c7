//! Command-line interface.
//!
//! - `glassgen generate` - Generate code from a preset or config file
//! - `glassgen init` - Write a preset's config to a JSON file for editing
//! - `glassgen presets` - List built-in presets
//! - `glassgen formats` - List output formats

mod commands;

pub use commands::{Cli, Commands, execute, run};
