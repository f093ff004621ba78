//! CLI module
//!
//! Command-line front end acting as the presentation layer.
//!
//! # Commands
//!
//! - `popular` - Load pages through the feed's near-end trigger
//! - `page` - Fetch a single page envelope

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
