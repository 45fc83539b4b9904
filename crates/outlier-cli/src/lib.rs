//! # outlier-cli
//!
//! Command-line front end: load a CSV file, pick a numeric column, run one
//! of the detection methods, and print the flagged rows or a JSON report.

pub mod args;
pub mod commands;
pub mod loader;
pub mod render;

pub use args::{Cli, Commands};
pub use commands::{exit_code, run};
pub use loader::Table;
