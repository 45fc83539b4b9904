//! Core types, errors, config, and tracing for the outlier detection engine.
//!
//! Nothing in here touches sample data. The detection algorithms live in
//! `outlier-analysis`; the CSV front end lives in `outlier-cli`.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;
