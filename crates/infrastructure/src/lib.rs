//! Citysearch Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, the configuration loader
//! and the assertion suite runner.

pub mod adapters;
pub mod config;
pub mod testing;

pub use adapters::OpenMeteoClient;
pub use config::{ConfigError, GeocodingConfig};
pub use testing::{SuiteRunner, behavior_suite};
