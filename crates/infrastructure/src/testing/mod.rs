//! Assertion suite runner.
//!
//! This module provides the runner that executes assertion suites against
//! search responses.

mod runner;

pub use runner::{SuiteRunner, behavior_suite};
