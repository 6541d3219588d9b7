//! Citysearch Domain - Core types
//!
//! This crate defines the query classification rules and the response model
//! checked by the city search conformance suite.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod query;
pub mod response;
pub mod testing;

pub use error::{ValidationError, ValidationResult};
pub use query::{QueryCategory, RESULT_CAP, classify, query_len};
pub use response::{CityRecord, Field, SearchOutcome, SearchPayload, SearchResponse};
pub use testing::{AssertionResult, AssertionSuite, SearchAssertion, TestResults};
