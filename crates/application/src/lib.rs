//! Citysearch Application - Validator, use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for external dependencies)
//! - The response validator (one check per contract facet)
//! - Use case orchestration
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod use_cases;
pub mod validator;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::GeocodingClient;
pub use use_cases::{
    CheckAvailability, SearchCity, VerifySearchBehavior, VerifySearchBehaviorInput,
    VerifySearchBehaviorOutput,
};
