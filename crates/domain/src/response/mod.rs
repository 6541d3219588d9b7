//! Search response model.

mod payload;
mod outcome;

pub use payload::{CityRecord, Field, SearchPayload};
pub use outcome::{SearchOutcome, SearchResponse, TRANSPORT_FAILURE_STATUS};
