//! Step definitions for the city search features.

mod query_steps;
mod search_steps;
