//! Application use cases (business logic orchestration).

mod check_availability;
mod search_city;
mod verify_search_behavior;

pub use check_availability::*;
pub use search_city::*;
pub use verify_search_behavior::*;
