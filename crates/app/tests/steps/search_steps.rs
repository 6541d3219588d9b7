//! Steps issuing searches and checking the responses.

use std::sync::Arc;

use citysearch_application::validator::{self, DEFAULT_MIN_RESULTS, DEFAULT_STATUS};
use citysearch_application::{ApplicationError, CheckAvailability, SearchCity};
use citysearch_domain::ValidationResult;
use cucumber::{given, then, when};

use crate::world::CitySearchWorld;

// ---------------------------------------------------------------------------
// Given
// ---------------------------------------------------------------------------

#[given("the city search API is available")]
async fn api_available(world: &mut CitySearchWorld) -> Result<(), ApplicationError> {
    CheckAvailability::new(Arc::clone(&world.client)).execute().await
}

// ---------------------------------------------------------------------------
// When
// ---------------------------------------------------------------------------

#[when(expr = "I search for city {string}")]
async fn search_for_city(world: &mut CitySearchWorld, name: String) {
    let response = SearchCity::new(Arc::clone(&world.client))
        .execute(&name)
        .await;
    world.store(response);
}

// ---------------------------------------------------------------------------
// Then
// ---------------------------------------------------------------------------

#[then("I should receive a successful response")]
fn successful_response(world: &mut CitySearchWorld) -> ValidationResult<()> {
    validator::status_code(world.response(), DEFAULT_STATUS)
}

#[then("the response should contain generation time")]
fn generation_time(world: &mut CitySearchWorld) -> ValidationResult<()> {
    validator::has_generation_time(world.response())
}

#[then(expr = "the response time should be under {int} ms")]
fn response_time(world: &mut CitySearchWorld, max_ms: u64) -> ValidationResult<()> {
    validator::response_time_under(world.response(), max_ms)
}

#[then("the response should contain no city results")]
fn no_results(world: &mut CitySearchWorld) -> ValidationResult<()> {
    validator::no_results(world.response())
}

#[then("the response should contain city results")]
fn has_results(world: &mut CitySearchWorld) -> ValidationResult<()> {
    validator::has_results(world.response(), DEFAULT_MIN_RESULTS)
}

#[then(expr = "if results exist they should exactly match {string}")]
fn exact_match(world: &mut CitySearchWorld, term: String) -> ValidationResult<()> {
    validator::exact_match(world.response(), &term)
}

#[then("the response should contain coordinates")]
fn coordinates(world: &mut CitySearchWorld) -> ValidationResult<()> {
    validator::has_coordinates(world.response())
}

#[then(expr = "the number of results should not exceed {int}")]
fn max_results(world: &mut CitySearchWorld, max_count: usize) -> ValidationResult<()> {
    validator::max_results(world.response(), max_count)
}

#[then(expr = "the response should contain city name {string}")]
fn city_name(world: &mut CitySearchWorld, name: String) -> ValidationResult<()> {
    validator::contains_city_name(world.response(), &name)
}

#[then(expr = "the search should follow the rules for {string}")]
fn follows_rules(world: &mut CitySearchWorld, query: String) -> ValidationResult<()> {
    validator::search_behavior(&query, world.response()).map(|_| ())
}
