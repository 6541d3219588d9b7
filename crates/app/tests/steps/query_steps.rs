//! Steps documenting the shape of the queries under test.

use citysearch_domain::query::{
    only_numbers, only_special_characters, query_length, query_length_in_range,
};
use citysearch_domain::{QueryCategory, ValidationResult, classify};
use cucumber::then;

use crate::world::CitySearchWorld;

#[then(expr = "the query {string} should be classified as {word}")]
fn classified_as(_world: &mut CitySearchWorld, query: String, category: String) {
    let expected = QueryCategory::from_name(&category)
        .unwrap_or_else(|| panic!("unknown category '{category}'"));
    assert_eq!(classify(&query), expected, "classification of {query:?}");
}

#[then(expr = "the query {string} should contain only numbers")]
fn numbers_only(_world: &mut CitySearchWorld, query: String) -> ValidationResult<()> {
    only_numbers(&query)
}

#[then(expr = "the query {string} should contain only special characters")]
fn special_only(_world: &mut CitySearchWorld, query: String) -> ValidationResult<()> {
    only_special_characters(&query)
}

#[then(expr = "the query {string} should have {int} characters")]
fn exact_length(_world: &mut CitySearchWorld, query: String, expected: usize) -> ValidationResult<()> {
    query_length(&query, expected)
}

#[then(expr = "the query {string} should have between {int} and {int} characters")]
fn length_in_range(
    _world: &mut CitySearchWorld,
    query: String,
    min: usize,
    max: usize,
) -> ValidationResult<()> {
    query_length_in_range(&query, min, max)
}
