//! Response validator.
//!
//! One check per contract facet. Every check returns the first violation as
//! a [`ValidationError`]; scenarios compose them freely, and
//! [`search_behavior`] runs the set the rule table prescribes for a query.

use citysearch_domain::{
    CityRecord, Field, QueryCategory, SearchAssertion, SearchPayload, SearchResponse,
    ValidationError, ValidationResult, classify,
};

/// Default lower bound for [`has_results`].
pub const DEFAULT_MIN_RESULTS: usize = 1;

/// Default expected status for [`status_code`].
pub const DEFAULT_STATUS: u16 = 200;

fn data(response: &SearchResponse) -> ValidationResult<&SearchPayload> {
    response.data().ok_or_else(|| ValidationError::MissingData {
        status: response.status,
        error: response.error().map(str::to_string),
    })
}

fn generation_time(payload: &SearchPayload) -> ValidationResult<f64> {
    match &payload.generation_time_ms {
        Field::Present(ms) => Ok(*ms),
        Field::Missing => Err(ValidationError::MissingGenerationTime),
        Field::Invalid(raw) => Err(ValidationError::GenerationTimeNotNumeric {
            actual: raw.to_string(),
        }),
    }
}

/// Results as a slice; absent results are reported as missing.
fn results(payload: &SearchPayload) -> ValidationResult<&[CityRecord]> {
    match &payload.results {
        Field::Present(cities) => Ok(cities.as_slice()),
        Field::Missing => Err(ValidationError::MissingResults),
        Field::Invalid(raw) => Err(ValidationError::ResultsNotArray {
            actual: raw.to_string(),
        }),
    }
}

/// Results as a slice; absent results count as an empty list.
fn results_or_empty(payload: &SearchPayload) -> ValidationResult<&[CityRecord]> {
    match results(payload) {
        Err(ValidationError::MissingResults) => Ok(&[] as &[CityRecord]),
        other => other,
    }
}

fn names(cities: &[CityRecord]) -> Vec<String> {
    cities
        .iter()
        .map(|city| city.display_name().to_string())
        .collect()
}

fn coordinate(index: usize, field: &'static str, value: &Field<f64>) -> ValidationResult<()> {
    match value {
        Field::Present(_) => Ok(()),
        Field::Missing => Err(ValidationError::MissingCoordinate { index, field }),
        Field::Invalid(raw) => Err(ValidationError::CoordinateNotNumeric {
            index,
            field,
            actual: raw.to_string(),
        }),
    }
}

/// Fails unless the body carries a numeric, non-negative `generationtime_ms`.
///
/// # Errors
///
/// Returns the first violated condition.
pub fn has_generation_time(response: &SearchResponse) -> ValidationResult<()> {
    let ms = generation_time(data(response)?)?;
    if ms >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NegativeGenerationTime { actual: ms })
    }
}

/// Fails unless the reported generation time is strictly below `max_ms`.
///
/// # Errors
///
/// Returns [`ValidationError::ResponseTooSlow`] when the bound is reached,
/// or the reason the generation time could not be read.
#[allow(clippy::cast_precision_loss)]
pub fn response_time_under(response: &SearchResponse, max_ms: u64) -> ValidationResult<()> {
    let actual_ms = generation_time(data(response)?)?;
    if actual_ms < max_ms as f64 {
        Ok(())
    } else {
        Err(ValidationError::ResponseTooSlow { max_ms, actual_ms })
    }
}

/// Passes if `results` is absent or empty.
///
/// # Errors
///
/// Returns [`ValidationError::UnexpectedResults`] if any city was returned.
pub fn no_results(response: &SearchResponse) -> ValidationResult<()> {
    let cities = results_or_empty(data(response)?)?;
    if cities.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::UnexpectedResults {
            count: cities.len(),
            names: names(cities),
        })
    }
}

/// Fails unless `results` is an array of at least `min_count` records.
///
/// # Errors
///
/// Returns the first violated condition.
pub fn has_results(response: &SearchResponse, min_count: usize) -> ValidationResult<()> {
    let cities = results(data(response)?)?;
    if cities.len() >= min_count {
        Ok(())
    } else {
        Err(ValidationError::TooFewResults {
            min: min_count,
            actual: cities.len(),
        })
    }
}

/// Passes on an empty result set; otherwise some result's name must equal
/// `term` once both are uppercased. Substring matches do not count.
///
/// # Errors
///
/// Returns [`ValidationError::NoExactMatch`] listing the names found.
pub fn exact_match(response: &SearchResponse, term: &str) -> ValidationResult<()> {
    let cities = results_or_empty(data(response)?)?;
    if cities.is_empty() || cities.iter().any(|city| city.name_matches(term)) {
        Ok(())
    } else {
        Err(ValidationError::NoExactMatch {
            term: term.to_string(),
            found: names(cities),
        })
    }
}

/// Fails if more than `max_count` results were returned. Absent results
/// count as zero.
///
/// # Errors
///
/// Returns [`ValidationError::TooManyResults`] when over the cap.
pub fn max_results(response: &SearchResponse, max_count: usize) -> ValidationResult<()> {
    let actual = results_or_empty(data(response)?)?.len();
    if actual <= max_count {
        Ok(())
    } else {
        Err(ValidationError::TooManyResults {
            max: max_count,
            actual,
        })
    }
}

/// Requires at least one result, then numeric `latitude` and `longitude` on
/// every result.
///
/// # Errors
///
/// Returns the first result missing a coordinate.
pub fn has_coordinates(response: &SearchResponse) -> ValidationResult<()> {
    has_results(response, DEFAULT_MIN_RESULTS)?;
    for (index, city) in results(data(response)?)?.iter().enumerate() {
        coordinate(index, "latitude", &city.latitude)?;
        coordinate(index, "longitude", &city.longitude)?;
    }
    Ok(())
}

/// Requires at least one result, then one named `name` (ignoring case).
///
/// # Errors
///
/// Returns [`ValidationError::CityNotFound`] listing the names found.
pub fn contains_city_name(response: &SearchResponse, name: &str) -> ValidationResult<()> {
    has_results(response, DEFAULT_MIN_RESULTS)?;
    let cities = results(data(response)?)?;
    if cities.iter().any(|city| city.is_named(name)) {
        Ok(())
    } else {
        Err(ValidationError::CityNotFound {
            expected: name.to_string(),
            found: names(cities),
        })
    }
}

/// Fails unless the response status equals `expected`.
///
/// # Errors
///
/// Returns [`ValidationError::StatusMismatch`].
pub const fn status_code(response: &SearchResponse, expected: u16) -> ValidationResult<()> {
    if response.status == expected {
        Ok(())
    } else {
        Err(ValidationError::StatusMismatch {
            expected,
            actual: response.status,
        })
    }
}

/// Runs a single assertion.
///
/// # Errors
///
/// Returns the violation reported by the matching check.
pub fn check(assertion: &SearchAssertion, response: &SearchResponse) -> ValidationResult<()> {
    match assertion {
        SearchAssertion::StatusCode { expected } => status_code(response, *expected),
        SearchAssertion::GenerationTime => has_generation_time(response),
        SearchAssertion::ResponseTime { max_ms } => response_time_under(response, *max_ms),
        SearchAssertion::NoResults => no_results(response),
        SearchAssertion::HasResults { min_count } => has_results(response, *min_count),
        SearchAssertion::ExactMatch { term } => exact_match(response, term),
        SearchAssertion::MaxResults { max_count } => max_results(response, *max_count),
        SearchAssertion::HasCoordinates => has_coordinates(response),
        SearchAssertion::ContainsCityName { name } => contains_city_name(response, name),
    }
}

/// Classifies `query` and checks the response against that category's
/// contract, stopping at the first failure.
///
/// # Errors
///
/// Returns the first violated assertion.
pub fn search_behavior(query: &str, response: &SearchResponse) -> ValidationResult<QueryCategory> {
    let category = classify(query);
    tracing::debug!(query, %category, "checking search behavior");
    for assertion in category.expectations(query) {
        check(&assertion, response)?;
    }
    Ok(category)
}
