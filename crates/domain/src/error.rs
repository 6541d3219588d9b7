//! Domain error types

use thiserror::Error;

/// A failed expectation on a query or a search response.
///
/// Every variant renders the expected and the actual value.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// The response carried no decodable body.
    #[error("response data should exist (status {status}{})", error_suffix(.error.as_deref()))]
    MissingData {
        /// HTTP status of the response.
        status: u16,
        /// Transport error message, if any.
        error: Option<String>,
    },

    /// `generationtime_ms` is absent from the body.
    #[error("response should contain generationtime_ms")]
    MissingGenerationTime,

    /// `generationtime_ms` is not a number.
    #[error("generation time should be a number, got {actual}")]
    GenerationTimeNotNumeric {
        /// The raw JSON value found.
        actual: String,
    },

    /// `generationtime_ms` is negative.
    #[error("generation time should be non-negative, got {actual}")]
    NegativeGenerationTime {
        /// The reported generation time.
        actual: f64,
    },

    /// The server took too long to answer.
    #[error("response time should be less than {max_ms}ms, but was {actual_ms}ms")]
    ResponseTooSlow {
        /// Exclusive upper bound.
        max_ms: u64,
        /// Reported generation time.
        actual_ms: f64,
    },

    /// Results were returned where none were expected.
    #[error("response should contain no city results, got {count}: {}", .names.join(", "))]
    UnexpectedResults {
        /// Number of results returned.
        count: usize,
        /// Names of the returned cities.
        names: Vec<String>,
    },

    /// The `results` field is absent.
    #[error("results should exist")]
    MissingResults,

    /// The `results` field is not an array.
    #[error("results should be an array, got {actual}")]
    ResultsNotArray {
        /// The raw JSON value found.
        actual: String,
    },

    /// Fewer results than required.
    #[error("should have at least {min} result(s), got {actual}")]
    TooFewResults {
        /// Minimum count.
        min: usize,
        /// Actual count.
        actual: usize,
    },

    /// More results than allowed.
    #[error("number of results should not exceed {max}, but got {actual}")]
    TooManyResults {
        /// Maximum count.
        max: usize,
        /// Actual count.
        actual: usize,
    },

    /// None of the results is named exactly like the search term.
    #[error("results should contain exact match for '{term}'. Found: {}", .found.join(", "))]
    NoExactMatch {
        /// The search term.
        term: String,
        /// Names of the returned cities.
        found: Vec<String>,
    },

    /// A result lacks a coordinate field.
    #[error("result {index} should have {field}")]
    MissingCoordinate {
        /// Position of the result.
        index: usize,
        /// `latitude` or `longitude`.
        field: &'static str,
    },

    /// A coordinate is present but not numeric.
    #[error("result {index} {field} should be a number, got {actual}")]
    CoordinateNotNumeric {
        /// Position of the result.
        index: usize,
        /// `latitude` or `longitude`.
        field: &'static str,
        /// The raw JSON value found.
        actual: String,
    },

    /// The expected city is not among the results.
    #[error("results should contain '{expected}'. Found: {}", .found.join(", "))]
    CityNotFound {
        /// Expected city name.
        expected: String,
        /// Names of the returned cities.
        found: Vec<String>,
    },

    /// Unexpected HTTP status.
    #[error("expected status {expected}, but got {actual}")]
    StatusMismatch {
        /// Expected status code.
        expected: u16,
        /// Actual status code.
        actual: u16,
    },

    /// The query is not purely numeric.
    #[error("query '{query}' should contain only numbers")]
    QueryNotNumeric {
        /// The offending query.
        query: String,
    },

    /// The query contains letters or digits.
    #[error("query '{query}' should contain only special characters")]
    QueryNotSpecial {
        /// The offending query.
        query: String,
    },

    /// The query has the wrong length.
    #[error("query length should be {expected}, got {actual}")]
    QueryLength {
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// The query length is outside the allowed range.
    #[error("query length should be between {min} and {max}, got {actual}")]
    QueryLengthOutOfRange {
        /// Inclusive lower bound.
        min: usize,
        /// Inclusive upper bound.
        max: usize,
        /// Actual length.
        actual: usize,
    },
}

fn error_suffix(error: Option<&str>) -> String {
    error.map(|e| format!(": {e}")).unwrap_or_default()
}

/// Result type alias for validation checks.
pub type ValidationResult<T> = Result<T, ValidationError>;
