//! Search response assertions.
//!
//! This module provides the vocabulary for describing checks on a search
//! response and for recording their outcomes.

use serde::{Deserialize, Serialize};

use crate::query::RESULT_CAP;

/// A check to run against a search response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchAssertion {
    /// Check the HTTP status code.
    StatusCode {
        /// Expected status code.
        expected: u16,
    },
    /// Check `generationtime_ms` is present, numeric and non-negative.
    GenerationTime,
    /// Check the reported generation time.
    ResponseTime {
        /// Exclusive upper bound in milliseconds.
        max_ms: u64,
    },
    /// Check no city is returned.
    NoResults,
    /// Check at least `min_count` cities are returned.
    HasResults {
        /// Minimum number of results.
        #[serde(default = "default_min_count")]
        min_count: usize,
    },
    /// Check an empty result set or a case-insensitive exact name match.
    ExactMatch {
        /// Search term to match.
        term: String,
    },
    /// Check the number of results does not exceed `max_count`.
    MaxResults {
        /// Maximum number of results.
        #[serde(default = "default_max_count")]
        max_count: usize,
    },
    /// Check every result carries numeric coordinates.
    HasCoordinates,
    /// Check a city with this name (case-insensitive) is returned.
    ContainsCityName {
        /// City name.
        name: String,
    },
}

const fn default_min_count() -> usize {
    1
}

const fn default_max_count() -> usize {
    RESULT_CAP
}

impl SearchAssertion {
    /// Get a human-readable description of this assertion.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::StatusCode { expected } => format!("Status code = {expected}"),
            Self::GenerationTime => "Generation time present".to_string(),
            Self::ResponseTime { max_ms } => format!("Generation time < {max_ms}ms"),
            Self::NoResults => "No city results".to_string(),
            Self::HasResults { min_count } => format!("At least {min_count} result(s)"),
            Self::ExactMatch { term } => format!("Results exactly match '{term}'"),
            Self::MaxResults { max_count } => format!("At most {max_count} result(s)"),
            Self::HasCoordinates => "Results have coordinates".to_string(),
            Self::ContainsCityName { name } => format!("Results contain '{name}'"),
        }
    }
}

/// Result of running a single assertion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssertionResult {
    /// The assertion that was run.
    pub assertion: SearchAssertion,
    /// Whether the assertion passed.
    pub passed: bool,
    /// Error message if failed.
    pub error: Option<String>,
}

impl AssertionResult {
    /// Create a passed result.
    #[must_use]
    pub const fn pass(assertion: SearchAssertion) -> Self {
        Self {
            assertion,
            passed: true,
            error: None,
        }
    }

    /// Create a failed result.
    #[must_use]
    pub fn fail(assertion: SearchAssertion, error: impl Into<String>) -> Self {
        Self {
            assertion,
            passed: false,
            error: Some(error.into()),
        }
    }
}

/// A named group of assertions.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AssertionSuite {
    /// Suite name.
    pub name: String,
    /// Assertions to run, in order.
    #[serde(default)]
    pub assertions: Vec<SearchAssertion>,
    /// Whether to stop on first failure.
    #[serde(default)]
    pub stop_on_failure: bool,
}

impl AssertionSuite {
    /// Create a new empty suite.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            assertions: Vec::new(),
            stop_on_failure: false,
        }
    }

    /// Add an assertion to the suite.
    pub fn add(&mut self, assertion: SearchAssertion) {
        self.assertions.push(assertion);
    }

    /// Add an assertion (builder pattern).
    #[must_use]
    pub fn with_assertion(mut self, assertion: SearchAssertion) -> Self {
        self.assertions.push(assertion);
        self
    }

    /// Stop at the first failing assertion (builder pattern).
    #[must_use]
    pub const fn fail_fast(mut self) -> Self {
        self.stop_on_failure = true;
        self
    }

    /// Check if the suite is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.assertions.is_empty()
    }

    /// Get the number of assertions.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.assertions.len()
    }
}

/// Results from running a suite.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestResults {
    /// Suite that was run.
    pub suite_name: String,
    /// Individual assertion results.
    pub results: Vec<AssertionResult>,
    /// Number of assertions run.
    pub total: usize,
    /// Number of passed assertions.
    pub passed: usize,
    /// Number of failed assertions.
    pub failed: usize,
    /// Execution time in milliseconds.
    pub duration_ms: u64,
}

impl TestResults {
    /// Create new test results.
    #[must_use]
    pub fn new(
        suite_name: impl Into<String>,
        results: Vec<AssertionResult>,
        duration_ms: u64,
    ) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = total - passed;

        Self {
            suite_name: suite_name.into(),
            results,
            total,
            passed,
            failed,
            duration_ms,
        }
    }

    /// Check if all assertions passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// The first failure, if any.
    #[must_use]
    pub fn first_failure(&self) -> Option<&AssertionResult> {
        self.results.iter().find(|r| !r.passed)
    }

    /// Get pass rate as percentage.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }
}
