//! Suite runner implementation.
//!
//! Executes assertions against search responses and produces test results.

use std::time::Instant;

use citysearch_application::validator;
use citysearch_domain::{
    AssertionResult, AssertionSuite, SearchAssertion, SearchResponse, TestResults, classify,
};

/// Builds the fail-fast suite the rule table prescribes for `query`.
#[must_use]
pub fn behavior_suite(query: &str) -> AssertionSuite {
    let category = classify(query);
    AssertionSuite {
        name: format!("{category} {query:?}"),
        assertions: category.expectations(query),
        stop_on_failure: true,
    }
}

/// Runner that executes assertion suites against responses.
#[derive(Debug, Default)]
pub struct SuiteRunner {
    /// Whether to stop on first failure.
    stop_on_failure: bool,
}

impl SuiteRunner {
    /// Create a new runner.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stop_on_failure: false,
        }
    }

    /// Set whether to stop on first failure.
    #[must_use]
    pub const fn with_stop_on_failure(mut self, stop: bool) -> Self {
        self.stop_on_failure = stop;
        self
    }

    /// Run a suite against a response.
    #[must_use]
    pub fn run(&self, suite: &AssertionSuite, response: &SearchResponse) -> TestResults {
        let start = Instant::now();
        let mut results = Vec::with_capacity(suite.assertions.len());

        for assertion in &suite.assertions {
            let result = self.run_assertion(assertion, response);
            let failed = !result.passed;
            results.push(result);

            if failed && (self.stop_on_failure || suite.stop_on_failure) {
                break;
            }
        }

        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        let results = TestResults::new(&suite.name, results, duration_ms);
        tracing::debug!(
            suite = %suite.name,
            passed = results.passed,
            failed = results.failed,
            "suite finished"
        );
        results
    }

    /// Run a single assertion against a response.
    #[must_use]
    pub fn run_assertion(
        &self,
        assertion: &SearchAssertion,
        response: &SearchResponse,
    ) -> AssertionResult {
        match validator::check(assertion, response) {
            Ok(()) => AssertionResult::pass(assertion.clone()),
            Err(e) => AssertionResult::fail(assertion.clone(), e.to_string()),
        }
    }

    /// Run the rule-table suite for `query`.
    #[must_use]
    pub fn run_behavior(&self, query: &str, response: &SearchResponse) -> TestResults {
        self.run(&behavior_suite(query), response)
    }
}
