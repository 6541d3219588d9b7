//! Per-query reports printed by the CLI.

use std::fmt::Write as _;

use citysearch_domain::{QueryCategory, SearchResponse, TestResults, classify};
use serde::Serialize;

/// Outcome of checking one query.
#[derive(Debug, Clone, Serialize)]
pub struct QueryReport {
    /// The searched query.
    pub query: String,
    /// Category the query was classified into.
    pub category: QueryCategory,
    /// HTTP status (500 when the request never completed).
    pub status: u16,
    /// Number of decoded results.
    pub result_count: usize,
    /// Transport or HTTP error, if any.
    pub error: Option<String>,
    /// Client-side round trip in milliseconds.
    pub elapsed_ms: u64,
    /// Assertion outcomes.
    pub results: TestResults,
}

impl QueryReport {
    /// Builds the report for one query.
    #[must_use]
    pub fn new(query: &str, response: &SearchResponse, results: TestResults) -> Self {
        Self {
            query: query.to_string(),
            category: classify(query),
            status: response.status,
            result_count: response.data().map_or(0, |d| d.result_count()),
            error: response.error().map(str::to_string),
            elapsed_ms: u64::try_from(response.elapsed.as_millis()).unwrap_or(u64::MAX),
            results,
        }
    }

    /// Returns true if every assertion passed.
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.results.all_passed()
    }

    /// Human-readable rendering, one line per assertion.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let verdict = if self.passed() { "PASS" } else { "FAIL" };
        let _ = writeln!(
            out,
            "{verdict} {:?} [{}] status={} results={} ({}ms)",
            self.query, self.category, self.status, self.result_count, self.elapsed_ms
        );
        if let Some(error) = &self.error {
            let _ = writeln!(out, "  error: {error}");
        }
        for result in &self.results.results {
            let mark = if result.passed { "ok" } else { "FAILED" };
            let _ = write!(out, "  {mark:<6} {}", result.assertion.description());
            if let Some(error) = &result.error {
                let _ = write!(out, ": {error}");
            }
            out.push('\n');
        }
        out
    }
}
