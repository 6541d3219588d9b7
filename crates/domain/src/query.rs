//! Search query classification.
//!
//! Every query sent to the geocoding endpoint falls into exactly one
//! [`QueryCategory`]. The category decides which response contract the
//! validator applies, see [`QueryCategory::expectations`].

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::testing::SearchAssertion;

/// Maximum number of records the API returns for a multi-character query.
pub const RESULT_CAP: usize = 10;

static NUMERIC_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));

static SPECIAL_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^a-zA-Z0-9]+$").expect("valid regex"));

/// Expected-behaviour category of a search query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryCategory {
    /// Zero or one character: no results, generation time only.
    EmptyOrSingle,
    /// Digits only: no results.
    NumericOnly,
    /// No ASCII letters or digits at all: no results.
    SpecialOnly,
    /// Two characters: no results, or an exact (case-insensitive) name match.
    ExactMatch,
    /// Three or more characters: a list capped at [`RESULT_CAP`].
    List,
}

impl QueryCategory {
    /// All categories in precedence order.
    pub const ALL: [Self; 5] = [
        Self::EmptyOrSingle,
        Self::NumericOnly,
        Self::SpecialOnly,
        Self::ExactMatch,
        Self::List,
    ];

    /// Stable upper-case name, as used in feature files and reports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyOrSingle => "EMPTY_OR_SINGLE",
            Self::NumericOnly => "NUMERIC_ONLY",
            Self::SpecialOnly => "SPECIAL_ONLY",
            Self::ExactMatch => "EXACT_MATCH",
            Self::List => "LIST",
        }
    }

    /// Parses a category from its upper-case name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(name))
    }

    /// Returns true if the category forbids any result.
    #[must_use]
    pub const fn expects_no_results(&self) -> bool {
        matches!(
            self,
            Self::EmptyOrSingle | Self::NumericOnly | Self::SpecialOnly
        )
    }

    /// The ordered assertions a response to `query` must satisfy.
    ///
    /// Generation time is always checked first.
    #[must_use]
    pub fn expectations(&self, query: &str) -> Vec<SearchAssertion> {
        let shape = match self {
            Self::EmptyOrSingle | Self::NumericOnly | Self::SpecialOnly => {
                SearchAssertion::NoResults
            }
            Self::ExactMatch => SearchAssertion::ExactMatch {
                term: query.to_string(),
            },
            Self::List => SearchAssertion::MaxResults {
                max_count: RESULT_CAP,
            },
        };
        vec![SearchAssertion::GenerationTime, shape]
    }
}

impl fmt::Display for QueryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Length of a query in characters (Unicode scalar values).
#[must_use]
pub fn query_len(query: &str) -> usize {
    query.chars().count()
}

/// Classifies a query. The first matching rule wins:
///
/// 1. length 0 or 1
/// 2. digits only
/// 3. no ASCII alphanumerics
/// 4. length 2
/// 5. anything longer
///
/// A two-character numeric or special query is therefore `NumericOnly` or
/// `SpecialOnly`, never `ExactMatch`.
#[must_use]
pub fn classify(query: &str) -> QueryCategory {
    let len = query_len(query);
    if len <= 1 {
        QueryCategory::EmptyOrSingle
    } else if NUMERIC_ONLY.is_match(query) {
        QueryCategory::NumericOnly
    } else if SPECIAL_ONLY.is_match(query) {
        QueryCategory::SpecialOnly
    } else if len == 2 {
        QueryCategory::ExactMatch
    } else {
        QueryCategory::List
    }
}

/// Fails unless the query consists of digits only.
///
/// # Errors
///
/// Returns [`ValidationError::QueryNotNumeric`] otherwise.
pub fn only_numbers(query: &str) -> ValidationResult<()> {
    if NUMERIC_ONLY.is_match(query) {
        Ok(())
    } else {
        Err(ValidationError::QueryNotNumeric {
            query: query.to_string(),
        })
    }
}

/// Fails unless the query contains no ASCII letters or digits.
///
/// # Errors
///
/// Returns [`ValidationError::QueryNotSpecial`] otherwise.
pub fn only_special_characters(query: &str) -> ValidationResult<()> {
    if SPECIAL_ONLY.is_match(query) {
        Ok(())
    } else {
        Err(ValidationError::QueryNotSpecial {
            query: query.to_string(),
        })
    }
}

/// Fails unless the query is exactly `expected` characters long.
///
/// # Errors
///
/// Returns [`ValidationError::QueryLength`] otherwise.
pub fn query_length(query: &str, expected: usize) -> ValidationResult<()> {
    let actual = query_len(query);
    if actual == expected {
        Ok(())
    } else {
        Err(ValidationError::QueryLength { expected, actual })
    }
}

/// Fails unless the query length lies within `min..=max`.
///
/// # Errors
///
/// Returns [`ValidationError::QueryLengthOutOfRange`] otherwise.
pub fn query_length_in_range(query: &str, min: usize, max: usize) -> ValidationResult<()> {
    let actual = query_len(query);
    if (min..=max).contains(&actual) {
        Ok(())
    } else {
        Err(ValidationError::QueryLengthOutOfRange { min, max, actual })
    }
}
