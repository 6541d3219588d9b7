//! Verify search behavior use case.

use std::sync::Arc;

use citysearch_domain::{QueryCategory, SearchResponse};

use super::SearchCity;
use crate::ApplicationResult;
use crate::ports::GeocodingClient;
use crate::validator;

/// Input for verifying one query.
#[derive(Debug, Clone, Default)]
pub struct VerifySearchBehaviorInput {
    /// The query to search for.
    pub query: String,
    /// Optional exclusive bound on the reported generation time.
    pub max_response_ms: Option<u64>,
}

impl VerifySearchBehaviorInput {
    /// Input without a timing bound.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max_response_ms: None,
        }
    }
}

/// Output of a passed verification.
#[derive(Debug, Clone)]
pub struct VerifySearchBehaviorOutput {
    /// Category the query was classified into.
    pub category: QueryCategory,
    /// The response that satisfied the contract.
    pub response: SearchResponse,
}

/// Searches for a query and checks the response against the contract of the
/// query's category.
pub struct VerifySearchBehavior<C: GeocodingClient> {
    search: SearchCity<C>,
}

impl<C: GeocodingClient> VerifySearchBehavior<C> {
    /// Creates a new `VerifySearchBehavior` use case.
    pub const fn new(client: Arc<C>) -> Self {
        Self {
            search: SearchCity::new(client),
        }
    }

    /// Runs the search and the checks.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApplicationError::Validation`] with the first failed
    /// check.
    pub async fn execute(
        &self,
        input: VerifySearchBehaviorInput,
    ) -> ApplicationResult<VerifySearchBehaviorOutput> {
        let response = self.search.execute(&input.query).await;
        let category = validator::search_behavior(&input.query, &response)?;
        if let Some(max_ms) = input.max_response_ms {
            validator::response_time_under(&response, max_ms)?;
        }
        tracing::info!(query = %input.query, %category, "search behavior verified");
        Ok(VerifySearchBehaviorOutput { category, response })
    }
}
