//! Citysearch - Command line entry point
//!
//! Classifies each query, searches for it and checks the response against
//! the rules of the query's category.

mod report;

use std::process::ExitCode;
use std::sync::Arc;

use citysearch_application::{CheckAvailability, SearchCity};
use citysearch_domain::SearchAssertion;
use citysearch_infrastructure::{GeocodingConfig, OpenMeteoClient, SuiteRunner, behavior_suite};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::report::QueryReport;

/// Check city search responses against the search rules.
#[derive(Debug, Parser)]
#[command(name = "citysearch", version)]
struct Cli {
    /// Queries to check (an empty string is a valid query).
    #[arg(required = true, num_args = 1..)]
    queries: Vec<String>,

    /// Search endpoint, overriding configuration.
    #[arg(long)]
    base_url: Option<String>,

    /// Also require the reported generation time to stay under this bound.
    #[arg(long)]
    max_response_ms: Option<u64>,

    /// Probe the endpoint with an empty search first and abort if it fails.
    #[arg(long)]
    check_availability: bool,

    /// Print the reports as JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = GeocodingConfig::load()?;
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    let client = Arc::new(OpenMeteoClient::new(&config)?);
    tracing::info!(endpoint = %client.endpoint(), "using city search endpoint");

    if cli.check_availability {
        CheckAvailability::new(Arc::clone(&client)).execute().await?;
    }

    let search = SearchCity::new(client);
    let runner = SuiteRunner::new();
    let mut reports = Vec::with_capacity(cli.queries.len());

    for query in &cli.queries {
        let response = search.execute(query).await;
        let mut suite = behavior_suite(query);
        if let Some(max_ms) = cli.max_response_ms {
            suite.add(SearchAssertion::ResponseTime { max_ms });
        }
        let results = runner.run(&suite, &response);
        reports.push(QueryReport::new(query, &response, results));
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print!("{}", report.render());
        }
    }

    let failed = reports.iter().filter(|r| !r.passed()).count();
    tracing::info!(total = reports.len(), failed, "run finished");

    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
