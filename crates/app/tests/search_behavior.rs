//! End-to-end checks of the search rules against a local stub of the
//! geocoding endpoint.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use citysearch_application::{
    ApplicationError, CheckAvailability, VerifySearchBehavior, VerifySearchBehaviorInput,
};
use citysearch_domain::{QueryCategory, ValidationError};
use citysearch_infrastructure::{GeocodingConfig, OpenMeteoClient, SuiteRunner};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn city(name: &str, latitude: f64, longitude: f64) -> Value {
    json!({
        "id": 1,
        "name": name,
        "latitude": latitude,
        "longitude": longitude,
        "country_code": "GB",
        "timezone": "Europe/London"
    })
}

async fn stub(server: &MockServer, name: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", name))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn client(server: &MockServer) -> Arc<OpenMeteoClient> {
    let config = GeocodingConfig::default().with_base_url(format!("{}/v1/search", server.uri()));
    Arc::new(OpenMeteoClient::new(&config).expect("valid config"))
}

#[tokio::test]
async fn test_rules_hold_for_every_category() {
    let server = MockServer::start().await;
    let empty = json!({"generationtime_ms": 0.21});
    stub(&server, "", empty.clone()).await;
    stub(&server, "a", empty.clone()).await;
    stub(&server, "42", empty.clone()).await;
    stub(&server, "###", empty.clone()).await;
    stub(
        &server,
        "NY",
        json!({"results": [city("Ny", 59.9, 10.7)], "generationtime_ms": 0.4}),
    )
    .await;
    stub(
        &server,
        "lon",
        json!({
            "results": [city("London", 51.5, -0.12), city("Londonderry", 55.0, -7.3)],
            "generationtime_ms": 1.1
        }),
    )
    .await;

    let client = client(&server);
    CheckAvailability::new(Arc::clone(&client))
        .execute()
        .await
        .expect("stub is available");

    let use_case = VerifySearchBehavior::new(client);
    let expected = [
        ("", QueryCategory::EmptyOrSingle),
        ("a", QueryCategory::EmptyOrSingle),
        ("42", QueryCategory::NumericOnly),
        ("###", QueryCategory::SpecialOnly),
        ("NY", QueryCategory::ExactMatch),
        ("lon", QueryCategory::List),
    ];
    for (query, category) in expected {
        let output = use_case
            .execute(VerifySearchBehaviorInput::new(query))
            .await
            .unwrap_or_else(|e| panic!("{query:?}: {e}"));
        assert_eq!(output.category, category, "{query:?}");
    }
}

#[tokio::test]
async fn test_substring_match_is_rejected() {
    let server = MockServer::start().await;
    stub(
        &server,
        "xx",
        json!({"results": [city("Xxamu", 1.0, 2.0)], "generationtime_ms": 0.3}),
    )
    .await;

    let err = VerifySearchBehavior::new(client(&server))
        .execute(VerifySearchBehaviorInput::new("xx"))
        .await
        .expect_err("substring must not satisfy an exact match");

    assert_eq!(
        err,
        ApplicationError::Validation(ValidationError::NoExactMatch {
            term: "xx".to_string(),
            found: vec!["Xxamu".to_string()],
        })
    );
}

#[tokio::test]
async fn test_result_cap_is_enforced() {
    let server = MockServer::start().await;
    let results: Vec<Value> = (0..11).map(|i| city(&format!("Lon{i}"), 1.0, 2.0)).collect();
    stub(
        &server,
        "lon",
        json!({"results": results, "generationtime_ms": 0.9}),
    )
    .await;

    let results = SuiteRunner::new().run_behavior(
        "lon",
        &citysearch_application::SearchCity::new(client(&server))
            .execute("lon")
            .await,
    );

    assert!(!results.all_passed());
    assert_eq!(
        results.first_failure().and_then(|r| r.error.as_deref()),
        Some("number of results should not exceed 10, but got 11")
    );
}

#[tokio::test]
async fn test_unavailable_endpoint_aborts_before_assertions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = CheckAvailability::new(client(&server))
        .execute()
        .await
        .expect_err("503 is not available");

    assert!(matches!(
        err,
        ApplicationError::Unavailable { status: 503, .. }
    ));
}
