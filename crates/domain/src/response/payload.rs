//! Body schema of a geocoding search response.
//!
//! The API omits fields freely (`results` disappears when nothing matches),
//! so every field is decoded into a [`Field`] that keeps "absent" and
//! "present with the wrong type" apart.

use serde_json::{Map, Value};

/// Decoding state of an optional body field.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    /// The key is not in the document (or is `null`).
    Missing,
    /// The key exists but its value has the wrong type.
    Invalid(Value),
    /// The key holds a well-typed value.
    Present(T),
}

impl<T> Field<T> {
    /// Returns the decoded value, if any.
    #[must_use]
    pub const fn present(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Missing | Self::Invalid(_) => None,
        }
    }

    /// Returns true if the key is absent.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    fn decode(value: Option<&Value>, convert: impl FnOnce(&Value) -> Option<T>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Missing,
            Some(raw) => convert(raw).map_or_else(|| Self::Invalid(raw.clone()), Self::Present),
        }
    }
}

fn number(value: &Value) -> Option<f64> {
    value.as_f64()
}

/// One city record from `results`.
#[derive(Debug, Clone, PartialEq)]
pub struct CityRecord {
    /// City name, when present and a string.
    pub name: Option<String>,
    /// Latitude in decimal degrees.
    pub latitude: Field<f64>,
    /// Longitude in decimal degrees.
    pub longitude: Field<f64>,
    /// The record as received, including the fields this crate ignores.
    pub raw: Value,
}

impl CityRecord {
    /// Decodes one record. Non-object values yield a record with every field
    /// missing.
    #[must_use]
    pub fn from_value(raw: &Value) -> Self {
        let object = raw.as_object();
        let get = |key: &str| object.and_then(|o| o.get(key));
        Self {
            name: get("name").and_then(Value::as_str).map(str::to_string),
            latitude: Field::decode(get("latitude"), number),
            longitude: Field::decode(get("longitude"), number),
            raw: raw.clone(),
        }
    }

    /// Returns true if the name equals `term` after uppercasing both, so
    /// `"Straße"` matches `"STRASSE"`.
    #[must_use]
    pub fn name_matches(&self, term: &str) -> bool {
        self.name
            .as_deref()
            .is_some_and(|name| name.to_uppercase() == term.to_uppercase())
    }

    /// Returns true if the name equals `name` after lowercasing both.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name
            .as_deref()
            .is_some_and(|own| own.to_lowercase() == name.to_lowercase())
    }

    /// Name used in reports.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}

/// Decoded search response body.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPayload {
    /// Server-side processing time in milliseconds.
    pub generation_time_ms: Field<f64>,
    /// Matching cities, in API order.
    pub results: Field<Vec<CityRecord>>,
    /// Error reason reported by the API on rejected requests.
    pub reason: Option<String>,
    /// The document as received.
    pub raw: Value,
}

impl SearchPayload {
    /// Decodes a JSON document. Never fails: type mismatches are recorded in
    /// the individual fields.
    #[must_use]
    pub fn from_value(raw: Value) -> Self {
        let empty = Map::new();
        let object = raw.as_object().unwrap_or(&empty);
        let results = Field::decode(object.get("results"), |value| {
            value
                .as_array()
                .map(|items| items.iter().map(CityRecord::from_value).collect())
        });

        Self {
            generation_time_ms: Field::decode(object.get("generationtime_ms"), number),
            results,
            reason: object
                .get("reason")
                .and_then(Value::as_str)
                .map(str::to_string),
            raw,
        }
    }

    /// Decoded results, or an empty slice when absent or malformed.
    #[must_use]
    pub fn cities(&self) -> &[CityRecord] {
        match &self.results {
            Field::Present(cities) => cities.as_slice(),
            Field::Missing | Field::Invalid(_) => &[],
        }
    }

    /// Number of decoded results.
    #[must_use]
    pub fn result_count(&self) -> usize {
        self.cities().len()
    }

    /// Names of all results, for diagnostics.
    #[must_use]
    pub fn city_names(&self) -> Vec<String> {
        self.cities()
            .iter()
            .map(|city| city.display_name().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_decodes_full_body() {
        let payload = SearchPayload::from_value(json!({
            "results": [
                {"id": 2643743, "name": "London", "latitude": 51.50853, "longitude": -0.12574},
                {"id": 6058560, "name": "London", "latitude": 42.98339, "longitude": -81.23304}
            ],
            "generationtime_ms": 0.72
        }));

        assert_eq!(payload.generation_time_ms, Field::Present(0.72));
        assert_eq!(payload.result_count(), 2);
        assert_eq!(payload.cities()[0].latitude, Field::Present(51.50853));
        assert_eq!(payload.city_names(), vec!["London", "London"]);
        assert_eq!(payload.reason, None);
    }

    #[test]
    fn test_absent_results() {
        let payload = SearchPayload::from_value(json!({"generationtime_ms": 0.1}));
        assert!(payload.results.is_missing());
        assert_eq!(payload.result_count(), 0);
    }

    #[test]
    fn test_wrongly_typed_fields_are_invalid() {
        let payload = SearchPayload::from_value(json!({
            "results": {"name": "London"},
            "generationtime_ms": "fast"
        }));
        assert_eq!(
            payload.generation_time_ms,
            Field::Invalid(json!("fast"))
        );
        assert!(matches!(payload.results, Field::Invalid(_)));
        assert!(payload.cities().is_empty());
    }

    #[test]
    fn test_null_counts_as_missing() {
        let payload = SearchPayload::from_value(json!({"generationtime_ms": null}));
        assert!(payload.generation_time_ms.is_missing());
    }

    #[test]
    fn test_record_without_coordinates() {
        let record = CityRecord::from_value(&json!({"name": "Ny", "latitude": "north"}));
        assert_eq!(record.latitude, Field::Invalid(json!("north")));
        assert!(record.longitude.is_missing());
        assert!(record.name_matches("NY"));
        assert!(!record.name_matches("N"));
    }

    #[test]
    fn test_exact_match_folds_to_uppercase() {
        let record = CityRecord::from_value(&json!({"name": "Straße"}));
        assert!(record.name_matches("STRASSE"));
        assert!(record.name_matches("straße"));
        assert!(!record.is_named("strasse"));
        assert!(record.is_named("STRAßE"));

        let record = CityRecord::from_value(&json!({"name": "ß"}));
        assert!(record.name_matches("SS"));
    }

    #[test]
    fn test_non_object_record() {
        let record = CityRecord::from_value(&json!(42));
        assert_eq!(record.name, None);
        assert_eq!(record.display_name(), "<unnamed>");
        assert!(!record.name_matches(""));
    }

    #[test]
    fn test_error_reason() {
        let payload = SearchPayload::from_value(json!({
            "error": true,
            "reason": "Parameter count must be between 1 and 100."
        }));
        assert_eq!(
            payload.reason.as_deref(),
            Some("Parameter count must be between 1 and 100.")
        );
    }
}
