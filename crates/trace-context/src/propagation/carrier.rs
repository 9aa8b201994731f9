// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Carrier traits for moving the `traceparent` header across call boundaries.
//!
//! A carrier is whatever transports key-value metadata: HTTP headers, message
//! attributes, a JSON envelope. Keys are matched case-insensitively, since HTTP
//! header names are.
//!
//! Implementations are provided for `HashMap<String, String>` and
//! `serde_json::Value` objects.

use std::collections::HashMap;

use serde_json::Value;

/// Writes key-value pairs into a carrier.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use datadog_trace_context::propagation::carrier::Injector;
///
/// let mut headers = HashMap::new();
/// headers.set("TraceParent", "value".to_string());
///
/// assert_eq!(headers.get("traceparent"), Some(&"value".to_string()));
/// ```
pub trait Injector {
    /// Sets `key` (lowercased) to `value`.
    fn set(&mut self, key: &str, value: String);
}

/// Reads values from a carrier.
pub trait Extractor {
    /// Gets the value for `key`, ignoring case.
    fn get(&self, key: &str) -> Option<&str>;
}

impl<S: std::hash::BuildHasher> Injector for HashMap<String, String, S> {
    fn set(&mut self, key: &str, value: String) {
        self.insert(key.to_lowercase(), value);
    }
}

impl<S: std::hash::BuildHasher> Extractor for HashMap<String, String, S> {
    fn get(&self, key: &str) -> Option<&str> {
        if let Some(value) = HashMap::get(self, key) {
            return Some(value.as_str());
        }

        // Carriers built without `Injector::set` may keep the sender's casing.
        self.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// Only `Value::Object` carries anything; other variants are ignored.
impl Injector for Value {
    fn set(&mut self, key: &str, value: String) {
        if let Value::Object(map) = self {
            map.insert(key.to_lowercase(), Value::String(value));
        }
    }
}

impl Extractor for Value {
    fn get(&self, key: &str) -> Option<&str> {
        let Value::Object(map) = self else {
            return None;
        };

        map.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .and_then(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hash_map_get() {
        let mut carrier = HashMap::new();
        carrier.set("headerName", "value".to_string());

        assert_eq!(
            Extractor::get(&carrier, "HEADERNAME"),
            Some("value"),
            "case insensitive extraction"
        );
    }

    #[test]
    fn hash_map_get_keeps_sender_casing() {
        let carrier = HashMap::from([("TraceParent".to_string(), "value".to_string())]);

        assert_eq!(Extractor::get(&carrier, "traceparent"), Some("value"));
        assert_eq!(Extractor::get(&carrier, "tracestate"), None);
    }

    #[test]
    fn serde_value_get() {
        let mut carrier = Value::Object(serde_json::Map::new());
        carrier.set("headerName", "value".to_string());

        assert_eq!(
            Extractor::get(&carrier, "HEADERNAME"),
            Some("value"),
            "case insensitive extraction"
        );
    }

    #[test]
    fn serde_value_non_object() {
        let mut carrier = Value::Null;
        carrier.set("headerName", "value".to_string());

        assert_eq!(Extractor::get(&carrier, "headerName"), None);
    }

    #[test]
    fn serde_value_non_string_value() {
        let carrier = serde_json::json!({ "traceparent": 42 });
        assert_eq!(Extractor::get(&carrier, "traceparent"), None);
    }
}
