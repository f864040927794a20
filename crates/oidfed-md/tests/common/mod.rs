//! Integration test helpers for oidfed-md.

#![allow(dead_code)]

use serde_json::{Map, Value};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for tests (once).
pub fn init_test_logging() {
    INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::fmt()
                .with_test_writer()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .try_init()
                .ok();
        }
    });
}

/// Load a JSON object fixture from `tests/fixtures`.
pub fn load_fixture(name: &str) -> Map<String, Value> {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {path}: {e}"));
    match serde_json::from_str(&text).expect("fixture is valid JSON") {
        Value::Object(object) => object,
        other => panic!("fixture {name} is not an object: {other}"),
    }
}

/// Unwrap a `json!` object literal.
pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(object) => object,
        other => panic!("expected object, got {other}"),
    }
}
