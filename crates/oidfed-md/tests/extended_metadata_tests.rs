//! Integration tests for extended metadata and claim sets.

mod common;

use common::{init_test_logging, object};
use oidfed_md::{
    ClaimSet, CollisionPolicy, ExtendedMetadata, LangJsonSerializer, LanguageValue,
    SerializerConfig, TaggableSchema, TaggedNames,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
struct ServiceMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    service_endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    service_name: Option<LanguageValue<String>>,
}

impl TaggableSchema for ServiceMetadata {
    fn declared_language_tagged_names() -> TaggedNames {
        TaggedNames::from_iter(["service_name"])
    }
}

fn service() -> ServiceMetadata {
    ServiceMetadata {
        service_endpoint: Some("https://service.example.com".to_string()),
        service_name: Some(
            LanguageValue::with_default("Service".to_string())
                .with_lang("sv", "Tjänst".to_string())
                .with_lang("fi", "Palvelu".to_string()),
        ),
    }
}

#[test]
fn test_merge_split_inverse() {
    init_test_logging();

    let metadata = ExtendedMetadata::builder()
        .base_metadata(service())
        .add_parameter("ext_param1", "value1")
        .add_parameter("ext_param2", "value2")
        .build();

    let json = metadata.to_json(false).unwrap();
    let payload = match serde_json::from_str(&json).unwrap() {
        Value::Object(payload) => payload,
        other => panic!("expected object, got {other}"),
    };
    let parsed = ExtendedMetadata::parse(payload, &LangJsonSerializer::<ServiceMetadata>::new())
        .unwrap();

    assert_eq!(parsed.extended_parameters().len(), 2);
    assert_eq!(parsed.extended_parameter("ext_param1"), Some(&json!("value1")));
    assert_eq!(parsed.extended_parameter("ext_param2"), Some(&json!("value2")));
    assert_eq!(parsed.extended_parameter("ext_param3"), None);
    assert_eq!(parsed.base_metadata(), Some(&service()));
}

#[test]
fn test_language_tagged_extension_is_kept_whole() {
    init_test_logging();

    let payload = object(json!({
        "service_endpoint": "https://service.example.com",
        "service_name": "Service",
        "service_name#sv": "Tjänst",
        "policy_text": "Policy",
        "policy_text#sv": "Policy på svenska"
    }));

    let parsed = ExtendedMetadata::parse(payload, &LangJsonSerializer::<ServiceMetadata>::new())
        .unwrap();

    assert_eq!(parsed.extended_parameters().len(), 2);
    assert_eq!(parsed.extended_parameter("policy_text#sv"), Some(&json!("Policy på svenska")));
    assert_eq!(
        parsed.base_metadata().and_then(|m| m.service_name.as_ref()).and_then(|n| n.get("sv")),
        Some(&"Tjänst".to_string())
    );
}

#[test]
fn test_reject_policy_reports_colliding_member() {
    init_test_logging();

    let metadata = ExtendedMetadata::builder()
        .base_metadata(service())
        .add_parameter("service_endpoint", "https://other.example.com")
        .config(SerializerConfig::default().collision_policy(CollisionPolicy::Reject))
        .build();

    let err = metadata.to_json_object().unwrap_err();
    assert!(err.is_collision());
    assert!(err.to_string().ends_with("service_endpoint"));
}

#[test]
fn test_pretty_extended_output() {
    init_test_logging();

    let metadata = ExtendedMetadata::builder()
        .base_metadata(service())
        .add_parameter("ext", json!({"nested": true}))
        .build();

    let pretty = metadata.to_json(true).unwrap();
    assert!(pretty.contains("\"service_name#fi\": \"Palvelu\""));
    assert!(pretty.contains("\"nested\": true"));
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
struct EntityStatement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    authority_hints: Option<Vec<String>>,
}

impl TaggableSchema for EntityStatement {
    fn declared_language_tagged_names() -> TaggedNames {
        TaggedNames::new()
    }
}

#[test]
fn test_claim_set_extension_claims() {
    init_test_logging();

    let claims = ClaimSet::builder()
        .issuer("https://ta.example.com")
        .subject("https://leaf.example.com")
        .issued_at(1_700_000_000)
        .expiration(1_700_086_400)
        .jwt_id("statement-1")
        .data(EntityStatement {
            metadata: Some(json!({"openid_provider": {"issuer": "https://leaf.example.com"}})),
            authority_hints: Some(vec!["https://ta.example.com".to_string()]),
        })
        .add_claim("trust_marks", json!([{"id": "tm1"}]))
        .build();

    let payload = claims.to_payload().unwrap();
    assert_eq!(payload.len(), 8);

    let parsed = ClaimSet::<EntityStatement>::parse(&payload).unwrap();
    assert_eq!(parsed.registered, claims.registered);
    assert_eq!(parsed.data, claims.data);
    assert_eq!(parsed.extension_claims(), claims.extension_claims());
    assert_eq!(parsed.extension_claim("trust_marks"), Some(&json!([{"id": "tm1"}])));
}

#[test]
fn test_claim_set_with_language_tagged_data() {
    init_test_logging();

    let payload = object(json!({
        "iss": "https://service.example.com",
        "iat": 1_700_000_000.25,
        "service_endpoint": "https://service.example.com",
        "service_name": "Service",
        "service_name#sv": "Tjänst",
        "service_name#fi": "Palvelu",
        "ext_claim": "value"
    }));

    let parsed = ClaimSet::<ServiceMetadata>::parse(&payload).unwrap();

    assert_eq!(parsed.data, Some(service()));
    assert_eq!(parsed.registered.iat.as_ref().map(|iat| iat.timestamp()), Some(1_700_000_000));
    assert_eq!(parsed.extension_claims().len(), 1);
    assert_eq!(parsed.extension_claim("ext_claim"), Some(&json!("value")));
    assert_eq!(parsed.to_payload().unwrap(), payload);
}
