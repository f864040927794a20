//! Extension parameter partitioning.
//!
//! A payload member is an extension when it is neither in a fixed excluded
//! set nor a member of a reference object or name set. For JWT claim sets the
//! excluded set is the registered claims in [`STANDARD_JWT_CLAIMS`]; for plain
//! metadata it is empty.

use crate::error::{MetadataError, MetadataResult};
use crate::lang::TaggedNames;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{BTreeSet, HashSet};

/// Registered JWT claims never reported as extension claims.
pub const STANDARD_JWT_CLAIMS: [&str; 7] = ["iss", "sub", "iat", "exp", "jti", "aud", "nbf"];

/// Excluded set for metadata payloads, which have no fixed exclusions.
pub const NO_EXCLUSIONS: [&str; 0] = [];

/// A set of member names to test payload keys against.
pub trait MemberSet {
    /// Check whether `name` belongs to the set.
    fn contains_member(&self, name: &str) -> bool;
}

impl MemberSet for Map<String, Value> {
    fn contains_member(&self, name: &str) -> bool {
        self.contains_key(name)
    }
}

impl MemberSet for TaggedNames {
    fn contains_member(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl<const N: usize> MemberSet for [&str; N] {
    fn contains_member(&self, name: &str) -> bool {
        self.iter().any(|member| *member == name)
    }
}

impl MemberSet for Vec<&str> {
    fn contains_member(&self, name: &str) -> bool {
        self.iter().any(|member| *member == name)
    }
}

impl MemberSet for Vec<String> {
    fn contains_member(&self, name: &str) -> bool {
        self.iter().any(|member| member == name)
    }
}

impl MemberSet for HashSet<String> {
    fn contains_member(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl MemberSet for BTreeSet<String> {
    fn contains_member(&self, name: &str) -> bool {
        self.contains(name)
    }
}

/// Collect the payload members explained by neither `excluded` nor `reference`.
///
/// Values are copied unchanged and payload order is kept. A missing
/// reference excludes nothing.
///
/// # Example
///
/// ```rust
/// use oidfed_md::{extension_members, STANDARD_JWT_CLAIMS};
/// use serde_json::json;
///
/// let payload = json!({"iss": "https://op.example.com", "metadata": {}, "trust_level": 3});
/// let known = json!({"metadata": {}});
///
/// let extensions = extension_members(
///     payload.as_object().unwrap(),
///     &STANDARD_JWT_CLAIMS,
///     Some(known.as_object().unwrap()),
/// );
/// assert_eq!(serde_json::Value::Object(extensions), json!({"trust_level": 3}));
/// ```
#[must_use]
pub fn extension_members(
    payload: &Map<String, Value>,
    excluded: &dyn MemberSet,
    reference: Option<&dyn MemberSet>,
) -> Map<String, Value> {
    payload
        .iter()
        .filter(|(name, _)| !excluded.contains_member(name))
        .filter(|(name, _)| !reference.is_some_and(|r| r.contains_member(name)))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Extract extension claims from a JWT payload.
///
/// Standard claims are excluded, as are the members `data_object` serializes
/// to. A missing or JSON-null data object excludes nothing.
///
/// # Errors
///
/// Returns `MetadataError::Serialization` if the data object cannot be
/// serialized, or `MetadataError::NotAnObject` if it is not a JSON object.
pub fn extension_claims<R>(
    payload: &Map<String, Value>,
    data_object: Option<&R>,
) -> MetadataResult<Map<String, Value>>
where
    R: Serialize + ?Sized,
{
    let reference = match data_object {
        None => Map::new(),
        Some(data_object) => match serde_json::to_value(data_object)
            .map_err(|e| MetadataError::Serialization(e.to_string()))?
        {
            Value::Object(members) => members,
            Value::Null => Map::new(),
            _ => return Err(MetadataError::not_an_object("reference data object")),
        },
    };

    Ok(extension_members(payload, &STANDARD_JWT_CLAIMS, Some(&reference)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_extension_members_without_reference() {
        let payload = object(json!({"a": 1, "b": 2}));
        let extensions = extension_members(&payload, &NO_EXCLUSIONS, None);
        assert_eq!(extensions, payload);
    }

    #[test]
    fn test_extension_members_excludes_standard_claims() {
        let payload = object(json!({
            "iss": "issuer", "sub": "subject", "iat": 1, "exp": 2,
            "jti": "id", "aud": ["x"], "nbf": 0, "custom": true
        }));

        let extensions = extension_members(&payload, &STANDARD_JWT_CLAIMS, None);
        assert_eq!(Value::Object(extensions), json!({"custom": true}));
    }

    #[test]
    fn test_extension_members_with_name_set_reference() {
        let payload = object(json!({"client_name": "x", "client_name#sv": "y", "ext": 1}));
        let names = TaggedNames::from_iter(["client_name", "client_name#sv"]);

        let extensions = extension_members(&payload, &NO_EXCLUSIONS, Some(&names));
        assert_eq!(Value::Object(extensions), json!({"ext": 1}));
    }

    #[test]
    fn test_extension_members_other_set_types() {
        let payload = object(json!({"a": 1, "b": 2, "c": 3}));

        let hashed: HashSet<String> = ["a".to_string()].into();
        let sorted: BTreeSet<String> = ["b".to_string()].into();
        let listed = vec!["c".to_string()];

        assert_eq!(extension_members(&payload, &hashed, Some(&sorted)).len(), 1);
        assert!(extension_members(&payload, &listed, Some(&vec!["a", "b"])).is_empty());
    }

    #[test]
    fn test_extension_members_keeps_values_and_order() {
        let payload = object(json!({"z": {"nested": [1]}, "iss": "x", "a": null}));
        let extensions = extension_members(&payload, &STANDARD_JWT_CLAIMS, None);

        let keys: Vec<&str> = extensions.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a"]);
        assert_eq!(extensions["z"], json!({"nested": [1]}));
        assert_eq!(extensions["a"], Value::Null);
    }

    #[derive(Serialize)]
    struct EntityStatementData {
        metadata: Value,
        #[serde(skip_serializing_if = "Option::is_none")]
        trust_marks: Option<Vec<String>>,
    }

    #[test]
    fn test_extension_claims_uses_serialized_data_object() {
        let payload = object(json!({
            "iss": "https://ta.example.com",
            "sub": "https://leaf.example.com",
            "metadata": {"federation_entity": {}},
            "trust_marks": ["tm"],
            "crit_ext": "value"
        }));
        let data = EntityStatementData {
            metadata: json!({}),
            trust_marks: None,
        };

        let extensions = extension_claims(&payload, Some(&data)).unwrap();
        assert_eq!(
            Value::Object(extensions),
            json!({"trust_marks": ["tm"], "crit_ext": "value"})
        );
    }

    #[test]
    fn test_extension_claims_without_data_object() {
        let payload = object(json!({"iss": "x", "custom": 1}));
        let extensions = extension_claims::<Value>(&payload, None).unwrap();
        assert_eq!(Value::Object(extensions), json!({"custom": 1}));

        let extensions = extension_claims(&payload, Some(&Value::Null)).unwrap();
        assert_eq!(Value::Object(extensions), json!({"custom": 1}));
    }

    #[test]
    fn test_extension_claims_rejects_scalar_data_object() {
        let payload = object(json!({"custom": 1}));
        let err = extension_claims(&payload, Some("not an object")).unwrap_err();
        assert!(matches!(err, MetadataError::NotAnObject { .. }));
    }
}
