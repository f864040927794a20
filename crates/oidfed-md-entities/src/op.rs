//! OpenID Provider metadata.

use crate::entity::EntityMetadata;
use oidfed_md::{TaggableSchema, TaggedNames};
use serde::{Deserialize, Serialize};

/// Metadata for the `openid_provider` entity type (OpenID Connect Discovery 1.0).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpMetadata {
    #[serde(flatten)]
    pub entity: EntityMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_endpoint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_endpoint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userinfo_endpoint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introspection_endpoint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes_supported: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_types_supported: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_types_supported: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token_signing_alg_values_supported: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claims_supported: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_locales_supported: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_parameter_supported: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claims_parameter_supported: Option<bool>,
}

impl OpMetadata {
    /// Create metadata for the provider identified by `issuer`.
    #[must_use]
    pub fn new(issuer: impl Into<String>) -> Self {
        Self {
            issuer: Some(issuer.into()),
            ..Default::default()
        }
    }
}

impl TaggableSchema for OpMetadata {
    fn declared_language_tagged_names() -> TaggedNames {
        EntityMetadata::base_tagged_names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oidfed_md::MetadataSchema;

    #[test]
    fn test_boolean_members() {
        let metadata = OpMetadata {
            request_parameter_supported: Some(true),
            claims_parameter_supported: Some(false),
            ..OpMetadata::new("https://op.example.com")
        };

        let json = metadata.to_json(false).unwrap();
        assert_eq!(
            json,
            r#"{"issuer":"https://op.example.com","request_parameter_supported":true,"claims_parameter_supported":false}"#
        );
        assert_eq!(OpMetadata::from_json(&json).unwrap(), metadata);
    }
}
