//! OAuth protected resource metadata.

use crate::entity::EntityMetadata;
use oidfed_md::{LanguageValue, TaggableSchema, TaggedNames};
use serde::{Deserialize, Serialize};

/// Metadata for the `oauth_resource` entity type (RFC 9728).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceServerMetadata {
    #[serde(flatten)]
    pub entity: EntityMetadata,

    /// Resource identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,

    /// Issuers of the authorization servers that protect this resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_servers: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes_supported: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer_methods_supported: Option<Vec<String>>,

    /// Human-readable resource name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<LanguageValue<String>>,

    /// Developer documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_documentation: Option<LanguageValue<String>>,
}

impl TaggableSchema for ResourceServerMetadata {
    fn declared_language_tagged_names() -> TaggedNames {
        EntityMetadata::base_tagged_names().with(["resource_name", "resource_documentation"])
    }
}
