//! Federation entity metadata.

use crate::entity::EntityMetadata;
use oidfed_md::{TaggableSchema, TaggedNames};
use serde::{Deserialize, Serialize};

/// Metadata for the `federation_entity` entity type.
///
/// Adds no language-tagged members of its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FederationEntityMetadata {
    #[serde(flatten)]
    pub entity: EntityMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub federation_fetch_endpoint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub federation_list_endpoint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub federation_resolve_endpoint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub federation_trust_mark_status_endpoint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub federation_trust_mark_list_endpoint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub federation_trust_mark_endpoint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub federation_historical_keys_endpoint: Option<String>,

    /// JWS algorithms accepted for `private_key_jwt` at the federation endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_auth_signing_alg_values_supported: Option<Vec<String>>,
}

impl TaggableSchema for FederationEntityMetadata {
    fn declared_language_tagged_names() -> TaggedNames {
        EntityMetadata::base_tagged_names()
    }
}
