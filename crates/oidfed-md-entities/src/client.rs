//! OAuth 2.0 / OpenID Connect client metadata.

use crate::entity::EntityMetadata;
use oidfed_md::{LanguageValue, TaggableSchema, TaggedNames};
use serde::{Deserialize, Serialize};

/// Metadata for the `oauth_client` and `openid_relying_party` entity types (RFC 7591).
///
/// `logo_uri` is declared again here, as RFC 7591 lists it among the client
/// members; the declared set keeps a single entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientMetadata {
    #[serde(flatten)]
    pub entity: EntityMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_uris: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grant_types: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_types: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_endpoint_auth_method: Option<String>,

    /// Human-readable client name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<LanguageValue<String>>,

    /// Client home page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_uri: Option<LanguageValue<String>>,

    /// Terms of service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tos_uri: Option<LanguageValue<String>>,

    /// Space-separated scope values the client may request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software_version: Option<String>,
}

impl ClientMetadata {
    /// Display name for `language`, falling back to the untagged name.
    #[must_use]
    pub fn display_name(&self, language: &str) -> Option<&str> {
        self.client_name
            .as_ref()
            .and_then(|name| name.resolve(language))
            .map(String::as_str)
    }
}

impl TaggableSchema for ClientMetadata {
    fn declared_language_tagged_names() -> TaggedNames {
        EntityMetadata::base_tagged_names().with(["client_name", "client_uri", "tos_uri", "logo_uri"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_uri_declared_once() {
        let names = ClientMetadata::declared_language_tagged_names();
        assert_eq!(
            names.iter().collect::<Vec<_>>(),
            ["organization_name", "logo_uri", "client_name", "client_uri", "tos_uri"]
        );
    }

    #[test]
    fn test_display_name() {
        let client = ClientMetadata {
            client_name: Some(
                LanguageValue::with_default("Client".to_string()).with_lang("sv", "Klient".to_string()),
            ),
            ..Default::default()
        };

        assert_eq!(client.display_name("sv"), Some("Klient"));
        assert_eq!(client.display_name("de"), Some("Client"));
        assert_eq!(ClientMetadata::default().display_name("sv"), None);
    }
}
