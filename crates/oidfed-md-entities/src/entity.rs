//! Members common to every OpenID Federation entity type's metadata.

use oidfed_md::{LanguageValue, TaggableSchema, TaggedNames};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Common entity metadata members.
///
/// Entity type metadata structs embed this with `#[serde(flatten)]` and
/// start their declared names from [`EntityMetadata::base_tagged_names`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    /// Human-readable organization name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<LanguageValue<String>>,

    /// Organization logo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<LanguageValue<String>>,

    /// Contact addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage_uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed_jwks_uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jwks_uri: Option<String>,

    /// Inline JWK set, kept as raw JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jwks: Option<Map<String, Value>>,
}

impl EntityMetadata {
    /// Language-tagged names shared by all entity types.
    #[must_use]
    pub fn base_tagged_names() -> TaggedNames {
        TaggedNames::from_iter(["organization_name", "logo_uri"])
    }

    /// Set the organization name.
    #[must_use]
    pub fn organization_name(mut self, name: LanguageValue<String>) -> Self {
        self.organization_name = Some(name);
        self
    }

    /// Set the logo.
    #[must_use]
    pub fn logo_uri(mut self, logo_uri: LanguageValue<String>) -> Self {
        self.logo_uri = Some(logo_uri);
        self
    }

    /// Set the contacts.
    #[must_use]
    pub fn contacts(mut self, contacts: Vec<impl Into<String>>) -> Self {
        self.contacts = Some(contacts.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn policy_uri(mut self, uri: impl Into<String>) -> Self {
        self.policy_uri = Some(uri.into());
        self
    }

    #[must_use]
    pub fn homepage_uri(mut self, uri: impl Into<String>) -> Self {
        self.homepage_uri = Some(uri.into());
        self
    }

    #[must_use]
    pub fn signed_jwks_uri(mut self, uri: impl Into<String>) -> Self {
        self.signed_jwks_uri = Some(uri.into());
        self
    }

    #[must_use]
    pub fn jwks_uri(mut self, uri: impl Into<String>) -> Self {
        self.jwks_uri = Some(uri.into());
        self
    }

    /// Set the inline JWK set.
    #[must_use]
    pub fn jwks(mut self, jwks: Map<String, Value>) -> Self {
        self.jwks = Some(jwks);
        self
    }
}

impl TaggableSchema for EntityMetadata {
    fn declared_language_tagged_names() -> TaggedNames {
        Self::base_tagged_names()
    }
}
