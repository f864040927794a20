//! Language-tagged JSON metadata for OAuth 2.0 and OpenID Federation.
//!
//! This crate provides:
//! - `LanguageValue`, a value with an untagged default and per-language variants
//! - Flattening of language objects to `name` / `name#tag` members and the reverse
//! - A typed serializer driven by each schema type's declared taggable members
//! - Extension parameter partitioning for metadata and JWT claim sets
//! - `ExtendedMetadata` and `ClaimSet` containers built on top of these
//!
//! # Example
//!
//! ```rust
//! use oidfed_md::{LangJsonSerializer, LanguageValue, TaggableSchema, TaggedNames};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Client {
//!     client_id: String,
//!     #[serde(default, skip_serializing_if = "Option::is_none")]
//!     client_name: Option<LanguageValue<String>>,
//! }
//!
//! impl TaggableSchema for Client {
//!     fn declared_language_tagged_names() -> TaggedNames {
//!         TaggedNames::from_iter(["client_name"])
//!     }
//! }
//!
//! let client = Client {
//!     client_id: "rp".to_string(),
//!     client_name: Some(
//!         LanguageValue::with_default("My RP".to_string()).with_lang("sv", "Min RP".to_string()),
//!     ),
//! };
//!
//! let serializer = LangJsonSerializer::<Client>::new();
//! let json = serializer.to_json(&client)?;
//! assert_eq!(json, r#"{"client_id":"rp","client_name":"My RP","client_name#sv":"Min RP"}"#);
//!
//! let parsed = serializer.parse(&json)?;
//! assert_eq!(parsed, client);
//! # Ok::<(), oidfed_md::MetadataError>(())
//! ```

mod claims;
mod config;
mod error;
mod extended;
mod extension;
mod flatten;
mod lang;
mod serializer;

// Re-export public API
pub use claims::{Audience, ClaimSet, ClaimSetBuilder, NumericDate, RegisteredClaims};
pub use config::{CollisionPolicy, SerializerConfig};
pub use error::{MetadataError, MetadataResult};
pub use extended::{ExtendedMetadata, ExtendedMetadataBuilder};
pub use extension::{
    extension_claims, extension_members, MemberSet, NO_EXCLUSIONS, STANDARD_JWT_CLAIMS,
};
pub use flatten::{consolidate_language_tags, flatten_language_tags, is_language_object};
pub use lang::{
    LanguageValue, TaggableSchema, TaggedNames, DEFAULT_VALUE_MEMBER, LANGUAGE_TAG_SEPARATOR,
    LANGUAGE_VALUES_MEMBER,
};
pub use serializer::{LangJsonSerializer, MetadataSchema};
