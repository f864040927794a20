//! OpenID Federation entity metadata types.
//!
//! Each type is a serde record whose language-tagged members are declared
//! through [`TaggableSchema`](oidfed_md::TaggableSchema), composed from the
//! members shared by all entity types in [`EntityMetadata`].
//!
//! # Example
//!
//! ```rust
//! use oidfed_md::MetadataSchema;
//! use oidfed_md_entities::ClientMetadata;
//!
//! let client = ClientMetadata::from_json(
//!     r#"{"client_name": "Client", "client_name#sv": "Klient", "scope": "openid"}"#,
//! )?;
//!
//! assert_eq!(client.display_name("sv"), Some("Klient"));
//! assert_eq!(client.scope.as_deref(), Some("openid"));
//! # Ok::<(), oidfed_md::MetadataError>(())
//! ```

mod authorization_server;
mod client;
mod entity;
mod federation_entity;
mod op;
mod resource_server;

// Re-export public API
pub use authorization_server::AuthorizationServerMetadata;
pub use client::ClientMetadata;
pub use entity::EntityMetadata;
pub use federation_entity::FederationEntityMetadata;
pub use op::OpMetadata;
pub use resource_server::ResourceServerMetadata;
