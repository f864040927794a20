//! Typed serialization of language-tagged metadata.
//!
//! [`LangJsonSerializer`] ties the flattening transforms to a schema type:
//! it serializes with serde, flattens the result using the type's declared
//! names, and on the way in consolidates before binding.

use crate::config::SerializerConfig;
use crate::error::{MetadataError, MetadataResult};
use crate::flatten::{consolidate_language_tags, flatten_language_tags};
use crate::lang::{TaggableSchema, TaggedNames};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::marker::PhantomData;
use tracing::instrument;

/// Serializer for one schema type.
///
/// The declared language-tagged names of `T` are computed once, when the
/// serializer is created.
///
/// # Example
///
/// ```rust
/// use oidfed_md::{LangJsonSerializer, LanguageValue, TaggableSchema, TaggedNames};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize)]
/// struct Client {
///     client_id: String,
///     #[serde(default, skip_serializing_if = "Option::is_none")]
///     client_name: Option<LanguageValue<String>>,
/// }
///
/// impl TaggableSchema for Client {
///     fn declared_language_tagged_names() -> TaggedNames {
///         TaggedNames::from_iter(["client_name"])
///     }
/// }
///
/// let serializer = LangJsonSerializer::<Client>::new();
/// let client = Client {
///     client_id: "abc".to_string(),
///     client_name: Some(
///         LanguageValue::with_default("Client".to_string()).with_lang("sv", "Klient".to_string()),
///     ),
/// };
///
/// let json = serializer.to_json(&client)?;
/// assert_eq!(json, r#"{"client_id":"abc","client_name":"Client","client_name#sv":"Klient"}"#);
/// assert_eq!(serializer.parse(&json)?, client);
/// # Ok::<(), oidfed_md::MetadataError>(())
/// ```
pub struct LangJsonSerializer<T> {
    names: TaggedNames,
    config: SerializerConfig,
    _target: PhantomData<fn() -> T>,
}

impl<T> Clone for LangJsonSerializer<T> {
    fn clone(&self) -> Self {
        Self {
            names: self.names.clone(),
            config: self.config.clone(),
            _target: PhantomData,
        }
    }
}

impl<T> fmt::Debug for LangJsonSerializer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LangJsonSerializer")
            .field("target", &std::any::type_name::<T>())
            .field("names", &self.names)
            .field("config", &self.config)
            .finish()
    }
}

impl<T: TaggableSchema> Default for LangJsonSerializer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TaggableSchema> LangJsonSerializer<T> {
    /// Create a serializer with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SerializerConfig::default())
    }

    /// Create a serializer with a custom configuration.
    #[must_use]
    pub fn with_config(config: SerializerConfig) -> Self {
        Self {
            names: T::declared_language_tagged_names(),
            config,
            _target: PhantomData,
        }
    }
}

impl<T> LangJsonSerializer<T> {
    /// Set pretty printing for [`to_json`](Self::to_json).
    #[must_use]
    pub fn pretty_printing(mut self, pretty: bool) -> Self {
        self.config.pretty_printing = pretty;
        self
    }

    /// The declared language-tagged names of the target type.
    #[must_use]
    pub fn tagged_names(&self) -> &TaggedNames {
        &self.names
    }

    #[must_use]
    pub fn config(&self) -> &SerializerConfig {
        &self.config
    }

    /// Consolidate with the target type's declared names.
    #[must_use]
    pub fn consolidate(&self, flat: Map<String, Value>) -> Map<String, Value> {
        consolidate_language_tags(flat, &self.names)
    }

    /// Consolidate with an explicit list of names instead of the target type's.
    ///
    /// This is the generic path: with `LangJsonSerializer<Map<String, Value>>`
    /// the caller supplies whatever names the document is known to tag.
    #[must_use]
    pub fn consolidate_with_names<I, S>(&self, flat: Map<String, Value>, names: I) -> Map<String, Value>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        consolidate_language_tags(flat, &TaggedNames::from_iter(names))
    }
}

impl<T: Serialize> LangJsonSerializer<T> {
    /// Serialize to a flat JSON object.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError::Serialization` if `T` cannot be represented as
    /// JSON, or `MetadataError::NotAnObject` if it is not a JSON object.
    pub fn to_json_object(&self, metadata: &T) -> MetadataResult<Map<String, Value>> {
        match serde_json::to_value(metadata) {
            Ok(Value::Object(object)) => Ok(flatten_language_tags(object, &self.names)),
            Ok(_) => Err(MetadataError::not_an_object(std::any::type_name::<T>())),
            Err(e) => Err(MetadataError::Serialization(e.to_string())),
        }
    }

    /// Serialize to a flat JSON string, indented when pretty printing is set.
    ///
    /// # Errors
    ///
    /// Same as [`to_json_object`](Self::to_json_object).
    pub fn to_json(&self, metadata: &T) -> MetadataResult<String> {
        let object = Value::Object(self.to_json_object(metadata)?);
        let json = if self.config.pretty_printing {
            serde_json::to_string_pretty(&object)
        } else {
            serde_json::to_string(&object)
        };
        json.map_err(|e| MetadataError::Serialization(e.to_string()))
    }
}

impl<T: DeserializeOwned> LangJsonSerializer<T> {
    /// Parse a flat JSON string.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError::Binding` for malformed JSON or a document
    /// that does not fit `T`, and `MetadataError::NotAnObject` when the
    /// document is not an object.
    pub fn parse(&self, json: &str) -> MetadataResult<T> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(object) => self.parse_object(object),
            _ => Err(MetadataError::not_an_object("metadata document")),
        }
    }

    /// Consolidate a flat JSON object and bind it into `T`.
    ///
    /// Members unknown to `T` are ignored unless `T` denies unknown fields.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError::Binding` when the consolidated object does not
    /// fit `T`. This includes language-tagged members the writer declared
    /// but `T` does not, or the other way around.
    #[instrument(skip_all, fields(schema = std::any::type_name::<T>(), members = flat.len()))]
    pub fn parse_object(&self, flat: Map<String, Value>) -> MetadataResult<T> {
        let nested = self.consolidate(flat);
        serde_json::from_value(Value::Object(nested)).map_err(|e| {
            tracing::debug!(error = %e, "Consolidated metadata does not fit target type");
            MetadataError::Binding(e)
        })
    }
}

/// Convenience methods for any serde schema type that declares its language-tagged names.
///
/// Implemented for every `T: TaggableSchema + Serialize + DeserializeOwned`.
pub trait MetadataSchema: TaggableSchema + Serialize + DeserializeOwned + Sized {
    /// A serializer for this type with the default configuration.
    #[must_use]
    fn json_serializer() -> LangJsonSerializer<Self> {
        LangJsonSerializer::new()
    }

    /// Serialize to a flat JSON object.
    ///
    /// # Errors
    ///
    /// See [`LangJsonSerializer::to_json_object`].
    fn to_json_object(&self) -> MetadataResult<Map<String, Value>> {
        Self::json_serializer().to_json_object(self)
    }

    /// Serialize to a flat JSON string.
    ///
    /// # Errors
    ///
    /// See [`LangJsonSerializer::to_json`].
    fn to_json(&self, pretty_printing: bool) -> MetadataResult<String> {
        Self::json_serializer()
            .pretty_printing(pretty_printing)
            .to_json(self)
    }

    /// Parse from a flat JSON object.
    ///
    /// # Errors
    ///
    /// See [`LangJsonSerializer::parse_object`].
    fn from_json_object(flat: Map<String, Value>) -> MetadataResult<Self> {
        Self::json_serializer().parse_object(flat)
    }

    /// Parse from a flat JSON string.
    ///
    /// # Errors
    ///
    /// See [`LangJsonSerializer::parse`].
    fn from_json(json: &str) -> MetadataResult<Self> {
        Self::json_serializer().parse(json)
    }
}

impl<T> MetadataSchema for T where T: TaggableSchema + Serialize + DeserializeOwned {}
