//! Metadata with extension parameters.
//!
//! [`ExtendedMetadata`] layers parameters a schema type does not know about
//! on top of a typed base object. The base type is unaware of them: they are
//! merged in when serializing and split off when parsing.

use crate::config::{CollisionPolicy, SerializerConfig};
use crate::error::{MetadataError, MetadataResult};
use crate::extension::{extension_members, NO_EXCLUSIONS};
use crate::lang::TaggableSchema;
use crate::serializer::LangJsonSerializer;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::instrument;

/// A typed base metadata object plus extension parameters.
///
/// # Example
///
/// ```rust
/// use oidfed_md::{ExtendedMetadata, LangJsonSerializer};
/// use serde_json::{json, Map, Value};
///
/// let base: Map<String, Value> = json!({"issuer": "https://op.example.com"})
///     .as_object()
///     .unwrap()
///     .clone();
///
/// let metadata = ExtendedMetadata::builder()
///     .base_metadata(base)
///     .add_parameter("ext_param1", "value1")
///     .build();
///
/// let object = metadata.to_json_object()?;
/// assert_eq!(object["ext_param1"], "value1");
/// # Ok::<(), oidfed_md::MetadataError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExtendedMetadata<T> {
    base_metadata: Option<T>,
    extended_parameters: Map<String, Value>,
    config: SerializerConfig,
}

impl<T> ExtendedMetadata<T> {
    /// Create a new builder.
    #[must_use]
    pub fn builder() -> ExtendedMetadataBuilder<T> {
        ExtendedMetadataBuilder::default()
    }

    /// The typed base metadata, if any.
    #[must_use]
    pub fn base_metadata(&self) -> Option<&T> {
        self.base_metadata.as_ref()
    }

    /// All extension parameters.
    #[must_use]
    pub fn extended_parameters(&self) -> &Map<String, Value> {
        &self.extended_parameters
    }

    /// A single extension parameter.
    #[must_use]
    pub fn extended_parameter(&self, name: &str) -> Option<&Value> {
        self.extended_parameters.get(name)
    }

    /// Take the base metadata and extension parameters apart.
    #[must_use]
    pub fn into_parts(self) -> (Option<T>, Map<String, Value>) {
        (self.base_metadata, self.extended_parameters)
    }
}

impl<T> ExtendedMetadata<T>
where
    T: TaggableSchema + DeserializeOwned + Serialize,
{
    /// Split a flat payload into typed base metadata and extension parameters.
    ///
    /// The base is bound through `serializer`. Every payload member that the
    /// bound base does not serialize back to, whether plain (`client_name`)
    /// or language-tagged (`client_name#sv`), is an extension parameter.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError::Binding` if the recognized members do not fit
    /// `T`, or a serialization error if the bound base cannot be serialized.
    #[instrument(skip_all, fields(members = payload.len()))]
    pub fn parse(
        payload: Map<String, Value>,
        serializer: &LangJsonSerializer<T>,
    ) -> MetadataResult<Self> {
        let base_metadata = serializer.parse_object(payload.clone())?;
        let recognized = serializer.to_json_object(&base_metadata)?;
        let extended_parameters = extension_members(&payload, &NO_EXCLUSIONS, Some(&recognized));

        tracing::debug!(
            recognized = recognized.len(),
            extensions = extended_parameters.len(),
            "Split extended metadata"
        );

        Ok(Self {
            base_metadata: Some(base_metadata),
            extended_parameters,
            config: serializer.config().clone(),
        })
    }
}

impl<T> ExtendedMetadata<T>
where
    T: TaggableSchema + Serialize,
{
    /// Merge the base metadata's flat JSON with the extension parameters.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the base cannot be serialized, or
    /// `MetadataError::ExtensionCollision` when an extension parameter names
    /// a base member and the collision policy is `Reject`.
    pub fn to_json_object(&self) -> MetadataResult<Map<String, Value>> {
        let serializer = LangJsonSerializer::<T>::with_config(self.config.clone());
        let mut object = match &self.base_metadata {
            Some(base) => serializer.to_json_object(base)?,
            None => Map::new(),
        };
        overlay_extensions(
            &mut object,
            &self.extended_parameters,
            self.config.collision_policy,
            "extension parameter",
        )?;
        Ok(object)
    }

    /// Merge and render as a JSON string.
    ///
    /// # Errors
    ///
    /// Same as [`to_json_object`](Self::to_json_object).
    pub fn to_json(&self, pretty_printing: bool) -> MetadataResult<String> {
        let object = Value::Object(self.to_json_object()?);
        let json = if pretty_printing {
            serde_json::to_string_pretty(&object)
        } else {
            serde_json::to_string(&object)
        };
        json.map_err(|e| MetadataError::Serialization(e.to_string()))
    }
}

/// Write `extensions` over `target` according to `policy`.
///
/// `origin` names what the overlaid members are, for the overwrite warning.
pub(crate) fn overlay_extensions(
    target: &mut Map<String, Value>,
    extensions: &Map<String, Value>,
    policy: CollisionPolicy,
    origin: &str,
) -> MetadataResult<()> {
    for (name, value) in extensions {
        if target.contains_key(name) {
            match policy {
                CollisionPolicy::Reject => {
                    return Err(MetadataError::ExtensionCollision(name.clone()));
                }
                CollisionPolicy::Overwrite => {
                    tracing::warn!(member = %name, origin, "Merged member overwrites an existing member");
                }
            }
        }
        target.insert(name.clone(), value.clone());
    }
    Ok(())
}

/// Builder for [`ExtendedMetadata`].
#[derive(Debug)]
pub struct ExtendedMetadataBuilder<T> {
    base_metadata: Option<T>,
    extended_parameters: Map<String, Value>,
    config: SerializerConfig,
}

impl<T> Default for ExtendedMetadataBuilder<T> {
    fn default() -> Self {
        Self {
            base_metadata: None,
            extended_parameters: Map::new(),
            config: SerializerConfig::default(),
        }
    }
}

impl<T> ExtendedMetadataBuilder<T> {
    /// Set the typed base metadata.
    #[must_use]
    pub fn base_metadata(mut self, base_metadata: T) -> Self {
        self.base_metadata = Some(base_metadata);
        self
    }

    /// Add an extension parameter. A later value for the same name replaces the earlier one.
    #[must_use]
    pub fn add_parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extended_parameters.insert(name.into(), value.into());
        self
    }

    /// Add several extension parameters.
    #[must_use]
    pub fn add_parameters(mut self, parameters: Map<String, Value>) -> Self {
        self.extended_parameters.extend(parameters);
        self
    }

    /// Set the serializer configuration used when merging.
    #[must_use]
    pub fn config(mut self, config: SerializerConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the extended metadata.
    #[must_use]
    pub fn build(self) -> ExtendedMetadata<T> {
        ExtendedMetadata {
            base_metadata: self.base_metadata,
            extended_parameters: self.extended_parameters,
            config: self.config,
        }
    }
}
