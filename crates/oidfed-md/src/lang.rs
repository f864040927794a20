//! Language-tagged values and declared language-taggable member names.
//!
//! OAuth and OpenID specifications carry human-readable values under a base
//! member name (`client_name`) with per-language variants in sibling members
//! (`client_name#sv`). In memory such a member is one [`LanguageValue`]. The
//! set of members a schema type treats this way is explicit data, declared
//! through [`TaggableSchema`].

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Wire member holding the untagged value of a language object.
pub const DEFAULT_VALUE_MEMBER: &str = "def";

/// Wire member holding the per-language values of a language object.
pub const LANGUAGE_VALUES_MEMBER: &str = "lang_values";

/// Separator between a member name and its language tag.
pub const LANGUAGE_TAG_SEPARATOR: char = '#';

/// A value with an optional untagged default and optional per-language variants.
///
/// Language tags are opaque strings; no BCP 47 validation is performed.
///
/// # Example
///
/// ```rust
/// use oidfed_md::LanguageValue;
///
/// let name = LanguageValue::with_default("Example Org".to_string())
///     .with_lang("sv", "Exempelorganisationen".to_string());
///
/// assert_eq!(name.resolve("sv").map(String::as_str), Some("Exempelorganisationen"));
/// assert_eq!(name.resolve("de").map(String::as_str), Some("Example Org"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageValue<T> {
    /// The value without a language tag.
    #[serde(rename = "def", default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<T>,

    /// Values keyed by language tag, in insertion order.
    #[serde(
        rename = "lang_values",
        default,
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub per_language: IndexMap<String, T>,
}

impl<T> Default for LanguageValue<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> LanguageValue<T> {
    /// A value with neither default nor language variants.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            default_value: None,
            per_language: IndexMap::new(),
        }
    }

    /// A value with only an untagged default.
    #[must_use]
    pub fn with_default(value: T) -> Self {
        Self {
            default_value: Some(value),
            per_language: IndexMap::new(),
        }
    }

    /// A value with only language variants.
    #[must_use]
    pub fn from_map(per_language: IndexMap<String, T>) -> Self {
        Self {
            default_value: None,
            per_language,
        }
    }

    /// Add or replace the value for one language tag.
    #[must_use]
    pub fn with_lang(mut self, tag: impl Into<String>, value: T) -> Self {
        self.per_language.insert(tag.into(), value);
        self
    }

    /// Set the untagged default.
    #[must_use]
    pub fn default_value(mut self, value: T) -> Self {
        self.default_value = Some(value);
        self
    }

    /// True when there is nothing to serialize.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.default_value.is_none() && self.per_language.is_empty()
    }

    /// The value stored for exactly `tag`.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&T> {
        self.per_language.get(tag)
    }

    /// Best-effort value for a preferred language.
    ///
    /// Exact tag first, then the default, then the first language variant.
    /// There is no partial matching: `en-GB` does not fall back to `en`.
    #[must_use]
    pub fn resolve(&self, preferred: &str) -> Option<&T> {
        self.per_language
            .get(preferred)
            .or(self.default_value.as_ref())
            .or_else(|| self.per_language.values().next())
    }
}

/// Ordered, de-duplicated set of language-taggable member names.
///
/// Sets are composed additively: a schema type starts from its base type's
/// names and adds its own. Adding a name already present is a no-op, and
/// nothing is ever removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaggedNames {
    names: IndexSet<String>,
}

impl TaggedNames {
    /// An empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add names, skipping those already present.
    #[must_use]
    pub fn with<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extend(names);
        self
    }

    /// Add names in place, skipping those already present.
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.names.insert(name.into());
        }
    }

    /// Check whether `name` is declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Names in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Split a flat wire key into its declared member name and language tag.
    ///
    /// Returns `None` unless the key is `<declared>#<tag>` with a non-empty
    /// tag. When several declared names prefix the key, the longest wins.
    #[must_use]
    pub fn split_tagged_key<'k>(&self, key: &'k str) -> Option<(&str, &'k str)> {
        self.names
            .iter()
            .filter_map(|name| {
                let tag = key
                    .strip_prefix(name.as_str())?
                    .strip_prefix(LANGUAGE_TAG_SEPARATOR)?;
                (!tag.is_empty()).then_some((name.as_str(), tag))
            })
            .max_by_key(|(name, _)| name.len())
    }
}

impl<S: Into<String>> FromIterator<S> for TaggedNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new().with(iter)
    }
}

/// A schema type whose language-taggable members are declared explicitly.
///
/// Implementations compose additively. A type built on top of another
/// starts from the other's set:
///
/// ```rust
/// use oidfed_md::{TaggableSchema, TaggedNames};
///
/// struct Base;
/// impl TaggableSchema for Base {
///     fn declared_language_tagged_names() -> TaggedNames {
///         TaggedNames::from_iter(["organization_name", "logo_uri"])
///     }
/// }
///
/// struct Client;
/// impl TaggableSchema for Client {
///     fn declared_language_tagged_names() -> TaggedNames {
///         Base::declared_language_tagged_names().with(["client_name", "logo_uri"])
///     }
/// }
///
/// let names = Client::declared_language_tagged_names();
/// assert_eq!(
///     names.iter().collect::<Vec<_>>(),
///     ["organization_name", "logo_uri", "client_name"]
/// );
/// ```
pub trait TaggableSchema {
    /// The member names this type serializes as language objects.
    fn declared_language_tagged_names() -> TaggedNames;
}

/// Untyped JSON objects declare nothing; this is the generic target.
impl TaggableSchema for Map<String, Value> {
    fn declared_language_tagged_names() -> TaggedNames {
        TaggedNames::new()
    }
}
