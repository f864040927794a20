//! Conversion between nested language objects and the flat `name#tag` wire form.
//!
//! Both directions are driven by an explicit [`TaggedNames`] set. Nothing is
//! inferred from the shape of the data: a `client_name#sv` member is only
//! grouped under `client_name` when `client_name` is declared.

use crate::lang::{TaggedNames, DEFAULT_VALUE_MEMBER, LANGUAGE_TAG_SEPARATOR, LANGUAGE_VALUES_MEMBER};
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Check whether a value has the wire shape of a language object.
///
/// That is an object with no members other than `def` and `lang_values`,
/// where `lang_values`, when present and non-null, is itself an object.
#[must_use]
pub fn is_language_object(value: &Value) -> bool {
    let Some(object) = value.as_object() else {
        return false;
    };
    object.iter().all(|(member, inner)| match member.as_str() {
        DEFAULT_VALUE_MEMBER => true,
        LANGUAGE_VALUES_MEMBER => inner.is_object() || inner.is_null(),
        _ => false,
    })
}

/// Flatten language objects under declared names into `name` / `name#tag` members.
///
/// Members that are not declared are copied unchanged. Null members are
/// omitted. A declared member whose value is not shaped like a language
/// object is copied unchanged too; declaration governs interpretation only.
/// An empty language object contributes nothing.
///
/// # Example
///
/// ```rust
/// use oidfed_md::{flatten_language_tags, TaggedNames};
/// use serde_json::json;
///
/// let nested = json!({
///     "client_name": {"def": "Client", "lang_values": {"sv": "Klient"}},
///     "client_id": "abc"
/// });
/// let names = TaggedNames::from_iter(["client_name"]);
/// let flat = flatten_language_tags(nested.as_object().unwrap().clone(), &names);
///
/// assert_eq!(
///     serde_json::Value::Object(flat),
///     json!({"client_name": "Client", "client_name#sv": "Klient", "client_id": "abc"})
/// );
/// ```
#[must_use]
pub fn flatten_language_tags(object: Map<String, Value>, names: &TaggedNames) -> Map<String, Value> {
    let mut flat = Map::with_capacity(object.len());

    for (name, value) in object {
        if value.is_null() {
            continue;
        }
        if !(names.contains(&name) && is_language_object(&value)) {
            flat.insert(name, value);
            continue;
        }
        let Value::Object(mut language_object) = value else {
            continue;
        };

        if let Some(default_value) = language_object.remove(DEFAULT_VALUE_MEMBER) {
            if !default_value.is_null() {
                flat.insert(name.clone(), default_value);
            }
        }
        if let Some(Value::Object(per_language)) = language_object.remove(LANGUAGE_VALUES_MEMBER) {
            for (tag, tagged_value) in per_language {
                if tag.is_empty() {
                    tracing::debug!(member = %name, "Skipping language value with empty tag");
                    continue;
                }
                if tagged_value.is_null() {
                    continue;
                }
                flat.insert(format!("{name}{LANGUAGE_TAG_SEPARATOR}{tag}"), tagged_value);
            }
        }
    }

    flat
}

/// Candidates collected for one declared name during consolidation.
#[derive(Default)]
struct LanguageGroup {
    default_value: Option<Value>,
    per_language: Map<String, Value>,
}

impl LanguageGroup {
    fn into_value(self) -> Value {
        let mut object = Map::new();
        if let Some(default_value) = self.default_value {
            object.insert(DEFAULT_VALUE_MEMBER.to_string(), default_value);
        }
        if !self.per_language.is_empty() {
            object.insert(
                LANGUAGE_VALUES_MEMBER.to_string(),
                Value::Object(self.per_language),
            );
        }
        Value::Object(object)
    }
}

/// Output position of a consolidated member.
enum Slot {
    Passthrough(String, Value),
    Group(String),
}

/// Group flat `name` / `name#tag` members back into language objects.
///
/// Every declared name with at least one candidate member becomes a language
/// object holding `def` and/or `lang_values`. Declared names without
/// candidates are absent from the output. All other members, including
/// `name#` keys with an empty tag, are copied unchanged.
///
/// Grouped members take the position of their first candidate, so output
/// order follows input order.
///
/// # Example
///
/// ```rust
/// use oidfed_md::{consolidate_language_tags, TaggedNames};
/// use serde_json::json;
///
/// let flat = json!({"client_name": "Client", "client_name#sv": "Klient"});
/// let names = TaggedNames::from_iter(["client_name"]);
/// let nested = consolidate_language_tags(flat.as_object().unwrap().clone(), &names);
///
/// assert_eq!(
///     serde_json::Value::Object(nested),
///     json!({"client_name": {"def": "Client", "lang_values": {"sv": "Klient"}}})
/// );
/// ```
#[must_use]
pub fn consolidate_language_tags(flat: Map<String, Value>, names: &TaggedNames) -> Map<String, Value> {
    let mut groups: IndexMap<String, LanguageGroup> = IndexMap::new();
    let mut slots: Vec<Slot> = Vec::with_capacity(flat.len());

    for (key, value) in flat {
        let (name, tag) = if names.contains(&key) {
            (key.clone(), None)
        } else if let Some((name, tag)) = names.split_tagged_key(&key) {
            (name.to_string(), Some(tag.to_string()))
        } else {
            if key.ends_with(LANGUAGE_TAG_SEPARATOR)
                && names.contains(&key[..key.len() - LANGUAGE_TAG_SEPARATOR.len_utf8()])
            {
                tracing::debug!(member = %key, "Empty language tag, keeping member as is");
            }
            slots.push(Slot::Passthrough(key, value));
            continue;
        };

        if value.is_null() {
            tracing::debug!(member = %key, "Dropping null language-tagged member");
            continue;
        }

        if !groups.contains_key(&name) {
            slots.push(Slot::Group(name.clone()));
        }
        let group = groups.entry(name).or_default();
        match tag {
            Some(tag) => {
                group.per_language.insert(tag, value);
            }
            None => group.default_value = Some(value),
        }
    }

    let mut nested = Map::with_capacity(slots.len());
    for slot in slots {
        match slot {
            Slot::Passthrough(key, value) => {
                nested.insert(key, value);
            }
            Slot::Group(name) => {
                if let Some(group) = groups.swap_remove(&name) {
                    nested.insert(name, group.into_value());
                }
            }
        }
    }
    nested
}
