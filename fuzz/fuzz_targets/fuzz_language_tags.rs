//! Fuzz target for language tag flattening and consolidation.
//!
//! Builds a flat object from arbitrary member names and declared names,
//! then checks that consolidating and flattening again returns exactly the
//! non-null members.
//!
//! Run with:
//! cargo +nightly fuzz run fuzz_language_tags -- -max_total_time=600

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use oidfed_md::{consolidate_language_tags, flatten_language_tags, TaggedNames};
use serde_json::{Map, Value};

/// Arbitrary input for the flattening engine
#[derive(Arbitrary, Debug)]
struct FlatInput {
    members: Vec<(String, Option<String>)>,
    declared: Vec<String>,
}

fuzz_target!(|input: FlatInput| {
    if input.members.len() > 64 || input.declared.len() > 16 {
        return;
    }
    if input.members.iter().any(|(name, _)| name.len() > 200) {
        return;
    }

    let flat: Map<String, Value> = input
        .members
        .into_iter()
        .map(|(name, value)| (name, value.map_or(Value::Null, Value::String)))
        .collect();
    let names = TaggedNames::from_iter(input.declared);

    let nested = consolidate_language_tags(flat.clone(), &names);
    let restored = flatten_language_tags(nested, &names);

    // Every non-null member survives under its own name, and nothing else appears
    let expected: Map<String, Value> = flat
        .into_iter()
        .filter(|(_, value)| !value.is_null())
        .collect();
    for (name, value) in &expected {
        assert_eq!(restored.get(name), Some(value), "member {name} lost");
    }
    assert_eq!(restored.len(), expected.len());
});
