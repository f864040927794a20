//! Fuzz target for typed metadata parsing.
//!
//! Feeds arbitrary bytes to the client metadata parser and the extended
//! metadata split. Errors are expected; panics are not.
//!
//! Run with:
//! cargo +nightly fuzz run fuzz_metadata_parse -- -max_total_time=600

#![no_main]

use libfuzzer_sys::fuzz_target;
use oidfed_md::{ExtendedMetadata, MetadataSchema};
use oidfed_md_entities::ClientMetadata;
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(client) = ClientMetadata::from_json(text) {
        // Anything parsed must serialize and parse back to the same value
        let json = client.to_json(false).expect("parsed metadata serializes");
        let reparsed = ClientMetadata::from_json(&json).expect("serialized metadata parses");
        assert_eq!(reparsed, client);
    }

    if let Ok(Value::Object(payload)) = serde_json::from_str::<Value>(text) {
        let _ = ExtendedMetadata::parse(payload, &ClientMetadata::json_serializer());
    }
});
