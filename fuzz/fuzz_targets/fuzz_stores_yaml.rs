#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

use store_matrix::infrastructure::config::parse_document;
use store_matrix::StoreRegistry;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Store registry decoding should never panic
        let _ = parse_document::<StoreRegistry>(content, Path::new("stores.yml"));
    }
});
