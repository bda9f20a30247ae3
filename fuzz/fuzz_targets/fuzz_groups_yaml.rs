#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

use store_matrix::infrastructure::config::parse_document;
use store_matrix::{build_matrix, GroupTable, StoreDescriptor, StoreRegistry};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Group table decoding and resolution should never panic
        if let Ok((groups, _)) = parse_document::<GroupTable>(content, Path::new("groups.yml")) {
            let registry: StoreRegistry = [("a", StoreDescriptor::with_kind("target"))]
                .into_iter()
                .collect();
            for name in groups.names() {
                let _ = build_matrix(&registry, &groups, name);
            }
        }
    }
});
