//! Reusable configuration documents.

/// Registry with one non-target store and two target stores.
pub const STORES_YML: &str = r#"stores:
  global:
    type: global
    domain: global.example.com
  eu-store:
    type: target
    domain: eu.example.com
    locale: de-DE
  us-store:
    type: target
    domain: us.example.com
    locale: en-US
"#;

pub const GROUPS_YML: &str = r#"groups:
  target-stores:
    - eu-store
    - us-store
  g1: [eu-store, global, us-store, ghost]
  globals-only: [global, ghost]
  empty: []
  retired:
  dupes: [us-store, eu-store, us-store]
"#;

pub const EU_ENTRY: &str =
    r#"{"name":"eu-store","config":{"type":"target","domain":"eu.example.com","locale":"de-DE"}}"#;
pub const US_ENTRY: &str =
    r#"{"name":"us-store","config":{"type":"target","domain":"us.example.com","locale":"en-US"}}"#;
