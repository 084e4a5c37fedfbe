#![no_main]

use std::sync::Arc;

use libfuzzer_sys::fuzz_target;
use pulsehive_docdb::{Config, Database, NewRevision, StaleMode};
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let body: Value = serde_json::from_slice(data).unwrap_or(Value::Null);

    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(dir.path().join("fuzz.db"), Config::default()).unwrap();
    db.register_view(
        "by_field",
        Arc::new(|_doc_id, body| vec![(body["key"].clone(), body.clone())]),
    );

    let _ = db.put(NewRevision {
        doc_id: "doc1".into(),
        body,
        prev_rev: None,
        deleted: false,
        attachments: vec![],
        allow_conflict: false,
    });

    let _ = db.query("by_field", None, None, StaleMode::Never);
});
