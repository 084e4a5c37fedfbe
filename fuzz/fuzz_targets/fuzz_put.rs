#![no_main]

use libfuzzer_sys::fuzz_target;
use pulsehive_docdb::{Config, Database, NewRevision};
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let split = (data[0] as usize) % data.len();
    let (id_bytes, body_bytes) = data[1..].split_at(split.min(data.len().saturating_sub(1)));
    let doc_id = String::from_utf8_lossy(id_bytes).to_string();
    if doc_id.is_empty() {
        return;
    }
    let body: Value = serde_json::from_slice(body_bytes).unwrap_or(Value::Null);

    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(dir.path().join("fuzz.db"), Config::default()).unwrap();

    // First put establishes the document; a second one with the same id
    // and no prev_rev exercises the conflict path.
    let _ = db.put(NewRevision {
        doc_id: doc_id.clone(),
        body: body.clone(),
        prev_rev: None,
        deleted: false,
        attachments: vec![],
        allow_conflict: false,
    });
    let _ = db.put(NewRevision {
        doc_id,
        body,
        prev_rev: None,
        deleted: false,
        attachments: vec![],
        allow_conflict: true,
    });
});
