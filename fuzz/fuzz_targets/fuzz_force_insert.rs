#![no_main]

use libfuzzer_sys::fuzz_target;
use pulsehive_docdb::{Config, Database, RevId};
use serde_json::Value;

/// Builds a plausible (but fuzz-data-derived) revision path: `depth` revisions
/// ordered newest-first, generations counting down from `depth`.
fn rev_path(data: &[u8], depth: usize) -> Vec<RevId> {
    let mut out = Vec::with_capacity(depth);
    for i in 0..depth {
        let chunk = &data[(i * 4).min(data.len())..((i + 1) * 4).min(data.len())];
        let suffix: String = chunk.iter().map(|b| format!("{:x}", b % 16)).collect();
        let suffix = if suffix.is_empty() { "a".to_string() } else { suffix };
        let generation = depth - i;
        if let Ok(rev) = RevId::parse(&format!("{generation}-{suffix}")) {
            out.push(rev);
        }
    }
    out
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let depth = 1 + (data[0] as usize % 5);
    let path = rev_path(&data[1..], depth);
    if path.is_empty() {
        return;
    }

    let body: Value = serde_json::from_slice(data).unwrap_or(Value::Null);

    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(dir.path().join("fuzz.db"), Config::default()).unwrap();
    let _ = db.force_insert("doc1", path, data.first().map(|b| b % 2 == 0).unwrap_or(false), body, vec![]);
});
