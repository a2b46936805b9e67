use std::collections::HashSet;

use crate::types::FlatRecord;

/// Decimal places kept when comparing coordinates; absorbs node/way-center jitter.
pub const KEY_PRECISION: usize = 5;

/// Identity of a physical facility: rounded coordinates plus the raw name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey {
    lat: String,
    lon: String,
    name: String,
}

impl DedupKey {
    pub fn of(record: &FlatRecord) -> Self {
        Self {
            lat: round_coord(record.lat),
            lon: round_coord(record.lon),
            name: record.name.clone(),
        }
    }
}

fn round_coord(value: f64) -> String {
    let rounded = format!("{:.*}", KEY_PRECISION, value);
    // -0.00000 and 0.00000 are the same place
    if rounded.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        rounded.trim_start_matches('-').to_string()
    } else {
        rounded
    }
}

/// Keep the first record for each key, preserving input order.
pub fn dedupe(records: Vec<FlatRecord>) -> Vec<FlatRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(DedupKey::of(r)))
        .collect()
}
