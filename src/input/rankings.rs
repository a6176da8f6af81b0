use std::collections::BTreeMap;

use serde_json::Value;

use crate::model::scores::RankVector;

/// Reference rankings keyed by source identifier; one row per subject, in
/// subject order. A row that could not be read is kept as `None` so later
/// rows stay aligned with their subjects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceRankingSet {
    pub sources: BTreeMap<String, Vec<Option<RankVector>>>,
}

impl ReferenceRankingSet {
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn source_ids(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }

    pub fn row(&self, source: &str, position: usize) -> Option<&Option<RankVector>> {
        self.sources.get(source).and_then(|rows| rows.get(position))
    }
}

pub fn parse_reference_rankings(doc: &Value, source_prefix: &str) -> ReferenceRankingSet {
    let mut set = ReferenceRankingSet::default();
    let Some(obj) = doc.as_object() else {
        tracing::warn!("reference rankings document is not a JSON object; no sources loaded");
        return set;
    };

    for (key, value) in obj {
        if !key.starts_with(source_prefix) {
            tracing::debug!(key = %key, "ignoring non-source key");
            continue;
        }
        let Some(rows) = value.as_array() else {
            tracing::warn!(source = %key, "reference source is not a list of rankings; skipped");
            continue;
        };
        let parsed = rows
            .iter()
            .enumerate()
            .map(|(row_idx, row)| {
                let rank = parse_rank_row(row);
                if rank.is_none() {
                    tracing::warn!(source = %key, row = row_idx, "malformed ranking row");
                }
                rank
            })
            .collect();
        set.sources.insert(key.clone(), parsed);
    }
    set
}

fn parse_rank_row(row: &Value) -> Option<RankVector> {
    row.as_array()?.iter().map(parse_rank).collect()
}

/// Non-negative integers, including integral floats such as `3.0`.
fn parse_rank(v: &Value) -> Option<u32> {
    if let Some(u) = v.as_u64() {
        return u32::try_from(u).ok();
    }
    let f = v.as_f64()?;
    if f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 {
        Some(f as u32)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/rankings.rs"]
mod tests;
