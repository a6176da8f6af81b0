use std::cmp::Ordering;

use crate::model::tau::{Tau, UndefinedReason};

/// Pair counts behind a tau-b value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairCounts {
    pub concordant: u64,
    pub discordant: u64,
    pub ties_a: u64,
    pub ties_b: u64,
    pub total: u64,
}

pub fn count_pairs(a: &[u32], b: &[u32]) -> PairCounts {
    let n = a.len().min(b.len());
    let mut counts = PairCounts {
        total: (n as u64 * n.saturating_sub(1) as u64) / 2,
        ..PairCounts::default()
    };

    for i in 0..n {
        for j in (i + 1)..n {
            let da = a[i].cmp(&a[j]);
            let db = b[i].cmp(&b[j]);
            match (da, db) {
                (Ordering::Equal, Ordering::Equal) => {
                    counts.ties_a += 1;
                    counts.ties_b += 1;
                }
                (Ordering::Equal, _) => counts.ties_a += 1,
                (_, Ordering::Equal) => counts.ties_b += 1,
                (x, y) if x == y => counts.concordant += 1,
                _ => counts.discordant += 1,
            }
        }
    }
    counts
}

/// Kendall's tau-b between two rank vectors.
///
/// Undefined on length mismatch, empty input, or a zero denominator (every
/// pair tied in one of the rankings, which includes length 1).
pub fn kendall_tau_b(a: &[u32], b: &[u32]) -> Tau {
    if a.len() != b.len() {
        return Tau::Undefined(UndefinedReason::LengthMismatch);
    }
    if a.is_empty() {
        return Tau::Undefined(UndefinedReason::EmptyRanking);
    }

    let c = count_pairs(a, b);
    let total = c.total as f64;
    let denom = ((total - c.ties_a as f64) * (total - c.ties_b as f64)).sqrt();
    if denom == 0.0 {
        return Tau::Undefined(UndefinedReason::Degenerate);
    }
    let tau = (c.concordant as f64 - c.discordant as f64) / denom;
    Tau::Defined(tau.clamp(-1.0, 1.0))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_align.rs"]
mod tests;
