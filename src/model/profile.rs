use crate::model::majors::MajorGroupLookup;

/// Constants driving tie resolution in the score adjuster.
#[derive(Debug, Clone)]
pub struct AdjustmentProfile {
    /// Multiplier applied to the combined similarity (range [0, 2]).
    pub similarity_weight: f64,
    /// Per-position bonus separating members of a tie group, and the margin
    /// kept below the next score tier.
    pub tier_step: f64,
    pub major_lookup: MajorGroupLookup,
}

impl AdjustmentProfile {
    pub fn default_v1() -> Self {
        Self {
            similarity_weight: 0.01,
            tier_step: 0.01,
            major_lookup: MajorGroupLookup::CaseInsensitive,
        }
    }

    pub fn with_major_lookup(mut self, lookup: MajorGroupLookup) -> Self {
        self.major_lookup = lookup;
        self
    }
}

impl Default for AdjustmentProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}
