use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UndefinedReason {
    LengthMismatch,
    EmptyRanking,
    /// All pairs tied in at least one ranking (zero denominator).
    Degenerate,
    /// The source has no row for this subject.
    MissingReference,
    /// The source has a row for this subject but it could not be read.
    MalformedReference,
}

impl UndefinedReason {
    pub fn as_str(self) -> &'static str {
        match self {
            UndefinedReason::LengthMismatch => "length_mismatch",
            UndefinedReason::EmptyRanking => "empty_ranking",
            UndefinedReason::Degenerate => "degenerate",
            UndefinedReason::MissingReference => "missing_reference",
            UndefinedReason::MalformedReference => "malformed_reference",
        }
    }
}

/// Rank correlation for one pair of rankings. `Undefined` is never folded
/// into 0.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tau {
    Defined(f64),
    Undefined(UndefinedReason),
}

impl Tau {
    pub fn value(self) -> Option<f64> {
        match self {
            Tau::Defined(v) => Some(v),
            Tau::Undefined(_) => None,
        }
    }

    pub fn reason(self) -> Option<UndefinedReason> {
        match self {
            Tau::Defined(_) => None,
            Tau::Undefined(r) => Some(r),
        }
    }
}

/// Serialises as the number, or `null` when undefined.
impl Serialize for Tau {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Tau::Defined(v) => serializer.serialize_f64(*v),
            Tau::Undefined(_) => serializer.serialize_none(),
        }
    }
}
