use serde::Serialize;

/// Canonical shape for a profile attribute that upstream extraction may emit
/// as null, a bare string, or a list. Blank entries are dropped on
/// construction; the first remaining entry is authoritative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Attr(Vec<String>);

impl Attr {
    pub fn absent() -> Self {
        Attr(Vec::new())
    }

    pub fn single(value: impl Into<String>) -> Self {
        Self::from_list([value.into()])
    }

    pub fn from_list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Attr(
            values
                .into_iter()
                .map(Into::into)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn is_absent(&self) -> bool {
        self.0.is_empty()
    }

    /// `self` if present, otherwise `fallback`.
    pub fn or(self, fallback: Attr) -> Attr {
        if self.is_absent() { fallback } else { self }
    }
}

/// Candidate value against requirement value on one similarity axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AxisPair {
    pub candidate: Attr,
    pub required: Attr,
}

impl AxisPair {
    pub fn new(candidate: Attr, required: Attr) -> Self {
        Self {
            candidate,
            required,
        }
    }
}

/// Education attributes for one (subject, reference item) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EducationProfile {
    pub level: AxisPair,
    pub major: AxisPair,
}
