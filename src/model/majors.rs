use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub struct MajorGroup {
    pub key: &'static str,
    pub related: &'static [&'static str],
}

/// How the job's major is matched against group keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MajorGroupLookup {
    /// Group key and members compared case-insensitively.
    CaseInsensitive,
    /// Lower-cased job major looked up against the capitalised keys verbatim,
    /// so no group ever matches. Kept for parity with earlier reports.
    LegacyExact,
}

const COMPUTER_SCIENCE: &[&str] = &[
    "Computer Science",
    "Information Technology",
    "Cyber Security",
    "Data Engineering",
    "Data Science",
    "Artificial Intelligence",
    "Machine Learning",
    "Deep Learning",
    "Computer Engineering",
    "Software Engineering",
];
const STATISTICS: &[&str] = &[
    "Statistics",
    "Mathematics",
    "Data Science",
    "Data Analysis",
    "Business Analytics",
    "Business Intelligence",
    "Finance",
    "Economics",
    "Marketing",
    "Operations Research",
    "Supply Chain Management",
];
const DECISION_SCIENCE: &[&str] = &[
    "Decision Science",
    "Mathematics",
    "Statistics",
    "Data Science",
    "Data Analysis",
    "Business Analytics",
    "Business Intelligence",
    "Finance",
    "Economics",
    "Marketing",
    "Operations Research",
    "Supply Chain Management",
];
const MATHEMATICS: &[&str] = &["Data Science", "Physics", "Applied Mathematics", "Statistics"];
const ELECTRICAL_ENGINEERING: &[&str] = &[
    "Electrical Engineering",
    "Electronics",
    "Computer Engineering",
    "VLSI Engineering",
    "Communication Engineering",
    "Electronics and Communication Engineering",
    "Electronics and Computer Engineering",
    "Electronics and Electrical Engineering",
];

const RELATED_MAJORS: &[MajorGroup] = &[
    MajorGroup {
        key: "Computer Science",
        related: COMPUTER_SCIENCE,
    },
    MajorGroup {
        key: "Statistics",
        related: STATISTICS,
    },
    MajorGroup {
        key: "Decision Science",
        related: DECISION_SCIENCE,
    },
    MajorGroup {
        key: "Mathematics",
        related: MATHEMATICS,
    },
    MajorGroup {
        key: "Electrical Engineering",
        related: ELECTRICAL_ENGINEERING,
    },
];

/// Finds the group keyed by `job_major`. `job_major` is expected lower-cased.
pub fn find_group(job_major: &str, lookup: MajorGroupLookup) -> Option<&'static MajorGroup> {
    RELATED_MAJORS.iter().find(|g| match lookup {
        MajorGroupLookup::CaseInsensitive => g.key.eq_ignore_ascii_case(job_major),
        MajorGroupLookup::LegacyExact => g.key == job_major,
    })
}

pub fn is_related(candidate_major: &str, job_major: &str, lookup: MajorGroupLookup) -> bool {
    find_group(job_major, lookup)
        .map(|g| {
            g.related
                .iter()
                .any(|m| m.eq_ignore_ascii_case(candidate_major))
        })
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/majors.rs"]
mod tests;
