use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

pub mod attr;
pub mod records;
pub mod rankings;

use records::{SubjectData, parse_subject, subject_items};
use rankings::{ReferenceRankingSet, parse_reference_rankings};

/// Failure to read an input file. Logged by the loaders, never fatal.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Why one subject could not be evaluated. Never aborts the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubjectError {
    #[error("malformed line: {0}")]
    MalformedLine(String),
    #[error("no record for subject")]
    MissingRecord,
    #[error("item {item} has no numeric overall_score")]
    MissingScore { item: usize },
    #[error("item {item} has a non-finite overall_score")]
    NonFiniteScore { item: usize },
    #[error("subject has no scored items")]
    EmptySubject,
    #[error("{profiles} education profiles for {scores} scores")]
    ProfileMismatch { scores: usize, profiles: usize },
    #[error("internal error: {0}")]
    Internal(String),
}

/// A subject as read from the scored-results file, positional id attached.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectInput {
    pub id: String,
    pub position: usize,
    pub data: Result<SubjectData, SubjectError>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoredInput {
    pub subjects: Vec<SubjectInput>,
}

impl ScoredInput {
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

pub fn subject_id(prefix: &str, position: usize) -> String {
    format!("{}_{}", prefix, position + 1)
}

/// Reads the JSONL scored results. A missing or unreadable file yields an
/// empty input.
pub fn load_scored_results(path: &Path, subject_prefix: &str) -> ScoredInput {
    let content = match read_optional(path) {
        Ok(Some(content)) => content,
        Ok(None) => {
            tracing::warn!(path = %path.display(), "scored results file does not exist; no subjects loaded");
            return ScoredInput::default();
        }
        Err(err) => {
            tracing::error!(error = %err, "scored results unreadable; no subjects loaded");
            return ScoredInput::default();
        }
    };
    let input = parse_scored_results(&content, subject_prefix);
    tracing::info!(
        path = %path.display(),
        subjects = input.subjects.len(),
        "loaded scored results"
    );
    input
}

/// Each line is decoded on its own, so a line that is not valid UTF-8 only
/// costs its own subject. Blank lines are skipped and do not consume a
/// subject position.
pub fn parse_scored_results(content: impl AsRef<[u8]>, subject_prefix: &str) -> ScoredInput {
    let mut subjects = Vec::new();
    let lines = content
        .as_ref()
        .split(|&b| b == b'\n')
        .filter(|l| !l.trim_ascii().is_empty());
    for raw in lines {
        let position = subjects.len();
        let id = subject_id(subject_prefix, position);
        let data = match std::str::from_utf8(raw) {
            Ok(line) => parse_subject_line(line, &id),
            Err(e) => Err(SubjectError::MalformedLine(e.to_string())),
        };
        if let Err(err) = &data {
            tracing::warn!(subject = %id, error = %err, "subject could not be read");
        }
        subjects.push(SubjectInput { id, position, data });
    }
    ScoredInput { subjects }
}

fn parse_subject_line(line: &str, id: &str) -> Result<SubjectData, SubjectError> {
    let value = serde_json::from_str::<Value>(line)
        .map_err(|e| SubjectError::MalformedLine(e.to_string()))?;
    subject_items(&value, id).and_then(parse_subject)
}

/// Reads the reference rankings JSON. A missing, unreadable or unparsable
/// file yields an empty set.
pub fn load_reference_rankings(path: &Path, source_prefix: &str) -> ReferenceRankingSet {
    let doc = match read_rankings_document(path) {
        Ok(Some(doc)) => doc,
        Ok(None) => {
            tracing::warn!(path = %path.display(), "reference rankings file does not exist; no sources loaded");
            return ReferenceRankingSet::default();
        }
        Err(err) => {
            tracing::error!(error = %err, "reference rankings unusable; no sources loaded");
            return ReferenceRankingSet::default();
        }
    };
    let set = parse_reference_rankings(&doc, source_prefix);
    tracing::info!(
        path = %path.display(),
        sources = set.sources.len(),
        "loaded reference rankings"
    );
    set
}

fn read_rankings_document(path: &Path) -> Result<Option<Value>, InputError> {
    let Some(bytes) = read_optional(path)? else {
        return Ok(None);
    };
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|source| InputError::Json {
            path: path.to_path_buf(),
            source,
        })
}

fn read_optional(path: &Path) -> Result<Option<Vec<u8>>, InputError> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(InputError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
