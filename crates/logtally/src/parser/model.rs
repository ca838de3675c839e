//! Model — record types and extractor errors.

use thiserror::Error;

/// A structured record extracted from one access-log line.
///
/// Produced by [`super::extract::FieldExtractor`]; immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Date substring, e.g. `10/Oct/2016`. Compared and sorted as an opaque
    /// string, never parsed into a calendar date.
    pub date: String,
    /// HTTP method, e.g. `GET`.
    pub method: String,
    /// Raw user-agent string.
    pub agent: String,
}

impl Record {
    pub fn new(date: impl Into<String>, method: impl Into<String>, agent: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            method: method.into(),
            agent: agent.into(),
        }
    }

    /// Enrich this record with the classifier's OS label.
    pub fn with_os(self, os: String) -> ClassifiedRecord {
        ClassifiedRecord {
            date: self.date,
            method: self.method,
            agent: self.agent,
            os,
        }
    }
}

/// A [`Record`] enriched with a best-effort OS classification.
///
/// `os` is always present once classification has run: possibly empty, or the
/// literal `misc` for bot traffic and unclassifiable agents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedRecord {
    pub date: String,
    pub method: String,
    pub agent: String,
    pub os: String,
}

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid extraction pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("extraction pattern declares {0} capture groups, expected {1}")]
    GroupCount(usize, usize),
}
