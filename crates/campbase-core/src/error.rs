use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown accommodation mode: {0:?} (expected \"indoor\" or \"tents\")")]
pub struct ParseAccommodationError(pub String);

/// Which headcount field of a segment an issue refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountField {
    Youth,
    Leaders,
    Kambusieri,
}

impl std::fmt::Display for CountField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CountField::Youth => write!(f, "youth"),
            CountField::Leaders => write!(f, "leaders"),
            CountField::Kambusieri => write!(f, "kambusieri"),
        }
    }
}

/// A problem found in one segment by [`check_segments`].
///
/// These never stop aggregation; they let a caller decide whether the form
/// is ready to submit.
///
/// [`check_segments`]: crate::aggregator::check_segments
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegmentIssue {
    #[error("segment {index}: start date {value:?} is not a valid date")]
    InvalidStartDate { index: usize, value: String },

    #[error("segment {index}: end date {value:?} is not a valid date")]
    InvalidEndDate { index: usize, value: String },

    #[error("segment {index}: ends ({end}) before it starts ({start})")]
    EndBeforeStart { index: usize, start: String, end: String },

    #[error("segment {index}: {field} count is negative ({value})")]
    NegativeCount { index: usize, field: CountField, value: i64 },

    #[error("segment {index}: nobody is present")]
    EmptySegment { index: usize },

    #[error("segment {index}: unknown branch {tag:?}, youth and kambusieri are left out of branch totals")]
    UnknownBranch { index: usize, tag: String },
}

impl SegmentIssue {
    pub fn index(&self) -> usize {
        match self {
            SegmentIssue::InvalidStartDate { index, .. }
            | SegmentIssue::InvalidEndDate { index, .. }
            | SegmentIssue::EndBeforeStart { index, .. }
            | SegmentIssue::NegativeCount { index, .. }
            | SegmentIssue::EmptySegment { index }
            | SegmentIssue::UnknownBranch { index, .. } => *index,
        }
    }
}

#[derive(Error, Debug)]
pub enum DraftError {
    #[error("Draft name {0:?} has no usable characters")]
    EmptyName(String),

    #[error("Failed to access draft directory {}: {source}", .path.display())]
    Dir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to access draft {slug} at {}: {source}", .path.display())]
    Io {
        slug: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON for draft {slug}: {source}")]
    Json {
        slug: String,
        #[source]
        source: serde_json::Error,
    },
}
