use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::participants::{AccommodationSummary, NormalizedParticipants};
use super::segment::{deserialize_count, BranchSegment};

/// In-progress event form state: a name, the segments entered so far, and
/// the people not attached to any segment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub name: String,
    #[serde(default)]
    pub segments: Vec<BranchSegment>,
    #[serde(default, deserialize_with = "deserialize_count")]
    #[cfg_attr(feature = "ts", ts(type = "number"))]
    pub detached_leaders: i64,
    #[serde(default, deserialize_with = "deserialize_count")]
    #[cfg_attr(feature = "ts", ts(type = "number"))]
    pub detached_guests: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl EventDraft {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_segments(mut self, segments: Vec<BranchSegment>) -> Self {
        self.segments = segments;
        self
    }
}

/// Everything the event page shows once segments are filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub name: String,
    pub participants: NormalizedParticipants,
    #[cfg_attr(feature = "ts", ts(type = "number"))]
    pub peak_participants: i64,
    pub accommodation: AccommodationSummary,
    #[cfg_attr(feature = "ts", ts(type = "string | null"))]
    pub start_date: Option<NaiveDate>,
    #[cfg_attr(feature = "ts", ts(type = "string | null"))]
    pub end_date: Option<NaiveDate>,
}

impl EventSummary {
    /// Inclusive number of calendar days the event spans.
    pub fn duration_days(&self) -> Option<i64> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some((end - start).num_days() + 1),
            _ => None,
        }
    }
}
