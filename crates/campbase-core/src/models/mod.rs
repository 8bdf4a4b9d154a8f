//! Data models for event planning.
//!
//! - `BranchSegment`, `Branch`, `Accommodation`: per-cohort participation
//!   blocks as entered in the event form
//! - `NormalizedParticipants`, `AccommodationSummary`: aggregator output
//! - `EventDraft`, `EventSummary`: saved form state and its derived figures

pub mod draft;
pub mod participants;
pub mod segment;

pub use draft::{EventDraft, EventSummary};
pub use participants::{AccommodationSummary, NormalizedParticipants};
pub use segment::{parse_segment_date, Accommodation, Branch, BranchSegment};
