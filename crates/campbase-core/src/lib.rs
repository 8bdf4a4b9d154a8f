//! Core library for campbase event planning.
//!
//! Takes the per-branch participation segments entered while creating an
//! event and derives the figures the event page shows and submits:
//!
//! - participant totals per branch bucket ([`aggregator::compute_participant_totals`])
//! - peak simultaneous occupancy ([`aggregator::compute_peak_participants`])
//! - capacity needed per lodging mode ([`aggregator::compute_accommodation_requirements`])
//!
//! Around that sit segment checks, local draft storage and user config.

pub mod aggregator;
pub mod config;
pub mod drafts;
pub mod error;
pub mod models;
pub mod utils;

pub use aggregator::{
    check_segments, compute_accommodation_requirements, compute_participant_totals,
    compute_peak_participants, event_date_range, summarize_event,
};
pub use config::Config;
pub use drafts::DraftStore;
pub use error::{DraftError, SegmentIssue};
pub use models::{
    Accommodation, AccommodationSummary, Branch, BranchSegment, EventDraft, EventSummary,
    NormalizedParticipants,
};
