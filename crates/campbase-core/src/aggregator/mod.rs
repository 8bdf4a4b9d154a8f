//! Participant aggregation over branch segments.
//!
//! Every function here is pure: it takes the segments collected by the event
//! form and returns derived figures, never failing. Segments with bad dates
//! drop out of occupancy figures but still count toward totals; use
//! [`check_segments`] to surface those problems explicitly.

pub mod occupancy;
pub mod summary;
pub mod totals;
pub mod validate;

pub use occupancy::{compute_accommodation_requirements, compute_peak_participants, event_date_range};
pub use summary::summarize_event;
pub use totals::compute_participant_totals;
pub use validate::check_segments;
