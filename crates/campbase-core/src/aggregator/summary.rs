use tracing::debug;

use super::occupancy::{compute_accommodation_requirements, compute_peak_participants, event_date_range};
use super::totals::compute_participant_totals;
use crate::models::{EventDraft, EventSummary};

/// Run every aggregation over a draft and fold in its detached people.
pub fn summarize_event(draft: &EventDraft) -> EventSummary {
    let mut participants = compute_participant_totals(&draft.segments);
    participants.detached_leaders = draft.detached_leaders;
    participants.detached_guests = draft.detached_guests;

    let peak_participants = compute_peak_participants(&draft.segments);
    let accommodation = compute_accommodation_requirements(&draft.segments);
    let range = event_date_range(&draft.segments);

    debug!(
        event = %draft.name,
        segments = draft.segments.len(),
        total = participants.total(),
        peak = peak_participants,
        "Summarized event"
    );

    EventSummary {
        name: draft.name.clone(),
        participants,
        peak_participants,
        accommodation,
        start_date: range.map(|(start, _)| start),
        end_date: range.map(|(_, end)| end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Accommodation, Branch, BranchSegment};
    use chrono::NaiveDate;

    #[test]
    fn test_summarize_summer_camp() {
        let mut draft = EventDraft::new("Campo estivo").with_segments(vec![
            BranchSegment::new(Branch::Eg, "2025-07-01", "2025-07-10", Accommodation::Tents).with_counts(28, 4, 0),
            BranchSegment::new(Branch::Lc, "2025-07-05", "2025-07-10", Accommodation::Indoor).with_counts(24, 2, 0),
        ]);
        draft.detached_leaders = 1;
        draft.detached_guests = 2;

        let summary = summarize_event(&draft);
        assert_eq!(summary.name, "Campo estivo");
        assert_eq!(summary.participants.eg, 28);
        assert_eq!(summary.participants.lc, 24);
        assert_eq!(summary.participants.leaders, 6);
        assert_eq!(summary.participants.detached_leaders, 1);
        assert_eq!(summary.participants.detached_guests, 2);
        assert_eq!(summary.participants.total(), 61);
        assert_eq!(summary.peak_participants, 58);
        assert_eq!(summary.accommodation.indoor_capacity, 26);
        assert_eq!(summary.accommodation.tents_capacity, 32);
        assert_eq!(summary.start_date, NaiveDate::from_ymd_opt(2025, 7, 1));
        assert_eq!(summary.end_date, NaiveDate::from_ymd_opt(2025, 7, 10));
        assert_eq!(summary.duration_days(), Some(10));
    }

    #[test]
    fn test_summarize_empty_draft() {
        let summary = summarize_event(&EventDraft::new("Vuoto"));
        assert_eq!(summary.participants.total(), 0);
        assert_eq!(summary.peak_participants, 0);
        assert!(!summary.accommodation.needs_indoor);
        assert!(!summary.accommodation.needs_tents);
        assert_eq!(summary.start_date, None);
        assert_eq!(summary.duration_days(), None);
    }
}
