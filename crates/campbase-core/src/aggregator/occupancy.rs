use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::models::{Accommodation, AccommodationSummary, BranchSegment};

/// A headcount change on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Delta {
    day: NaiveDate,
    change: i64,
}

/// Turn segments into +headcount at the start day and -headcount the day
/// after the (inclusive) end day. Segments with nobody present or with a
/// date that does not parse are left out.
fn occupancy_deltas<'a, I>(segments: I) -> Vec<Delta>
where
    I: IntoIterator<Item = (usize, &'a BranchSegment)>,
{
    let mut deltas = Vec::new();

    for (index, segment) in segments {
        let headcount = segment.headcount();
        if headcount <= 0 {
            debug!(segment = index, headcount, "Skipping segment with no one present");
            continue;
        }

        let (Some(start), Some(end)) = (segment.start(), segment.end()) else {
            debug!(
                segment = index,
                start_date = %segment.start_date,
                end_date = %segment.end_date,
                "Skipping segment with unparseable dates"
            );
            continue;
        };

        let Some(leave) = end.checked_add_days(Days::new(1)) else {
            debug!(segment = index, end = %end, "Skipping segment ending at the last representable date");
            continue;
        };

        deltas.push(Delta { day: start, change: headcount });
        deltas.push(Delta { day: leave, change: -headcount });
    }

    deltas
}

/// Sweep sorted deltas and return the highest running total.
///
/// On the same day departures are applied before arrivals, so a segment
/// ending on the 4th and one starting on the 5th never overlap.
fn peak_of(mut deltas: Vec<Delta>) -> i64 {
    deltas.sort_by_key(|d| (d.day, d.change));

    let mut running = 0i64;
    let mut peak = 0i64;
    for delta in deltas {
        running = running.saturating_add(delta.change);
        peak = peak.max(running);
    }
    peak
}

/// Highest number of people on site at the same time.
pub fn compute_peak_participants(segments: &[BranchSegment]) -> i64 {
    peak_of(occupancy_deltas(segments.iter().enumerate()))
}

/// Peak occupancy computed separately for indoor and tent segments.
///
/// `needs_*` only reflects whether any segment picked that mode, even if
/// every such segment is empty.
pub fn compute_accommodation_requirements(segments: &[BranchSegment]) -> AccommodationSummary {
    let by_mode = |mode: Accommodation| {
        segments
            .iter()
            .enumerate()
            .filter(move |(_, s)| s.accommodation == mode)
    };

    AccommodationSummary {
        needs_indoor: by_mode(Accommodation::Indoor).next().is_some(),
        needs_tents: by_mode(Accommodation::Tents).next().is_some(),
        indoor_capacity: peak_of(occupancy_deltas(by_mode(Accommodation::Indoor))),
        tents_capacity: peak_of(occupancy_deltas(by_mode(Accommodation::Tents))),
    }
}

/// Earliest start and latest end among segments whose dates both parse.
pub fn event_date_range(segments: &[BranchSegment]) -> Option<(NaiveDate, NaiveDate)> {
    segments
        .iter()
        .filter_map(|s| Some((s.start()?, s.end()?)))
        .fold(None, |range, (start, end)| match range {
            None => Some((start, end)),
            Some((lo, hi)) => Some((lo.min(start), hi.max(end))),
        })
}

// ============================================================================
// Tests
// ============================================================================
