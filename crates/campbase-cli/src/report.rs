//! Plain-text rendering of summaries, issues and draft listings.

use std::collections::BTreeSet;
use std::fmt::Write;
use std::path::Path;

use campbase_core::drafts::{DraftEntry, StoredDraft};
use campbase_core::models::{BranchSegment, EventSummary, NormalizedParticipants};
use campbase_core::utils::{format_date, format_range, pluralize, truncate_string};
use campbase_core::SegmentIssue;

/// Maximum width of the notes column in segment tables
const NOTES_WIDTH: usize = 30;

fn participant_rows(p: &NormalizedParticipants) -> Vec<(&'static str, i64)> {
    vec![
        ("LC", p.lc),
        ("LC kambusieri", p.lc_kambusieri),
        ("EG", p.eg),
        ("EG kambusieri", p.eg_kambusieri),
        ("RS", p.rs),
        ("RS kambusieri", p.rs_kambusieri),
        ("Leaders", p.leaders),
        ("Detached leaders", p.detached_leaders),
        ("Guests", p.detached_guests),
    ]
}

pub fn render_summary(summary: &EventSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", summary.name);
    match (summary.start_date, summary.end_date, summary.duration_days()) {
        (Some(start), Some(end), Some(days)) => {
            let _ = writeln!(out, "{} ({})", format_range(start, end), pluralize(days, "day", "days"));
        }
        _ => {
            let _ = writeln!(out, "Dates: TBD");
        }
    }
    out.push('\n');

    let _ = writeln!(out, "Participants");
    for (label, value) in participant_rows(&summary.participants) {
        if value != 0 {
            let _ = writeln!(out, "  {:<18}{:>6}", label, value);
        }
    }
    let _ = writeln!(out, "  {:<18}{:>6}", "Total", summary.participants.total());
    out.push('\n');

    let _ = writeln!(
        out,
        "Peak on site: {}",
        pluralize(summary.peak_participants, "person", "people")
    );

    let accommodation = &summary.accommodation;
    if accommodation.needs_indoor {
        let _ = writeln!(out, "Indoor beds:  {}", accommodation.indoor_capacity);
    }
    if accommodation.needs_tents {
        let _ = writeln!(out, "Tent places:  {}", accommodation.tents_capacity);
    }
    if !accommodation.needs_indoor && !accommodation.needs_tents {
        let _ = writeln!(out, "No accommodation needed");
    }

    out
}

pub fn render_segments(segments: &[BranchSegment]) -> String {
    let mut out = String::new();
    for (index, segment) in segments.iter().enumerate() {
        let _ = write!(
            out,
            "{:>2}. {:<4} {} -> {}  {:>3}/{:>2}/{:>2}  {}",
            index,
            segment.branch,
            format_date(&segment.start_date),
            format_date(&segment.end_date),
            segment.youth_count,
            segment.leaders_count,
            segment.kambusieri_count,
            segment.accommodation,
        );
        if let Some(notes) = segment.notes.as_deref().filter(|n| !n.is_empty()) {
            let _ = write!(out, "  {}", truncate_string(notes, NOTES_WIDTH));
        }
        out.push('\n');
    }
    out
}

pub fn render_issues(issues: &[SegmentIssue]) -> String {
    if issues.is_empty() {
        return "No issues found\n".to_string();
    }
    let mut out = String::new();
    for issue in issues {
        let _ = writeln!(out, "- {}", issue);
    }
    let segments: BTreeSet<usize> = issues.iter().map(SegmentIssue::index).collect();
    let _ = writeln!(
        out,
        "{} in {}",
        pluralize(issues.len() as i64, "issue", "issues"),
        pluralize(segments.len() as i64, "segment", "segments")
    );
    out
}

pub fn render_draft_list(dir: &Path, entries: &[DraftEntry]) -> String {
    if entries.is_empty() {
        return format!("No saved drafts in {}\n", dir.display());
    }
    let mut out = String::new();
    let _ = writeln!(out, "Drafts in {}", dir.display());
    for entry in entries {
        let _ = writeln!(
            out,
            "{:<24} {:<30} {}",
            entry.slug,
            truncate_string(&entry.name, 30),
            entry.age_display()
        );
    }
    out
}

pub fn render_draft(stored: &StoredDraft) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (saved {})", stored.draft.name, stored.age_display());
    if let Some(notes) = stored.draft.notes.as_deref() {
        let _ = writeln!(out, "{}", notes);
    }
    out.push_str(&render_segments(&stored.draft.segments));
    out
}
