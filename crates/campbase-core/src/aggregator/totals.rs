use crate::models::{Branch, BranchSegment, NormalizedParticipants};

/// Sum youth and kambusieri per branch, and leaders across all branches.
///
/// Segments whose branch is not LC, EG or RS still contribute their leaders
/// but nothing else. Detached fields stay at zero.
pub fn compute_participant_totals(segments: &[BranchSegment]) -> NormalizedParticipants {
    let mut totals = NormalizedParticipants::default();

    for segment in segments {
        let buckets = match segment.branch {
            Branch::Lc => Some((&mut totals.lc, &mut totals.lc_kambusieri)),
            Branch::Eg => Some((&mut totals.eg, &mut totals.eg_kambusieri)),
            Branch::Rs => Some((&mut totals.rs, &mut totals.rs_kambusieri)),
            Branch::All | Branch::Other(_) => None,
        };
        if let Some((youth, kambusieri)) = buckets {
            *youth = youth.saturating_add(segment.youth_count);
            *kambusieri = kambusieri.saturating_add(segment.kambusieri_count);
        }

        totals.leaders = totals.leaders.saturating_add(segment.leaders_count);
    }

    totals
}
