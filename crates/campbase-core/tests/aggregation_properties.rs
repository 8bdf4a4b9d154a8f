use campbase_core::{
    compute_accommodation_requirements, compute_participant_totals, compute_peak_participants,
    Accommodation, Branch, BranchSegment,
};
use chrono::{Days, NaiveDate};
use proptest::prelude::*;

fn base_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("base day")
}

fn day(offset: u64) -> String {
    (base_day() + Days::new(offset)).format("%Y-%m-%d").to_string()
}

fn branch_strategy() -> impl Strategy<Value = Branch> {
    prop_oneof![
        Just(Branch::Lc),
        Just(Branch::Eg),
        Just(Branch::Rs),
        Just(Branch::All),
        "[A-Z]{4}".prop_map(Branch::Other),
    ]
}

fn accommodation_strategy() -> impl Strategy<Value = Accommodation> {
    prop_oneof![Just(Accommodation::Indoor), Just(Accommodation::Tents)]
}

/// Mostly well-formed segments, with the occasional blank or garbled date.
fn segment_strategy() -> impl Strategy<Value = BranchSegment> {
    let start = prop_oneof![
        8 => (0u64..60).prop_map(Some),
        1 => Just(None::<u64>),
    ];
    (branch_strategy(), start, 0u64..15, 0i64..40, 0i64..6, 0i64..4, accommodation_strategy()).prop_map(
        |(branch, start, len, youth, leaders, kambusieri, accommodation)| {
            let (start_date, end_date) = match start {
                Some(offset) => (day(offset), day(offset + len)),
                None => (String::new(), "31/12/2025".to_string()),
            };
            BranchSegment::new(branch, &start_date, &end_date, accommodation)
                .with_counts(youth, leaders, kambusieri)
        },
    )
}

fn segments_strategy() -> impl Strategy<Value = Vec<BranchSegment>> {
    proptest::collection::vec(segment_strategy(), 0..12)
}

fn valid_headcounts(segments: &[BranchSegment]) -> Vec<i64> {
    segments
        .iter()
        .filter(|s| s.start().is_some() && s.end().is_some())
        .map(BranchSegment::headcount)
        .filter(|&h| h > 0)
        .collect()
}

proptest! {
    #[test]
    fn totals_are_additive(a in segments_strategy(), b in segments_strategy()) {
        let mut combined = a.clone();
        combined.extend(b.iter().cloned());

        prop_assert_eq!(
            compute_participant_totals(&combined),
            compute_participant_totals(&a) + compute_participant_totals(&b)
        );
    }

    #[test]
    fn results_ignore_segment_order(
        (original, shuffled) in segments_strategy().prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        prop_assert_eq!(compute_participant_totals(&original), compute_participant_totals(&shuffled));
        prop_assert_eq!(compute_peak_participants(&original), compute_peak_participants(&shuffled));
        prop_assert_eq!(
            compute_accommodation_requirements(&original),
            compute_accommodation_requirements(&shuffled)
        );
    }

    #[test]
    fn peak_is_bounded_by_max_and_sum(segments in segments_strategy()) {
        let headcounts = valid_headcounts(&segments);
        let peak = compute_peak_participants(&segments);

        prop_assert!(peak >= headcounts.iter().copied().max().unwrap_or(0));
        prop_assert!(peak <= headcounts.iter().sum::<i64>());
    }

    #[test]
    fn per_mode_capacity_is_bounded_by_overall_peak(segments in segments_strategy()) {
        let peak = compute_peak_participants(&segments);
        let summary = compute_accommodation_requirements(&segments);

        prop_assert!(summary.indoor_capacity <= peak);
        prop_assert!(summary.tents_capacity <= peak);
        prop_assert!(peak <= summary.indoor_capacity + summary.tents_capacity);
        prop_assert_eq!(
            summary.needs_indoor,
            segments.iter().any(|s| s.accommodation == Accommodation::Indoor)
        );
        prop_assert_eq!(
            summary.needs_tents,
            segments.iter().any(|s| s.accommodation == Accommodation::Tents)
        );
    }

    #[test]
    fn single_dated_segment_peak_is_its_headcount(
        start in 0u64..60,
        len in 0u64..20,
        youth in 0i64..50,
        leaders in 0i64..8,
        kambusieri in 0i64..5,
    ) {
        let segment = BranchSegment::new(Branch::Eg, &day(start), &day(start + len), Accommodation::Tents)
            .with_counts(youth, leaders, kambusieri);
        prop_assert_eq!(compute_peak_participants(&[segment.clone()]), segment.headcount());
    }

    #[test]
    fn disjoint_segments_peak_is_largest_headcount(
        blocks in proptest::collection::vec((0u64..5, 0u64..6, 1i64..60), 1..8)
    ) {
        // Each block starts at least one day after the previous one ends.
        let mut cursor = 0u64;
        let mut segments = Vec::new();
        for (gap, len, youth) in &blocks {
            let start = cursor + gap;
            let end = start + len;
            segments.push(
                BranchSegment::new(Branch::Lc, &day(start), &day(end), Accommodation::Indoor)
                    .with_counts(*youth, 0, 0),
            );
            cursor = end + 1;
        }

        let expected = blocks.iter().map(|(_, _, youth)| *youth).max().unwrap_or(0);
        prop_assert_eq!(compute_peak_participants(&segments), expected);
    }

    #[test]
    fn overlapping_segments_peak_is_total_headcount(
        spans in proptest::collection::vec((0u64..10, 0u64..10, 1i64..40, 0i64..5), 1..8)
    ) {
        // Every segment covers the shared day at offset 20.
        let segments: Vec<_> = spans
            .iter()
            .map(|(before, after, youth, leaders)| {
                BranchSegment::new(Branch::Rs, &day(20 - before), &day(20 + after), Accommodation::Tents)
                    .with_counts(*youth, *leaders, 0)
            })
            .collect();

        let expected: i64 = segments.iter().map(BranchSegment::headcount).sum();
        prop_assert_eq!(compute_peak_participants(&segments), expected);
    }
}
