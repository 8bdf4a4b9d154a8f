use crate::error::{CountField, SegmentIssue};
use crate::models::BranchSegment;

/// Report everything questionable about each segment, in segment order.
///
/// The aggregation functions never call this. It is for callers that want
/// to block submission of a half-filled form.
pub fn check_segments(segments: &[BranchSegment]) -> Vec<SegmentIssue> {
    let mut issues = Vec::new();

    for (index, segment) in segments.iter().enumerate() {
        let start = segment.start();
        let end = segment.end();

        if start.is_none() {
            issues.push(SegmentIssue::InvalidStartDate {
                index,
                value: segment.start_date.clone(),
            });
        }
        if end.is_none() {
            issues.push(SegmentIssue::InvalidEndDate {
                index,
                value: segment.end_date.clone(),
            });
        }
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                issues.push(SegmentIssue::EndBeforeStart {
                    index,
                    start: start.to_string(),
                    end: end.to_string(),
                });
            }
        }

        let counts = [
            (CountField::Youth, segment.youth_count),
            (CountField::Leaders, segment.leaders_count),
            (CountField::Kambusieri, segment.kambusieri_count),
        ];
        let mut any_negative = false;
        for (field, value) in counts {
            if value < 0 {
                any_negative = true;
                issues.push(SegmentIssue::NegativeCount { index, field, value });
            }
        }
        if !any_negative && segment.headcount() == 0 {
            issues.push(SegmentIssue::EmptySegment { index });
        }

        if !segment.branch.is_known() {
            issues.push(SegmentIssue::UnknownBranch {
                index,
                tag: segment.branch.as_str().to_string(),
            });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Accommodation, Branch};

    #[test]
    fn test_clean_segments_have_no_issues() {
        let segments = [
            BranchSegment::new(Branch::Eg, "2025-07-01", "2025-07-10", Accommodation::Tents).with_counts(28, 4, 0),
            BranchSegment::new(Branch::All, "2025-07-05", "2025-07-05", Accommodation::Indoor).with_counts(0, 2, 0),
        ];
        assert!(check_segments(&segments).is_empty());
    }

    #[test]
    fn test_reports_each_issue_kind_in_order() {
        let segments = [
            BranchSegment::new(Branch::Lc, "", "2025-07-10", Accommodation::Indoor).with_counts(5, 1, 0),
            BranchSegment::new(Branch::Eg, "2025-07-10", "2025-07-01", Accommodation::Indoor).with_counts(0, 0, 0),
            BranchSegment::new(Branch::Other("Clan".to_string()), "2025-07-01", "bad", Accommodation::Tents)
                .with_counts(3, -1, -2),
        ];

        let issues = check_segments(&segments);
        assert_eq!(
            issues,
            vec![
                SegmentIssue::InvalidStartDate { index: 0, value: String::new() },
                SegmentIssue::EndBeforeStart {
                    index: 1,
                    start: "2025-07-10".to_string(),
                    end: "2025-07-01".to_string(),
                },
                SegmentIssue::EmptySegment { index: 1 },
                SegmentIssue::InvalidEndDate { index: 2, value: "bad".to_string() },
                SegmentIssue::NegativeCount { index: 2, field: CountField::Leaders, value: -1 },
                SegmentIssue::NegativeCount { index: 2, field: CountField::Kambusieri, value: -2 },
                SegmentIssue::UnknownBranch { index: 2, tag: "Clan".to_string() },
            ]
        );
    }

    #[test]
    fn test_negative_sum_to_zero_is_not_empty() {
        let segment = BranchSegment::new(Branch::Rs, "2025-07-01", "2025-07-02", Accommodation::Indoor)
            .with_counts(2, -2, 0);
        let issues = check_segments(&[segment]);
        assert_eq!(
            issues,
            vec![SegmentIssue::NegativeCount { index: 0, field: CountField::Leaders, value: -2 }]
        );
    }
}
