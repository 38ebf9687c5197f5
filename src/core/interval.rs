//! Day-range predicates and calendar stepping
//!
//! Records cover closed ranges of calendar days `[start, end]`; an absent
//! end means the range extends unbounded into the future.

use chrono::NaiveDate;

/// Check whether two closed day ranges intersect.
///
/// An absent end is treated as unbounded, so two open-ended ranges always
/// intersect. The predicate is symmetric in its two ranges.
pub fn overlaps(
    start_a: NaiveDate,
    end_a: Option<NaiveDate>,
    start_b: NaiveDate,
    end_b: Option<NaiveDate>,
) -> bool {
    let a_reaches_b = end_a.map_or(true, |end| start_b <= end);
    let b_reaches_a = end_b.map_or(true, |end| start_a <= end);
    a_reaches_b && b_reaches_a
}

/// The previous calendar day, saturating at the minimum representable date.
pub fn day_before(date: NaiveDate) -> NaiveDate {
    date.pred_opt().unwrap_or(NaiveDate::MIN)
}

/// The next calendar day, saturating at the maximum representable date.
pub fn day_after(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_bounded_ranges_sharing_days_overlap() {
        assert!(overlaps(
            date(2023, 1, 1),
            Some(date(2023, 6, 30)),
            date(2023, 6, 1),
            Some(date(2023, 12, 31)),
        ));
    }

    #[test]
    fn test_bounded_disjoint_ranges_do_not_overlap() {
        assert!(!overlaps(
            date(2023, 1, 1),
            Some(date(2023, 1, 31)),
            date(2023, 2, 1),
            Some(date(2023, 2, 28)),
        ));
    }

    #[test]
    fn test_touching_endpoints_overlap() {
        // Closed ranges: sharing a single day counts.
        assert!(overlaps(
            date(2023, 1, 1),
            Some(date(2023, 1, 31)),
            date(2023, 1, 31),
            Some(date(2023, 2, 28)),
        ));
    }

    #[test]
    fn test_open_end_reaches_every_later_start() {
        assert!(overlaps(
            date(2023, 1, 1),
            None,
            date(2030, 1, 1),
            Some(date(2030, 12, 31)),
        ));
    }

    #[test]
    fn test_open_range_starting_after_bounded_end_does_not_overlap() {
        assert!(!overlaps(
            date(2023, 6, 1),
            None,
            date(2023, 1, 1),
            Some(date(2023, 5, 31)),
        ));
    }

    #[test]
    fn test_both_open_always_overlap() {
        assert!(overlaps(date(2023, 1, 1), None, date(1999, 1, 1), None));
        assert!(overlaps(date(1999, 1, 1), None, date(2023, 1, 1), None));
    }

    #[test]
    fn test_day_stepping() {
        assert_eq!(day_before(date(2023, 6, 1)), date(2023, 5, 31));
        assert_eq!(day_after(date(2023, 5, 31)), date(2023, 6, 1));
        // Leap day handling.
        assert_eq!(day_after(date(2024, 2, 28)), date(2024, 2, 29));
        assert_eq!(day_before(date(2024, 3, 1)), date(2024, 2, 29));
        // Saturation at the calendar bounds.
        assert_eq!(day_before(NaiveDate::MIN), NaiveDate::MIN);
        assert_eq!(day_after(NaiveDate::MAX), NaiveDate::MAX);
    }

    prop_compose! {
        fn arb_range()(
            start in 720_000i32..760_000,
            len in proptest::option::of(0i64..4_000),
        ) -> (NaiveDate, Option<NaiveDate>) {
            let start = NaiveDate::from_num_days_from_ce_opt(start).unwrap();
            (start, len.map(|days| start + chrono::Duration::days(days)))
        }
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(a in arb_range(), b in arb_range()) {
            prop_assert_eq!(
                overlaps(a.0, a.1, b.0, b.1),
                overlaps(b.0, b.1, a.0, a.1),
            );
        }

        #[test]
        fn bounded_overlap_matches_interval_intersection(a in arb_range(), b in arb_range()) {
            if let (Some(end_a), Some(end_b)) = (a.1, b.1) {
                let expected = a.0.max(b.0) <= end_a.min(end_b);
                prop_assert_eq!(overlaps(a.0, a.1, b.0, b.1), expected);
            }
        }
    }
}
