use labnote_error::LabnoteError;
use std::fmt::Debug;

pub const MIN_PERCENTILE: u32 = 0;
pub const MAX_PERCENTILE: u32 = 100;

/// Nearest-rank percentile of an ascending series.
///
/// The series is validated, never re-sorted: an unsorted or empty series is a
/// caller bug and fails with [`LabnoteError::PreconditionViolation`].
/// `p` outside `0..=100` fails with [`LabnoteError::InvalidArgument`].
///
/// `p = 0` and `p = 100` return the first and last element. Any other `p`
/// selects the element at 1-based rank `ceil(0.01 * p * n)`; there is no
/// interpolation between ranks.
///
/// ```
/// use labnote_stats::percentile;
///
/// let list = [15, 20, 35, 40, 50];
/// assert_eq!(percentile(20, &list).unwrap(), 15);
/// assert_eq!(percentile(21, &list).unwrap(), 20);
/// assert_eq!(percentile(100, &list).unwrap(), 50);
/// ```
pub fn percentile<T>(p: u32, sorted: &[T]) -> Result<T, LabnoteError>
where
    T: PartialOrd + Copy + Debug,
{
    if !is_sorted(sorted) {
        return Err(LabnoteError::not_sorted(sorted));
    }
    if p > MAX_PERCENTILE {
        return Err(LabnoteError::percentile_out_of_range(p));
    }
    let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
        return Err(LabnoteError::empty_series());
    };

    match p {
        MIN_PERCENTILE => Ok(*first),
        MAX_PERCENTILE => Ok(*last),
        _ => {
            let n = sorted.len();
            let rank = (0.01 * f64::from(p) * n as f64).ceil() as usize;
            Ok(sorted[rank.clamp(1, n) - 1])
        }
    }
}

/// Non-decreasing check. NaN never compares, so a series containing NaN next
/// to anything is reported as unsorted.
pub fn is_sorted<T: PartialOrd>(list: &[T]) -> bool {
    list.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn check(list: &[i64], expected: &[(u32, i64)]) {
        for (p, want) in expected {
            assert_eq!(
                percentile(*p, list).unwrap(),
                *want,
                "percentile({p}) of {list:?}"
            );
        }
    }

    #[test]
    fn five_item_nearest_rank() {
        check(
            &[15, 20, 35, 40, 50],
            &[
                (0, 15),
                (20, 15),
                (21, 20),
                (40, 20),
                (41, 35),
                (60, 35),
                (61, 40),
                (80, 40),
                (81, 50),
                (100, 50),
            ],
        );
    }

    #[test]
    fn ten_and_eleven_item_quartiles() {
        check(
            &[3, 6, 7, 8, 8, 10, 13, 15, 16, 20],
            &[(25, 7), (50, 8), (75, 15), (100, 20)],
        );
        check(
            &[3, 6, 7, 8, 8, 9, 10, 13, 15, 16, 20],
            &[(25, 7), (50, 9), (75, 15), (100, 20)],
        );
    }

    #[test]
    fn hundred_and_thousand_items() {
        let hundred: Vec<i64> = (1..=100).collect();
        check(&hundred, &[(0, 1), (1, 1), (2, 2), (99, 99), (100, 100)]);

        let thousand: Vec<i64> = (1..=1000).collect();
        check(
            &thousand,
            &[(0, 1), (1, 10), (50, 500), (99, 990), (100, 1000)],
        );
    }

    #[test]
    fn floats_work_too() {
        let list = [-10.0, -2.0, 0.0, 2.0, 10.0];
        assert_eq!(percentile(50, &list).unwrap(), 0.0);
        assert_eq!(percentile(20, &list).unwrap(), -10.0);
        assert_eq!(percentile(85, &list).unwrap(), 10.0);
    }

    #[test]
    fn single_element_is_every_percentile() {
        for p in 0..=100 {
            assert_eq!(percentile(p, &[42]).unwrap(), 42);
        }
    }

    #[test]
    fn unsorted_fails_for_any_p() {
        for p in [0, 50, 100, 101] {
            let err = percentile(p, &[5, 3, 4]).unwrap_err();
            assert!(
                matches!(err, LabnoteError::PreconditionViolation(_)),
                "p={p}: {err}"
            );
            assert!(err.to_string().contains("[5, 3, 4]"));
        }
    }

    #[test]
    fn out_of_range_is_invalid_argument() {
        let err = percentile(101, &[1, 2, 3]).unwrap_err();
        assert!(matches!(err, LabnoteError::InvalidArgument(_)));
    }

    #[test]
    fn empty_is_precondition_violation() {
        let err = percentile::<f64>(50, &[]).unwrap_err();
        assert!(matches!(err, LabnoteError::PreconditionViolation(_)));
    }

    #[test]
    fn nan_is_reported_as_unsorted() {
        assert!(!is_sorted(&[1.0, f64::NAN, 2.0]));
        assert!(is_sorted::<f64>(&[]));
        assert!(is_sorted(&[1.0, 1.0, 1.0]));
    }

    fn sorted_vec() -> impl Strategy<Value = Vec<i64>> {
        proptest::collection::vec(-1_000_000i64..1_000_000, 1..300).prop_map(|mut v| {
            v.sort_unstable();
            v
        })
    }

    proptest! {
        #[test]
        fn prop_interior_percentiles_use_nearest_rank(list in sorted_vec(), p in 1u32..100) {
            let n = list.len();
            let idx = (0.01 * f64::from(p) * n as f64).ceil() as usize - 1;
            prop_assert_eq!(percentile(p, &list).unwrap(), list[idx]);
        }

        #[test]
        fn prop_bounds_are_first_and_last(list in sorted_vec()) {
            prop_assert_eq!(percentile(0, &list).unwrap(), list[0]);
            prop_assert_eq!(percentile(100, &list).unwrap(), list[list.len() - 1]);
        }

        #[test]
        fn prop_monotone_in_p(list in sorted_vec(), a in 0u32..=100, b in 0u32..=100) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(percentile(lo, &list).unwrap() <= percentile(hi, &list).unwrap());
        }

        #[test]
        fn prop_result_is_an_element(list in sorted_vec(), p in 0u32..=100) {
            let v = percentile(p, &list).unwrap();
            prop_assert!(list.contains(&v));
        }
    }
}
