//! Upper bound: the first position in a sorted range whose element is
//! _greater_ than a given value.

use super::Value;

/// Returns the index of the first element in the sorted range that is
/// strictly greater than `value`, or `range.len()` if no such element exists.
///
/// Agrees with `range.partition_point(|x| *x <= value)` on every sorted range.
///
/// # Time Complexity
///
/// Takes *O*(*log n*) time.
///
/// # Examples
///
/// ```
/// use range_search::prelude::*;
///
/// let arr = [1, 1, 1, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5];
///
/// assert_eq!(ubound(&arr, 3), 8);
/// assert_eq!(ubound(&arr, 5), arr.len());
/// ```
pub fn ubound(range: &[Value], value: Value) -> usize {
    let mut find = range.len();
    let mut lo = 0;
    let mut hi = range.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);

        if range[mid] > value {
            find = mid;
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    find
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const ODD: [Value; 13] = [1, 1, 1, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5];
    const EVEN: [Value; 14] = [1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5];

    #[test]
    fn test_empty_range() {
        assert_eq!(ubound(&ODD[..0], 3), 0);
    }

    #[test]
    fn test_single_repeated_value() {
        let arr = [1; 13];
        assert_eq!(ubound(&arr, 1), arr.len());
        assert_eq!(ubound(&arr, 0), 0);
    }

    #[test]
    fn test_odd_length() {
        assert_eq!(ubound(&ODD, 1), 3);
        assert_eq!(ubound(&ODD, 2), 5);
        assert_eq!(ubound(&ODD, 3), 8);
        assert_eq!(ubound(&ODD, 4), 11);
        assert_eq!(ubound(&ODD, 5), ODD.len());
    }

    #[test]
    fn test_even_length() {
        assert_eq!(ubound(&EVEN, 1), 3);
        assert_eq!(ubound(&EVEN, 2), 6);
        assert_eq!(ubound(&EVEN, 3), 9);
        assert_eq!(ubound(&EVEN, 4), 12);
        assert_eq!(ubound(&EVEN, 5), EVEN.len());
    }

    #[test]
    fn test_target_outside_range() {
        assert_eq!(ubound(&ODD, -3), 0);
        assert_eq!(ubound(&ODD, 10), ODD.len());
    }

    #[test]
    fn test_target_in_gap() {
        let arr = [1, 1, 1, 3, 3, 5, 5, 5, 7, 7, 7, 9, 9];
        assert_eq!(ubound(&arr, 2), 3);
        assert_eq!(ubound(&arr, 4), 5);
        assert_eq!(ubound(&arr, 6), 8);
        assert_eq!(ubound(&arr, 8), 11);
    }

    proptest! {
        #[test]
        fn test_upper_bound(
            ref v in prop::collection::vec(50..100i32, 0..100),
            value in 40..110i32
        ) {
            let mut v = v.clone();
            v.sort();
            let expected = v.iter().position(|&x| x > value).unwrap_or(v.len());
            prop_assert_eq!(ubound(&v, value), expected);
            prop_assert_eq!(ubound(&v, value), v.partition_point(|x| *x <= value));
        }
    }
}
