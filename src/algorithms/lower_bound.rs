//! Lower bound: the first position in a sorted range whose element is _not
//! less_ than a given value.

use super::Value;

/// Returns the index of the first element in the sorted range that is greater
/// than or equal to `value`, or `range.len()` if every element is less than
/// `value`.
///
/// Agrees with `range.partition_point(|x| *x < value)` on every sorted range,
/// including ranges with runs of duplicates.
///
/// # Time Complexity
///
/// Takes *O*(*log n*) time. The window always keeps searching the left half
/// after a candidate is recorded, so the earliest qualifying element wins.
///
/// # Examples
///
/// ```
/// use range_search::prelude::*;
///
/// let arr = [1, 1, 1, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5];
///
/// assert_eq!(lbound(&arr, 3), 5);
/// assert_eq!(lbound(&arr, 0), 0);
/// assert_eq!(lbound(&arr, 6), arr.len());
/// ```
pub fn lbound(range: &[Value], value: Value) -> usize {
    let mut find = range.len();
    let mut lo = 0;
    let mut hi = range.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);

        if range[mid] >= value {
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

    fn lower_bound_reference(v: &[Value], value: Value) -> usize {
        v.iter()
            .position(|&value_i| value_i >= value)
            .unwrap_or(v.len())
    }

    #[test]
    fn test_empty_range() {
        assert_eq!(lbound(&ODD[4..4], 3), 0);
    }

    #[test]
    fn test_single_repeated_value() {
        let arr = [1; 13];
        assert_eq!(lbound(&arr, 1), 0);
        assert_eq!(lbound(&arr, 0), 0);
        assert_eq!(lbound(&arr, 2), arr.len());
    }

    #[test]
    fn test_odd_length() {
        assert_eq!(lbound(&ODD, 3), 5);
        assert_eq!(lbound(&ODD, 2), 3);
        assert_eq!(lbound(&ODD, 4), 8);
        assert_eq!(lbound(&ODD, 1), 0);
        assert_eq!(lbound(&ODD, 5), 11);
    }

    #[test]
    fn test_even_length() {
        assert_eq!(lbound(&EVEN, 3), 6);
        assert_eq!(lbound(&EVEN, 2), 3);
        assert_eq!(lbound(&EVEN, 4), 9);
        assert_eq!(lbound(&EVEN, 1), 0);
        assert_eq!(lbound(&EVEN, 5), 12);
    }

    #[test]
    fn test_target_outside_range() {
        assert_eq!(lbound(&ODD, -3), 0);
        assert_eq!(lbound(&ODD, 10), ODD.len());
    }

    #[test]
    fn test_target_in_gap() {
        let arr = [1, 1, 1, 3, 3, 5, 5, 5, 7, 7, 7, 9, 9];
        assert_eq!(lbound(&arr, 2), 3);
        assert_eq!(lbound(&arr, 4), 5);
        assert_eq!(lbound(&arr, 6), 8);
        assert_eq!(lbound(&arr, 8), 11);
    }

    proptest! {
        #[test]
        fn test_lower_bound(
            ref v in prop::collection::vec(50..100i32, 0..100),
            value in 40..110i32
        ) {
            let mut v = v.clone();
            v.sort();
            prop_assert_eq!(lbound(&v, value), lower_bound_reference(&v, value));
            prop_assert_eq!(lbound(&v, value), v.partition_point(|x| *x < value));
        }
    }
}
