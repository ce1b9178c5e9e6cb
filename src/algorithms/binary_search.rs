//! [Binary Search]: A search algorithm that finds the position of a target
//! value within a sorted array.
//!
//! Two variants are provided: an iterative one ([`bsearch`]) and a recursive
//! one ([`bsearch_rec`]). Both bisect the same way, so on the same input they
//! land on the same position. The recursive variant reports a miss as [`None`];
//! [`bsearch_rec_aux`] turns that into the `range.len()` convention shared by
//! the rest of the crate.
//!
//! [Binary Search]: https://en.wikipedia.org/wiki/Binary_search

use core::cmp::Ordering;

use super::Value;

/// Returns the index of an element equal to `value` within the sorted range,
/// or `range.len()` if it was not found.
///
/// When `value` occurs more than once, the index returned is whichever
/// occurrence the bisection reaches first. It is not guaranteed to be the
/// first or the last one.
///
/// The range **must** be sorted in non-decreasing order. The result is
/// unspecified otherwise.
///
/// # Time Complexity
///
/// Takes *O*(*log n*) time. Binary search uses a divide-and-conquer approach
/// and runs in logarithmic time in the worst case, making *O*(*log n*)
/// comparisons, where `n` is the number of elements in the range.
///
/// # Examples
///
/// ```
/// use range_search::prelude::*;
///
/// let arr = [4, 10, 12, 13, 20, 50, 66];
///
/// assert_eq!(bsearch(&arr, 4), 0);
/// assert_eq!(bsearch(&arr, 40), arr.len());
/// ```
pub fn bsearch(range: &[Value], value: Value) -> usize {
    let mut lo = 0;
    let mut hi = range.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);

        if range[mid] == value {
            return mid;
        } else if range[mid] < value {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    range.len()
}

/// Recursive binary search. Returns the index of an element equal to `value`
/// within the sorted range, or [`None`] if it was not found.
///
/// The window is narrowed by re-slicing, so a hit found in the right half is
/// shifted back by the offset of that half before being returned.
///
/// # Time Complexity
///
/// Takes *O*(*log n*) time and *O*(*log n*) stack depth.
///
/// # Examples
///
/// ```
/// use range_search::prelude::*;
///
/// let arr = [4, 10, 12, 13, 20, 50, 66];
///
/// assert_eq!(bsearch_rec(&arr, 50), Some(5));
/// assert_eq!(bsearch_rec(&arr, 11), None);
/// ```
pub fn bsearch_rec(range: &[Value], value: Value) -> Option<usize> {
    if range.is_empty() {
        return None;
    }

    let mid = range.len() >> 1;

    match range[mid].cmp(&value) {
        Ordering::Equal => Some(mid),
        Ordering::Less => bsearch_rec(&range[mid + 1..], value).map(|pos| pos + mid + 1),
        Ordering::Greater => bsearch_rec(&range[..mid], value),
    }
}

/// Recursive binary search returning `range.len()` when `value` is not found.
///
/// # Examples
///
/// ```
/// use range_search::prelude::*;
///
/// let arr = [1, 2, 3, 4, 5, 6, 7];
///
/// assert_eq!(bsearch_rec_aux(&arr, 6), 5);
/// assert_eq!(bsearch_rec_aux(&arr, 10), arr.len());
/// ```
pub fn bsearch_rec_aux(range: &[Value], value: Value) -> usize {
    bsearch_rec(range, value).unwrap_or(range.len())
}
