//! [Linear Search]: Method for finding an element within a list. It
//! sequentially checks each element of the list until the whole list has been
//! searched.
//!
//! [Linear Search]: https://en.wikipedia.org/wiki/Linear_search

use super::Value;

/// Returns the index of the **last** occurrence of `value` within the range,
/// or `range.len()` if it was not found.
///
/// The range does not need to be sorted. Every position is visited, so the
/// position of the final match is the one reported.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time. Linear search checks each element of the range exactly
/// once, front to back.
///
/// # Examples
///
/// ```
/// use range_search::prelude::*;
///
/// let arr = [11, 4, 30, 4, 20, 2, 70, 45];
///
/// assert_eq!(lsearch(&arr, 4), 3);
/// assert_eq!(lsearch(&arr, 40), arr.len());
/// ```
pub fn lsearch(range: &[Value], value: Value) -> usize {
    let mut find = range.len();

    for (i, elem) in range.iter().enumerate() {
        if *elem == value {
            find = i;
        }
    }

    find
}
