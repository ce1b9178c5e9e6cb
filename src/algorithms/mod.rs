//! Search algorithms over a borrowed, half-open range of integers.
//!
//! Every function takes the range as a slice and returns a position in
//! `0..=range.len()`. A position equal to `range.len()` (one past the final
//! element) means no qualifying element was found.

pub mod binary_search;
pub mod linear_search;
pub mod lower_bound;
pub mod upper_bound;

/// Element and key type of every searchable range.
pub type Value = i32;
