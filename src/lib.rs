//! Range Search
//!
//! Linear search, binary search (iterative and recursive), lower bound and
//! upper bound over a borrowed half-open range of integers, plus a timing
//! harness that measures them over growing range sizes.

#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod algorithms;
pub mod timing;

/// Range Search Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use super::algorithms::Value;

    #[doc(no_inline)]
    pub use super::algorithms::binary_search::*;
    #[doc(no_inline)]
    pub use super::algorithms::linear_search::*;
    #[doc(no_inline)]
    pub use super::algorithms::lower_bound::*;
    #[doc(no_inline)]
    pub use super::algorithms::upper_bound::*;
}
