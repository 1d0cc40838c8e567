//! Textbook comparison sorts over mutable slices: selection sort, top-down merge sort and
//! quicksort with a first-element Hoare partition.
//!
//! Every algorithm module exposes a whole-slice `sort` plus a `sort_range` that accepts any index
//! range and reports out of bounds ranges as [`SortError`] instead of panicking.

/// Registers the enclosing module's `sort` function with the shared test and benchmark harness.
macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }
        }
    };
}

mod error;
mod range;

pub mod stable;
pub mod unstable;

pub use error::{Result, SortError};
