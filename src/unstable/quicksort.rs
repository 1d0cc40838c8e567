use core::ops::RangeBounds;

use crate::range;
use crate::Result;

sort_impl!("quicksort_hoare_first_pivot");

impl sort_test_tools::Partition for SortImpl {
    fn name() -> String {
        "partition_hoare_first_pivot".into()
    }

    fn partition<T>(arr: &mut [T]) -> usize
    where
        T: Ord,
    {
        partition(arr)
    }
}

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// and *O*(*n* \* log(*n*)) on average. The first element of every sub-slice is used as pivot, so
/// already sorted, reversed and all-equal inputs degrade to *O*(*n*^2) comparisons. The recursion
/// depth stays *O*(log(*n*)) in every case.
///
/// # Examples
///
/// ```
/// let mut v = [3, 3, 3, 3];
///
/// sort_basics_rs::unstable::quicksort::sort(&mut v);
/// assert!(v == [3, 3, 3, 3]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a: &T, b: &T| a.lt(b));
}

/// Sorts the elements of `v` inside `range`, leaving everything outside of it untouched.
///
/// An empty range is a no-op. A non-empty range that reaches past the end of `v` is rejected with
/// [`crate::SortError::InvalidRange`].
pub fn sort_range<T, R>(v: &mut [T], range: R) -> Result<()>
where
    T: Ord,
    R: RangeBounds<usize>,
{
    let range = range::resolve(range, v.len())?;
    sort(&mut v[range]);

    Ok(())
}

/// Partitions `v` around its first element and returns the position the pivot ends up at.
///
/// Afterwards every element left of the returned position is `<=` the pivot and every element
/// right of it is `>` the pivot. Slices with fewer than two elements return 0 without comparing.
#[inline]
pub fn partition<T>(v: &mut [T]) -> usize
where
    T: Ord,
{
    partition_first_pivot(v, &mut |a: &T, b: &T| a.lt(b))
}

/// Same as [`partition`] restricted to `range`, with the pivot taken from the start of `range`.
///
/// Returns the absolute index of the pivot, or `None` if `range` is empty.
pub fn partition_range<T, R>(v: &mut [T], range: R) -> Result<Option<usize>>
where
    T: Ord,
    R: RangeBounds<usize>,
{
    let range = range::resolve(range, v.len())?;
    if range.is_empty() {
        return Ok(None);
    }

    let offset = range.start;
    Ok(Some(offset + partition(&mut v[range])))
}

// --- IMPL ---

/// Sorts `v` recursively.
///
/// Only the shorter side of each partition is recursed into, the longer one is handled by the
/// next loop iteration. Each recursion level at least halves the length, which bounds the stack
/// depth to `log2(v.len())` frames.
fn quicksort<'a, T, F>(mut v: &'a mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while v.len() > 1 {
        let pivot_pos = partition_first_pivot(v, is_less);

        // Split the slice into `left`, `pivot`, and `right`.
        let (left, right) = v.split_at_mut(pivot_pos);
        let (_pivot, right) = right.split_at_mut(1);

        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Hoare style two pointer partition with `v[0]` as pivot.
///
/// `i` scans forward over elements `<=` the pivot, `j` scans backward over elements `>` the
/// pivot, and out of place pairs are swapped until the pointers cross. `j` then marks the last
/// element `<=` the pivot, which is swapped with the pivot.
fn partition_first_pivot<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return 0;
    }

    let high = len - 1;
    let mut i = 0;
    let mut j = high;

    // The pivot stays at index 0 for the whole loop. `i` steps over it on the first scan and
    // every swap happens at `0 < i < j`.
    while i < j {
        // The bounds keep both scans inside the slice when every remaining element satisfies the
        // scan condition, e.g. for all-equal input.
        while i < high && !is_less(&v[0], &v[i]) {
            i += 1;
        }

        while j > 0 && is_less(&v[0], &v[j]) {
            j -= 1;
        }

        if i < j {
            v.swap(i, j);
        }
    }

    // Place the pivot between the two partitions.
    v.swap(0, j);

    j
}
