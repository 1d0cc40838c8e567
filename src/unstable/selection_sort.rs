use core::ops::RangeBounds;

use crate::range;
use crate::{Result, SortError};

sort_impl!("selection_sort");

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// and *O*(*n*^2) comparisons regardless of the input.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort(v, &mut |a: &T, b: &T| a.lt(b));
}

/// Sorts the first `n` elements of `v`.
///
/// `n` larger than `v.len()` is rejected with [`SortError::InvalidRange`].
pub fn sort_prefix<T>(v: &mut [T], n: usize) -> Result<()>
where
    T: Ord,
{
    let len = v.len();
    if n > len {
        return Err(SortError::InvalidRange { start: 0, end: n, len });
    }

    sort(&mut v[..n]);

    Ok(())
}

/// Sorts the elements of `v` inside `range`, leaving everything outside of it untouched.
///
/// An empty range is a no-op. A non-empty range that reaches past the end of `v` is rejected with
/// [`SortError::InvalidRange`].
pub fn sort_range<T, R>(v: &mut [T], range: R) -> Result<()>
where
    T: Ord,
    R: RangeBounds<usize>,
{
    let range = range::resolve(range, v.len())?;
    sort(&mut v[range]);

    Ok(())
}

fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // The last position needs no scan, whatever is left there is the maximum.
    for i in 0..len - 1 {
        let mut min = i;
        for j in i + 1..len {
            if is_less(&v[j], &v[min]) {
                min = j;
            }
        }

        if min != i {
            v.swap(i, min);
        }
    }
}
