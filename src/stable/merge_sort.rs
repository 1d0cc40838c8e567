use core::mem::size_of;
use core::ops::RangeBounds;
use core::ptr;

use crate::range;
use crate::{Result, SortError};

sort_impl!("merge_sort_top_down");

/// Sorts the slice.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*))
/// worst-case.
///
/// # Current implementation
///
/// Classic top-down merge sort. The slice is split at `mid = low + (high - low) / 2`, both halves
/// are sorted recursively and then merged. A single scratch buffer of `v.len()` elements is
/// allocated up front and reused by every merge, recursion depth is *O*(log(*n*)).
///
/// # Examples
///
/// ```
/// let mut v = [5, 2, 4, 1, 3];
///
/// sort_basics_rs::stable::merge_sort::sort(&mut v);
/// assert!(v == [1, 2, 3, 4, 5]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    merge_sort(v, &mut |a: &T, b: &T| a.lt(b));
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

/// Merges the sorted runs `v[low..=mid]` and `v[mid + 1..=high]`, where `low..=high` is `range`.
///
/// Equal elements of the left run end up before those of the right run. `mid` equal to the last
/// index of `range` means the right run is empty and leaves `v` unchanged. If either run is not
/// sorted the result is some permutation of the input.
pub fn merge<T, R>(v: &mut [T], range: R, mid: usize) -> Result<()>
where
    T: Ord,
    R: RangeBounds<usize>,
{
    let range = range::resolve(range, v.len())?;
    if range.is_empty() {
        return Ok(());
    }

    if !range.contains(&mid) {
        return Err(SortError::InvalidMidpoint {
            mid,
            start: range.start,
            end: range.end,
        });
    }

    let left_len = mid - range.start + 1;
    let v = &mut v[range];
    let mut buf = Vec::with_capacity(v.len());
    merge_runs(v, left_len, &mut buf, &mut |a: &T, b: &T| a.lt(b));

    Ok(())
}

// --- IMPL ---

fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if size_of::<T>() == 0 {
        return;
    }

    let len = v.len();
    if len < 2 {
        return;
    }

    // Only ever holds shallow copies, its length stays 0 so nothing in it is dropped.
    let mut buf = Vec::with_capacity(len);
    merge_sort_rec(v, &mut buf, is_less);
}

fn merge_sort_rec<T, F>(v: &mut [T], buf: &mut Vec<T>, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // With `low = 0` and `high = len - 1` this is `low + (high - low) / 2`, the last index of the
    // left half.
    let mid = (len - 1) / 2;

    let (left, right) = v.split_at_mut(mid + 1);
    merge_sort_rec(left, buf, is_less);
    merge_sort_rec(right, buf, is_less);

    merge_runs(v, mid + 1, buf, is_less);
}

/// Merges the non-decreasing runs `v[..left_len]` and `v[left_len..]` into `v`.
///
/// Elements are shallow copied into `buf` in merged order and the whole buffer is copied back at
/// the end. `v` itself is only read until then, so a panicking `is_less` leaves it as it was.
fn merge_runs<T, F>(v: &mut [T], left_len: usize, buf: &mut Vec<T>, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if left_len == 0 || left_len >= len {
        return;
    }

    // `buf` never has a non-zero length, clearing it drops nothing.
    buf.clear();
    buf.reserve(len);

    let v_ptr = v.as_mut_ptr();
    let buf_ptr = buf.as_mut_ptr();

    let mut left = 0;
    let mut right = left_len;
    let mut out = 0;

    // SAFETY: `left < left_len <= len` and `right < len` inside the loop, so every read from `v`
    // is in bounds. Each iteration writes exactly one element to `buf` at `out`, and
    // `out == left + (right - left_len) < len <= buf.capacity()`. `buf` and `v` are distinct
    // allocations so the copies never overlap. The tail copies move the `left_len - left` and
    // `len - right` remaining elements, which fill `buf` up to exactly `len`.
    unsafe {
        while left < left_len && right < len {
            // Only a strictly smaller right element overtakes the left one, equal elements keep
            // their order.
            let take_right = is_less(&*v_ptr.add(right), &*v_ptr.add(left));
            let src = if take_right { right } else { left };

            ptr::copy_nonoverlapping(v_ptr.add(src), buf_ptr.add(out), 1);

            right += take_right as usize;
            left += !take_right as usize;
            out += 1;
        }

        let left_rem = left_len - left;
        ptr::copy_nonoverlapping(v_ptr.add(left), buf_ptr.add(out), left_rem);
        out += left_rem;

        ptr::copy_nonoverlapping(v_ptr.add(right), buf_ptr.add(out), len - right);

        // Every element of `v` is in `buf` exactly once, move them back in order.
        ptr::copy_nonoverlapping(buf_ptr, v_ptr, len);
    }
}
