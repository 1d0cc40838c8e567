use core::ops::{Bound, Range, RangeBounds};

use crate::{Result, SortError};

/// Turns `range` into a half-open range that is safe to slice a sequence of length `len` with.
///
/// Empty ranges, including reversed ones like `5..=3`, resolve to `0..0`. A non-empty range must
/// end inside the sequence.
pub(crate) fn resolve<R>(range: R, len: usize) -> Result<Range<usize>>
where
    R: RangeBounds<usize>,
{
    let start = match range.start_bound() {
        Bound::Included(&start) => Some(start),
        Bound::Excluded(&start) => start.checked_add(1),
        Bound::Unbounded => Some(0),
    };

    // `None` is one past `usize::MAX`.
    let end = match range.end_bound() {
        Bound::Included(&end) => end.checked_add(1),
        Bound::Excluded(&end) => Some(end),
        Bound::Unbounded => Some(len),
    };

    let Some(start) = start else {
        return Ok(0..0);
    };

    match end {
        Some(end) if start >= end => Ok(0..0),
        Some(end) if end <= len => Ok(start..end),
        end => Err(SortError::InvalidRange {
            start,
            end: end.unwrap_or(usize::MAX),
            len,
        }),
    }
}
