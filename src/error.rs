use thiserror::Error;

pub type Result<T> = core::result::Result<T, SortError>;

/// Ways a caller-supplied index can fail to describe a part of the sequence.
///
/// Ranges are reported half-open, `start..end`, regardless of how the caller wrote them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("range {start}..{end} is out of bounds for a sequence of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },
    #[error("midpoint {mid} is outside of the merge range {start}..{end}")]
    InvalidMidpoint { mid: usize, start: usize, end: usize },
}
