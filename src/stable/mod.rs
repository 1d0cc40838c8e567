// Top-down merge sort with a single reused scratch buffer.
pub mod merge_sort;
