// Quicksort with a first element Hoare partition, recursing only into the shorter side.
pub mod quicksort;

pub mod selection_sort;
