pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;
}

pub trait Partition {
    fn name() -> String;

    /// Partitions `arr` around its first element and returns the final position of that element.
    fn partition<T>(arr: &mut [T]) -> usize
    where
        T: Ord;
}

#[doc(hidden)]
pub use paste;

pub mod patterns;
