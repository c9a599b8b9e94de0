//! Contains trait for testing if a value lies within a range,
//! e.g. whether an occurrence count respects the simulation bounds

/// Trait for testing whether a value is contained within an interval.
pub trait Contains<T> {
    /// Returns true if the value is contained within this interval.
    fn contains(&self, val: &T) -> bool;
}
