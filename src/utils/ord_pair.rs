//! `OrdPair` struct for ordered pairs with low <= high guarantee
//! Used for the inclusive occurrence bounds handed to the simulators.

use super::contains::Contains;
use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Debug;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Datatype holding two values low, high such that low <= high is guaranteed at creation.
#[derive(Debug, Clone, Copy, PartialOrd, PartialEq)]
pub struct OrdPair<T: Clone + Copy + Debug> {
    low: T,
    high: T,
}

impl OrdPair<u32> {
    /// Occurrence bounds used when none are configured, `[1, 20]`
    pub const DEFAULT_OCCURRENCES: OrdPair<u32> = OrdPair { low: 1, high: 20 };
}

impl<T: Clone + Copy + Debug + PartialEq + PartialOrd> OrdPair<T> {
    /// Constructor with two values, will fail if ordering in input is not respected.
    ///
    /// ```
    /// use tagsim_core::{Error, OrdPair};
    /// let x = OrdPair::<u32>::new(1, 20)?;
    /// assert_eq!(x.get_low(), 1);
    /// assert_eq!(x.get_high(), 20);
    /// assert!(matches!(OrdPair::new(3, 2), Err(Error::InvalidRange(_))));
    /// # Ok::<(), tagsim_core::Error>(())
    /// ```
    pub fn new(low: T, high: T) -> Result<Self, Error> {
        if low <= high {
            Ok(OrdPair { low, high })
        } else {
            Err(Error::InvalidRange(format!(
                "low {low:?} is larger than high {high:?}"
            )))
        }
    }
    /// Gets the low value
    pub fn get_low(&self) -> T {
        self.low
    }
    /// Gets the high value
    pub fn get_high(&self) -> T {
        self.high
    }
}

impl<T: Clone + Copy + Debug + PartialEq + PartialOrd + FromStr> FromStr for OrdPair<T> {
    type Err = Error;

    /// Parse a string like "1,20" to obtain an Ordered Pair.
    fn from_str(val_str: &str) -> Result<Self, Self::Err> {
        let parse_error = || Error::InvalidRange(format!("bad ordered pair input `{val_str}`"));
        let v: Vec<&str> = val_str.split(',').map(str::trim).collect();
        match v.as_slice() {
            [low, high] => {
                let low = T::from_str(low).map_err(|_| parse_error())?;
                let high = T::from_str(high).map_err(|_| parse_error())?;
                OrdPair::<T>::new(low, high)
            }
            _ => Err(parse_error()),
        }
    }
}

impl<T: Clone + Copy + Debug + PartialEq + PartialOrd> From<OrdPair<T>> for RangeInclusive<T> {
    /// Convert the `OrdPair` into a `RangeInclusive` i.e. (start..=end)
    fn from(value: OrdPair<T>) -> Self {
        RangeInclusive::<T>::new(value.get_low(), value.get_high())
    }
}

impl<T: Clone + Copy + Debug + PartialEq + PartialOrd> Contains<T> for OrdPair<T> {
    /// Check if the provided value is within the Range of the `OrdPair`
    fn contains(&self, val: &T) -> bool {
        RangeInclusive::<T>::from(*self).contains(val)
    }
}

impl<T: Clone + Copy + Debug + fmt::Display + PartialEq + PartialOrd> fmt::Display for OrdPair<T> {
    /// converts to string for display i.e. "low, high"
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}", self.get_low(), self.get_high())
    }
}

// Pairs travel as two-element arrays in JSON, e.g. "occurrences": [1, 20]
impl<T: Clone + Copy + Debug + Serialize> Serialize for OrdPair<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (self.low, self.high).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for OrdPair<T>
where
    T: Clone + Copy + Debug + PartialEq + PartialOrd + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (low, high) = <(T, T)>::deserialize(deserializer)?;
        OrdPair::new(low, high).map_err(serde::de::Error::custom)
    }
}
