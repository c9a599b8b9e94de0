//! # Tag
//!
//! Validated symbol sequence wrapper that guarantees only A, C, G, T, N.
//! Tags are what a simulated read "is"; they are split for mates and
//! compared for sorted summary output.

use super::allowed_agctn::AllowedAGCTN;
use crate::Error;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Validated tag, a sequence of [`AllowedAGCTN`] symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Tag(Vec<AllowedAGCTN>);

impl Tag {
    /// Draws `length` independent uniform symbols from {A, C, G, T, N}.
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use tagsim_core::Tag;
    ///
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let tag = Tag::random(12, &mut rng);
    /// assert_eq!(tag.len(), 12);
    /// assert!(tag.to_string().bytes().all(|b| b"ACGTN".contains(&b)));
    /// ```
    pub fn random<R: Rng>(length: usize, rng: &mut R) -> Self {
        Tag((0..length).map(|_| rng.random()).collect())
    }

    /// Returns the symbols of the tag
    #[must_use]
    pub fn get(&self) -> &[AllowedAGCTN] {
        &self.0
    }

    /// Number of symbols in the tag
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the tag has no symbols
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Splits the tag into `[0, mid)` and `[mid, len)`.
    /// `mid` must not exceed the tag length.
    #[must_use]
    pub fn split_at(&self, mid: usize) -> (Tag, Tag) {
        let (left, right) = self.0.split_at(mid);
        (Tag(left.to_vec()), Tag(right.to_vec()))
    }
}

impl FromStr for Tag {
    type Err = Error;

    /// Parses a tag, failing on any symbol outside A, C, G, T, N.
    ///
    /// ```
    /// use std::str::FromStr;
    /// use tagsim_core::Tag;
    ///
    /// assert_eq!(Tag::from_str("GATTACA")?.len(), 7);
    /// assert!(Tag::from_str("GATTACU").is_err());
    /// # Ok::<(), tagsim_core::Error>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(AllowedAGCTN::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Tag)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = self.0.iter().map(|&b| char::from(b)).collect();
        f.write_str(&s)
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Tag::from_str(&s).map_err(serde::de::Error::custom)
    }
}
