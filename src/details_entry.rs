//! # Details Entry
//!
//! Per-sample occurrence counts of one unique read, as found in the details
//! table a collapsing tool writes when merging several samples. The overall
//! count is always derived from the per-sample counts, never stored.

use crate::Error;
use crate::utils::OrdPair;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::RangeInclusive;

/// Occurrence counts of one read across samples.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DetailsEntry {
    occurrences: Vec<u32>,
}

impl DetailsEntry {
    /// Wraps per-sample counts.
    #[must_use]
    pub fn new(occurrences: Vec<u32>) -> Self {
        DetailsEntry { occurrences }
    }

    /// Simulates `n_samples` uniform counts in `[min_occurrences, max_occurrences]`.
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use tagsim_core::DetailsEntry;
    ///
    /// let entry = DetailsEntry::simulate(8, 1, 20, &mut StdRng::seed_from_u64(4))?;
    /// assert_eq!(entry.n_samples(), 8);
    /// assert_eq!(entry.overall(), entry.occurrences().iter().map(|&k| u64::from(k)).sum::<u64>());
    /// # Ok::<(), tagsim_core::Error>(())
    /// ```
    ///
    /// # Errors
    /// `InvalidRange` if `n_samples` is zero or `min_occurrences` exceeds
    /// `max_occurrences`.
    pub fn simulate<R: Rng>(
        n_samples: usize,
        min_occurrences: u32,
        max_occurrences: u32,
        rng: &mut R,
    ) -> Result<Self, Error> {
        if n_samples == 0 {
            return Err(Error::InvalidRange(
                "number of samples must be at least 1".to_string(),
            ));
        }
        let occ_range = RangeInclusive::from(OrdPair::new(min_occurrences, max_occurrences)?);
        Ok(DetailsEntry::new(
            (0..n_samples)
                .map(|_| rng.random_range(occ_range.clone()))
                .collect(),
        ))
    }

    /// Simulates `dataset_size` independent entries.
    ///
    /// # Errors
    /// Same as [`DetailsEntry::simulate`].
    pub fn simulate_n<R: Rng>(
        n_samples: usize,
        min_occurrences: u32,
        max_occurrences: u32,
        dataset_size: usize,
        rng: &mut R,
    ) -> Result<Vec<Self>, Error> {
        (0..dataset_size)
            .map(|_| DetailsEntry::simulate(n_samples, min_occurrences, max_occurrences, rng))
            .collect()
    }

    /// Per-sample counts in sample order
    #[must_use]
    pub fn occurrences(&self) -> &[u32] {
        &self.occurrences
    }

    /// Number of samples
    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.occurrences.len()
    }

    /// Sum of the per-sample counts
    #[must_use]
    pub fn overall(&self) -> u64 {
        self.occurrences.iter().map(|&k| u64::from(k)).sum()
    }
}

/// Orders details entries lexicographically by their per-sample counts.
///
/// ```
/// use std::cmp::Ordering;
/// use tagsim_core::{DetailsEntry, compare_details_entries};
///
/// let a = DetailsEntry::new(vec![1, 9, 9]);
/// let b = DetailsEntry::new(vec![2, 0, 0]);
/// assert_eq!(compare_details_entries(&a, &b), Ordering::Less);
/// ```
#[must_use]
pub fn compare_details_entries(a: &DetailsEntry, b: &DetailsEntry) -> Ordering {
    a.occurrences().cmp(b.occurrences())
}

/// Sorts entries in place with [`compare_details_entries`].
pub fn sort_details_entries(entries: &mut [DetailsEntry]) {
    entries.sort_by(compare_details_entries);
}
