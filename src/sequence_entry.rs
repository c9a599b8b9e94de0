//! # Sequence Entry
//!
//! A simulated read: a tag together with one quality string per occurrence
//! of that tag. The per-position average quality is computed once when the
//! entry is built. Entries are never modified after construction; splitting
//! into mates or flattening into reads always yields new values.
//!
//! Entries do not implement `Ord`; sorting uses the comparator
//! [`compare_sequence_entries`].

use crate::Error;
use crate::utils::{OrdPair, Tag, quality_average, random_quality_string};
use rand::Rng;
use serde::Serialize;
use std::cmp::Ordering;
use std::ops::RangeInclusive;

/// One simulated tag and its per-occurrence quality strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceEntry {
    tag: Tag,
    qualities: Vec<String>,
    quality_average: String,
}

/// A single (tag, quality) read obtained by flattening an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct ReadRecord {
    /// Read sequence
    pub tag: Tag,
    /// Read quality string, same length as the tag
    pub quality: String,
}

impl SequenceEntry {
    /// Builds an entry, checking that there is at least one quality string
    /// and that every quality string is as long as the tag.
    ///
    /// ```
    /// use std::str::FromStr;
    /// use tagsim_core::{SequenceEntry, Tag};
    ///
    /// let entry = SequenceEntry::new(
    ///     Tag::from_str("ACG")?,
    ///     vec!["!!!".to_string(), "###".to_string()],
    /// )?;
    /// assert_eq!(entry.occurrences(), 2);
    /// assert_eq!(entry.quality_average(), "\"\"\"");
    /// # Ok::<(), tagsim_core::Error>(())
    /// ```
    ///
    /// # Errors
    /// `EmptyOccurrence` without quality strings, `LengthMismatch` when a
    /// quality string and the tag differ in length, `InvalidQuality` on a
    /// non-printable quality symbol.
    pub fn new(tag: Tag, qualities: Vec<String>) -> Result<Self, Error> {
        let quality_average = quality_average(&qualities)?;
        if quality_average.len() != tag.len() {
            return Err(Error::LengthMismatch {
                expected: tag.len(),
                found: quality_average.len(),
            });
        }
        Ok(SequenceEntry {
            tag,
            qualities,
            quality_average,
        })
    }

    /// Simulates one entry: a uniform random tag of `read_length` symbols,
    /// a uniform occurrence count in `[min_occurrences, max_occurrences]`,
    /// and one uniform random quality string per occurrence.
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use tagsim_core::SequenceEntry;
    ///
    /// let mut rng = StdRng::seed_from_u64(0);
    /// let entry = SequenceEntry::simulate(50, 1, 20, &mut rng)?;
    /// assert_eq!(entry.tag().len(), 50);
    /// assert!((1..=20).contains(&entry.occurrences()));
    /// # Ok::<(), tagsim_core::Error>(())
    /// ```
    ///
    /// # Errors
    /// `InvalidRange` if `read_length` is zero or `min_occurrences` exceeds
    /// `max_occurrences`; `EmptyOccurrence` if zero occurrences are drawn,
    /// which can only happen when `min_occurrences` is zero.
    pub fn simulate<R: Rng>(
        read_length: usize,
        min_occurrences: u32,
        max_occurrences: u32,
        rng: &mut R,
    ) -> Result<Self, Error> {
        if read_length == 0 {
            return Err(Error::InvalidRange(
                "read length must be at least 1".to_string(),
            ));
        }
        let occ_range = OrdPair::new(min_occurrences, max_occurrences)?;

        let tag = Tag::random(read_length, rng);
        let occurrences = rng.random_range(RangeInclusive::from(occ_range));
        let qualities = (0..occurrences)
            .map(|_| random_quality_string(read_length, rng))
            .collect();

        SequenceEntry::new(tag, qualities)
    }

    /// Simulates `dataset_size` independent entries.
    ///
    /// # Errors
    /// Same as [`SequenceEntry::simulate`]; the first failure discards the
    /// whole dataset.
    pub fn simulate_n<R: Rng>(
        read_length: usize,
        min_occurrences: u32,
        max_occurrences: u32,
        dataset_size: usize,
        rng: &mut R,
    ) -> Result<Vec<Self>, Error> {
        (0..dataset_size)
            .map(|_| SequenceEntry::simulate(read_length, min_occurrences, max_occurrences, rng))
            .collect()
    }

    /// Splits the entry at `floor(len / 2)` into two mates. The tag and every
    /// quality string are cut at the same position, and each mate's average
    /// quality is recomputed from its own quality strings.
    ///
    /// ```
    /// use std::str::FromStr;
    /// use tagsim_core::{SequenceEntry, Tag};
    ///
    /// let entry = SequenceEntry::new(Tag::from_str("ACGTTT")?, vec!["!!!KKK".to_string()])?;
    /// let (mate_1, mate_2) = entry.split_mates()?;
    /// assert_eq!(mate_1.tag().to_string(), "ACG");
    /// assert_eq!(mate_2.tag().to_string(), "TTT");
    /// assert_eq!(mate_2.qualities(), ["KKK"]);
    /// # Ok::<(), tagsim_core::Error>(())
    /// ```
    ///
    /// # Errors
    /// `SplitBoundary` if the tag has fewer than two symbols.
    pub fn split_mates(&self) -> Result<(SequenceEntry, SequenceEntry), Error> {
        if self.tag.len() < 2 {
            return Err(Error::SplitBoundary(self.tag.len()));
        }
        let mid = self.tag.len() / 2;
        let (tag_1, tag_2) = self.tag.split_at(mid);
        let (qualities_1, qualities_2): (Vec<String>, Vec<String>) = self
            .qualities
            .iter()
            .map(|q| {
                let (left, right) = q.split_at(mid);
                (left.to_string(), right.to_string())
            })
            .unzip();

        Ok((
            SequenceEntry::new(tag_1, qualities_1)?,
            SequenceEntry::new(tag_2, qualities_2)?,
        ))
    }

    /// Flattens the entry into one read per occurrence.
    #[must_use]
    pub fn unpack(&self) -> Vec<ReadRecord> {
        self.qualities
            .iter()
            .map(|quality| ReadRecord {
                tag: self.tag.clone(),
                quality: quality.clone(),
            })
            .collect()
    }

    /// The simulated tag
    #[must_use]
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Quality strings, one per occurrence
    #[must_use]
    pub fn qualities(&self) -> &[String] {
        &self.qualities
    }

    /// Per-position floor mean of the quality strings
    #[must_use]
    pub fn quality_average(&self) -> &str {
        &self.quality_average
    }

    /// Multiplicity of the tag, i.e. the number of quality strings
    #[must_use]
    pub fn occurrences(&self) -> usize {
        self.qualities.len()
    }
}

/// Compares two tags symbol by symbol using the ranks A < C < G < T < N.
///
/// When one tag is a prefix of the other the longer tag comes first; this
/// mirrors the tag order of the collapsing tool the datasets are built for.
///
/// ```
/// use std::cmp::Ordering;
/// use std::str::FromStr;
/// use tagsim_core::{Tag, compare_tags};
///
/// let a = Tag::from_str("GATTACA")?;
/// let b = Tag::from_str("GATTAC")?;
/// assert_eq!(compare_tags(&a, &b), Ordering::Less);
/// assert_eq!(compare_tags(&Tag::from_str("ACGT")?, &a), Ordering::Less);
/// # Ok::<(), tagsim_core::Error>(())
/// ```
#[must_use]
pub fn compare_tags(a: &Tag, b: &Tag) -> Ordering {
    for (x, y) in a.get().iter().zip(b.get()) {
        match x.rank().cmp(&y.rank()) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    b.len().cmp(&a.len())
}

/// Orders sequence entries by their tags, see [`compare_tags`].
#[must_use]
pub fn compare_sequence_entries(a: &SequenceEntry, b: &SequenceEntry) -> Ordering {
    compare_tags(a.tag(), b.tag())
}

/// Sorts entries in place with [`compare_sequence_entries`].
pub fn sort_sequence_entries(entries: &mut [SequenceEntry]) {
    entries.sort_by(compare_sequence_entries);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::str::FromStr;

    fn entry(tag: &str, n: usize) -> SequenceEntry {
        let qual: String = std::iter::repeat_n('I', tag.len()).collect();
        SequenceEntry::new(Tag::from_str(tag).unwrap(), vec![qual; n]).unwrap()
    }

    #[test]
    fn simulated_entries_respect_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let entries = SequenceEntry::simulate_n(50, 1, 20, 500, &mut rng).unwrap();
        assert_eq!(entries.len(), 500);
        for e in &entries {
            assert_eq!(e.tag().len(), 50);
            assert!((1..=20).contains(&e.occurrences()));
            assert!(e.qualities().iter().all(|q| q.len() == 50));
            assert_eq!(e.quality_average().len(), 50);
        }
    }

    #[test]
    fn single_occurrence_is_deterministic_with_seed() {
        let first = SequenceEntry::simulate(4, 1, 1, &mut StdRng::seed_from_u64(99)).unwrap();
        let second = SequenceEntry::simulate(4, 1, 1, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(first.occurrences(), 1);
        assert_eq!(first, second);
        assert_eq!(first.quality_average(), first.qualities()[0]);
    }

    #[test]
    #[should_panic(expected = "InvalidRange")]
    fn simulate_zero_length_fails() {
        let _ = SequenceEntry::simulate(0, 1, 2, &mut StdRng::seed_from_u64(0)).unwrap();
    }

    #[test]
    #[should_panic(expected = "InvalidRange")]
    fn simulate_min_above_max_fails() {
        let _ = SequenceEntry::simulate(10, 3, 2, &mut StdRng::seed_from_u64(0)).unwrap();
    }

    #[test]
    #[should_panic(expected = "EmptyOccurrence")]
    fn simulate_zero_occurrences_fails() {
        let _ = SequenceEntry::simulate(10, 0, 0, &mut StdRng::seed_from_u64(0)).unwrap();
    }

    #[test]
    #[should_panic(expected = "LengthMismatch")]
    fn new_rejects_quality_of_wrong_length() {
        let _ = SequenceEntry::new(Tag::from_str("ACGT").unwrap(), vec!["!!!".to_string()])
            .unwrap();
    }

    #[test]
    fn split_mates_even_length_round_trips() {
        let mut rng = StdRng::seed_from_u64(2);
        for parent in SequenceEntry::simulate_n(50, 1, 20, 100, &mut rng).unwrap() {
            let (mate_1, mate_2) = parent.split_mates().unwrap();
            assert_eq!(
                format!("{}{}", mate_1.tag(), mate_2.tag()),
                parent.tag().to_string()
            );
            assert_eq!(mate_1.occurrences(), parent.occurrences());
            assert_eq!(mate_2.occurrences(), parent.occurrences());
            for ((q, q1), q2) in parent
                .qualities()
                .iter()
                .zip(mate_1.qualities())
                .zip(mate_2.qualities())
            {
                assert_eq!(&format!("{q1}{q2}"), q);
            }
        }
    }

    #[test]
    fn split_mates_odd_length_gives_longer_second_mate() {
        let parent = SequenceEntry::new(
            Tag::from_str("ACGTA").unwrap(),
            vec!["!!#KK".to_string(), "#!!KI".to_string()],
        )
        .unwrap();
        let (mate_1, mate_2) = parent.split_mates().unwrap();
        assert_eq!(mate_1.tag().to_string(), "AC");
        assert_eq!(mate_2.tag().to_string(), "GTA");
        assert_eq!(mate_1.quality_average(), "\"!");
        assert_eq!(mate_2.quality_average(), "\"KJ");
    }

    #[test]
    #[should_panic(expected = "SplitBoundary")]
    fn split_mates_single_symbol_fails() {
        let _ = entry("A", 2).split_mates().unwrap();
    }

    #[test]
    fn unpack_yields_one_read_per_occurrence() {
        let e = entry("ACGT", 3);
        let reads = e.unpack();
        assert_eq!(reads.len(), 3);
        assert!(reads.iter().all(|r| r.tag == *e.tag() && r.quality == "IIII"));
    }

    #[test]
    fn longer_prefix_sorts_first() {
        let mut entries = vec![entry("GATTACA", 1), entry("GATTAC", 1), entry("ACGT", 1)];
        sort_sequence_entries(&mut entries);
        let tags: Vec<String> = entries.iter().map(|e| e.tag().to_string()).collect();
        assert_eq!(tags, vec!["ACGT", "GATTACA", "GATTAC"]);
    }

    #[test]
    fn n_ranks_after_t() {
        assert_eq!(
            compare_sequence_entries(&entry("AT", 1), &entry("AN", 1)),
            Ordering::Less
        );
        assert_eq!(
            compare_sequence_entries(&entry("CA", 1), &entry("GA", 1)),
            Ordering::Less
        );
        assert_eq!(
            compare_sequence_entries(&entry("ACGTN", 1), &entry("ACGTN", 4)),
            Ordering::Equal
        );
    }

    #[test]
    fn ordering_is_consistent_over_generated_tags() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut entries: Vec<SequenceEntry> = (1..=6)
            .flat_map(|len| SequenceEntry::simulate_n(len, 1, 1, 15, &mut rng).unwrap())
            .collect();

        for a in &entries {
            assert_eq!(compare_sequence_entries(a, a), Ordering::Equal);
            for b in &entries {
                let ab = compare_sequence_entries(a, b);
                assert_eq!(ab, compare_sequence_entries(b, a).reverse());
                for c in &entries {
                    if ab != Ordering::Greater
                        && compare_sequence_entries(b, c) != Ordering::Greater
                    {
                        assert_ne!(compare_sequence_entries(a, c), Ordering::Greater);
                    }
                }
            }
        }

        sort_sequence_entries(&mut entries);
        let once = entries.clone();
        sort_sequence_entries(&mut entries);
        assert_eq!(once, entries);
        assert!(entries.windows(2).all(|w| {
            compare_sequence_entries(&w[0], &w[1]) != Ordering::Greater
        }));
    }
}
