//! Tests for sequence entries, mates, and tag ordering through the public API

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cmp::Ordering;
use std::str::FromStr;
use tagsim_core::{
    Contains, Error, OrdPair, SequenceEntry, Tag, compare_sequence_entries,
    sort_sequence_entries,
};

fn entry(tag: &str) -> Result<SequenceEntry, Error> {
    SequenceEntry::new(Tag::from_str(tag)?, vec!["5".repeat(tag.len())])
}

#[test]
fn test_simulated_entries_within_bounds() -> Result<(), Error> {
    let bounds = OrdPair::new(1_usize, 20)?;
    let mut rng = StdRng::seed_from_u64(1234);
    for e in SequenceEntry::simulate_n(50, 1, 20, 2000, &mut rng)? {
        assert!(bounds.contains(&e.occurrences()));
        assert_eq!(e.tag().len(), 50);
    }
    Ok(())
}

#[test]
fn test_simulation_is_reproducible() -> Result<(), Error> {
    let run = |seed| SequenceEntry::simulate_n(30, 1, 5, 50, &mut StdRng::seed_from_u64(seed));
    assert_eq!(run(77)?, run(77)?);
    assert_ne!(run(77)?, run(78)?);
    Ok(())
}

#[test]
fn test_read_length_four_single_occurrence() -> Result<(), Error> {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..100 {
        let e = SequenceEntry::simulate(4, 1, 1, &mut rng)?;
        assert_eq!(e.qualities().len(), 1);
        assert_eq!(e.tag().len(), 4);
    }
    Ok(())
}

#[test]
fn test_gattaca_ordering() -> Result<(), Error> {
    let mut entries = vec![entry("GATTACA")?, entry("GATTAC")?, entry("ACGT")?];
    sort_sequence_entries(&mut entries);
    let tags: Vec<String> = entries.iter().map(|e| e.tag().to_string()).collect();
    assert_eq!(tags, ["ACGT", "GATTACA", "GATTAC"]);
    Ok(())
}

#[test]
fn test_equal_tags_compare_equal_regardless_of_qualities() -> Result<(), Error> {
    let a = SequenceEntry::new(Tag::from_str("ACGN")?, vec!["!!!!".into()])?;
    let b = SequenceEntry::new(Tag::from_str("ACGN")?, vec!["KKKK".into(), "IIII".into()])?;
    assert_eq!(compare_sequence_entries(&a, &b), Ordering::Equal);
    Ok(())
}

#[test]
fn test_mates_of_simulated_entries() -> Result<(), Error> {
    let mut rng = StdRng::seed_from_u64(31);
    for parent in SequenceEntry::simulate_n(51, 1, 20, 200, &mut rng)? {
        let (mate_1, mate_2) = parent.split_mates()?;
        assert_eq!(mate_1.tag().len(), 25);
        assert_eq!(mate_2.tag().len(), 26);
        assert_eq!(mate_1.occurrences(), parent.occurrences());
        assert_eq!(mate_2.occurrences(), parent.occurrences());
        assert_eq!(
            format!("{}{}", mate_1.quality_average(), mate_2.quality_average()),
            parent.quality_average()
        );
    }
    Ok(())
}

#[test]
fn test_split_boundary_error() -> Result<(), Error> {
    let err = entry("G")?.split_mates().unwrap_err();
    assert!(matches!(err, Error::SplitBoundary(1)));
    Ok(())
}

#[test]
fn test_empty_occurrence_error() {
    let err = SequenceEntry::new(Tag::from_str("ACGT").expect("valid tag"), vec![]).unwrap_err();
    assert!(matches!(err, Error::EmptyOccurrence));
}
