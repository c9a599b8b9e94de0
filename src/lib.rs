//! # tagsim
//!
//! Simulates sequencing-read datasets for exercising the test suite of a
//! read collapsing tool: single-end FASTQ reads, paired-end FASTQ reads
//! split into two mates, tab-separated tag summaries, and per-sample
//! occurrence tables.
//!
//! Every random draw goes through a generator handed in by the caller, so a
//! seeded [`rand::rngs::StdRng`] reproduces a dataset exactly.
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tagsim_core::{SequenceEntry, sort_sequence_entries};
//!
//! let mut rng = StdRng::seed_from_u64(2024);
//! let mut entries = SequenceEntry::simulate_n(50, 1, 20, 100, &mut rng)?;
//! sort_sequence_entries(&mut entries);
//! let (mate_1, mate_2) = entries[0].split_mates()?;
//! assert_eq!(mate_1.occurrences(), mate_2.occurrences());
//! # Ok::<(), tagsim_core::Error>(())
//! ```

// Declare the modules.
pub mod details_entry;
pub mod error;
pub mod file_utils;
pub mod sequence_entry;
pub mod simulate_datasets;
pub mod utils;

// Re-exports
pub use details_entry::{DetailsEntry, compare_details_entries, sort_details_entries};
pub use error::Error;
pub use sequence_entry::{
    ReadRecord, SequenceEntry, compare_sequence_entries, compare_tags, sort_sequence_entries,
};
pub use simulate_datasets::{SimulationConfig, TempDatasetSimulation};
pub use utils::{AllowedAGCTN, Contains, OrdPair, Tag};
