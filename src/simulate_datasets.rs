//! # Simulate Datasets
//! Generates the datasets a read collapsing tool is tested against:
//! single-end reads, paired-end reads split into two mates, and a
//! per-sample occurrence table. Accepts JSON configuration.
//!
//! ## Example Usage
//!
//! ```no_run
//! use tagsim_core::SimulationConfig;
//! use tagsim_core::simulate_datasets::run;
//!
//! let config_json = r#"{
//!   "dataset_size": 2000,
//!   "read_length": 50,
//!   "occurrences": [1, 20],
//!   "n_samples": 8,
//!   "seed": 42
//! }"#;
//!
//! // Note: every field is optional; missing fields take the defaults of
//! //       `SimulationConfig::default()`. Without a seed, OS entropy is used.
//! let config: SimulationConfig = serde_json::from_str(config_json).unwrap();
//! run(&config, "test_data").unwrap();
//! ```
//!
//! Reads are shuffled so that file order says nothing about generation
//! order, while the summaries (`.tagq`) are sorted by tag. The two outputs
//! are ordered independently.

use crate::file_utils::{write_details, write_fastq, write_tagq};
use crate::{
    DetailsEntry, Error, OrdPair, ReadRecord, SequenceEntry, compare_sequence_entries,
    sort_details_entries, sort_sequence_entries,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Main configuration struct for simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct SimulationConfig {
    /// Number of unique entries simulated per dataset
    pub dataset_size: usize,
    /// Tag length of single-end reads; paired-end mates get half each
    pub read_length: usize,
    /// Inclusive bounds on the multiplicity of a tag, also used for the
    /// per-sample counts of the details table
    pub occurrences: OrdPair<u32>,
    /// Number of samples in the details table
    pub n_samples: usize,
    /// Seed of the random generator; `None` draws one from the OS
    pub seed: Option<u64>,
    /// Base name of the single-end outputs
    pub single_end_name: String,
    /// Base name of the paired-end outputs
    pub paired_end_name: String,
    /// Base name of the details table
    pub details_name: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dataset_size: 2000,
            read_length: 50,
            occurrences: OrdPair::DEFAULT_OCCURRENCES,
            n_samples: 8,
            seed: None,
            single_end_name: String::from("se"),
            paired_end_name: String::from("pe"),
            details_name: String::from("details"),
        }
    }
}

/// Single-end reads and their sorted summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct SingleEndDataset {
    /// One record per occurrence, shuffled
    pub reads: Vec<ReadRecord>,
    /// One entry per unique tag, sorted by tag
    pub summary: Vec<SequenceEntry>,
}

/// Paired-end reads and per-mate summaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct PairedEndDataset {
    /// (mate 1, mate 2) read pairs, shuffled as pairs
    pub reads: Vec<(ReadRecord, ReadRecord)>,
    /// (mate 1, mate 2) entries, sorted by the unsplit parent tag
    pub summary: Vec<(SequenceEntry, SequenceEntry)>,
}

/// Details table contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct DetailsDataset {
    /// Number of sample columns
    pub n_samples: usize,
    /// Rows, sorted lexicographically by per-sample counts
    pub entries: Vec<DetailsEntry>,
}

/// Flattens entries into shuffled reads and sorts the entries for the summary.
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tagsim_core::SequenceEntry;
/// use tagsim_core::simulate_datasets::assemble_single_end;
///
/// let mut rng = StdRng::seed_from_u64(0);
/// let entries = SequenceEntry::simulate_n(2, 2, 2, 1, &mut rng)?;
/// let dataset = assemble_single_end(entries, &mut rng);
/// assert_eq!(dataset.reads.len(), 2);
/// assert_eq!(dataset.summary.len(), 1);
/// # Ok::<(), tagsim_core::Error>(())
/// ```
pub fn assemble_single_end<R: Rng>(
    mut entries: Vec<SequenceEntry>,
    rng: &mut R,
) -> SingleEndDataset {
    let mut reads: Vec<ReadRecord> = entries.iter().flat_map(SequenceEntry::unpack).collect();
    reads.shuffle(rng);
    sort_sequence_entries(&mut entries);
    SingleEndDataset {
        reads,
        summary: entries,
    }
}

/// Splits every entry into mates, pairs up their reads, and shuffles the
/// pairs so both mates of a read move together. Summaries follow the tag
/// order of the unsplit parents, so both mates of a parent share a row index.
///
/// # Errors
/// `SplitBoundary` if any entry has a tag shorter than two symbols.
pub fn assemble_paired_end<R: Rng>(
    entries: Vec<SequenceEntry>,
    rng: &mut R,
) -> Result<PairedEndDataset, Error> {
    let mut families = entries
        .into_iter()
        .map(|parent| -> Result<_, Error> {
            let mates = parent.split_mates()?;
            Ok((parent, mates))
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let mut reads: Vec<(ReadRecord, ReadRecord)> = families
        .iter()
        .flat_map(|(_, (mate_1, mate_2))| mate_1.unpack().into_iter().zip(mate_2.unpack()))
        .collect();
    reads.shuffle(rng);

    families.sort_by(|a, b| compare_sequence_entries(&a.0, &b.0));
    Ok(PairedEndDataset {
        reads,
        summary: families.into_iter().map(|(_, mates)| mates).collect(),
    })
}

/// Sorts details entries into a table.
#[must_use]
pub fn assemble_details(n_samples: usize, mut entries: Vec<DetailsEntry>) -> DetailsDataset {
    sort_details_entries(&mut entries);
    DetailsDataset { n_samples, entries }
}

/// Simulates and assembles a single-end dataset.
///
/// # Errors
/// Returns errors from simulating entries.
pub fn simulate_single_end<R: Rng>(
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<SingleEndDataset, Error> {
    let entries = SequenceEntry::simulate_n(
        config.read_length,
        config.occurrences.get_low(),
        config.occurrences.get_high(),
        config.dataset_size,
        rng,
    )?;
    Ok(assemble_single_end(entries, rng))
}

/// Simulates and assembles a paired-end dataset.
///
/// # Errors
/// Returns errors from simulating entries or from splitting them into mates.
pub fn simulate_paired_end<R: Rng>(
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<PairedEndDataset, Error> {
    let entries = SequenceEntry::simulate_n(
        config.read_length,
        config.occurrences.get_low(),
        config.occurrences.get_high(),
        config.dataset_size,
        rng,
    )?;
    assemble_paired_end(entries, rng)
}

/// Simulates and assembles a details table.
///
/// # Errors
/// Returns errors from simulating entries.
pub fn simulate_details<R: Rng>(
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<DetailsDataset, Error> {
    let entries = DetailsEntry::simulate_n(
        config.n_samples,
        config.occurrences.get_low(),
        config.occurrences.get_high(),
        config.dataset_size,
        rng,
    )?;
    Ok(assemble_details(config.n_samples, entries))
}

/// Paths of every file written by [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct OutputPaths {
    /// Single-end reads, `<se>.fq`
    pub single_end_reads: PathBuf,
    /// Single-end summary, `<se>.tagq`
    pub single_end_summary: PathBuf,
    /// Mate 1 reads, `<pe>.1.fq`
    pub paired_end_reads_1: PathBuf,
    /// Mate 2 reads, `<pe>.2.fq`
    pub paired_end_reads_2: PathBuf,
    /// Mate 1 summary, `<pe>.1.tagq`
    pub paired_end_summary_1: PathBuf,
    /// Mate 2 summary, `<pe>.2.tagq`
    pub paired_end_summary_2: PathBuf,
    /// Details table, `<details>.tab`
    pub details: PathBuf,
}

impl OutputPaths {
    /// Builds output paths inside `output_dir` from the configured base names.
    ///
    /// ```
    /// use std::path::Path;
    /// use tagsim_core::SimulationConfig;
    /// use tagsim_core::simulate_datasets::OutputPaths;
    ///
    /// let paths = OutputPaths::new(&SimulationConfig::default(), "out");
    /// assert_eq!(paths.paired_end_reads_2, Path::new("out/pe.2.fq"));
    /// assert_eq!(paths.details, Path::new("out/details.tab"));
    /// ```
    pub fn new<P: AsRef<Path> + ?Sized>(config: &SimulationConfig, output_dir: &P) -> Self {
        let dir = output_dir.as_ref();
        let se = &config.single_end_name;
        let pe = &config.paired_end_name;
        Self {
            single_end_reads: dir.join(format!("{se}.fq")),
            single_end_summary: dir.join(format!("{se}.tagq")),
            paired_end_reads_1: dir.join(format!("{pe}.1.fq")),
            paired_end_reads_2: dir.join(format!("{pe}.2.fq")),
            paired_end_summary_1: dir.join(format!("{pe}.1.tagq")),
            paired_end_summary_2: dir.join(format!("{pe}.2.tagq")),
            details: dir.join(format!("{}.tab", config.details_name)),
        }
    }
}

fn create<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>, Error> {
    log::debug!("writing {}", path.as_ref().display());
    Ok(BufWriter::new(File::create(path)?))
}

/// Main function: simulates all three datasets and writes them to `output_dir`,
/// which is created if needed. Pre-existing files are overwritten.
///
/// All datasets are generated before anything is written, so a failure
/// leaves no partial output behind.
///
/// # Errors
/// Returns an error if simulation fails or files cannot be written.
pub fn run<P>(config: &SimulationConfig, output_dir: &P) -> Result<OutputPaths, Error>
where
    P: AsRef<Path> + ?Sized,
{
    log::info!("Automatic test data generation");
    log::info!("dataset unique reads  : {} reads", config.dataset_size);
    log::info!("reads size            : {} bp", config.read_length);
    log::info!("reads occurrences     : {} times", config.occurrences);
    log::info!("n samples             : {} samples", config.n_samples);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    log::info!("simulate single-end dataset");
    let single_end = simulate_single_end(config, &mut rng)?;
    log::info!("simulate paired-end dataset");
    let paired_end = simulate_paired_end(config, &mut rng)?;
    log::info!("simulate occurrences table");
    let details = simulate_details(config, &mut rng)?;

    fs::create_dir_all(output_dir)?;
    let paths = OutputPaths::new(config, output_dir);

    write_fastq(&single_end.reads, None, create(&paths.single_end_reads)?)?;
    write_tagq(&single_end.summary, create(&paths.single_end_summary)?)?;
    log::debug!(
        "single-end: {} reads, {} unique tags",
        single_end.reads.len(),
        single_end.summary.len()
    );

    write_fastq(
        paired_end.reads.iter().map(|pair| &pair.0),
        Some(1),
        create(&paths.paired_end_reads_1)?,
    )?;
    write_fastq(
        paired_end.reads.iter().map(|pair| &pair.1),
        Some(2),
        create(&paths.paired_end_reads_2)?,
    )?;
    write_tagq(
        paired_end.summary.iter().map(|mates| &mates.0),
        create(&paths.paired_end_summary_1)?,
    )?;
    write_tagq(
        paired_end.summary.iter().map(|mates| &mates.1),
        create(&paths.paired_end_summary_2)?,
    )?;
    log::debug!("paired-end: {} read pairs", paired_end.reads.len());

    write_details(details.n_samples, &details.entries, create(&paths.details)?)?;

    log::info!("finished writing datasets to {}", output_dir.as_ref().display());
    Ok(paths)
}

/// Temporary dataset simulation with automatic cleanup
///
/// Runs a simulation into a fresh, uniquely named temporary directory and
/// removes the directory when dropped.
#[derive(Debug)]
pub struct TempDatasetSimulation {
    paths: OutputPaths,
    dir: PathBuf,
}

impl TempDatasetSimulation {
    /// Creates a new temporary simulation from a configuration
    ///
    /// # Errors
    /// Returns an error if the simulation run fails
    pub fn new(config: &SimulationConfig) -> Result<Self, Error> {
        let dir = std::env::temp_dir().join(format!("tagsim_{}", Uuid::new_v4()));
        match run(config, &dir) {
            Ok(paths) => Ok(Self { paths, dir }),
            Err(e) => {
                drop(fs::remove_dir_all(&dir));
                Err(e)
            }
        }
    }

    /// Returns the paths of the generated files
    #[must_use]
    pub fn paths(&self) -> &OutputPaths {
        &self.paths
    }

    /// Returns the temporary directory holding the files
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Drop for TempDatasetSimulation {
    fn drop(&mut self) {
        // Ignore errors during cleanup - directory may already be deleted
        drop(fs::remove_dir_all(&self.dir));
    }
}
