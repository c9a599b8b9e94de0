//! Utility functions writing simulated datasets: FASTQ reads, tab-separated
//! tag summaries, and the per-sample details table.

use crate::{DetailsEntry, Error, ReadRecord, SequenceEntry};
use csv::{QuoteStyle, WriterBuilder};
use std::io::Write;
use std::iter;

/// Tab-separated writer without quoting; quality strings may contain `"`.
fn tsv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(QuoteStyle::Never)
        .has_headers(false)
        .from_writer(writer)
}

/// Writes reads as FASTQ, naming them `@read<i>` or, for a mate,
/// `@read<i>.<mate>`, where `i` counts from zero in input order.
///
/// # Errors
///
/// Returns an error if writing fails.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use tagsim_core::{Error, SequenceEntry, Tag, file_utils::write_fastq};
///
/// let entry = SequenceEntry::new(Tag::from_str("ACGT")?, vec!["!!!!".into(), "IIII".into()])?;
/// let mut out = Vec::new();
/// write_fastq(&entry.unpack(), Some(2), &mut out)?;
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "@read0.2\nACGT\n+\n!!!!\n@read1.2\nACGT\n+\nIIII\n"
/// );
/// # Ok::<(), Error>(())
/// ```
pub fn write_fastq<'a, I, W>(records: I, mate: Option<u8>, mut writer: W) -> Result<(), Error>
where
    I: IntoIterator<Item = &'a ReadRecord>,
    W: Write,
{
    for (i, record) in records.into_iter().enumerate() {
        match mate {
            Some(m) => writeln!(writer, "@read{i}.{m}")?,
            None => writeln!(writer, "@read{i}")?,
        }
        writeln!(writer, "{}", record.tag)?;
        writeln!(writer, "+")?;
        writeln!(writer, "{}", record.quality)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes one `tag<TAB>quality average<TAB>occurrences` line per entry.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_tagq<'a, I, W>(entries: I, writer: W) -> Result<(), Error>
where
    I: IntoIterator<Item = &'a SequenceEntry>,
    W: Write,
{
    let mut wtr = tsv_writer(writer);
    for entry in entries {
        wtr.write_record([
            entry.tag().to_string(),
            entry.quality_average().to_string(),
            entry.occurrences().to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the details table: a header `Overall  Sample0 .. Sample<n-1>`
/// followed by one row per entry, the overall count first.
///
/// # Errors
///
/// Returns an error if writing fails or an entry does not have
/// `n_samples` counts.
///
/// # Examples
///
/// ```
/// use tagsim_core::{DetailsEntry, Error, file_utils::write_details};
///
/// let entries = vec![DetailsEntry::new(vec![3, 4]), DetailsEntry::new(vec![1, 0])];
/// let mut out = Vec::new();
/// write_details(2, &entries, &mut out)?;
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "Overall\tSample0\tSample1\n7\t3\t4\n1\t1\t0\n"
/// );
/// # Ok::<(), Error>(())
/// ```
pub fn write_details<'a, I, W>(n_samples: usize, entries: I, writer: W) -> Result<(), Error>
where
    I: IntoIterator<Item = &'a DetailsEntry>,
    W: Write,
{
    let mut wtr = tsv_writer(writer);
    wtr.write_record(
        iter::once("Overall".to_string()).chain((0..n_samples).map(|i| format!("Sample{i}"))),
    )?;
    for entry in entries {
        wtr.write_record(
            iter::once(entry.overall().to_string())
                .chain(entry.occurrences().iter().map(ToString::to_string)),
        )?;
    }
    wtr.flush()?;
    Ok(())
}
