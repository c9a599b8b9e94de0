//! Quality strings in the Phred+33 encoding: `'!'` stands for 0 and each
//! following code point for one more.

use crate::Error;
use rand::Rng;

/// Code point of quality value 0
pub const QUAL_OFFSET: u8 = b'!';

/// Number of discrete quality levels drawn by the simulator, i.e. `'!'..='K'`
pub const QUAL_LEVELS: u8 = 43;

/// Draws `length` uniform quality values from `0..QUAL_LEVELS` and encodes them.
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tagsim_core::utils::random_quality_string;
///
/// let qual = random_quality_string(20, &mut StdRng::seed_from_u64(3));
/// assert_eq!(qual.len(), 20);
/// assert!(qual.bytes().all(|b| (b'!'..=b'K').contains(&b)));
/// ```
pub fn random_quality_string<R: Rng>(length: usize, rng: &mut R) -> String {
    (0..length)
        .map(|_| char::from(QUAL_OFFSET + rng.random_range(0..QUAL_LEVELS)))
        .collect()
}

/// Checks every symbol lies in the printable range `'!'..='~'`.
///
/// # Errors
/// Returns `InvalidQuality` with the first offending symbol.
pub fn validate_quality(quality: &str) -> Result<(), Error> {
    match quality.chars().find(|c| !('!'..='~').contains(c)) {
        Some(c) => Err(Error::InvalidQuality(c)),
        None => Ok(()),
    }
}

/// Reduces equal-length quality strings to one string holding, at every
/// position, the floor of the mean quality value at that position.
///
/// ```
/// use tagsim_core::utils::quality_average;
///
/// // '!' = 0, '#' = 2, '$' = 3: (0 + 3) / 2 floors to 1, i.e. '"'
/// assert_eq!(quality_average(&["!#", "$#"])?, "\"#");
/// # Ok::<(), tagsim_core::Error>(())
/// ```
///
/// # Errors
/// `EmptyOccurrence` if no strings are given, `LengthMismatch` if two
/// strings differ in length, `InvalidQuality` on a non-printable symbol.
pub fn quality_average<S: AsRef<str>>(qualities: &[S]) -> Result<String, Error> {
    let first = qualities.first().ok_or(Error::EmptyOccurrence)?;
    let length = first.as_ref().len();

    let mut sums = vec![0u64; length];
    for quality in qualities {
        let quality = quality.as_ref();
        validate_quality(quality)?;
        if quality.len() != length {
            return Err(Error::LengthMismatch {
                expected: length,
                found: quality.len(),
            });
        }
        for (sum, b) in sums.iter_mut().zip(quality.bytes()) {
            *sum += u64::from(b - QUAL_OFFSET);
        }
    }

    let count = u64::try_from(qualities.len())?;
    sums.into_iter()
        .map(|sum| -> Result<char, Error> {
            Ok(char::from(QUAL_OFFSET + u8::try_from(sum / count)?))
        })
        .collect()
}
