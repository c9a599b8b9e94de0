//! `AllowedAGCTN` enum for the symbols A, C, G, T, and N
//! Provides the alphabet from which simulated tags are drawn, together with
//! the fixed symbol ranks used when sorting tags.

use crate::Error;
use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use std::fmt;
use std::str::FromStr;

/// Represents the allowed tag symbols: A, C, G, T, or N.
///
/// Symbols are ordered only through [`AllowedAGCTN::rank`],
/// i.e. A < C < G < T < N.
#[derive(Debug, Clone, Default, Copy, PartialEq, Eq, Hash)]
pub enum AllowedAGCTN {
    /// Adenine
    A,
    /// Cytosine
    C,
    /// Guanine
    G,
    /// Thymine
    T,
    /// Any base (N)
    #[default]
    N,
}

impl AllowedAGCTN {
    /// All symbols, in rank order.
    pub const ALL: [AllowedAGCTN; 5] = [
        AllowedAGCTN::A,
        AllowedAGCTN::C,
        AllowedAGCTN::G,
        AllowedAGCTN::T,
        AllowedAGCTN::N,
    ];

    /// Sort priority of the symbol: A=0, C=1, G=2, T=3, N=4.
    ///
    /// ```
    /// use tagsim_core::AllowedAGCTN;
    ///
    /// assert!(AllowedAGCTN::A.rank() < AllowedAGCTN::C.rank());
    /// assert!(AllowedAGCTN::T.rank() < AllowedAGCTN::N.rank());
    /// assert_eq!(AllowedAGCTN::G.rank(), 2);
    /// ```
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            AllowedAGCTN::A => 0,
            AllowedAGCTN::C => 1,
            AllowedAGCTN::G => 2,
            AllowedAGCTN::T => 3,
            AllowedAGCTN::N => 4,
        }
    }
}

// Implements random pick of a variant
impl Distribution<AllowedAGCTN> for StandardUniform {
    /// Allows us to randomly pick a variant, each with probability 1/5
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> AllowedAGCTN {
        AllowedAGCTN::ALL[rng.random_range(0..AllowedAGCTN::ALL.len())]
    }
}

/// Implements conversion from `AllowedAGCTN` to `char`
impl From<AllowedAGCTN> for char {
    fn from(base: AllowedAGCTN) -> Self {
        match base {
            AllowedAGCTN::A => 'A',
            AllowedAGCTN::C => 'C',
            AllowedAGCTN::G => 'G',
            AllowedAGCTN::T => 'T',
            AllowedAGCTN::N => 'N',
        }
    }
}

/// Implements parsing from string
///
/// ```
/// use tagsim_core::AllowedAGCTN;
/// use std::str::FromStr;
///
/// assert_eq!(AllowedAGCTN::from_str("A")?, AllowedAGCTN::A);
/// assert_eq!(AllowedAGCTN::from_str("N")?, AllowedAGCTN::N);
/// assert!(AllowedAGCTN::from_str("X").is_err());
/// # Ok::<(), tagsim_core::Error>(())
/// ```
impl FromStr for AllowedAGCTN {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => AllowedAGCTN::try_from(c),
            _ => Err(Error::InvalidBase(s.to_owned())),
        }
    }
}

/// Implements conversion from `char`
impl TryFrom<char> for AllowedAGCTN {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'A' => Ok(AllowedAGCTN::A),
            'C' => Ok(AllowedAGCTN::C),
            'G' => Ok(AllowedAGCTN::G),
            'T' => Ok(AllowedAGCTN::T),
            'N' => Ok(AllowedAGCTN::N),
            v => Err(Error::InvalidBase(v.to_string())),
        }
    }
}

/// Implements printing of base
impl fmt::Display for AllowedAGCTN {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        char::from(*self).to_string().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Tests the rank table used for sorting
    #[test]
    fn ranks_follow_acgtn() {
        let ranks: Vec<u8> = AllowedAGCTN::ALL.iter().map(|b| b.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
    }

    /// Tests `FromStr` for valid bases
    #[test]
    fn from_str_valid_bases() {
        assert_eq!(AllowedAGCTN::from_str("A").unwrap(), AllowedAGCTN::A);
        assert_eq!(AllowedAGCTN::from_str("C").unwrap(), AllowedAGCTN::C);
        assert_eq!(AllowedAGCTN::from_str("G").unwrap(), AllowedAGCTN::G);
        assert_eq!(AllowedAGCTN::from_str("T").unwrap(), AllowedAGCTN::T);
        assert_eq!(AllowedAGCTN::from_str("N").unwrap(), AllowedAGCTN::N);
    }

    #[test]
    #[should_panic(expected = "InvalidBase")]
    fn from_str_lowercase_fails() {
        let _: AllowedAGCTN = AllowedAGCTN::from_str("a").unwrap();
    }

    #[test]
    #[should_panic(expected = "InvalidBase")]
    fn from_str_two_symbols_fails() {
        let _: AllowedAGCTN = AllowedAGCTN::from_str("AC").unwrap();
    }

    #[test]
    #[should_panic(expected = "InvalidBase")]
    fn from_str_empty_string() {
        let _: AllowedAGCTN = AllowedAGCTN::from_str("").unwrap();
    }

    #[test]
    fn try_from_char_roundtrip() {
        for base in AllowedAGCTN::ALL {
            let as_char: char = base.into();
            assert_eq!(AllowedAGCTN::try_from(as_char).expect("should convert back"), base);
        }
        assert!(AllowedAGCTN::try_from('U').is_err());
    }

    /// Tests `Display` implementation
    #[test]
    fn display_works() {
        let shown: String = AllowedAGCTN::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(shown, "ACGTN");
    }

    /// Tests random generation produces all five variants
    #[test]
    fn random_generation_all_variants() {
        let mut rng = StdRng::seed_from_u64(7);

        let mut generated_bases = std::collections::HashSet::new();
        for _ in 0..1000 {
            let base: AllowedAGCTN = rng.random();
            let _: bool = generated_bases.insert(base);
        }

        assert_eq!(generated_bases.len(), 5);
    }
}
