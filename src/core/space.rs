//! Candidate space generation
//!
//! The candidate space holds every code of a given length drawn without
//! repetition from the alphabet, in lexicographic order. It is built once per
//! run and only ever read afterwards.

use super::{Code, Symbol};
use crate::error::ConfigError;

/// All possible secrets for one alphabet length and secret length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSpace {
    alphabet_len: usize,
    secret_len: usize,
    codes: Vec<Code>,
}

impl CandidateSpace {
    /// Generate every permutation of `secret_len` distinct symbols from `0..alphabet_len`
    ///
    /// # Errors
    /// Returns `ConfigError` if the secret length is zero or exceeds the
    /// alphabet length, or if the number of codes overflows `usize`.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::{CandidateSpace, Code};
    ///
    /// let space = CandidateSpace::new(3, 2).unwrap();
    /// assert_eq!(space.len(), 6);
    /// assert_eq!(space.codes()[3], Code::new(&[1, 2]).unwrap());
    ///
    /// assert!(CandidateSpace::new(3, 4).is_err());
    /// ```
    pub fn new(alphabet_len: usize, secret_len: usize) -> Result<Self, ConfigError> {
        let size = Self::size_for(alphabet_len, secret_len)?;

        let mut codes = Vec::with_capacity(size);
        let mut prefix = Vec::with_capacity(secret_len);
        let mut used = vec![false; alphabet_len];
        extend_permutations(&mut prefix, &mut used, secret_len, &mut codes);

        Ok(Self {
            alphabet_len,
            secret_len,
            codes,
        })
    }

    /// Number of codes `new` would generate: `A·(A-1)·…·(A-L+1)`
    ///
    /// # Errors
    /// Returns the same configuration errors as [`Self::new`].
    pub fn size_for(alphabet_len: usize, secret_len: usize) -> Result<usize, ConfigError> {
        if secret_len < 1 {
            return Err(ConfigError::SecretTooShort);
        }
        if secret_len > alphabet_len {
            return Err(ConfigError::SecretLongerThanAlphabet {
                secret_len,
                alphabet_len,
            });
        }

        ((alphabet_len - secret_len + 1)..=alphabet_len)
            .try_fold(1usize, |size, factor| size.checked_mul(factor))
            .ok_or(ConfigError::SpaceTooLarge {
                alphabet_len,
                secret_len,
            })
    }

    /// Every code in generation order
    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn alphabet_len(&self) -> usize {
        self.alphabet_len
    }

    #[inline]
    #[must_use]
    pub const fn secret_len(&self) -> usize {
        self.secret_len
    }

    /// Check if a code belongs to this space (right length, symbols inside the alphabet)
    #[must_use]
    pub fn admits(&self, code: &Code) -> bool {
        code.len() == self.secret_len
            && code
                .symbols()
                .iter()
                .all(|&symbol| symbol < self.alphabet_len)
    }
}

fn extend_permutations(
    prefix: &mut Vec<Symbol>,
    used: &mut [bool],
    secret_len: usize,
    codes: &mut Vec<Code>,
) {
    if prefix.len() == secret_len {
        codes.push(Code::from_distinct(prefix));
        return;
    }

    // Allow: `used` is re-borrowed by the recursive call inside the loop
    #[allow(clippy::needless_range_loop)]
    for symbol in 0..used.len() {
        if used[symbol] {
            continue;
        }

        used[symbol] = true;
        prefix.push(symbol);
        extend_permutations(prefix, used, secret_len, codes);
        prefix.pop();
        used[symbol] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_space_in_lexicographic_order() {
        let space = CandidateSpace::new(3, 2).unwrap();
        let expected: Vec<Code> = [[0, 1], [0, 2], [1, 0], [1, 2], [2, 0], [2, 1]]
            .iter()
            .map(|s| Code::new(s).unwrap())
            .collect();

        assert_eq!(space.codes(), expected.as_slice());
        assert_eq!(space.alphabet_len(), 3);
        assert_eq!(space.secret_len(), 2);
    }

    #[test]
    fn default_space_size() {
        let space = CandidateSpace::new(10, 4).unwrap();
        assert_eq!(space.len(), 5040);
        assert_eq!(CandidateSpace::size_for(10, 4), Ok(5040));
    }

    #[test]
    fn full_length_space_is_all_orderings() {
        let space = CandidateSpace::new(4, 4).unwrap();
        assert_eq!(space.len(), 24);
    }

    #[test]
    fn codes_are_distinct_and_sorted() {
        let space = CandidateSpace::new(6, 3).unwrap();
        assert!(space.codes().windows(2).all(|w| w[0] < w[1]));
        assert!(space.codes().iter().all(|c| space.admits(c)));
    }

    #[test]
    fn rejects_secret_longer_than_alphabet() {
        assert_eq!(
            CandidateSpace::new(3, 4),
            Err(ConfigError::SecretLongerThanAlphabet {
                secret_len: 4,
                alphabet_len: 3
            })
        );
    }

    #[test]
    fn rejects_empty_secret() {
        assert_eq!(CandidateSpace::new(10, 0), Err(ConfigError::SecretTooShort));
    }

    #[test]
    fn alphabet_beyond_one_byte() {
        let singles = CandidateSpace::new(257, 1).unwrap();
        assert_eq!(singles.len(), 257);
        assert_eq!(singles.codes()[256], Code::new(&[256]).unwrap());

        let pairs = CandidateSpace::new(300, 2).unwrap();
        assert_eq!(pairs.len(), 89_700);
        assert_eq!(pairs.codes()[0], Code::new(&[0, 1]).unwrap());
        assert_eq!(pairs.codes()[89_699], Code::new(&[299, 298]).unwrap());
        assert!(pairs.admits(&Code::new(&[299, 0]).unwrap()));
    }

    #[test]
    fn rejects_uncountable_space() {
        assert_eq!(
            CandidateSpace::size_for(usize::MAX, 3),
            Err(ConfigError::SpaceTooLarge {
                alphabet_len: usize::MAX,
                secret_len: 3
            })
        );
    }

    #[test]
    fn admits_checks_length_and_alphabet() {
        let space = CandidateSpace::new(4, 2).unwrap();
        assert!(space.admits(&Code::new(&[3, 0]).unwrap()));
        assert!(!space.admits(&Code::new(&[4, 0]).unwrap()));
        assert!(!space.admits(&Code::new(&[0, 1, 2]).unwrap()));
    }
}
