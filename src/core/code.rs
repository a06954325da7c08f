//! Secret and guess representation
//!
//! A code is an ordered sequence of distinct symbols. Secrets and guesses share
//! this type, so any candidate can be played as a guess.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single alphabet symbol (alphabets are `0..alphabet_len`)
pub type Symbol = usize;

/// An ordered sequence of distinct symbols
///
/// Ordering is lexicographic over the symbols, which is also the order the
/// candidate space is generated in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(Box<[Symbol]>);

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("code must contain at least one symbol")]
    Empty,
    #[error("symbol {0} appears more than once")]
    RepeatedSymbol(Symbol),
    #[error("invalid symbol '{0}'")]
    InvalidSymbol(String),
}

impl Code {
    /// Create a new code from a slice of symbols
    ///
    /// # Errors
    /// Returns `CodeError` if the slice is empty or repeats a symbol.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::Code;
    ///
    /// let code = Code::new(&[1, 2, 3, 4]).unwrap();
    /// assert_eq!(code.len(), 4);
    ///
    /// assert!(Code::new(&[1, 1]).is_err());
    /// assert!(Code::new(&[]).is_err());
    /// ```
    pub fn new(symbols: &[Symbol]) -> Result<Self, CodeError> {
        if symbols.is_empty() {
            return Err(CodeError::Empty);
        }

        for (i, symbol) in symbols.iter().enumerate() {
            if symbols[..i].contains(symbol) {
                return Err(CodeError::RepeatedSymbol(*symbol));
            }
        }

        Ok(Self(symbols.into()))
    }

    /// Wrap symbols the caller already knows to be distinct
    pub(crate) fn from_distinct(symbols: &[Symbol]) -> Self {
        debug_assert!(
            Self::new(symbols).is_ok(),
            "symbols must be non-empty and distinct"
        );
        Self(symbols.into())
    }

    /// Get the symbols in order
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    /// Number of symbols (the secret length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a validated code
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if the code contains a symbol at any position
    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.0.contains(&symbol)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, symbol) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{symbol}")?;
        }
        write!(f, ")")
    }
}

/// Parse a code from text
///
/// Accepts separated symbols (`"1,2,3"`, `"10 11 12"`) or, when no separator
/// is present, one decimal digit per symbol (`"1234"`).
impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let separated = s.contains(|c: char| c == ',' || c.is_whitespace());

        let symbols = if separated {
            s.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|part| !part.is_empty())
                .map(|part| {
                    part.parse::<Symbol>()
                        .map_err(|_| CodeError::InvalidSymbol(part.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?
        } else {
            s.chars()
                .map(|c| {
                    c.to_digit(10)
                        .and_then(|d| Symbol::try_from(d).ok())
                        .ok_or_else(|| CodeError::InvalidSymbol(c.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        Self::new(&symbols)
    }
}
