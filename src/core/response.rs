//! Bulls and cows feedback calculation
//!
//! For every position of the guess:
//! - a bull is scored when the guessed symbol matches the secret's symbol there
//! - otherwise a cow is scored when the guessed symbol occurs anywhere in the secret
//!
//! Codes never repeat a symbol, so a cow always means "present at another position".

use super::Code;
use std::fmt;

/// Feedback for a guess against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Response {
    bulls: usize,
    cows: usize,
}

impl Response {
    /// Create a response from raw counts
    #[inline]
    #[must_use]
    pub const fn new(bulls: usize, cows: usize) -> Self {
        Self { bulls, cows }
    }

    /// Symbols in the exact position
    #[inline]
    #[must_use]
    pub const fn bulls(self) -> usize {
        self.bulls
    }

    /// Symbols present in the secret at a different position
    #[inline]
    #[must_use]
    pub const fn cows(self) -> usize {
        self.cows
    }

    /// Check if every position matched for a code of `secret_len` symbols
    #[inline]
    #[must_use]
    pub const fn is_solved(self, secret_len: usize) -> bool {
        self.bulls == secret_len
    }

    /// Calculate the response when `guess` is played against `secret`
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::{Code, Response};
    ///
    /// let guess = Code::new(&[1, 2, 3, 4]).unwrap();
    /// let secret = Code::new(&[1, 3, 5, 2]).unwrap();
    ///
    /// // 1 is a bull, 2 and 3 are cows, 4 is absent
    /// assert_eq!(Response::calculate(&guess, &secret), Response::new(1, 2));
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, secret: &Code) -> Self {
        Self::between(guess.symbols(), secret.symbols())
    }

    /// Calculate the response for any symbol type supporting equality
    ///
    /// Positions beyond the shorter sequence are ignored.
    #[must_use]
    pub fn between<T: PartialEq>(guess: &[T], secret: &[T]) -> Self {
        let mut response = Self::default();

        for (g, s) in guess.iter().zip(secret) {
            if g == s {
                response.bulls += 1;
            } else if secret.contains(g) {
                response.cows += 1;
            }
        }

        response
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B{}C", self.bulls, self.cows)
    }
}
