pub mod decode;
pub mod encode;

pub use crate::alphabet::Alphabet;

use num_bigint::BigUint;
use num_traits::Pow;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    AlphabetTooSmall { size: usize },
    MaxDigitsZero,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AlphabetTooSmall { size } => write!(f, "Alphabet with {} symbols (at least 2 required)", size),
            Error::MaxDigitsZero => write!(f, "Maximum digit count must be positive"),
        }
    }
}

/// Placement of the most significant digit in the encoded output.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Endianness {
    MostSignificantFirst,
    LeastSignificantFirst,
}

/// A base-N codec over a borrowed [`Alphabet`].
///
/// When `max_digits` is bounded, values are reduced modulo
/// `base^max_digits` on both encode and decode. This wraparound is a
/// capacity policy, not an error.
pub struct Radix<'a> {
    alphabet: &'a Alphabet,
    base: u64,
    endianness: Endianness,
    max_digits: Option<u32>,
}

impl<'a> Radix<'a> {
    pub fn new(endianness: Endianness, max_digits: Option<u32>, alphabet: &'a Alphabet) -> Result<Self, Error> {
        let size = alphabet.size();
        if size < 2 {
            return Err(Error::AlphabetTooSmall { size });
        }
        if max_digits == Some(0) {
            return Err(Error::MaxDigitsZero);
        }
        Ok(Self {
            alphabet,
            base: size as u64,
            endianness,
            max_digits,
        })
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    pub fn max_digits(&self) -> Option<u32> {
        self.max_digits
    }

    // None when unbounded, and also when base^max_digits exceeds u64:
    // every u64 value then fits within the width and no reduction applies.
    fn modulus(&self) -> Option<u64> {
        self.max_digits.and_then(|digits| self.base.checked_pow(digits))
    }

    fn truncate(&self, value: u64) -> u64 {
        match self.modulus() {
            Some(modulus) => value % modulus,
            None => value,
        }
    }

    fn truncate_bigint(&self, value: BigUint) -> BigUint {
        match self.max_digits {
            Some(digits) => value % BigUint::from(self.base).pow(digits),
            None => value,
        }
    }
}
