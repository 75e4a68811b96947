use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    NonAsciiCharacter { character: u8, index: usize },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    NonAsciiCharacter { character: u8, index: usize },
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonAsciiCharacter { character, index } => {
                write!(f, "Non-ascii character {:#02x} at index {}", character, index)
            }
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

/// An ordered set of distinct ascii symbols defining a numeral system.
///
/// The position of a symbol is its digit value. Duplicate symbols in the
/// input are dropped, keeping the first occurrence, so the size of the
/// alphabet is the number of distinct symbols supplied.
pub struct Alphabet {
    symbols: Vec<u8>,
    indexes: [Option<u8>; 128],
}

impl Alphabet {
    pub fn new(symbols: impl AsRef<[u8]>) -> Result<Self, Error> {
        let symbols = symbols.as_ref();
        let mut alphabet = Self {
            symbols: Vec::with_capacity(symbols.len()),
            indexes: [None; 128],
        };
        for (index, &character) in symbols.iter().enumerate() {
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { character, index });
            }
            if alphabet.indexes[character as usize].is_none() {
                alphabet.indexes[character as usize] = Some(alphabet.symbols.len() as u8);
                alphabet.symbols.push(character);
            }
        }
        Ok(alphabet)
    }

    /// Deterministically permutes the symbol order from `seed` and returns
    /// the alphabet for chaining.
    ///
    /// The same seed always produces the same order within this crate; the
    /// permutation is not guaranteed to match any other implementation.
    pub fn shuffle(mut self, seed: i64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
        self.symbols.shuffle(&mut rng);
        self.rebuild_indexes();
        self
    }

    fn rebuild_indexes(&mut self) {
        self.indexes = [None; 128];
        for (index, &character) in self.symbols.iter().enumerate() {
            self.indexes[character as usize] = Some(index as u8);
        }
    }

    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn symbol(&self, digit: usize) -> u8 {
        self.symbols[digit]
    }

    pub fn digit(&self, character: u8, index: usize) -> Result<u8, DecodeError> {
        if character >= 128 {
            return Err(DecodeError::NonAsciiCharacter { character, index });
        }
        match self.indexes[character as usize] {
            Some(digit) => Ok(digit),
            None => Err(DecodeError::InvalidCharacter {
                character: character as char,
                index,
            }),
        }
    }
}
