//! Base-N encoding of integers and byte sequences over configurable
//! symbol alphabets.
//!
//! An [`Alphabet`] defines the numeral system: its distinct ascii symbols
//! are the digits, in order. A [`Radix`] codec over a borrowed alphabet
//! converts u64 values, arbitrary-precision integers and byte sequences
//! to symbol strings and back, under a configured digit order and an
//! optional maximum digit width that wraps values modulo
//! `base^max_digits`.
//!
//! Shuffling an alphabet with a seed yields obfuscated token alphabets
//! for sequential identifiers. The shuffle is deterministic per seed
//! within this crate, but is not a portable permutation and carries no
//! cryptographic guarantees.

pub mod alphabet;
pub mod radix;

pub use self::{
    alphabet::Alphabet,
    radix::{Endianness, Radix},
};
