use super::{Endianness, Radix};
use crate::alphabet;
use num_bigint::BigUint;
use num_traits::Zero;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidCharacter { character: char, index: usize },
    NonAsciiCharacter { character: u8, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Error::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
            alphabet::DecodeError::NonAsciiCharacter { character, index } => Error::NonAsciiCharacter { character, index },
        }
    }
}

impl Radix<'_> {
    /// Decodes a string of alphabet symbols back into the value it encodes.
    ///
    /// The empty string decodes to zero. Symbols outside the alphabet are
    /// an error; values wider than 64 bits wrap. Use
    /// [`decode_bigint`](Radix::decode_bigint) when the input may encode
    /// more than a u64.
    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<u64, Error> {
        let digits = self.digits(input.as_ref())?;
        let mut value: u64 = 0;
        for &digit in &digits {
            value = value.wrapping_mul(self.base).wrapping_add(digit as u64);
        }
        Ok(self.truncate(value))
    }

    pub fn decode_bigint(&self, input: impl AsRef<[u8]>) -> Result<BigUint, Error> {
        Ok(self.truncate_bigint(self.accumulate(input.as_ref())?))
    }

    /// Decodes a string of alphabet symbols back into the byte sequence it
    /// encodes.
    ///
    /// The inverse of [`encode_bytes`](Radix::encode_bytes) up to leading
    /// zero bytes, which the base-256 integer interpretation cannot
    /// represent: a value of zero decodes to an empty byte sequence.
    pub fn decode_bytes(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let value = self.accumulate(input.as_ref())?;
        if value.is_zero() {
            return Ok(Vec::new());
        }
        Ok(value.to_bytes_be())
    }

    fn accumulate(&self, input: &[u8]) -> Result<BigUint, Error> {
        let digits = self.digits(input)?;
        let mut value = BigUint::zero();
        for &digit in &digits {
            value = value * self.base + digit as u64;
        }
        Ok(value)
    }

    // digit values reordered most-significant-first
    fn digits(&self, input: &[u8]) -> Result<Vec<u8>, Error> {
        let mut digits = input
            .iter()
            .enumerate()
            .map(|(index, &character)| self.alphabet.digit(character, index))
            .collect::<Result<Vec<u8>, _>>()?;
        if self.endianness == Endianness::LeastSignificantFirst {
            digits.reverse();
        }
        Ok(digits)
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::alphabet::Alphabet;
    use crate::radix::{Endianness, Radix};
    use num_bigint::BigUint;

    const HEX: &[u8] = b"0123456789abcdef";
    const BASE58: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

    #[test]
    fn decode() {
        let alphabet = Alphabet::new(HEX).unwrap();
        let radix = Radix::new(Endianness::MostSignificantFirst, None, &alphabet).unwrap();
        assert_eq!(radix.decode(""), Ok(0));
        assert_eq!(radix.decode("1"), Ok(1));
        assert_eq!(radix.decode("ff"), Ok(255));
        assert_eq!(radix.decode("deadbeef"), Ok(0xdeadbeef));
        assert_eq!(radix.decode("ffffffffffffffff"), Ok(u64::MAX));
    }

    #[test]
    fn decode_least_significant_first() {
        let alphabet = Alphabet::new(HEX).unwrap();
        let radix = Radix::new(Endianness::LeastSignificantFirst, None, &alphabet).unwrap();
        assert_eq!(radix.decode("feebdaed"), Ok(0xdeadbeef));
    }

    #[test]
    fn decode_wraps_beyond_max_digits() {
        let alphabet = Alphabet::new(HEX).unwrap();
        let radix = Radix::new(Endianness::MostSignificantFirst, Some(2), &alphabet).unwrap();
        assert_eq!(radix.decode("fff"), Ok(0xff));
        assert_eq!(radix.decode("100"), Ok(0));
    }

    #[test]
    fn decode_rejects_unknown_characters() {
        let alphabet = Alphabet::new(HEX).unwrap();
        let radix = Radix::new(Endianness::MostSignificantFirst, None, &alphabet).unwrap();
        assert_eq!(
            radix.decode("12g4"),
            Err(Error::InvalidCharacter { character: 'g', index: 2 })
        );
        assert_eq!(
            radix.decode([b'1', 0xc3]),
            Err(Error::NonAsciiCharacter { character: 0xc3, index: 1 })
        );
    }

    #[test]
    fn decode_bigint() {
        let alphabet = Alphabet::new(HEX).unwrap();
        let radix = Radix::new(Endianness::MostSignificantFirst, None, &alphabet).unwrap();
        assert_eq!(radix.decode_bigint(""), Ok(BigUint::from(0u32)));
        assert_eq!(
            radix.decode_bigint("ffffffffffffffffffffffffffffffff"),
            Ok(BigUint::from(u128::MAX))
        );
    }

    #[test]
    fn decode_bytes() {
        let alphabet = Alphabet::new(BASE58).unwrap();
        let radix = Radix::new(Endianness::MostSignificantFirst, None, &alphabet).unwrap();
        assert_eq!(radix.decode_bytes(""), Ok(vec![]));
        assert_eq!(radix.decode_bytes("2g"), Ok(b"a".to_vec()));
        assert_eq!(radix.decode_bytes("a3gV"), Ok(b"bbb".to_vec()));
        assert_eq!(radix.decode_bytes("aPEr"), Ok(b"ccc".to_vec()));
        assert_eq!(radix.decode_bytes("2cFupjhnEsSn59qHXstmK2ffpLv2"), Ok(b"simply a long string".to_vec()));
        assert_eq!(radix.decode_bytes("ABnLTmg"), Ok(vec![0x51, 0x6b, 0x6f, 0xcd, 0x0f]));
        assert_eq!(radix.decode_bytes("3EFU7m"), Ok(vec![0x57, 0x2e, 0x47, 0x94]));
    }

    #[test]
    fn decode_bytes_rejects_unknown_characters() {
        let alphabet = Alphabet::new(BASE58).unwrap();
        let radix = Radix::new(Endianness::MostSignificantFirst, None, &alphabet).unwrap();
        assert_eq!(
            radix.decode_bytes("a0gV"),
            Err(Error::InvalidCharacter { character: '0', index: 1 })
        );
    }

    #[test]
    fn decode_bytes_least_significant_first() {
        let alphabet = Alphabet::new(HEX).unwrap();
        let radix = Radix::new(Endianness::LeastSignificantFirst, None, &alphabet).unwrap();
        assert_eq!(radix.decode_bytes(radix.encode_bytes(b"Hello world")), Ok(b"Hello world".to_vec()));
    }
}
