use super::{Endianness, Radix};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

impl Radix<'_> {
    /// Encodes `value` as a string of alphabet symbols.
    ///
    /// Zero encodes to the empty string: no symbol is emitted for it.
    pub fn encode(&self, value: u64) -> String {
        let mut value = self.truncate(value);
        let mut output = Vec::with_capacity(self.max_digits.unwrap_or(0) as usize);
        while value > 0 {
            output.push(self.alphabet.symbol((value % self.base) as usize));
            value /= self.base;
        }
        self.into_string(output)
    }

    pub fn encode_bigint(&self, value: &BigUint) -> String {
        let mut value = self.truncate_bigint(value.clone());
        let base = BigUint::from(self.base);
        let mut output = Vec::with_capacity(self.max_digits.unwrap_or(0) as usize);
        while !value.is_zero() {
            let (quotient, remainder) = value.div_rem(&base);
            output.push(self.alphabet.symbol(remainder.try_into().unwrap_or(0)));
            value = quotient;
        }
        self.into_string(output)
    }

    /// Encodes `input` interpreted as a base-256 big-endian integer.
    ///
    /// Leading zero bytes carry no weight in that interpretation and are
    /// not recoverable by [`decode_bytes`](Radix::decode_bytes).
    pub fn encode_bytes(&self, input: impl AsRef<[u8]>) -> String {
        self.encode_bigint(&BigUint::from_bytes_be(input.as_ref()))
    }

    fn into_string(&self, mut output: Vec<u8>) -> String {
        if self.endianness == Endianness::MostSignificantFirst {
            output.reverse();
        }
        // symbols are validated as ascii at alphabet construction
        unsafe { String::from_utf8_unchecked(output) }
    }
}
