//! Predefined key/value coders for fixed-width unsigned integers.

use crate::cell::{CellBuilder, CellError, CellParser, StaticSize, TypeCoder};

/// Serializes a `u64` as a big-endian unsigned integer of exactly `bit_len` bits.
#[derive(Debug, Clone, Copy)]
pub struct UintCoder {
    bit_len: usize,
}

impl UintCoder {
    pub fn new(bit_len: usize) -> UintCoder {
        UintCoder { bit_len }
    }
}

impl TypeCoder<u64> for UintCoder {
    fn serialize(&self, value: &u64, builder: &mut CellBuilder) -> Result<(), CellError> {
        if self.bit_len < 64 && *value >= (1u64 << self.bit_len) {
            return Err(CellError::NumericOutOfRange {
                bits: self.bit_len,
                min_bits: 64 - value.leading_zeros() as usize,
            });
        }
        builder.store_uint(self.bit_len, *value)
    }

    fn parse(&self, slice: &mut CellParser) -> Result<u64, CellError> {
        slice.load_uint(self.bit_len)
    }
}

impl StaticSize for UintCoder {
    fn bit_len(&self) -> usize {
        self.bit_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_within_range() {
        let coder = UintCoder::new(8);
        let mut b = CellBuilder::new();
        coder.serialize(&0x2Au64, &mut b).unwrap();
        let cell = b.build().unwrap();
        assert_eq!(coder.parse(&mut cell.parser()).unwrap(), 0x2A);
    }

    #[test]
    fn rejects_value_too_wide_for_bit_len() {
        let coder = UintCoder::new(4);
        let mut b = CellBuilder::new();
        assert!(matches!(
            coder.serialize(&16u64, &mut b),
            Err(CellError::NumericOutOfRange { .. })
        ));
    }
}
