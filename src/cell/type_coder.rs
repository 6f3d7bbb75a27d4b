use super::{CellBuilder, CellError, CellParser};

/// Pair of operations to write a `T` into a builder and read one back out of a slice.
pub trait TypeCoder<T> {
    fn serialize(&self, value: &T, builder: &mut CellBuilder) -> Result<(), CellError>;
    fn parse(&self, slice: &mut CellParser) -> Result<T, CellError>;
}

/// Marks a [`TypeCoder`] whose serialized bit-length is fixed and known in advance.
pub trait StaticSize {
    fn bit_len(&self) -> usize;
}
