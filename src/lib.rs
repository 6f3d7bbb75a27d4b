pub mod bit_string;
pub mod cell;

pub use crate::bit_string::BitString;
pub use crate::cell::dict::{DictDiagnostics, DictionaryCoder, UintCoder};
pub use crate::cell::{ArcCell, Cell, CellBuilder, CellError, CellParser, StaticSize, TypeCoder};
