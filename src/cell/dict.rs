//! Patricia-trie dictionary codec over content-addressed cells: converts
//! between an in-memory fixed-key-width map and its compressed binary-tree
//! cell encoding.

mod coder;
mod coders;
mod decode;
mod encode;
mod label;
mod tree;


pub use coder::{DictDiagnostics, DictionaryCoder};
pub use coders::UintCoder;
pub use tree::{Edge, Node, PaddedMap};
