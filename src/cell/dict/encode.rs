//! Write traversal over an Edge/Node tree: one label per edge, then either
//! the value inline (leaf) or two child cells (fork).

use super::label::encode_label;
use super::tree::{Edge, Node};
use crate::cell::{CellBuilder, CellError, TypeCoder};

pub(crate) fn write_edge<T, VC: TypeCoder<T>>(
    edge: &Edge<T>,
    key_length: usize,
    value_coder: &VC,
    builder: &mut CellBuilder,
) -> Result<(), CellError> {
    encode_label(&edge.label, key_length, builder)?;
    write_node(&edge.node, key_length - edge.label.len(), value_coder, builder)
}

pub(crate) fn write_node<T, VC: TypeCoder<T>>(
    node: &Node<T>,
    remaining: usize,
    value_coder: &VC,
    builder: &mut CellBuilder,
) -> Result<(), CellError> {
    match node {
        Node::Leaf(value) => value_coder.serialize(value, builder),
        Node::Fork(left, right) => {
            let mut left_builder = CellBuilder::new();
            write_edge(left, remaining - 1, value_coder, &mut left_builder)?;
            let left_cell = left_builder.build()?.into_arc();
            builder.store_reference(&left_cell)?;

            let mut right_builder = CellBuilder::new();
            write_edge(right, remaining - 1, value_coder, &mut right_builder)?;
            let right_cell = right_builder.build()?.into_arc();
            builder.store_reference(&right_cell)?;

            Ok(())
        }
    }
}
