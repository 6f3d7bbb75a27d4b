//! Stateful recursive descent over a dictionary cell.

use std::collections::BTreeMap;

use super::label::decode_label;
use crate::bit_string::BitString;
use crate::cell::{Cell, CellError, CellParser, TypeCoder};

pub(crate) fn do_parse<K, V, KC, VC>(
    prefix: &BitString,
    slice: &mut CellParser,
    n: usize,
    key_coder: &KC,
    value_coder: &VC,
    out: &mut BTreeMap<K, V>,
) -> Result<(), CellError>
where
    K: Ord,
    KC: TypeCoder<K>,
    VC: TypeCoder<V>,
{
    let label = decode_label(n, slice)?;
    let mut accumulated = prefix.clone();
    accumulated.extend_from(&label);
    let consumed = label.len();

    if n - consumed == 0 {
        let key_cell = Cell::new(accumulated, vec![])?;
        let key = key_coder.parse(&mut key_cell.parser())?;
        let value = value_coder.parse(slice)?;
        out.insert(key, value);
        return Ok(());
    }

    let remaining = n - consumed - 1;
    for branch_bit in [false, true] {
        let child = slice.load_ref()?;
        if child.is_exotic() {
            continue;
        }
        let mut child_prefix = accumulated.clone();
        child_prefix.push(branch_bit);
        do_parse(
            &child_prefix,
            &mut child.parser(),
            remaining,
            key_coder,
            value_coder,
            out,
        )?;
    }
    Ok(())
}
