//! Ties the label codec, tree builder, encoder and parser together behind
//! `load`/`store` (the outer "maybe-ref" envelope) and `load_root`/`store_root`
//! (the raw root, no envelope).

use std::collections::BTreeMap;
use std::marker::PhantomData;

use super::decode::do_parse;
use super::encode::write_edge;
use super::tree::{build_edge, PaddedMap};
use crate::bit_string::BitString;
use crate::cell::{CellBuilder, CellError, CellParser, StaticSize, TypeCoder};

/// Distinguishes a genuinely empty dictionary from an exotic top-level reference.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DictDiagnostics {
    pub root_was_exotic: bool,
}

pub struct DictionaryCoder<K, V, KC, VC>
where
    KC: TypeCoder<K> + StaticSize,
    VC: TypeCoder<V>,
{
    key_length: usize,
    key_coder: KC,
    value_coder: VC,
    _marker: PhantomData<fn() -> (K, V)>,
}

impl<K, V, KC, VC> DictionaryCoder<K, V, KC, VC>
where
    K: Ord,
    V: Clone,
    KC: TypeCoder<K> + StaticSize,
    VC: TypeCoder<V>,
{
    pub fn new(key_length: usize, key_coder: KC, value_coder: VC) -> Self {
        DictionaryCoder {
            key_length,
            key_coder,
            value_coder,
            _marker: PhantomData,
        }
    }

    pub fn key_length(&self) -> usize {
        self.key_length
    }

    pub fn load(&self, slice: &mut CellParser) -> Result<BTreeMap<K, V>, CellError> {
        Ok(self.load_diagnostic(slice)?.0)
    }

    pub fn load_diagnostic(
        &self,
        slice: &mut CellParser,
    ) -> Result<(BTreeMap<K, V>, DictDiagnostics), CellError> {
        match slice.load_maybe_ref()? {
            None => Ok((BTreeMap::new(), DictDiagnostics::default())),
            Some(cell) if cell.is_exotic() => Ok((
                BTreeMap::new(),
                DictDiagnostics {
                    root_was_exotic: true,
                },
            )),
            Some(cell) => {
                let map = self.load_root(&mut cell.parser())?;
                Ok((map, DictDiagnostics::default()))
            }
        }
    }

    pub fn load_root(&self, slice: &mut CellParser) -> Result<BTreeMap<K, V>, CellError> {
        let mut out = BTreeMap::new();
        do_parse(
            &BitString::new(),
            slice,
            self.key_length,
            &self.key_coder,
            &self.value_coder,
            &mut out,
        )?;
        Ok(out)
    }

    pub fn store(&self, map: &BTreeMap<K, V>, builder: &mut CellBuilder) -> Result<(), CellError> {
        if map.is_empty() {
            builder.store_bit(false)?;
            return Ok(());
        }
        builder.store_bit(true)?;
        let mut root_builder = CellBuilder::new();
        self.store_root(map, &mut root_builder)?;
        let root_cell = root_builder.build()?.into_arc();
        builder.store_reference(&root_cell)?;
        Ok(())
    }

    pub fn store_root(&self, map: &BTreeMap<K, V>, builder: &mut CellBuilder) -> Result<(), CellError> {
        if map.is_empty() {
            return Err(CellError::EmptyRoot);
        }

        let mut padded: PaddedMap<V> = PaddedMap::new();
        for (key, value) in map {
            let mut key_builder = CellBuilder::new();
            self.key_coder.serialize(key, &mut key_builder)?;
            let bits = key_builder.bitstring();
            if bits.len() > self.key_length {
                return Err(CellError::KeyLengthMismatch {
                    expected: self.key_length,
                    actual: bits.len(),
                });
            }
            padded.insert(bits.pad_left(self.key_length), value.clone());
        }

        let edge = build_edge(&padded)?;
        write_edge(&edge, self.key_length, &self.value_coder, builder)
    }
}
