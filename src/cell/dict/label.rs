//! Prefix-label codec: writes/reads a `BitString` of length `n`
//! (`0 <= n <= max_len`) using whichever of the three HmLabel schemes emits
//! the fewest bits, breaking ties short < long < same.

use crate::bit_string::BitString;
use crate::cell::{CellBuilder, CellError, CellParser};

/// `k = ceil(log2(max_len + 1))`: the number of bits needed to represent
/// any value in `[0, max_len]`.
fn length_field_bits(max_len: usize) -> usize {
    let mut k = 0;
    while (1usize << k) < max_len + 1 {
        k += 1;
    }
    k
}

enum Scheme {
    Short,
    Long,
    Same,
}

fn choose_scheme(label: &BitString, k: usize) -> Scheme {
    let n = label.len();
    if n > 1 && label.repeats_same_bit().is_some() && k < 2 * n - 1 {
        Scheme::Same
    } else if k < n {
        Scheme::Long
    } else {
        Scheme::Short
    }
}

pub(crate) fn encode_label(
    label: &BitString,
    max_len: usize,
    builder: &mut CellBuilder,
) -> Result<(), CellError> {
    let n = label.len();
    if n > max_len {
        return Err(CellError::MalformedLabel(format!(
            "label of {n} bits exceeds remaining key budget of {max_len}"
        )));
    }
    let k = length_field_bits(max_len);
    match choose_scheme(label, k) {
        Scheme::Short => {
            builder.store_bit(false)?;
            builder.store_unary(n)?;
            builder.store_bits(label)?;
        }
        Scheme::Long => {
            builder.store_bit(true)?;
            builder.store_bit(false)?;
            builder.store_uint(k, n as u64)?;
            builder.store_bits(label)?;
        }
        Scheme::Same => {
            let bit = label.repeats_same_bit().expect("checked by choose_scheme");
            builder.store_bit(true)?;
            builder.store_bit(true)?;
            builder.store_bit(bit)?;
            builder.store_uint(k, n as u64)?;
        }
    }
    Ok(())
}

pub(crate) fn decode_label(max_len: usize, slice: &mut CellParser) -> Result<BitString, CellError> {
    let k = length_field_bits(max_len);
    let label = if !slice.load_bit()? {
        let n = slice.load_unary(max_len)?;
        slice.load_bits(n)?
    } else if !slice.load_bit()? {
        let n = slice.load_uint(k)? as usize;
        validate_len(n, max_len)?;
        slice.load_bits(n)?
    } else {
        let bit = slice.load_bit()?;
        let n = slice.load_uint(k)? as usize;
        validate_len(n, max_len)?;
        BitString::repeated(bit, n)
    };
    Ok(label)
}

fn validate_len(n: usize, max_len: usize) -> Result<(), CellError> {
    if n > max_len {
        return Err(CellError::MalformedLabel(format!(
            "decoded label length {n} exceeds remaining key budget of {max_len}"
        )));
    }
    Ok(())
}
