//! The ephemeral Edge/Node tree built from a padded key/value map during encoding.

use std::collections::BTreeMap;

use crate::bit_string::BitString;
use crate::cell::CellError;

pub type PaddedMap<V> = BTreeMap<BitString, V>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<T> {
    pub label: BitString,
    pub node: Node<T>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<T> {
    Leaf(T),
    Fork(Box<Edge<T>>, Box<Edge<T>>),
}

pub(crate) fn find_common_prefix<V>(map: &PaddedMap<V>) -> BitString {
    let min = map.keys().next().expect("find_common_prefix on empty map");
    let max = map.keys().next_back().expect("find_common_prefix on empty map");
    common_prefix(min, max)
}

fn common_prefix(a: &BitString, b: &BitString) -> BitString {
    let len = a.len().min(b.len());
    let mut bits = Vec::with_capacity(len);
    for i in 0..len {
        let bit = a.bit(i);
        if bit != b.bit(i) {
            break;
        }
        bits.push(bit);
    }
    BitString::from_bits(bits)
}

pub(crate) fn remove_prefix<V: Clone>(map: &PaddedMap<V>, length: usize) -> PaddedMap<V> {
    if length == 0 {
        return map.clone();
    }
    map.iter()
        .map(|(k, v)| (k.drop_first(length), v.clone()))
        .collect()
}

fn fork<V: Clone>(map: &PaddedMap<V>) -> Result<(PaddedMap<V>, PaddedMap<V>), CellError> {
    let mut left = PaddedMap::new();
    let mut right = PaddedMap::new();
    for (key, value) in map {
        let rest = key.drop_first(1);
        if key.bit(0) {
            right.insert(rest, value.clone());
        } else {
            left.insert(rest, value.clone());
        }
    }
    if left.is_empty() || right.is_empty() {
        return Err(CellError::InternalInvariant(
            "fork produced an empty side".to_string(),
        ));
    }
    Ok((left, right))
}

pub(crate) fn build_node<V: Clone>(map: &PaddedMap<V>) -> Result<Node<V>, CellError> {
    if map.is_empty() {
        return Err(CellError::InternalInvariant(
            "buildNode invoked on an empty map".to_string(),
        ));
    }
    if map.len() == 1 {
        let value = map.values().next().expect("checked len == 1").clone();
        return Ok(Node::Leaf(value));
    }
    let (left, right) = fork(map)?;
    Ok(Node::Fork(
        Box::new(build_edge(&left)?),
        Box::new(build_edge(&right)?),
    ))
}

pub(crate) fn build_edge<V: Clone>(map: &PaddedMap<V>) -> Result<Edge<V>, CellError> {
    let label = find_common_prefix(map);
    let remainder = remove_prefix(map, label.len());
    let node = build_node(&remainder)?;
    Ok(Edge { label, node })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> BitString {
        BitString::from_bits(s.chars().map(|c| c == '1').collect())
    }

    #[test]
    fn single_key_prefix_is_the_key_itself() {
        let mut map = PaddedMap::new();
        map.insert(bits("0101"), 7u8);
        assert_eq!(find_common_prefix(&map), bits("0101"));
        let edge = build_edge(&map).unwrap();
        assert_eq!(edge.label, bits("0101"));
        assert_eq!(edge.node, Node::Leaf(7));
    }

    #[test]
    fn common_prefix_ignores_divergent_tail() {
        let mut map = PaddedMap::new();
        map.insert(bits("00000000"), 1u8);
        map.insert(bits("00000001"), 2u8);
        assert_eq!(find_common_prefix(&map), bits("0000000"));
    }

    #[test]
    fn fork_splits_on_first_bit_and_drops_it() {
        let mut map = PaddedMap::new();
        map.insert(bits("0000000"), 1u8);
        map.insert(bits("1000000"), 2u8);
        let (left, right) = fork(&map).unwrap();
        assert_eq!(left.keys().next().unwrap(), &bits("000000"));
        assert_eq!(right.keys().next().unwrap(), &bits("000000"));
    }

    #[test]
    fn build_node_on_two_keys_produces_a_fork_with_two_leaves() {
        let mut map = PaddedMap::new();
        map.insert(bits("00000000"), 1u8);
        map.insert(bits("00000001"), 2u8);
        let edge = build_edge(&map).unwrap();
        assert_eq!(edge.label, bits("0000000"));
        match edge.node {
            Node::Fork(l, r) => {
                assert_eq!(l.label, bits(""));
                assert_eq!(l.node, Node::Leaf(1));
                assert_eq!(r.label, bits(""));
                assert_eq!(r.node, Node::Leaf(2));
            }
            _ => panic!("expected a fork"),
        }
    }

    #[test]
    fn build_node_rejects_empty_map() {
        let map: PaddedMap<u8> = PaddedMap::new();
        assert!(build_node(&map).is_err());
    }
}
