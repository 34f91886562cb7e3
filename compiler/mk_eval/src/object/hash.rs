//! Hash objects and their keys.

use rustc_hash::FxHashMap;

use super::{Object, ObjectKind};
use crate::{EvalError, EvalResult};

/// Derived key of a hashable object: its kind plus a 64-bit digest.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HashKey {
    kind: ObjectKind,
    digest: u64,
}

impl HashKey {
    pub(super) fn new(kind: ObjectKind, digest: u64) -> Self {
        HashKey { kind, digest }
    }
}

/// The original key object stored next to its value, so the hash can be
/// displayed with real keys rather than digests.
#[derive(Clone, Debug, PartialEq)]
pub struct HashPair {
    pub key: Object,
    pub value: Object,
}

/// Mapping from hashable objects to values.
///
/// Iteration follows first-insertion order; re-inserting a key replaces
/// its value in place.
#[derive(Clone, Debug, Default)]
pub struct HashObject {
    pairs: FxHashMap<HashKey, HashPair>,
    order: Vec<HashKey>,
}

impl HashObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. Fails for keys of a non-hashable kind.
    pub fn insert(&mut self, key: Object, value: Object) -> EvalResult<()> {
        let Some(hash_key) = key.hash_key() else {
            return Err(EvalError::UnusableHashKey(key.kind()));
        };
        if self
            .pairs
            .insert(hash_key, HashPair { key, value })
            .is_none()
        {
            self.order.push(hash_key);
        }
        Ok(())
    }

    /// Look up `key`. `Ok(None)` for a missing key; an error if `key` is
    /// not hashable.
    pub fn get(&self, key: &Object) -> EvalResult<Option<&Object>> {
        let hash_key = key
            .hash_key()
            .ok_or_else(|| EvalError::UnusableHashKey(key.kind()))?;
        Ok(self.pairs.get(&hash_key).map(|pair| &pair.value))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &HashPair> {
        self.order.iter().filter_map(|key| self.pairs.get(key))
    }
}

impl PartialEq for HashObject {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .pairs
                .iter()
                .all(|(key, pair)| other.pairs.get(key).is_some_and(|o| o.value == pair.value))
    }
}
