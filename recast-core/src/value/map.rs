use alloc::vec::Vec;

use super::Value;
use crate::Shape;

/// A map from keys of one shape to values of another.
///
/// Entries keep their insertion order, but two maps are equal when they hold
/// the same entries in any order. Inserting an existing key replaces its value.
#[derive(Clone, Debug)]
pub struct MapValue {
    k: Shape,
    v: Shape,
    entries: Vec<(Value, Value)>,
}

impl MapValue {
    /// Creates an empty map from `k` to `v`
    pub fn new(k: Shape, v: Shape) -> Self {
        Self {
            k,
            v,
            entries: Vec::new(),
        }
    }

    /// Key shape
    #[inline]
    pub fn k(&self) -> &Shape {
        &self.k
    }

    /// Value shape
    #[inline]
    pub fn v(&self) -> &Shape {
        &self.v
    }

    /// Shape of the map itself
    pub fn shape(&self) -> Shape {
        Shape::map(self.k.clone(), self.v.clone())
    }

    /// Inserts an entry, returning the previous value for that key
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(core::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Builder-style [`Self::insert`]
    pub fn with(mut self, key: impl Into<Value>, value: impl Into<Value>) -> Self {
        self.insert(key.into(), value.into());
        self
    }

    /// Looks up a key
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Looks up a string key, looking through dynamic slots and pointers around the keys
    pub fn get_str(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k.indirect().as_str() == Some(key))
            .map(|(_, v)| v)
    }

    /// Iterates over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> + '_ {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Consumes the map, returning its entries in insertion order
    pub fn into_entries(self) -> Vec<(Value, Value)> {
        self.entries
    }

    /// Number of entries
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for MapValue {
    fn eq(&self, other: &Self) -> bool {
        self.k == other.k
            && self.v == other.v
            && self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .all(|(k, v)| other.get(k) == Some(v))
    }
}
