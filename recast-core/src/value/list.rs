use alloc::vec::Vec;

use super::Value;
use crate::Shape;

/// A variable-size list of values of one element shape.
#[derive(Clone, Debug, PartialEq)]
pub struct ListValue {
    t: Shape,
    items: Vec<Value>,
}

impl ListValue {
    /// Creates a list of items of shape `t`
    pub fn new(t: Shape, items: Vec<Value>) -> Self {
        Self { t, items }
    }

    /// Element shape
    #[inline]
    pub fn t(&self) -> &Shape {
        &self.t
    }

    /// Shape of the list itself
    pub fn shape(&self) -> Shape {
        Shape::list(self.t.clone())
    }

    /// The items
    #[inline]
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// The items, mutably. The list can grow and shrink.
    #[inline]
    pub fn items_mut(&mut self) -> &mut Vec<Value> {
        &mut self.items
    }

    /// Consumes the list, returning its items
    pub fn into_items(self) -> Vec<Value> {
        self.items
    }

    /// Number of items
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no items
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A fixed-size array of values of one element shape.
///
/// The length is part of the shape and never changes.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayValue {
    t: Shape,
    items: Vec<Value>,
}

impl ArrayValue {
    /// Creates an array of items of shape `t`; its length is `items.len()`
    pub fn new(t: Shape, items: Vec<Value>) -> Self {
        Self { t, items }
    }

    /// An array of `n` zero values of shape `t`
    pub fn zero(t: Shape, n: usize) -> Self {
        let items = (0..n).map(|_| t.zero_value()).collect();
        Self { t, items }
    }

    /// Element shape
    #[inline]
    pub fn t(&self) -> &Shape {
        &self.t
    }

    /// Shape of the array itself
    pub fn shape(&self) -> Shape {
        Shape::array(self.t.clone(), self.items.len())
    }

    /// The items
    #[inline]
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// The items, mutably
    #[inline]
    pub fn items_mut(&mut self) -> &mut [Value] {
        &mut self.items
    }

    /// Consumes the array, returning its items
    pub fn into_items(self) -> Vec<Value> {
        self.items
    }

    /// The length of the array
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true for zero-length arrays
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
