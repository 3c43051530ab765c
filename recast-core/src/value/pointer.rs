use alloc::boxed::Box;

use super::Value;
use crate::Shape;

/// A nullable pointer to a value of shape `pointee`.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerValue {
    pointee: Shape,
    target: Option<Box<Value>>,
}

impl PointerValue {
    /// Creates a pointer, nil when `target` is `None`
    pub fn new(pointee: Shape, target: Option<Value>) -> Self {
        Self {
            pointee,
            target: target.map(Box::new),
        }
    }

    /// The nil pointer to `pointee`
    pub fn nil(pointee: Shape) -> Self {
        Self {
            pointee,
            target: None,
        }
    }

    /// Shape of the pointed-to value
    #[inline]
    pub fn pointee(&self) -> &Shape {
        &self.pointee
    }

    /// Shape of the pointer itself
    pub fn shape(&self) -> Shape {
        Shape::pointer(self.pointee.clone())
    }

    /// Returns true if the pointer has no target
    #[inline]
    pub fn is_nil(&self) -> bool {
        self.target.is_none()
    }

    /// The pointed-to value
    pub fn target(&self) -> Option<&Value> {
        self.target.as_deref()
    }

    /// The pointed-to value, mutably
    pub fn target_mut(&mut self) -> Option<&mut Value> {
        self.target.as_deref_mut()
    }

    /// The pointed-to value, allocating the zero value of the pointee first if nil
    pub fn target_or_zero(&mut self) -> &mut Value {
        let pointee = &self.pointee;
        &mut **self
            .target
            .get_or_insert_with(|| Box::new(pointee.zero_value()))
    }

    /// Makes the pointer nil
    pub fn clear(&mut self) {
        self.target = None;
    }

    /// Consumes the pointer, returning its target
    pub fn into_target(self) -> Option<Value> {
        self.target.map(|target| *target)
    }
}
