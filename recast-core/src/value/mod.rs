//! Dynamic values: runtime data paired with its shape

use alloc::boxed::Box;
use alloc::string::String;

use crate::{Shape, ShapeKind};

mod scalar;
pub use scalar::*;

mod list;
pub use list::*;

mod map;
pub use map::*;

mod struct_;
pub use struct_::*;

mod pointer;
pub use pointer::*;

/// A runtime value that knows its own shape.
///
/// Containers carry their element shapes, so an empty `Vec<String>` and an
/// empty `Vec<i64>` are different values. `Dynamic(None)` and a pointer
/// without a target are the nil values.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A leaf value
    Scalar(Scalar),
    /// A variable-size list
    List(ListValue),
    /// A fixed-size array
    Array(ArrayValue),
    /// A map
    Map(MapValue),
    /// A record
    Struct(StructValue),
    /// A dynamic slot, holding any value or nothing
    Dynamic(Option<Box<Value>>),
    /// A nullable pointer
    Pointer(PointerValue),
}

impl Value {
    /// The nil dynamic slot
    pub const fn nil() -> Self {
        Value::Dynamic(None)
    }

    /// Wraps a value into a dynamic slot. Dynamic values are not wrapped twice.
    pub fn dynamic(value: impl Into<Value>) -> Self {
        match value.into() {
            dynamic @ Value::Dynamic(_) => dynamic,
            value => Value::Dynamic(Some(Box::new(value))),
        }
    }

    /// A non-nil pointer to `value`
    pub fn pointer_to(value: impl Into<Value>) -> Self {
        let value = value.into();
        Value::Pointer(PointerValue::new(value.shape(), Some(value)))
    }

    /// The shape of this value. For dynamic slots this is the dynamic shape,
    /// not the shape of what they hold.
    pub fn shape(&self) -> Shape {
        match self {
            Value::Scalar(scalar) => Shape::scalar(scalar.scalar_type()),
            Value::List(list) => list.shape(),
            Value::Array(array) => array.shape(),
            Value::Map(map) => map.shape(),
            Value::Struct(struct_) => struct_.shape(),
            Value::Dynamic(_) => Shape::dynamic(),
            Value::Pointer(pointer) => pointer.shape(),
        }
    }

    /// The dispatch tag of this value's shape, computed without building the shape.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Value::Scalar(scalar) => ShapeKind::Scalar(scalar.scalar_type()),
            Value::List(_) => ShapeKind::List,
            Value::Array(_) => ShapeKind::Array,
            Value::Map(_) => ShapeKind::Map,
            Value::Struct(_) => ShapeKind::Struct,
            Value::Dynamic(_) => ShapeKind::Dynamic,
            Value::Pointer(_) => ShapeKind::Pointer,
        }
    }

    /// Returns true for an empty dynamic slot or a pointer without target.
    pub fn is_nil(&self) -> bool {
        match self {
            Value::Dynamic(inner) => inner.is_none(),
            Value::Pointer(pointer) => pointer.is_nil(),
            _ => false,
        }
    }

    /// Looks through one level of indirection: the content of a dynamic slot,
    /// then the target of a pointer, then the content of a dynamic slot again.
    ///
    /// Nil slots and nil pointers are returned as-is.
    pub fn indirect(&self) -> &Value {
        let mut value = self.undynamic();
        if let Value::Pointer(pointer) = value {
            if let Some(target) = pointer.target() {
                value = target.undynamic();
            }
        }
        value
    }

    fn undynamic(&self) -> &Value {
        let mut value = self;
        while let Value::Dynamic(Some(inner)) = value {
            value = inner;
        }
        value
    }

    /// The scalar, if this is one
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// The string, if this is a `String` scalar
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// The list, if this is one
    pub fn as_list(&self) -> Option<&ListValue> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// The map, if this is one
    pub fn as_map(&self) -> Option<&MapValue> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// The record, if this is one
    pub fn as_struct(&self) -> Option<&StructValue> {
        match self {
            Value::Struct(struct_) => Some(struct_),
            _ => None,
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<ListValue> for Value {
    fn from(list: ListValue) -> Self {
        Value::List(list)
    }
}

impl From<ArrayValue> for Value {
    fn from(array: ArrayValue) -> Self {
        Value::Array(array)
    }
}

impl From<MapValue> for Value {
    fn from(map: MapValue) -> Self {
        Value::Map(map)
    }
}

impl From<StructValue> for Value {
    fn from(struct_: StructValue) -> Self {
        Value::Struct(struct_)
    }
}

impl From<PointerValue> for Value {
    fn from(pointer: PointerValue) -> Self {
        Value::Pointer(pointer)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(Scalar::String(String::from(s)))
    }
}
