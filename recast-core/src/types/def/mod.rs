use alloc::sync::Arc;

use super::{ShapeKind, StructType};

mod scalar;
pub use scalar::*;

mod list;
pub use list::*;

mod array;
pub use array::*;

mod map;
pub use map::*;

mod pointer;
pub use pointer::*;

/// The semantic definition of a shape: is it more like a scalar, a map, a list?
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Def {
    /// Scalar, not composed of other things
    ///
    /// e.g. `u32`, `String`, `bool`
    Scalar(ScalarType),

    /// Ordered list of homogeneous values, variable size
    ///
    /// e.g. `Vec<T>`
    List(ListDef),

    /// Fixed-size array of homogeneous values
    ///
    /// e.g. `[T; 3]`
    Array(ArrayDef),

    /// Map, keys and values are homogeneous
    ///
    /// e.g. `HashMap<K, V>`
    Map(MapDef),

    /// Record with named, individually typed fields
    Struct(Arc<StructType>),

    /// Untyped slot, holds a value of any shape or nothing at all
    Dynamic,

    /// Nullable indirection
    ///
    /// e.g. `Option<T>`, `Box<T>`
    Pointer(PointerDef),
}

impl Def {
    /// The dispatch tag of this definition.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Def::Scalar(ty) => ShapeKind::Scalar(*ty),
            Def::List(_) => ShapeKind::List,
            Def::Array(_) => ShapeKind::Array,
            Def::Map(_) => ShapeKind::Map,
            Def::Struct(_) => ShapeKind::Struct,
            Def::Dynamic => ShapeKind::Dynamic,
            Def::Pointer(_) => ShapeKind::Pointer,
        }
    }
}
