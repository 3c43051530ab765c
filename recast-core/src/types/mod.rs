//! Shape definitions used throughout recast

use alloc::sync::Arc;
use core::fmt;

mod def;
pub use def::*;

mod struct_;
pub use struct_::*;

mod field;
pub use field::*;

use crate::{Reflect, Value};

/// Schema of a type: what it is made of, and how to build an empty one.
///
/// Cloning a shape is cheap, the definition is shared.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    def: Arc<Def>,
}

impl Shape {
    /// Creates a shape from its definition.
    pub fn new(def: Def) -> Self {
        Self { def: Arc::new(def) }
    }

    /// The shape of `T`.
    pub fn of<T: Reflect>() -> Self {
        T::shape()
    }

    /// A scalar shape.
    pub fn scalar(ty: ScalarType) -> Self {
        Self::new(Def::Scalar(ty))
    }

    /// A variable-size list of `t`.
    pub fn list(t: Shape) -> Self {
        Self::new(Def::List(ListDef::new(t)))
    }

    /// A fixed-size array of `n` elements of `t`.
    pub fn array(t: Shape, n: usize) -> Self {
        Self::new(Def::Array(ArrayDef::new(t, n)))
    }

    /// A map from `k` to `v`.
    pub fn map(k: Shape, v: Shape) -> Self {
        Self::new(Def::Map(MapDef::new(k, v)))
    }

    /// A record.
    pub fn struct_(ty: impl Into<Arc<StructType>>) -> Self {
        Self::new(Def::Struct(ty.into()))
    }

    /// A dynamic slot, which holds a value of any shape (or nothing).
    pub fn dynamic() -> Self {
        Self::new(Def::Dynamic)
    }

    /// A pointer to `pointee`, which may be nil.
    pub fn pointer(pointee: Shape) -> Self {
        Self::new(Def::Pointer(PointerDef::new(pointee)))
    }

    /// The definition of this shape.
    #[inline]
    pub fn def(&self) -> &Def {
        &self.def
    }

    /// The dispatch tag of this shape.
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.def.kind()
    }

    /// Returns true if this is a dynamic slot.
    #[inline]
    pub fn is_dynamic(&self) -> bool {
        matches!(*self.def, Def::Dynamic)
    }

    /// Returns the struct type if this shape is a record.
    pub fn as_struct(&self) -> Option<&Arc<StructType>> {
        match &*self.def {
            Def::Struct(ty) => Some(ty),
            _ => None,
        }
    }

    /// Element shape of lists, arrays and pointers, value shape of maps.
    pub fn element(&self) -> Option<&Shape> {
        match &*self.def {
            Def::List(def) => Some(def.t()),
            Def::Array(def) => Some(def.t()),
            Def::Map(def) => Some(def.v()),
            Def::Pointer(def) => Some(def.pointee()),
            Def::Scalar(_) | Def::Struct(_) | Def::Dynamic => None,
        }
    }

    /// Returns true if a value of this shape can be stored as-is in a slot of shape `dst`.
    ///
    /// That is the case when both shapes are equal, when `dst` is a dynamic slot,
    /// and when both are records with identical fields, at least one of them anonymous.
    pub fn is_assignable_to(&self, dst: &Shape) -> bool {
        if self == dst || dst.is_dynamic() {
            return true;
        }
        match (self.as_struct(), dst.as_struct()) {
            (Some(src), Some(dst)) => {
                (src.is_anonymous() || dst.is_anonymous()) && src.fields() == dst.fields()
            }
            _ => false,
        }
    }

    /// Builds the zero value of this shape: `0`, `""`, `false`, empty lists and maps,
    /// arrays and records of zero values, nil dynamic slots and nil pointers.
    pub fn zero_value(&self) -> Value {
        match &*self.def {
            Def::Scalar(ty) => Value::Scalar(ty.zero()),
            Def::List(def) => Value::List(crate::ListValue::new(def.t().clone(), Vec::new())),
            Def::Array(def) => Value::Array(crate::ArrayValue::zero(def.t().clone(), def.n())),
            Def::Map(def) => Value::Map(crate::MapValue::new(def.k().clone(), def.v().clone())),
            Def::Struct(ty) => Value::Struct(crate::StructValue::zero(Arc::clone(ty))),
            Def::Dynamic => Value::Dynamic(None),
            Def::Pointer(def) => Value::Pointer(crate::PointerValue::nil(def.pointee().clone())),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.def {
            Def::Scalar(ty) => write!(f, "{ty}"),
            Def::List(def) => write!(f, "Vec<{}>", def.t()),
            Def::Array(def) => write!(f, "[{}; {}]", def.t(), def.n()),
            Def::Map(def) => write!(f, "Map<{}, {}>", def.k(), def.v()),
            Def::Struct(ty) => write!(f, "{ty}"),
            Def::Dynamic => write!(f, "Value"),
            Def::Pointer(def) => write!(f, "Ptr<{}>", def.pointee()),
        }
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape({self})")
    }
}

/// The structural category of a shape, used to pick a conversion rule.
///
/// Two scalar kinds are only equal when their scalar types are.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ShapeKind {
    /// A leaf value
    Scalar(ScalarType),
    /// `Vec<T>`
    List,
    /// `[T; N]`
    Array,
    /// `HashMap<K, V>`, `BTreeMap<K, V>`
    Map,
    /// A record with named fields
    Struct,
    /// A slot that accepts any value
    Dynamic,
    /// `Option<T>`, `Box<T>`
    Pointer,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Scalar(ty) => write!(f, "{ty}"),
            ShapeKind::List => write!(f, "list"),
            ShapeKind::Array => write!(f, "array"),
            ShapeKind::Map => write!(f, "map"),
            ShapeKind::Struct => write!(f, "struct"),
            ShapeKind::Dynamic => write!(f, "dynamic"),
            ShapeKind::Pointer => write!(f, "pointer"),
        }
    }
}
