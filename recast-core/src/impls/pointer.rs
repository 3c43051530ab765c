use alloc::boxed::Box;

use crate::{PointerValue, Reflect, Shape, Value, ValueError};

fn pointer_target<T: Reflect>(value: Value, expected: Shape) -> Result<Option<Value>, ValueError> {
    match value {
        Value::Pointer(pointer) if *pointer.pointee() == T::shape() => Ok(pointer.into_target()),
        other => Err(ValueError::WrongShape {
            expected,
            actual: other.shape(),
        }),
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn shape() -> Shape {
        Shape::pointer(T::shape())
    }

    fn to_value(&self) -> Value {
        Value::Pointer(PointerValue::new(
            T::shape(),
            self.as_ref().map(T::to_value),
        ))
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        pointer_target::<T>(value, Self::shape())?
            .map(T::from_value)
            .transpose()
    }
}

impl<T: Reflect> Reflect for Box<T> {
    fn shape() -> Shape {
        Shape::pointer(T::shape())
    }

    fn to_value(&self) -> Value {
        Value::Pointer(PointerValue::new(T::shape(), Some(T::to_value(self))))
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match pointer_target::<T>(value, Self::shape())? {
            Some(target) => Ok(Box::new(T::from_value(target)?)),
            None => Err(ValueError::WasNotA {
                expected: "non-nil pointer",
                actual: Self::shape(),
            }),
        }
    }
}
