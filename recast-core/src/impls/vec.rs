use alloc::vec::Vec;

use crate::{ListValue, Reflect, Shape, Value, ValueError};

impl<T: Reflect> Reflect for Vec<T> {
    fn shape() -> Shape {
        Shape::list(T::shape())
    }

    fn to_value(&self) -> Value {
        Value::List(ListValue::new(
            T::shape(),
            self.iter().map(T::to_value).collect(),
        ))
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::List(list) if *list.t() == T::shape() => {
                list.into_items().into_iter().map(T::from_value).collect()
            }
            other => Err(ValueError::WrongShape {
                expected: Self::shape(),
                actual: other.shape(),
            }),
        }
    }
}
