use crate::{Reflect, Shape, Value, ValueError};

/// [`Value`] is the dynamic slot: its shape accepts values of any shape.
impl Reflect for Value {
    fn shape() -> Shape {
        Shape::dynamic()
    }

    fn to_value(&self) -> Value {
        Value::dynamic(self.clone())
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Dynamic(Some(inner)) => Ok(*inner),
            Value::Dynamic(None) => Ok(Value::nil()),
            other => Err(ValueError::WrongShape {
                expected: Shape::dynamic(),
                actual: other.shape(),
            }),
        }
    }
}
