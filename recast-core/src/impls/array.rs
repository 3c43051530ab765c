use alloc::vec::Vec;

use crate::{ArrayValue, Reflect, Shape, Value, ValueError};

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn shape() -> Shape {
        Shape::array(T::shape(), N)
    }

    fn to_value(&self) -> Value {
        Value::Array(ArrayValue::new(
            T::shape(),
            self.iter().map(T::to_value).collect(),
        ))
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        let actual = value.shape();
        if actual != Self::shape() {
            return Err(ValueError::WrongShape {
                expected: Self::shape(),
                actual,
            });
        }
        let Value::Array(array) = value else {
            return Err(ValueError::WasNotA {
                expected: "array",
                actual,
            });
        };
        let items = array
            .into_items()
            .into_iter()
            .map(T::from_value)
            .collect::<Result<Vec<T>, _>>()?;
        <[T; N]>::try_from(items).map_err(|_| ValueError::WrongShape {
            expected: Self::shape(),
            actual,
        })
    }
}
