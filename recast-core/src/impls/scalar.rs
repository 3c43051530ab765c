use alloc::string::String;

use crate::{Reflect, Scalar, ScalarType, Shape, Value, ValueError};

macro_rules! impl_reflect_for_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn shape() -> Shape {
                    Shape::scalar(ScalarType::$variant)
                }

                fn to_value(&self) -> Value {
                    Value::Scalar(Scalar::$variant(self.clone()))
                }

                fn from_value(value: Value) -> Result<Self, ValueError> {
                    match value {
                        Value::Scalar(Scalar::$variant(v)) => Ok(v),
                        other => Err(ValueError::WrongShape {
                            expected: Self::shape(),
                            actual: other.shape(),
                        }),
                    }
                }
            }
        )*
    };
}

impl_reflect_for_scalar! {
    bool => Bool,
    char => Char,
    String => String,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
}
