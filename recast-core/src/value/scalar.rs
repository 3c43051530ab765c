use alloc::string::String;

use super::Value;
use crate::ScalarType;

macro_rules! scalars {
    ($($variant:ident($ty:ty) = $zero:expr),* $(,)?) => {
        /// A leaf value, tagged with its [`ScalarType`].
        #[derive(Clone, Debug, PartialEq)]
        pub enum Scalar {
            $(
                #[doc = concat!("A `", stringify!($ty), "`")]
                $variant($ty),
            )*
        }

        impl Scalar {
            /// The type of this scalar
            pub fn scalar_type(&self) -> ScalarType {
                match self {
                    $(Scalar::$variant(_) => ScalarType::$variant,)*
                }
            }
        }

        impl ScalarType {
            /// The zero value of this scalar type
            pub fn zero(self) -> Scalar {
                match self {
                    $(ScalarType::$variant => Scalar::$variant($zero),)*
                }
            }
        }

        $(
            impl From<$ty> for Scalar {
                fn from(v: $ty) -> Self {
                    Scalar::$variant(v)
                }
            }

            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::Scalar(Scalar::$variant(v))
                }
            }
        )*
    };
}

scalars! {
    Bool(bool) = false,
    Char(char) = '\0',
    String(String) = String::new(),
    I8(i8) = 0,
    I16(i16) = 0,
    I32(i32) = 0,
    I64(i64) = 0,
    Isize(isize) = 0,
    U8(u8) = 0,
    U16(u16) = 0,
    U32(u32) = 0,
    U64(u64) = 0,
    Usize(usize) = 0,
    F32(f32) = 0.0,
    F64(f64) = 0.0,
}
