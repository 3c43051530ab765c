use core::fmt;

macro_rules! scalar_types {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// The type of a scalar: the leaves of every shape.
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        pub enum ScalarType {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )*
        }

        impl ScalarType {
            /// Every scalar type, in declaration order
            pub const ALL: &'static [ScalarType] = &[$(ScalarType::$variant),*];

            /// The Rust name of this scalar type
            pub const fn name(self) -> &'static str {
                match self {
                    $(ScalarType::$variant => $name,)*
                }
            }
        }
    };
}

scalar_types! {
    Bool => "bool",
    Char => "char",
    String => "String",
    I8 => "i8",
    I16 => "i16",
    I32 => "i32",
    I64 => "i64",
    Isize => "isize",
    U8 => "u8",
    U16 => "u16",
    U32 => "u32",
    U64 => "u64",
    Usize => "usize",
    F32 => "f32",
    F64 => "f64",
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
