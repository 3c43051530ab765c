use alloc::string::String;

use owo_colors::OwoColorize;

use crate::Shape;

/// Errors that can occur when rebuilding a Rust value from a [`crate::Value`].
#[derive(Debug, PartialEq, Clone)]
#[non_exhaustive]
pub enum ValueError {
    /// The value does not have the shape of the type being rebuilt
    WrongShape {
        /// The shape of the type being rebuilt
        expected: Shape,
        /// The shape of the value we got
        actual: Shape,
    },

    /// The value has the right shape but not the right content, e.g. a nil pointer for a `Box<T>`
    WasNotA {
        /// What we expected
        expected: &'static str,
        /// The shape of the value we got
        actual: Shape,
    },

    /// A record value had fewer field values than its type has fields
    MissingField {
        /// The name of the field that had no value
        field_name: String,
    },
}

impl core::fmt::Display for ValueError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ValueError::WrongShape { expected, actual } => {
                write!(
                    f,
                    "Wrong shape: expected {}, but got {}",
                    expected.green(),
                    actual.red()
                )
            }
            ValueError::WasNotA { expected, actual } => {
                write!(f, "Wrong value: expected {}, but got a {}", expected.green(), actual.red())
            }
            ValueError::MissingField { field_name } => {
                write!(f, "Record value has no value for field {}", field_name.red())
            }
        }
    }
}

impl core::error::Error for ValueError {}
