use alloc::string::String;

use owo_colors::OwoColorize;
use recast_core::{Shape, Value};

/// Errors that can occur when converting a value into a destination.
#[derive(Debug, PartialEq, Clone)]
#[non_exhaustive]
pub enum ConvertError {
    /// The destination is not a usable pointer
    InvalidDestination {
        /// The shape of what was passed as destination
        shape: Shape,
        /// True if it was a pointer, but a nil one
        nil: bool,
    },

    /// No conversion rule applies between the two shapes
    TypeMismatch {
        /// The shape of the source value
        src: Shape,
        /// The shape of the destination
        dst: Shape,
    },

    /// A destination field marked `required` had no corresponding source value
    FieldRequired {
        /// The resolved name of the field: its annotation name, or its declared name
        field_name: String,
    },
}

impl core::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConvertError::InvalidDestination { shape, nil: true } => {
                write!(f, "Cannot convert into nil pointer {}", shape.red())
            }
            ConvertError::InvalidDestination { shape, nil: false } => {
                write!(
                    f,
                    "Cannot convert into non-pointer {}, the destination must be a pointer",
                    shape.red()
                )
            }
            ConvertError::TypeMismatch { src, dst } => {
                write!(
                    f,
                    "Type mismatch: cannot convert {} into {}",
                    src.green(),
                    dst.blue()
                )
            }
            ConvertError::FieldRequired { field_name } => {
                write!(f, "Required field {} is missing from the source", field_name.red())
            }
        }
    }
}

impl core::error::Error for ConvertError {}

impl ConvertError {
    pub(crate) fn mismatch(src: &Value, dst: Shape) -> Self {
        ConvertError::TypeMismatch {
            src: src.shape(),
            dst,
        }
    }
}
