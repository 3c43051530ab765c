#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
//! Structural conversion between [`Value`]s of different shapes.
//!
//! A source value is copied into a destination by recursing on the pair of
//! shapes: lists convert element-wise, single values wrap into one-element
//! lists, maps and records convert into each other through their field names,
//! and scalars are assigned when their types match. Record fields can be
//! renamed, skipped or made mandatory with annotations such as
//! `#[tag(recast = "name,required")]`.
//!
//! ```
//! use recast_core::{MapValue, Shape, ScalarType, Value};
//!
//! let string = Shape::scalar(ScalarType::String);
//! let src = MapValue::new(Shape::dynamic(), Shape::dynamic())
//!     .with(Value::dynamic("a"), Value::dynamic("b"));
//!
//! let mut dst = Value::pointer_to(MapValue::new(string.clone(), string));
//! recast_convert::convert(&src.into(), &mut dst).unwrap();
//! ```

extern crate alloc;

use recast_core::{Reflect, Value};

mod annotation;
pub use annotation::*;

mod converter;
pub use converter::*;

mod error;
pub use error::*;

mod context;
mod dispatch;

// One module per destination kind
mod array;
mod list;
mod map;
mod scalar;
mod struct_;

/// The annotation key read when none is given
pub const DEFAULT_TAG_KEY: &str = "recast";

/// Converts `src` into the target of `dst`, reading annotations under [`DEFAULT_TAG_KEY`].
///
/// `dst` must be a non-nil [`Value::Pointer`]. On error, elements converted
/// before the failure stay written.
pub fn convert(src: &Value, dst: &mut Value) -> Result<(), ConvertError> {
    Converter::new().convert(src, dst)
}

/// Like [`convert`], reading annotations under `tag_key`.
pub fn convert_with_tag_key(src: &Value, dst: &mut Value, tag_key: &str) -> Result<(), ConvertError> {
    Converter::with_tag_key(tag_key).convert(src, dst)
}

/// Converts a Rust value into another of a different type, reading annotations
/// under [`DEFAULT_TAG_KEY`]. `dst` is only overwritten on success.
pub fn convert_into<S: Reflect, D: Reflect>(src: &S, dst: &mut D) -> Result<(), ConvertError> {
    Converter::new().convert_into(src, dst)
}

/// Like [`convert_into`], reading annotations under `tag_key`.
pub fn convert_into_with_tag_key<S: Reflect, D: Reflect>(
    src: &S,
    dst: &mut D,
    tag_key: &str,
) -> Result<(), ConvertError> {
    Converter::with_tag_key(tag_key).convert_into(src, dst)
}
