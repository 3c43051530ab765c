#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
//! Copy data between differently-shaped types without writing a converter
//! for every pair.
//!
//! Types describe themselves through [`Reflect`], usually derived. The
//! converter then walks the source and the destination side by side: maps
//! become records and records become maps, single values wrap into lists,
//! lists fill arrays, and scalars are assigned when their types match.
//!
//! ```rust
//! use std::collections::HashMap;
//! use recast::Reflect;
//!
//! #[derive(Reflect, Debug, PartialEq, Default)]
//! struct User {
//!     #[tag(recast = "user-name,required")]
//!     name: String,
//!     #[tag(recast = "-")]
//!     password: String,
//!     groups: Vec<String>,
//! }
//!
//! let mut src = HashMap::new();
//! src.insert("user-name".to_string(), recast::Value::dynamic("amy"));
//! src.insert("groups".to_string(), recast::Value::dynamic("admin"));
//!
//! let mut user = User::default();
//! recast::convert_into(&src, &mut user).unwrap();
//! assert_eq!(
//!     user,
//!     User {
//!         name: "amy".into(),
//!         password: String::new(),
//!         groups: vec!["admin".into()],
//!     }
//! );
//! ```

pub use recast_core::*;

pub use recast_convert::{
    Annotation, ConvertError, Converter, DEFAULT_TAG_KEY, FieldDescriptor, convert,
    convert_into, convert_into_with_tag_key, convert_with_tag_key,
};

/// Derive the [`Reflect`] trait for structs with named fields.
///
/// ```rust
/// # use recast::Reflect;
/// #[derive(Reflect)]
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// assert_eq!(Point::shape().to_string(), "Point");
/// ```
///
/// # Container attributes
///
/// * `#[reflect(anonymous)]` The record has no type name. Anonymous records
///   can be assigned to and from any record with the same fields.
///
/// # Field attributes
///
/// * `#[tag(key = "text", ...)]` Annotations, one per annotation key. The
///   converter reads the annotation under its key (`recast` by default):
///   `"name"` looks the field up as `name`, `",required"` fails the conversion
///   when the source has no value for the field, and `"-"` skips the field.
pub use recast_derive::Reflect;
