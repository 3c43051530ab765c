#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
//! Core types for the recast ecosystem.
//!
//! A [`Shape`] describes a type: scalars, lists, fixed-size arrays, maps,
//! records (structs), dynamic slots and pointers. A [`Value`] is a runtime
//! value that always knows its shape, even when it is empty. The [`Reflect`]
//! trait bridges ordinary Rust types and values.

extern crate alloc;

// Shape definitions
mod types;
pub use types::*;

// Dynamic values
mod value;
pub use value::*;

// Reflect implementations for core, alloc and std types
mod impls;

mod error;
pub use error::*;

/// Lets a Rust type describe itself as a [`Shape`] and move in and out of a [`Value`].
///
/// Implemented for scalars, `String`, `Vec<T>`, `[T; N]`, `HashMap`, `BTreeMap`,
/// `Option<T>` and `Box<T>` (as pointers), and for [`Value`] itself, which acts as a
/// dynamic slot. Structs get it through `#[derive(Reflect)]`.
pub trait Reflect: Sized {
    /// The shape of this type.
    fn shape() -> Shape;

    /// Captures this value as a [`Value`] of shape [`Self::shape`].
    fn to_value(&self) -> Value;

    /// Rebuilds a value of this type from a [`Value`] of shape [`Self::shape`].
    fn from_value(value: Value) -> Result<Self, ValueError>;
}
