use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use super::Field;

/// A record: a fixed set of named, individually typed fields.
///
/// A struct type with a name is a declared type; without one it is anonymous,
/// and it is assignable to and from any other record with the same fields.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct StructType {
    name: Option<String>,
    fields: Vec<Field>,
}

impl StructType {
    /// Returns a builder for StructType
    pub fn builder() -> StructBuilder {
        StructBuilder::new()
    }

    /// Type name, `None` for anonymous records
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns true if this record has no type name
    #[inline]
    pub fn is_anonymous(&self) -> bool {
        self.name.is_none()
    }

    /// All fields, in declaration order
    #[inline]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Looks up a field by its declared name, returning its index too
    pub fn field_by_name(&self, name: &str) -> Option<(usize, &Field)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, field)| field.name() == name)
    }
}

impl fmt::Display for StructType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            return f.write_str(name);
        }
        if self.fields.is_empty() {
            return f.write_str("struct {}");
        }
        f.write_str("struct { ")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", field.name(), field.shape())?;
        }
        f.write_str(" }")
    }
}

/// Builder for StructType
#[derive(Default)]
pub struct StructBuilder {
    name: Option<String>,
    fields: Vec<Field>,
}

impl StructBuilder {
    /// Creates a new StructBuilder, for an anonymous record with no fields
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the type name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends a field
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Appends several fields
    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Builds the StructType
    pub fn build(self) -> StructType {
        StructType {
            name: self.name,
            fields: self.fields,
        }
    }
}
