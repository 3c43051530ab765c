use alloc::string::ToString;
use alloc::sync::Arc;
use alloc::vec::{self, Vec};

use super::Value;
use crate::{Reflect, Shape, StructType, ValueError};

/// A record value: one value per field of its [`StructType`], in declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct StructValue {
    ty: Arc<StructType>,
    fields: Vec<Value>,
}

impl StructValue {
    /// Creates a record from its field values, in declaration order
    pub fn new(ty: Arc<StructType>, fields: Vec<Value>) -> Self {
        Self { ty, fields }
    }

    /// A record whose fields are all zero values
    pub fn zero(ty: Arc<StructType>) -> Self {
        let fields = ty
            .fields()
            .iter()
            .map(|field| field.shape().zero_value())
            .collect();
        Self { ty, fields }
    }

    /// The record type
    #[inline]
    pub fn ty(&self) -> &Arc<StructType> {
        &self.ty
    }

    /// Shape of the record
    pub fn shape(&self) -> Shape {
        Shape::struct_(Arc::clone(&self.ty))
    }

    /// All field values, in declaration order
    #[inline]
    pub fn fields(&self) -> &[Value] {
        &self.fields
    }

    /// The value of the field at `index`
    #[inline]
    pub fn field(&self, index: usize) -> Option<&Value> {
        self.fields.get(index)
    }

    /// The value of the field at `index`, mutably
    #[inline]
    pub fn field_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.fields.get_mut(index)
    }

    /// The value of the field with the declared name `name`
    pub fn field_by_name(&self, name: &str) -> Option<&Value> {
        let (index, _) = self.ty.field_by_name(name)?;
        self.fields.get(index)
    }

    /// Consumes the record, returning its field values
    pub fn into_fields(self) -> Vec<Value> {
        self.fields
    }
}

/// Reads the fields of a record value one by one, in declaration order.
///
/// This is what `#[derive(Reflect)]` uses to implement [`Reflect::from_value`].
pub struct StructFields {
    fields: vec::IntoIter<Value>,
}

impl StructFields {
    /// Checks that `value` is a record of shape `expected` and starts reading its fields
    pub fn new(value: Value, expected: &Shape) -> Result<Self, ValueError> {
        match value {
            Value::Struct(struct_) if struct_.shape() == *expected => Ok(Self {
                fields: struct_.into_fields().into_iter(),
            }),
            other => Err(ValueError::WrongShape {
                expected: expected.clone(),
                actual: other.shape(),
            }),
        }
    }

    /// Rebuilds the next field, named `name`, as a `T`
    pub fn next<T: Reflect>(&mut self, name: &str) -> Result<T, ValueError> {
        let value = self
            .fields
            .next()
            .ok_or_else(|| ValueError::MissingField {
                field_name: name.to_string(),
            })?;
        T::from_value(value)
    }
}
