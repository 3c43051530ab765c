use alloc::string::String;
use alloc::sync::Arc;

use log::debug;
use owo_colors::OwoColorize;
use recast_core::{Field, StructValue, Value};

use crate::context::Context;
use crate::dispatch::convert_value;
use crate::map::is_string_key;
use crate::{ConvertError, FieldDescriptor};

/// Converts a map or another record into a record, field by field.
///
/// Fields that find no source value keep their current value, unless they are
/// `required`. Fields annotated `-` are never touched.
pub(crate) fn convert(
    cx: &mut Context<'_>,
    src: &Value,
    dst: &mut StructValue,
) -> Result<(), ConvertError> {
    if !is_well_formed(dst) {
        return Err(ConvertError::mismatch(src, dst.shape()));
    }
    let ty = Arc::clone(dst.ty());
    let descriptors = cx.descriptors(&ty);
    let fields = ty.fields().iter().zip(descriptors.iter()).enumerate();

    match src {
        Value::Map(src_map) => {
            if !is_string_key(src_map.k()) {
                return Err(ConvertError::mismatch(src, dst.shape()));
            }
            for (index, (field, descriptor)) in fields {
                if descriptor.skip {
                    continue;
                }
                let Some(src_value) = src_map.get_str(&descriptor.key) else {
                    missing(descriptor)?;
                    continue;
                };
                let mut value = field.shape().zero_value();
                convert_value(cx, src_value, &mut value)?;
                store(src, dst, index, value)?;
            }
            Ok(())
        }
        Value::Struct(src_struct) => {
            if !is_well_formed(src_struct) {
                return Err(ConvertError::mismatch(src, dst.shape()));
            }
            for (index, (field, descriptor)) in fields {
                if descriptor.skip {
                    continue;
                }
                let Some((src_field, src_value)) = find_source_field(src_struct, descriptor) else {
                    missing(descriptor)?;
                    continue;
                };

                let mut value = field.shape().zero_value();
                if src_field.shape().is_assignable_to(field.shape()) {
                    convert_value(cx, src_value, &mut value)?;
                } else {
                    let mut intermediate = field.shape().zero_value();
                    convert_value(cx, src_value, &mut intermediate)?;
                    convert_value(cx, &intermediate, &mut value)?;
                }
                store(src, dst, index, value)?;
            }
            Ok(())
        }
        _ => Err(ConvertError::mismatch(src, dst.shape())),
    }
}

fn missing(descriptor: &FieldDescriptor) -> Result<(), ConvertError> {
    if descriptor.required {
        return Err(ConvertError::FieldRequired {
            field_name: descriptor.key.clone(),
        });
    }
    debug!(
        "No source value for field {}, leaving it untouched",
        descriptor.key.yellow()
    );
    Ok(())
}

/// Returns true when the record holds exactly one value per declared field
pub(crate) fn is_well_formed(record: &StructValue) -> bool {
    record.fields().len() == record.ty().fields().len()
}

fn store(
    src: &Value,
    dst: &mut StructValue,
    index: usize,
    value: Value,
) -> Result<(), ConvertError> {
    let shape = dst.shape();
    let slot = dst
        .field_mut(index)
        .ok_or_else(|| ConvertError::mismatch(src, shape))?;
    *slot = value;
    Ok(())
}

/// Finds the source field matching a destination field: by declared name,
/// then by resolved key, then by resolved key with an upper-case first letter.
fn find_source_field<'v>(
    src: &'v StructValue,
    descriptor: &FieldDescriptor,
) -> Option<(&'v Field, &'v Value)> {
    lookup(src, &descriptor.name)
        .or_else(|| lookup(src, &descriptor.key))
        .or_else(|| lookup(src, &capitalize(&descriptor.key)))
}

fn lookup<'v>(src: &'v StructValue, name: &str) -> Option<(&'v Field, &'v Value)> {
    let (index, field) = src.ty().field_by_name(name)?;
    Some((field, src.field(index)?))
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("test"), "Test");
        assert_eq!(capitalize("Test"), "Test");
        assert_eq!(capitalize("émile"), "Émile");
        assert_eq!(capitalize(""), "");
    }
}
