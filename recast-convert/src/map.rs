use alloc::sync::Arc;

use log::debug;
use owo_colors::OwoColorize;
use recast_core::{Def, MapValue, ScalarType, Shape, StructValue, Value};

use crate::ConvertError;
use crate::context::Context;
use crate::dispatch::convert_value;
use crate::struct_::is_well_formed;

/// Converts a map or a record into a map. The destination is cleared first.
pub(crate) fn convert(
    cx: &mut Context<'_>,
    src: &Value,
    dst: &mut MapValue,
) -> Result<(), ConvertError> {
    let k = dst.k().clone();
    let v = dst.v().clone();

    match src {
        Value::Map(src_map) => {
            *dst = MapValue::new(k.clone(), v.clone());
            for (src_key, src_value) in src_map.iter() {
                let mut value = v.zero_value();
                convert_value(cx, src_value, &mut value)?;
                let key = assign_key(src_key, &k)?;
                dst.insert(key, value);
            }
            Ok(())
        }
        Value::Struct(src_struct) => {
            if !is_string_key(&k) || !is_well_formed(src_struct) {
                return Err(ConvertError::mismatch(src, dst.shape()));
            }
            let descriptors = cx.descriptors(src_struct.ty());
            *dst = MapValue::new(k.clone(), v.clone());
            for (descriptor, src_value) in descriptors.iter().zip(src_struct.fields()) {
                if descriptor.skip {
                    debug!("Skipping field {}", descriptor.name.yellow());
                    continue;
                }
                let mut value = v.zero_value();
                convert_value(cx, src_value, &mut value)?;
                let key = Value::from(descriptor.key.as_str());
                let key = if k.is_dynamic() {
                    Value::dynamic(key)
                } else {
                    key
                };
                dst.insert(key, value);
            }
            Ok(())
        }
        _ => Err(ConvertError::mismatch(src, dst.shape())),
    }
}

/// Returns true for the key shapes a record field name can be stored under
pub(crate) fn is_string_key(k: &Shape) -> bool {
    matches!(k.def(), Def::Scalar(ScalarType::String) | Def::Dynamic)
}

/// Keys are assigned, never converted
fn assign_key(src_key: &Value, k: &Shape) -> Result<Value, ConvertError> {
    let key = src_key.indirect();
    if k.is_dynamic() {
        return Ok(Value::dynamic(key.clone()));
    }
    if !key.shape().is_assignable_to(k) {
        return Err(ConvertError::mismatch(key, k.clone()));
    }
    match (key, k.as_struct()) {
        (Value::Struct(record), Some(ty)) => Ok(Value::Struct(StructValue::new(
            Arc::clone(ty),
            record.fields().to_vec(),
        ))),
        _ => Ok(key.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recast_core::{Field, StructType};

    #[test]
    fn string_keys() {
        assert!(is_string_key(&Shape::scalar(ScalarType::String)));
        assert!(is_string_key(&Shape::dynamic()));
        assert!(!is_string_key(&Shape::scalar(ScalarType::I64)));
        assert!(!is_string_key(&Shape::pointer(Shape::scalar(
            ScalarType::String
        ))));
    }

    #[test]
    fn keys_are_looked_through() {
        let key = Value::dynamic(Value::pointer_to("a"));
        let string = Shape::scalar(ScalarType::String);
        assert_eq!(assign_key(&key, &string), Ok(Value::from("a")));
        assert_eq!(
            assign_key(&key, &Shape::dynamic()),
            Ok(Value::dynamic("a"))
        );
        assert_eq!(
            assign_key(&Value::from(1i64), &string),
            Err(ConvertError::TypeMismatch {
                src: Shape::scalar(ScalarType::I64),
                dst: string,
            })
        );
    }

    #[test]
    fn anonymous_record_keys_take_the_key_type() {
        let fields = [Field::builder("x", Shape::scalar(ScalarType::I32)).build()];
        let named = Arc::new(
            StructType::builder()
                .name("Point")
                .fields(fields.clone())
                .build(),
        );
        let anonymous = Shape::struct_(StructType::builder().fields(fields).build());

        let key = Value::Struct(StructValue::new(named, vec![Value::from(1i32)]));
        let assigned = assign_key(&key, &anonymous).unwrap();
        assert_eq!(assigned.shape(), anonymous);
    }
}
