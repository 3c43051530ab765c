use alloc::boxed::Box;

use log::trace;
use owo_colors::OwoColorize;
use recast_core::Value;

use crate::context::Context;
use crate::{ConvertError, array, list, map, scalar, struct_};

/// Converts `src` into `dst`, recursing into nested values.
///
/// The source is looked through first (dynamic slot, one pointer, dynamic slot);
/// a pointer destination is allocated when nil and converted into.
pub(crate) fn convert_value(
    cx: &mut Context<'_>,
    src: &Value,
    dst: &mut Value,
) -> Result<(), ConvertError> {
    let src = src.indirect();
    trace!(
        "Converting {} into {}",
        src.shape().green(),
        dst.shape().blue()
    );

    if src.is_nil() {
        return assign_nil(src, dst);
    }

    match dst {
        Value::Pointer(pointer) => convert_value(cx, src, pointer.target_or_zero()),
        Value::Dynamic(slot) => {
            *slot = Some(Box::new(src.clone()));
            Ok(())
        }
        Value::Scalar(scalar) => scalar::assign(src, scalar),
        Value::List(list) => list::convert(cx, src, list),
        Value::Array(array) => array::convert(cx, src, array),
        Value::Map(map) => map::convert(cx, src, map),
        Value::Struct(struct_) => struct_::convert(cx, src, struct_),
    }
}

fn assign_nil(src: &Value, dst: &mut Value) -> Result<(), ConvertError> {
    match dst {
        Value::Dynamic(slot) => {
            *slot = None;
            Ok(())
        }
        Value::Pointer(pointer) => {
            pointer.clear();
            Ok(())
        }
        other => Err(ConvertError::mismatch(src, other.shape())),
    }
}
