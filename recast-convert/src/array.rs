use log::trace;
use owo_colors::OwoColorize;
use recast_core::{ArrayValue, Value};

use crate::ConvertError;
use crate::context::Context;
use crate::dispatch::convert_value;

/// Converts an array or list into a fixed-size array.
///
/// Sources longer than the destination fail; shorter ones leave the
/// trailing elements at their zero value.
pub(crate) fn convert(
    cx: &mut Context<'_>,
    src: &Value,
    dst: &mut ArrayValue,
) -> Result<(), ConvertError> {
    let (src_t, src_items) = match src {
        Value::Array(array) => (array.t(), array.items()),
        Value::List(list) => (list.t(), list.items()),
        _ => return Err(ConvertError::mismatch(src, dst.shape())),
    };
    if src_items.len() > dst.len() {
        return Err(ConvertError::mismatch(src, dst.shape()));
    }

    let t = dst.t().clone();
    let n = dst.len();

    if src_t.kind() == t.kind() {
        if src.shape().is_assignable_to(&dst.shape()) {
            if let Value::Array(array) = src {
                *dst = array.clone();
                return Ok(());
            }
        }
        trace!(
            "Building a new {} from {}",
            dst.shape().blue(),
            src.shape().green()
        );
        let mut typed = ArrayValue::zero(t, n);
        convert_items(cx, src_items, &mut typed)?;
        *dst = typed;
        return Ok(());
    }

    *dst = ArrayValue::zero(t, n);
    convert_items(cx, src_items, dst)
}

fn convert_items(
    cx: &mut Context<'_>,
    src_items: &[Value],
    dst: &mut ArrayValue,
) -> Result<(), ConvertError> {
    for (src_item, dst_item) in src_items.iter().zip(dst.items_mut()) {
        convert_value(cx, src_item, dst_item)?;
    }
    Ok(())
}
