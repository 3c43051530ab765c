use log::trace;
use owo_colors::OwoColorize;
use recast_core::{Def, ListValue, Shape, ShapeKind, Value};

use crate::ConvertError;
use crate::context::Context;
use crate::dispatch::convert_value;

/// Converts into a list: element-wise from another list, or by wrapping a
/// single value whose kind matches the element kind.
pub(crate) fn convert(
    cx: &mut Context<'_>,
    src: &Value,
    dst: &mut ListValue,
) -> Result<(), ConvertError> {
    if let Value::List(src_list) = src {
        let t = dst.t().clone();
        let items = dst.items_mut();
        items.clear();
        items.resize_with(src_list.len(), || t.zero_value());
        for (src_item, dst_item) in src_list.items().iter().zip(items.iter_mut()) {
            convert_value(cx, src_item, dst_item)?;
        }
        return Ok(());
    }

    if !wraps_into(src.kind(), dst.t()) {
        return Err(ConvertError::mismatch(src, dst.shape()));
    }

    trace!(
        "Wrapping {} into a one-element {}",
        src.shape().green(),
        dst.shape().blue()
    );
    let zero = dst.t().zero_value();
    let items = dst.items_mut();
    items.clear();
    items.push(zero);
    convert_value(cx, src, &mut items[0])
}

/// Whether a value of kind `kind` can become the single element of a list of `t`.
///
/// Pointer elements are looked through.
fn wraps_into(kind: ShapeKind, t: &Shape) -> bool {
    let mut t = t;
    while let Def::Pointer(def) = t.def() {
        t = def.pointee();
    }
    t.is_dynamic() || t.kind() == kind
}

#[cfg(test)]
mod tests {
    use super::*;
    use recast_core::ScalarType;

    #[test]
    fn wrap_kinds() {
        let string = Shape::scalar(ScalarType::String);
        let kind = ShapeKind::Scalar(ScalarType::String);

        assert!(wraps_into(kind, &string));
        assert!(wraps_into(kind, &Shape::dynamic()));
        assert!(wraps_into(kind, &Shape::pointer(string.clone())));
        assert!(wraps_into(
            kind,
            &Shape::pointer(Shape::pointer(Shape::dynamic()))
        ));
        assert!(!wraps_into(kind, &Shape::scalar(ScalarType::I64)));
        assert!(!wraps_into(ShapeKind::Map, &Shape::list(string)));
    }
}
