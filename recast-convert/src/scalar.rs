use recast_core::{Scalar, Shape, Value};

use crate::ConvertError;

/// Assigns a scalar source to a scalar destination of the same type.
///
/// No coercion happens: `"1"` does not become `1`, and `1i32` does not become `1i64`.
pub(crate) fn assign(src: &Value, dst: &mut Scalar) -> Result<(), ConvertError> {
    match src {
        Value::Scalar(scalar) if scalar.scalar_type() == dst.scalar_type() => {
            *dst = scalar.clone();
            Ok(())
        }
        _ => Err(ConvertError::mismatch(
            src,
            Shape::scalar(dst.scalar_type()),
        )),
    }
}
