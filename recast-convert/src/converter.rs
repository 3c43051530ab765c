use log::{debug, trace};
use owo_colors::OwoColorize;
use recast_core::{PointerValue, Reflect, Value};

use crate::context::Context;
use crate::dispatch::convert_value;
use crate::{ConvertError, DEFAULT_TAG_KEY};

/// Conversion settings: which annotation key field annotations are read from.
///
/// ```
/// use recast_convert::Converter;
///
/// let converter = Converter::with_tag_key("json");
/// assert_eq!(converter.tag_key(), "json");
/// assert_eq!(Converter::new().tag_key(), "recast");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Converter<'k> {
    tag_key: &'k str,
}

impl Converter<'static> {
    /// A converter reading annotations under [`DEFAULT_TAG_KEY`]
    pub const fn new() -> Self {
        Self {
            tag_key: DEFAULT_TAG_KEY,
        }
    }
}

impl Default for Converter<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'k> Converter<'k> {
    /// A converter reading annotations under `tag_key`
    pub const fn with_tag_key(tag_key: &'k str) -> Self {
        Self { tag_key }
    }

    /// The annotation key
    #[inline]
    pub const fn tag_key(&self) -> &'k str {
        self.tag_key
    }

    /// Converts `src` into the target of `dst`, which must be a non-nil pointer.
    ///
    /// On error, whatever was converted before the failing element stays written.
    pub fn convert(&self, src: &Value, dst: &mut Value) -> Result<(), ConvertError> {
        let target = match dst {
            Value::Pointer(pointer) => {
                if pointer.is_nil() {
                    return Err(ConvertError::InvalidDestination {
                        shape: pointer.shape(),
                        nil: true,
                    });
                }
                pointer.target_or_zero()
            }
            other => {
                return Err(ConvertError::InvalidDestination {
                    shape: other.shape(),
                    nil: false,
                });
            }
        };

        trace!("Converting with annotation key {}", self.tag_key.yellow());
        let mut cx = Context::new(self.tag_key);
        convert_value(&mut cx, src, target)
    }

    /// Converts a Rust value into another Rust value of a different type.
    ///
    /// `dst` is left unchanged unless the whole conversion succeeds.
    pub fn convert_into<S, D>(&self, src: &S, dst: &mut D) -> Result<(), ConvertError>
    where
        S: Reflect,
        D: Reflect,
    {
        let mismatch = || ConvertError::TypeMismatch {
            src: S::shape(),
            dst: D::shape(),
        };

        let mut target = Value::Pointer(PointerValue::new(D::shape(), Some(dst.to_value())));
        self.convert(&src.to_value(), &mut target)?;

        let converted = match target {
            Value::Pointer(pointer) => pointer.into_target(),
            _ => None,
        }
        .ok_or_else(mismatch)?;

        *dst = D::from_value(converted).map_err(|err| {
            debug!("Converted value does not fit {}: {}", D::shape().blue(), err);
            mismatch()
        })?;
        Ok(())
    }
}
