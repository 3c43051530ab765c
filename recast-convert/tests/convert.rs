use recast_convert::ConvertError;
use recast_core::{ArrayValue, ListValue, MapValue, PointerValue, ScalarType, Shape, Value};
use recast_testhelpers::test;

fn string() -> Shape {
    Shape::scalar(ScalarType::String)
}

fn int() -> Shape {
    Shape::scalar(ScalarType::I64)
}

fn list<V: Into<Value>>(t: Shape, items: impl IntoIterator<Item = V>) -> Value {
    ListValue::new(t, items.into_iter().map(Into::into).collect()).into()
}

fn array<V: Into<Value>>(t: Shape, items: impl IntoIterator<Item = V>) -> Value {
    ArrayValue::new(t, items.into_iter().map(Into::into).collect()).into()
}

/// Converts `src` into a fresh zero value of `shape`
fn convert_to(src: impl Into<Value>, shape: &Shape) -> Result<Value, ConvertError> {
    let mut dst: Value = PointerValue::new(shape.clone(), Some(shape.zero_value())).into();
    recast_convert::convert(&src.into(), &mut dst)?;
    match dst {
        Value::Pointer(pointer) => Ok(pointer.into_target().unwrap()),
        other => panic!("destination pointer was replaced by {other:?}"),
    }
}

#[test]
fn bool_to_bool() {
    let d = convert_to(true, &Shape::scalar(ScalarType::Bool))?;
    assert_eq!(d, Value::from(true));
}

#[test]
fn string_to_string() {
    let d = convert_to("test", &string())?;
    assert_eq!(d, Value::from("test"));
}

#[test]
fn int_to_int() {
    let d = convert_to(42i64, &int())?;
    assert_eq!(d, Value::from(42i64));
}

#[test]
fn int_in_dynamic_slot_to_int() {
    let d = convert_to(Value::dynamic(42i64), &int())?;
    assert_eq!(d, Value::from(42i64));
}

#[test]
fn float_to_float() {
    let d = convert_to(42.0f64, &Shape::scalar(ScalarType::F64))?;
    assert_eq!(d, Value::from(42.0f64));
}

#[test]
fn pointer_source_is_looked_through() {
    let d = convert_to(Value::pointer_to("test"), &string())?;
    assert_eq!(d, Value::from("test"));

    let d = convert_to(Value::dynamic(Value::pointer_to("test")), &string())?;
    assert_eq!(d, Value::from("test"));
}

#[test]
fn pointer_destination_is_allocated() {
    let d = convert_to("test", &Shape::pointer(string()))?;
    assert_eq!(d, Value::pointer_to("test"));
}

#[test]
fn dynamic_list_to_string_list() {
    let s = list(
        Shape::dynamic(),
        [Value::dynamic("test1"), Value::dynamic("test2")],
    );
    let d = convert_to(s, &Shape::list(string()))?;
    assert_eq!(d, list(string(), ["test1", "test2"]));
}

#[test]
fn string_array_to_string_array() {
    let s = array(string(), ["test1", "test2"]);
    let d = convert_to(s.clone(), &Shape::array(string(), 2))?;
    assert_eq!(d, s);
}

#[test]
fn dynamic_array_to_string_array() {
    let s = array(
        Shape::dynamic(),
        [Value::dynamic("test1"), Value::dynamic("test2")],
    );
    let d = convert_to(s, &Shape::array(string(), 2))?;
    assert_eq!(d, array(string(), ["test1", "test2"]));
}

#[test]
fn list_to_array() {
    let s = list(string(), ["test1", "test2"]);
    let d = convert_to(s, &Shape::array(string(), 2))?;
    assert_eq!(d, array(string(), ["test1", "test2"]));
}

#[test]
fn shorter_source_leaves_trailing_zeros() {
    let s = array(string(), ["test1"]);
    let d = convert_to(s, &Shape::array(string(), 3))?;
    assert_eq!(d, array(string(), ["test1", "", ""]));

    let s = list(Shape::dynamic(), [Value::dynamic(1i64)]);
    let d = convert_to(s, &Shape::array(int(), 2))?;
    assert_eq!(d, array(int(), [1i64, 0]));
}

#[test]
fn longer_source_does_not_fit_an_array() {
    let s = array(string(), ["test1", "test2", "test3"]);
    let err = convert_to(s, &Shape::array(string(), 2)).unwrap_err();
    assert_eq!(
        err,
        ConvertError::TypeMismatch {
            src: Shape::array(string(), 3),
            dst: Shape::array(string(), 2),
        }
    );
}

#[test]
fn scalar_does_not_fit_an_array() {
    let err = convert_to("test", &Shape::array(string(), 1)).unwrap_err();
    assert_eq!(
        err,
        ConvertError::TypeMismatch {
            src: string(),
            dst: Shape::array(string(), 1),
        }
    );
}

#[test]
fn string_to_string_list() {
    let d = convert_to("test1", &Shape::list(string()))?;
    assert_eq!(d, list(string(), ["test1"]));
}

#[test]
fn int_to_int_list() {
    let d = convert_to(100i64, &Shape::list(int()))?;
    assert_eq!(d, list(int(), [100i64]));
}

#[test]
fn int_to_dynamic_list() {
    let d = convert_to(101i64, &Shape::list(Shape::dynamic()))?;
    assert_eq!(d, list(Shape::dynamic(), [Value::dynamic(101i64)]));
}

#[test]
fn string_to_list_of_pointers() {
    let d = convert_to("test1", &Shape::list(Shape::pointer(string())))?;
    assert_eq!(
        d,
        list(Shape::pointer(string()), [Value::pointer_to("test1")])
    );
}

#[test]
fn string_does_not_wrap_into_int_list() {
    let err = convert_to("test1", &Shape::list(int())).unwrap_err();
    assert_eq!(
        err,
        ConvertError::TypeMismatch {
            src: string(),
            dst: Shape::list(int()),
        }
    );
}

#[test]
fn nested_dynamic_list() {
    let s = list(
        Shape::dynamic(),
        [
            Value::dynamic("test1"),
            Value::dynamic("test2"),
            Value::dynamic(42i64),
            Value::dynamic(42.0f64),
            Value::dynamic(list(string(), ["sub1", "sub2"])),
            Value::dynamic(list(Shape::scalar(ScalarType::Bool), [true, false])),
        ],
    );
    let d = convert_to(s.clone(), &Shape::list(Shape::dynamic()))?;
    assert_eq!(d, s);
}

#[test]
fn dynamic_map_to_string_map() {
    let s = MapValue::new(Shape::dynamic(), Shape::dynamic())
        .with(Value::dynamic("test1"), Value::dynamic("value1"))
        .with(Value::dynamic("test2"), Value::dynamic("value1"));
    let d = convert_to(s, &Shape::map(string(), string()))?;
    assert_eq!(
        d,
        Value::Map(
            MapValue::new(string(), string())
                .with("test1", "value1")
                .with("test2", "value1")
        )
    );
}

#[test]
fn float_map_to_float_map() {
    let float = Shape::scalar(ScalarType::F64);
    let s = MapValue::new(Shape::dynamic(), float.clone())
        .with(Value::dynamic("test1"), 1.1f64)
        .with(Value::dynamic("test2"), 2.5f64);
    let d = convert_to(s, &Shape::map(string(), float.clone()))?;
    assert_eq!(
        d,
        Value::Map(
            MapValue::new(string(), float)
                .with("test1", 1.1f64)
                .with("test2", 2.5f64)
        )
    );
}

#[test]
fn map_keys_are_assigned_not_converted() {
    let s = MapValue::new(int(), string()).with(1i64, "one");
    let err = convert_to(s, &Shape::map(string(), string())).unwrap_err();
    assert_eq!(
        err,
        ConvertError::TypeMismatch {
            src: int(),
            dst: string(),
        }
    );
}

#[test]
fn map_into_dynamic_keys() {
    let s = MapValue::new(string(), string()).with("a", "b");
    let d = convert_to(s, &Shape::map(Shape::dynamic(), string()))?;
    assert_eq!(
        d,
        Value::Map(MapValue::new(Shape::dynamic(), string()).with(Value::dynamic("a"), "b"))
    );
}

#[test]
fn map_destination_is_cleared() {
    let shape = Shape::map(string(), string());
    let mut dst = Value::pointer_to(MapValue::new(string(), string()).with("old", "value"));
    let s = MapValue::new(string(), string()).with("new", "value");
    recast_convert::convert(&Value::Map(s), &mut dst)?;
    assert_eq!(
        dst,
        Value::pointer_to(MapValue::new(string(), string()).with("new", "value"))
    );
    assert_eq!(dst.indirect().shape(), shape);
}

#[test]
fn string_to_int_is_a_type_mismatch() {
    let err = convert_to("test", &int()).unwrap_err();
    assert_eq!(
        err,
        ConvertError::TypeMismatch {
            src: string(),
            dst: int(),
        }
    );
}

#[test]
fn integer_widths_do_not_mix() {
    let err = convert_to(1i32, &int()).unwrap_err();
    assert!(matches!(err, ConvertError::TypeMismatch { .. }));
}

#[test]
fn non_pointer_destination() {
    let mut dst = Value::from("");
    let err = recast_convert::convert(&Value::from(""), &mut dst).unwrap_err();
    assert_eq!(
        err,
        ConvertError::InvalidDestination {
            shape: string(),
            nil: false,
        }
    );
    assert_eq!(dst, Value::from(""));
}

#[test]
fn nil_pointer_destination() {
    let mut dst: Value = PointerValue::nil(string()).into();
    let err = recast_convert::convert(&Value::from(""), &mut dst).unwrap_err();
    assert_eq!(
        err,
        ConvertError::InvalidDestination {
            shape: Shape::pointer(string()),
            nil: true,
        }
    );
}

#[test]
fn nil_into_dynamic_slot() {
    let mut dst = Value::pointer_to(Value::dynamic("old"));
    recast_convert::convert(&Value::nil(), &mut dst)?;
    assert_eq!(dst, Value::pointer_to(Value::nil()));
}

#[test]
fn nil_into_pointer() {
    let d = convert_to(PointerValue::nil(string()), &Shape::pointer(string()))?;
    assert_eq!(d, Value::Pointer(PointerValue::nil(string())));

    let mut dst = Value::pointer_to(Value::pointer_to("old"));
    recast_convert::convert(&Value::nil(), &mut dst)?;
    assert_eq!(dst, Value::pointer_to(PointerValue::nil(string())));
}

#[test]
fn nil_into_scalar() {
    let err = convert_to(Value::nil(), &string()).unwrap_err();
    assert_eq!(
        err,
        ConvertError::TypeMismatch {
            src: Shape::dynamic(),
            dst: string(),
        }
    );
}

#[test]
fn failed_conversion_keeps_partial_writes() {
    let s = list(
        Shape::dynamic(),
        [Value::dynamic("a"), Value::dynamic(1i64)],
    );
    let mut dst = Value::pointer_to(ListValue::new(string(), Vec::new()));
    let err = recast_convert::convert(&s, &mut dst).unwrap_err();
    assert!(matches!(err, ConvertError::TypeMismatch { .. }));
    assert_eq!(dst, Value::pointer_to(list(string(), ["a", ""])));
}

#[test]
fn error_messages() {
    let err = ConvertError::FieldRequired {
        field_name: "Test2".into(),
    };
    assert!(err.to_string().contains("Test2"));

    let err = ConvertError::TypeMismatch {
        src: string(),
        dst: Shape::list(int()),
    };
    let message = err.to_string();
    assert!(message.contains("String"));
    assert!(message.contains("Vec<i64>"));
}
