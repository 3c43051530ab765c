use std::collections::HashMap;

use recast_core::{
    ListValue, MapValue, PointerValue, Reflect, Scalar, Shape, StructFields, StructType,
    StructValue, Value, ValueError,
};
use recast_testhelpers::test;

#[test]
fn dynamic_slots_do_not_nest() {
    let once = Value::dynamic("a");
    assert_eq!(Value::dynamic(once.clone()), once);
    assert_eq!(once.shape(), Shape::dynamic());
    assert_eq!(Value::dynamic(Value::nil()), Value::nil());
}

#[test]
fn indirect_looks_through_one_pointer() {
    let a = Value::from("a");
    assert_eq!(Value::dynamic("a").indirect(), &a);
    assert_eq!(Value::pointer_to("a").indirect(), &a);
    assert_eq!(Value::dynamic(Value::pointer_to("a")).indirect(), &a);
    assert_eq!(Value::pointer_to(Value::dynamic("a")).indirect(), &a);

    let twice = Value::pointer_to(Value::pointer_to("a"));
    assert_eq!(twice.indirect(), &Value::pointer_to("a"));

    let nil = Value::Pointer(PointerValue::nil(Shape::of::<String>()));
    assert_eq!(nil.indirect(), &nil);
    assert!(nil.indirect().is_nil());
    assert!(Value::nil().indirect().is_nil());
}

#[test]
fn pointers() {
    let mut pointer = PointerValue::nil(Shape::of::<i64>());
    assert!(pointer.is_nil());
    assert_eq!(pointer.target(), None);

    *pointer.target_or_zero() = Value::from(3i64);
    assert_eq!(pointer.target(), Some(&Value::from(3i64)));
    assert_eq!(pointer.target_or_zero(), &mut Value::from(3i64));

    pointer.clear();
    assert!(pointer.is_nil());
    assert_eq!(pointer.shape(), Shape::of::<Option<i64>>());
}

#[test]
fn map_entries_replace_and_compare_unordered() {
    let mut map = MapValue::new(Shape::dynamic(), Shape::of::<i64>());
    assert_eq!(map.insert(Value::dynamic("a"), Value::from(1i64)), None);
    assert_eq!(
        map.insert(Value::dynamic("a"), Value::from(2i64)),
        Some(Value::from(1i64))
    );
    map.insert(Value::dynamic("b"), Value::from(3i64));
    assert_eq!(map.len(), 2);
    assert_eq!(map.get_str("a"), Some(&Value::from(2i64)));
    assert_eq!(map.get_str("c"), None);

    let reordered = MapValue::new(Shape::dynamic(), Shape::of::<i64>())
        .with(Value::dynamic("b"), 3i64)
        .with(Value::dynamic("a"), 2i64);
    assert_eq!(map, reordered);
}

#[test]
fn scalars_round_trip() {
    assert_eq!(i8::from_value(Value::from(-3i8))?, -3);
    assert_eq!(char::from_value('x'.to_value())?, 'x');
    assert_eq!(
        String::from_value("hello".to_string().to_value())?,
        "hello"
    );
    assert_eq!(Value::from(1.5f32).as_scalar(), Some(&Scalar::F32(1.5)));

    let err = i64::from_value(Value::from(1i32)).unwrap_err();
    assert_eq!(
        err,
        ValueError::WrongShape {
            expected: Shape::of::<i64>(),
            actual: Shape::of::<i32>(),
        }
    );
}

#[test]
fn containers_round_trip() {
    let v = vec![vec![1u8, 2], vec![]];
    assert_eq!(Vec::<Vec<u8>>::from_value(v.to_value())?, v);

    let a = [Some(1u32), None];
    assert_eq!(<[Option<u32>; 2]>::from_value(a.to_value())?, a);

    let mut m = HashMap::new();
    m.insert("k".to_string(), Box::new(1.0f64));
    assert_eq!(HashMap::<String, Box<f64>>::from_value(m.to_value())?, m);
}

#[test]
fn containers_check_their_element_shape() {
    let strings = ListValue::new(Shape::of::<String>(), vec!["a".into()]);
    let err = Vec::<i64>::from_value(strings.into()).unwrap_err();
    assert_eq!(
        err,
        ValueError::WrongShape {
            expected: Shape::of::<Vec<i64>>(),
            actual: Shape::of::<Vec<String>>(),
        }
    );

    let err = <[i64; 3]>::from_value([1i64, 2].to_value()).unwrap_err();
    assert!(matches!(err, ValueError::WrongShape { .. }));
}

#[test]
fn value_is_the_dynamic_slot() {
    let v = Value::from(7i64);
    let captured = v.to_value();
    assert_eq!(captured, Value::dynamic(7i64));
    assert_eq!(Value::from_value(captured)?, v);
    assert_eq!(Value::from_value(Value::nil())?, Value::nil());
    assert_eq!(
        Value::from_value(Value::from(7i64)).unwrap_err(),
        ValueError::WrongShape {
            expected: Shape::dynamic(),
            actual: Shape::of::<i64>(),
        }
    );
}

#[test]
fn boxes_are_never_nil() {
    let nil = Option::<String>::None.to_value();
    let err = Box::<String>::from_value(nil).unwrap_err();
    assert_eq!(
        err,
        ValueError::WasNotA {
            expected: "non-nil pointer",
            actual: Shape::of::<Box<String>>(),
        }
    );
}

#[test]
fn struct_fields_are_read_in_order() {
    let ty = StructType::builder()
        .name("Pair")
        .field(recast_core::Field::builder("a", Shape::of::<i64>()).build())
        .field(recast_core::Field::builder("b", Shape::of::<String>()).build())
        .build();
    let shape = Shape::struct_(ty);
    let ty = shape.as_struct().unwrap().clone();

    let value = StructValue::new(ty.clone(), vec![1i64.into(), "two".into()]);
    assert_eq!(value.field_by_name("b"), Some(&Value::from("two")));

    let mut fields = StructFields::new(value.into(), &shape)?;
    assert_eq!(fields.next::<i64>("a")?, 1);
    assert_eq!(fields.next::<String>("b")?, "two");
    assert_eq!(
        fields.next::<String>("c").unwrap_err(),
        ValueError::MissingField {
            field_name: "c".into(),
        }
    );

    let short = StructValue::new(ty, vec![1i64.into()]);
    let mut fields = StructFields::new(short.into(), &shape)?;
    fields.next::<i64>("a")?;
    assert!(fields.next::<String>("b").is_err());

    let err = StructFields::new(Value::from(1i64), &shape).err();
    assert_eq!(
        err,
        Some(ValueError::WrongShape {
            expected: shape,
            actual: Shape::of::<i64>(),
        })
    );
}
