use alloc::collections::BTreeMap;
use core::hash::{BuildHasher, Hash};
use std::collections::HashMap;

use crate::{MapValue, Reflect, Shape, Value, ValueError};

fn map_to_value<'a, K, V>(entries: impl Iterator<Item = (&'a K, &'a V)>) -> Value
where
    K: Reflect + 'a,
    V: Reflect + 'a,
{
    let mut map = MapValue::new(K::shape(), V::shape());
    for (k, v) in entries {
        map.insert(k.to_value(), v.to_value());
    }
    Value::Map(map)
}

fn map_entries<K: Reflect, V: Reflect>(
    value: Value,
    expected: Shape,
) -> Result<impl Iterator<Item = Result<(K, V), ValueError>>, ValueError> {
    match value {
        Value::Map(map) if *map.k() == K::shape() && *map.v() == V::shape() => Ok(map
            .into_entries()
            .into_iter()
            .map(|(k, v)| Ok((K::from_value(k)?, V::from_value(v)?)))),
        other => Err(ValueError::WrongShape {
            expected,
            actual: other.shape(),
        }),
    }
}

impl<K, V, S> Reflect for HashMap<K, V, S>
where
    K: Reflect + Eq + Hash,
    V: Reflect,
    S: BuildHasher + Default,
{
    fn shape() -> Shape {
        Shape::map(K::shape(), V::shape())
    }

    fn to_value(&self) -> Value {
        map_to_value(self.iter())
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        map_entries(value, Self::shape())?.collect()
    }
}

impl<K, V> Reflect for BTreeMap<K, V>
where
    K: Reflect + Ord,
    V: Reflect,
{
    fn shape() -> Shape {
        Shape::map(K::shape(), V::shape())
    }

    fn to_value(&self) -> Value {
        map_to_value(self.iter())
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        map_entries(value, Self::shape())?.collect()
    }
}
