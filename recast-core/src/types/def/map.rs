use crate::Shape;

/// Fields for map types
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct MapDef {
    k: Shape,
    v: Shape,
}

impl MapDef {
    /// Creates a map definition from key shape `k` to value shape `v`
    pub fn new(k: Shape, v: Shape) -> Self {
        Self { k, v }
    }

    /// Returns the shape of the keys of the map
    #[inline]
    pub fn k(&self) -> &Shape {
        &self.k
    }

    /// Returns the shape of the values of the map
    #[inline]
    pub fn v(&self) -> &Shape {
        &self.v
    }
}
