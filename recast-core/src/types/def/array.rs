use crate::Shape;

/// Fields for array types
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ArrayDef {
    t: Shape,
    n: usize,
}

impl ArrayDef {
    /// Creates an array definition of `n` items of shape `t`
    pub fn new(t: Shape, n: usize) -> Self {
        Self { t, n }
    }

    /// Returns the shape of the items in the array
    #[inline]
    pub fn t(&self) -> &Shape {
        &self.t
    }

    /// The length of the array
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }
}
