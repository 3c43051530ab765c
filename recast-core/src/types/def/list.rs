use crate::Shape;

/// Fields for list types
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ListDef {
    t: Shape,
}

impl ListDef {
    /// Creates a list definition for items of shape `t`
    pub fn new(t: Shape) -> Self {
        Self { t }
    }

    /// Returns the shape of the items in the list
    #[inline]
    pub fn t(&self) -> &Shape {
        &self.t
    }
}
