use crate::Shape;

/// Describes a nullable pointer: `Option<T>`, `Box<T>`
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct PointerDef {
    pointee: Shape,
}

impl PointerDef {
    /// Creates a pointer definition to `pointee`
    pub fn new(pointee: Shape) -> Self {
        Self { pointee }
    }

    /// Returns the shape of the value behind the pointer
    #[inline]
    pub fn pointee(&self) -> &Shape {
        &self.pointee
    }
}
