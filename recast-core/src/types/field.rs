use alloc::string::String;
use alloc::vec::Vec;

use crate::Shape;

/// Describes a field in a struct
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Field {
    name: String,
    shape: Shape,
    tags: Vec<Tag>,
}

impl Field {
    /// Returns a builder for a field named `name` of shape `shape`
    pub fn builder(name: impl Into<String>, shape: Shape) -> FieldBuilder {
        FieldBuilder {
            name: name.into(),
            shape,
            tags: Vec::new(),
        }
    }

    /// Declared name of the field
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shape of the field's type
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// All tags attached to this field
    #[inline]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// The tag text for `key`, if any. An empty text counts as no tag.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| tag.key == key)
            .map(|tag| tag.text.as_str())
            .filter(|text| !text.is_empty())
    }
}

/// Annotation text attached to a field under a key, e.g. `recast = "test-1,required"`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Tag {
    /// The annotation key this text answers to
    pub key: String,
    /// The raw annotation text
    pub text: String,
}

/// Builder for Field
pub struct FieldBuilder {
    name: String,
    shape: Shape,
    tags: Vec<Tag>,
}

impl FieldBuilder {
    /// Attaches annotation `text` under `key`
    pub fn tag(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.tags.push(Tag {
            key: key.into(),
            text: text.into(),
        });
        self
    }

    /// Builds the Field
    pub fn build(self) -> Field {
        Field {
            name: self.name,
            shape: self.shape,
            tags: self.tags,
        }
    }
}
