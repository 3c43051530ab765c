//! Field annotations: `name[,modifier,...]`

use alloc::string::String;
use alloc::vec::Vec;

use recast_core::Field;

/// The modifier that makes a destination field mandatory
pub const REQUIRED: &str = "required";

/// A parsed annotation.
///
/// | text | name | skip | modifiers |
/// |---|---|---|---|
/// | `""` | `None` | no | none |
/// | `"test-1"` | `test-1` | no | none |
/// | `",required"` | `None` | no | `required` |
/// | `"-"`, `"-,required"` | `-` | yes | ignored |
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Annotation<'a> {
    /// The renamed key, `None` when the field keeps its declared name
    pub name: Option<&'a str>,
    /// True when the field must never be read or written
    pub skip: bool,
    modifiers: Vec<&'a str>,
}

impl<'a> Annotation<'a> {
    /// Parses annotation text
    pub fn parse(text: &'a str) -> Self {
        let (name, modifiers) = match text.split_once(',') {
            Some((name, rest)) => (name, rest.split(',').filter(|m| !m.is_empty()).collect()),
            None => (text, Vec::new()),
        };
        Self {
            name: Some(name).filter(|name| !name.is_empty()),
            skip: name == "-",
            modifiers,
        }
    }

    /// The modifiers following the name, in order of appearance
    pub fn modifiers(&self) -> &[&'a str] {
        &self.modifiers
    }

    /// Set-membership test on the modifiers
    pub fn has_modifier(&self, modifier: &str) -> bool {
        self.modifiers.contains(&modifier)
    }

    /// True if the `required` modifier is present
    pub fn is_required(&self) -> bool {
        self.has_modifier(REQUIRED)
    }
}

/// What the converter needs to know about a record field, for one annotation key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// The declared name of the field
    pub name: String,
    /// The key used to look the field up: its annotation name, or its declared name
    pub key: String,
    /// The field is annotated `-`
    pub skip: bool,
    /// The field is annotated `required`
    pub required: bool,
}

impl FieldDescriptor {
    /// Resolves `field` against the annotation stored under `tag_key`
    pub fn resolve(field: &Field, tag_key: &str) -> Self {
        let annotation = field.tag(tag_key).map(Annotation::parse).unwrap_or_default();
        Self {
            name: field.name().into(),
            key: annotation.name.unwrap_or(field.name()).into(),
            skip: annotation.skip,
            required: annotation.is_required(),
        }
    }
}
