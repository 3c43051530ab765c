use alloc::rc::Rc;
use alloc::sync::Arc;
use std::collections::HashMap;

use log::trace;
use owo_colors::OwoColorize;
use recast_core::StructType;

use crate::FieldDescriptor;

/// State of one top-level conversion: the annotation key, and the field
/// descriptors already resolved for each record type met so far.
pub(crate) struct Context<'k> {
    tag_key: &'k str,
    // keyed by address; the Arc in the value keeps that address alive
    descriptors: HashMap<*const StructType, (Arc<StructType>, Rc<[FieldDescriptor]>)>,
}

impl<'k> Context<'k> {
    pub(crate) fn new(tag_key: &'k str) -> Self {
        Self {
            tag_key,
            descriptors: HashMap::new(),
        }
    }

    /// Field descriptors of `ty`, in field declaration order
    pub(crate) fn descriptors(&mut self, ty: &Arc<StructType>) -> Rc<[FieldDescriptor]> {
        let tag_key = self.tag_key;
        let (_, descriptors) = self
            .descriptors
            .entry(Arc::as_ptr(ty))
            .or_insert_with(|| {
                trace!(
                    "Resolving {} annotations of {}",
                    tag_key.yellow(),
                    ty.blue()
                );
                let descriptors = ty
                    .fields()
                    .iter()
                    .map(|field| FieldDescriptor::resolve(field, tag_key))
                    .collect();
                (Arc::clone(ty), descriptors)
            });
        Rc::clone(descriptors)
    }
}
