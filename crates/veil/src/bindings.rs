//! Tag-to-wrapper binding map.
//!
//! The original behavior joined fields and wrappers by re-assembling key
//! strings on every lookup. Here the join is computed exactly once, during
//! setup, into an explicit map from wrapper key to wrapper location.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::warn;

use crate::schema::{FormDocument, WrapperKey};

/// Location of a wrapper inside a [`FormDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapperRef {
    pub group: usize,
    pub wrapper: usize,
}

/// Map from wrapper key to wrapper location, built once per document.
///
/// Wrapper keys are expected to be unique across the document; a duplicate
/// key keeps its first declaration and later ones are logged and ignored.
#[derive(Debug, Default)]
pub struct BindingMap {
    map: HashMap<WrapperKey, WrapperRef>,
}

impl BindingMap {
    /// Record every wrapper's location, in document order.
    pub fn build(doc: &FormDocument) -> Self {
        let mut map = HashMap::new();
        for (group_idx, group) in doc.groups.iter().enumerate() {
            for (wrapper_idx, wrapper) in group.wrappers.iter().enumerate() {
                match map.entry(wrapper.key.clone()) {
                    Entry::Occupied(_) => {
                        warn!(key = %wrapper.key, group = %group.name,
                            "duplicate wrapper key, keeping first declaration");
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(WrapperRef {
                            group: group_idx,
                            wrapper: wrapper_idx,
                        });
                    }
                }
            }
        }
        Self { map }
    }

    /// Resolve a dependency tag to the wrapper it names, if any.
    pub fn resolve(&self, key: &WrapperKey) -> Option<WrapperRef> {
        self.map.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ConditionalWrapper, RadioGroup};
    use pretty_assertions::assert_eq;

    fn doc_with_two_groups() -> FormDocument {
        FormDocument::new()
            .group(
                RadioGroup::new("method")
                    .wrapper(ConditionalWrapper::for_option("method", "post")),
            )
            .group(
                RadioGroup::new("contact")
                    .wrapper(ConditionalWrapper::for_option("contact", "phone"))
                    .wrapper(ConditionalWrapper::for_option("contact", "email")),
            )
    }

    #[test]
    fn build_records_every_wrapper() {
        let bindings = BindingMap::build(&doc_with_two_groups());
        assert_eq!(bindings.len(), 3);
        assert_eq!(
            bindings.resolve(&WrapperKey::for_option("contact", "email")),
            Some(WrapperRef { group: 1, wrapper: 1 })
        );
    }

    #[test]
    fn unknown_key_resolves_to_none() {
        let bindings = BindingMap::build(&doc_with_two_groups());
        assert_eq!(bindings.resolve(&WrapperKey::for_option("method", "fax")), None);
    }

    #[test]
    fn duplicate_key_keeps_first_declaration() {
        let doc = FormDocument::new()
            .group(
                RadioGroup::new("a")
                    .wrapper(ConditionalWrapper::for_option("a", "1"))
                    .wrapper(ConditionalWrapper::for_option("a", "1")),
            );
        let bindings = BindingMap::build(&doc);
        assert_eq!(bindings.len(), 1);
        assert_eq!(
            bindings.resolve(&WrapperKey::for_option("a", "1")),
            Some(WrapperRef { group: 0, wrapper: 0 })
        );
    }
}
