//! One-shot relocation of conditional fields into wrapper slots.
//!
//! Each unattached field is moved into the slot of the wrapper named by its
//! dependency tags. Ownership transfers: after the pass a relocated field
//! lives in exactly one slot. The pass runs once, from setup; it does not
//! detect a prior run, so callers must not invoke it twice.

use tracing::debug;

use crate::bindings::BindingMap;
use crate::schema::FormDocument;

/// Move every unattached field with a resolvable dependency tag into the
/// matching wrapper's slot.
///
/// Rules:
/// - tags are considered in declaration order; only tags matching the
///   `conditional-` pattern participate
/// - when several tags resolve, the last one wins (the field ends up in a
///   single slot)
/// - a field with no resolvable tag stays unattached
pub fn relocate(doc: &mut FormDocument, bindings: &BindingMap) {
    let fields = std::mem::take(&mut doc.unattached);
    for field in fields {
        let target = field
            .tags
            .iter()
            .filter(|tag| tag.is_conditional())
            .filter_map(|tag| bindings.resolve(tag))
            .last();

        match target {
            Some(target) => {
                let wrapper = &mut doc.groups[target.group].wrappers[target.wrapper];
                debug!(field = %field.key, wrapper = %wrapper.key, "relocated field");
                wrapper.slot.push(field);
            }
            None => {
                debug!(field = %field.key, "no matching wrapper, field left in place");
                doc.unattached.push(field);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{
        ConditionalField, ConditionalWrapper, FieldKind, FormDocument, RadioGroup, RadioOption,
    };
    use pretty_assertions::assert_eq;

    fn method_doc() -> FormDocument {
        FormDocument::new()
            .group(
                RadioGroup::new("method")
                    .option(RadioOption::new("email", "By email").checked())
                    .option(RadioOption::new("post", "By post"))
                    .wrapper(ConditionalWrapper::for_option("method", "post")),
            )
            .field(
                ConditionalField::new("address", "Postal address", FieldKind::Text)
                    .depends_on("method", "post"),
            )
    }

    #[test]
    fn tagged_field_moves_into_matching_slot() {
        let mut doc = method_doc();
        let bindings = BindingMap::build(&doc);
        relocate(&mut doc, &bindings);

        assert!(doc.unattached.is_empty());
        let wrapper = doc.groups[0].wrapper_for("post").unwrap();
        assert_eq!(wrapper.slot.len(), 1);
        assert_eq!(wrapper.slot[0].key, "address");
    }

    #[test]
    fn field_without_matching_wrapper_stays_unattached() {
        let mut doc = FormDocument::new()
            .group(RadioGroup::new("method"))
            .field(
                ConditionalField::new("address", "Postal address", FieldKind::Text)
                    .depends_on("method", "post"),
            );
        let bindings = BindingMap::build(&doc);
        relocate(&mut doc, &bindings);

        assert_eq!(doc.unattached.len(), 1);
        assert_eq!(doc.unattached[0].key, "address");
    }

    #[test]
    fn non_conditional_tags_are_ignored() {
        let mut doc = FormDocument::new()
            .group(
                RadioGroup::new("method")
                    .wrapper(ConditionalWrapper::for_option("method", "post")),
            )
            .field(
                ConditionalField::new("address", "Postal address", FieldKind::Text)
                    .tag("form-field")
                    .depends_on("method", "post"),
            );
        let bindings = BindingMap::build(&doc);
        relocate(&mut doc, &bindings);

        assert_eq!(doc.groups[0].wrapper_for("post").unwrap().slot.len(), 1);
    }

    #[test]
    fn multi_tag_field_lands_in_last_resolvable_wrapper() {
        let mut doc = FormDocument::new()
            .group(
                RadioGroup::new("a")
                    .wrapper(ConditionalWrapper::for_option("a", "1"))
                    .wrapper(ConditionalWrapper::for_option("a", "2")),
            )
            .field(
                ConditionalField::new("extra", "Extra", FieldKind::Text)
                    .depends_on("a", "1")
                    .depends_on("a", "2"),
            );
        let bindings = BindingMap::build(&doc);
        relocate(&mut doc, &bindings);

        assert!(doc.groups[0].wrapper_for("1").unwrap().is_empty());
        assert_eq!(doc.groups[0].wrapper_for("2").unwrap().slot.len(), 1);
    }

    #[test]
    fn unresolvable_tail_tag_falls_back_to_earlier_match() {
        // Last *resolvable* tag wins, not merely the last declared one.
        let mut doc = FormDocument::new()
            .group(
                RadioGroup::new("a")
                    .wrapper(ConditionalWrapper::for_option("a", "1")),
            )
            .field(
                ConditionalField::new("extra", "Extra", FieldKind::Text)
                    .depends_on("a", "1")
                    .depends_on("a", "9"),
            );
        let bindings = BindingMap::build(&doc);
        relocate(&mut doc, &bindings);

        assert_eq!(doc.groups[0].wrapper_for("1").unwrap().slot.len(), 1);
    }

    #[test]
    fn slot_order_follows_document_order() {
        let mut doc = FormDocument::new()
            .group(
                RadioGroup::new("method")
                    .wrapper(ConditionalWrapper::for_option("method", "post")),
            )
            .field(
                ConditionalField::new("line1", "Address line 1", FieldKind::Text)
                    .depends_on("method", "post"),
            )
            .field(
                ConditionalField::new("line2", "Address line 2", FieldKind::Text)
                    .depends_on("method", "post"),
            );
        let bindings = BindingMap::build(&doc);
        relocate(&mut doc, &bindings);

        let keys: Vec<&str> = doc.groups[0]
            .wrapper_for("post")
            .unwrap()
            .slot
            .iter()
            .map(|f| f.key.as_str())
            .collect();
        assert_eq!(keys, vec!["line1", "line2"]);
    }
}
