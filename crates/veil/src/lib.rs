//! Conditional reveal behavior for radio groups.
//!
//! Fields tied to a specific radio option stay hidden until that option is
//! selected, are revealed when it is, and hidden again when a different
//! option is chosen. The crate runs a one-time relocation pass moving each
//! tagged field into the wrapper of the option it depends on, then keeps the
//! wrappers' hidden flags consistent with the checked options for as long as
//! the form lives.

pub mod action;
pub mod bindings;
pub mod component;
pub mod relocate;
pub mod render;
pub mod schema;
pub mod visibility;

pub use action::{Action, RadioChanged};
pub use component::RadioForm;
pub use schema::{
    ConditionalField, ConditionalWrapper, FieldKind, FormDocument, RadioGroup, RadioOption,
    WrapperKey,
};
pub use visibility::VisibilityController;

/// Run the startup pass over a document and return the live form component.
pub fn setup(doc: FormDocument) -> RadioForm {
    RadioForm::new(doc)
}
