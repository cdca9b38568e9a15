//! Document model for conditional radio forms.
//!
//! This module defines the declarative pieces of the system:
//! - `WrapperKey`: the composite key joining a radio option to its wrapper
//! - `RadioOption` / `RadioGroup`: the exclusive-choice inputs
//! - `ConditionalWrapper`: the container revealed when its option is selected
//! - `ConditionalField`: a field declaring which wrapper(s) it belongs to
//! - `FormDocument`: the whole form tree as handed over by the host
//!
//! Responsibilities here are intentionally pure / data-centric. Relocation
//! lives in `relocate.rs`, visibility transitions in `visibility.rs`, and
//! rendering in `render.rs`.
//!
//! Typical usage:
//! ```ignore
//! let doc = FormDocument::new()
//!     .group(
//!         RadioGroup::new("method")
//!             .option(RadioOption::new("email", "By email").checked())
//!             .option(RadioOption::new("post", "By post"))
//!             .wrapper(ConditionalWrapper::for_option("method", "post")),
//!     )
//!     .field(
//!         ConditionalField::new("address", "Postal address", FieldKind::Text)
//!             .depends_on("method", "post"),
//!     );
//! ```
//!
//! Documents can also be deserialized from JSON (the structural input contract
//! of the surrounding host markup); the `hidden` flag is never read from input
//! and always starts true.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix shared by every dependency tag and wrapper key.
const CONDITIONAL_PREFIX: &str = "conditional-";

/// Composite key of the form `"conditional-" + name + "-" + value` relating a
/// radio option to the wrapper it reveals.
///
/// Keys compare by exact string equality. A key constructed from an arbitrary
/// declared tag may not carry the `conditional-` prefix at all; such tags are
/// ignored by the relocator (see [`WrapperKey::is_conditional`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WrapperKey(String);

impl WrapperKey {
    /// Key for the wrapper belonging to option `value` of group `name`.
    pub fn for_option(name: &str, value: &str) -> Self {
        Self(format!("{CONDITIONAL_PREFIX}{name}-{value}"))
    }

    /// Wrap a declared dependency tag verbatim.
    pub fn from_tag(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Whether this key matches the `conditional-` naming pattern.
    pub fn is_conditional(&self) -> bool {
        self.0.starts_with(CONDITIONAL_PREFIX)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WrapperKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of a conditional field. Kinds carry no behavior here (field editing
/// and validation are host concerns); they only drive the rendered placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    #[default]
    Text,
    Secret,
    Number,
    Date,
}

/// A form field tagged with the wrapper(s) it belongs to.
///
/// Fields start out in [`FormDocument::unattached`] and are moved into a
/// wrapper's slot by the relocation pass. A field whose tags match no wrapper
/// stays unattached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalField {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(default)]
    pub tags: Vec<WrapperKey>,
}

impl ConditionalField {
    /// Create a new field definition with no dependency tags.
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            tags: Vec::new(),
        }
    }

    /// Declare a dependency on the wrapper of option `value` in group `name`.
    pub fn depends_on(mut self, name: &str, value: &str) -> Self {
        self.tags.push(WrapperKey::for_option(name, value));
        self
    }

    /// Declare a raw dependency tag (kept verbatim, matched by exact equality).
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(WrapperKey::from_tag(tag));
        self
    }
}

fn hidden_default() -> bool {
    true
}

/// Container revealed when the radio option sharing its key is selected.
///
/// `slot` is the content slot fields are relocated into; a wrapper with an
/// empty slot is never shown. `hidden` is runtime state, not part of the
/// input contract: every wrapper starts hidden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalWrapper {
    pub key: WrapperKey,
    #[serde(default)]
    pub slot: Vec<ConditionalField>,
    #[serde(skip, default = "hidden_default")]
    pub hidden: bool,
}

impl ConditionalWrapper {
    /// Wrapper for option `value` of group `name`, with an empty slot.
    pub fn for_option(name: &str, value: &str) -> Self {
        Self::with_key(WrapperKey::for_option(name, value))
    }

    pub fn with_key(key: WrapperKey) -> Self {
        Self {
            key,
            slot: Vec::new(),
            hidden: true,
        }
    }

    /// True if the content slot holds no fields.
    pub fn is_empty(&self) -> bool {
        self.slot.is_empty()
    }
}

/// A single exclusive-choice input within a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadioOption {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub checked: bool,
}

impl RadioOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            checked: false,
        }
    }

    /// Mark this option as initially checked.
    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }
}

/// A set of mutually exclusive radio options sharing a `name`, plus the
/// conditional wrappers nested inside the group.
///
/// Exclusivity (at most one checked option) is maintained by the interactive
/// component, mirroring what the browser enforces for the original markup;
/// the visibility controller does not re-check it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadioGroup {
    pub name: String,
    #[serde(default)]
    pub options: Vec<RadioOption>,
    #[serde(default)]
    pub wrappers: Vec<ConditionalWrapper>,
}

impl RadioGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
            wrappers: Vec::new(),
        }
    }

    pub fn option(mut self, option: RadioOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn wrapper(mut self, wrapper: ConditionalWrapper) -> Self {
        self.wrappers.push(wrapper);
        self
    }

    /// The currently checked option, if any.
    pub fn checked_option(&self) -> Option<&RadioOption> {
        self.options.iter().find(|o| o.checked)
    }

    /// The wrapper belonging to option `value`, if one is declared.
    pub fn wrapper_for(&self, value: &str) -> Option<&ConditionalWrapper> {
        let key = WrapperKey::for_option(&self.name, value);
        self.wrappers.iter().find(|w| w.key == key)
    }

    /// Check option `value` and uncheck its siblings. Returns false if the
    /// group declares no such option.
    pub fn check(&mut self, value: &str) -> bool {
        if !self.options.iter().any(|o| o.value == value) {
            return false;
        }
        for option in &mut self.options {
            option.checked = option.value == value;
        }
        true
    }
}

/// The whole form tree as handed over by the host at startup.
///
/// `unattached` holds the conditional fields in their original location;
/// the relocation pass drains it into wrapper slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormDocument {
    #[serde(default)]
    pub groups: Vec<RadioGroup>,
    #[serde(default)]
    pub unattached: Vec<ConditionalField>,
}

impl FormDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(mut self, group: RadioGroup) -> Self {
        self.groups.push(group);
        self
    }

    pub fn field(mut self, field: ConditionalField) -> Self {
        self.unattached.push(field);
        self
    }

    pub fn group_by_name(&self, name: &str) -> Option<&RadioGroup> {
        self.groups.iter().find(|g| g.name == name)
    }
}
