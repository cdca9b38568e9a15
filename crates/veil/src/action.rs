use serde::{Deserialize, Serialize};
use strum::Display;

/// A change of checked state on a radio input, as seen by the visibility
/// controller. Carries everything the re-evaluation needs; no element lookup
/// happens on the event path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioChanged {
    pub name: String,
    pub value: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Display, Deserialize)]
pub enum Action {
    Update,
    FocusNext,
    FocusPrev,
    FocusNextGroup,
    FocusPrevGroup,
    /// A radio option changed its checked state; re-evaluate its group.
    Toggle(RadioChanged),
}
