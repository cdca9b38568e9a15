//! Visibility state machine for conditional wrappers.
//!
//! One `GroupController` per radio group owns the mapping from option value
//! to wrapper key, computed once at build time. `VisibilityController`
//! dispatches change events to the controller of the affected group and runs
//! the initialization pass.
//!
//! Per group the machine has two states: "no option checked" (every wrapper
//! hidden) and "option O checked" (the wrapper keyed to O visible if its slot
//! is non-empty, every other wrapper hidden). Each event re-evaluates the
//! whole group rather than diffing against previous state, which is what
//! makes re-applying the same event idempotent.

use std::collections::{HashMap, HashSet};

use color_eyre::eyre::eyre;
use color_eyre::Result;
use tracing::{debug, warn};

use crate::action::RadioChanged;
use crate::schema::{FormDocument, RadioGroup, WrapperKey};

/// Controller for a single radio group.
pub struct GroupController {
    name: String,
    group: usize,
    /// Option value -> key of the wrapper that option reveals.
    targets: HashMap<String, WrapperKey>,
}

impl GroupController {
    /// Build the controller for the group at `index`.
    ///
    /// Fails if two wrappers in the group share a key; the caller decides
    /// whether to skip the group (see [`VisibilityController::new`]).
    pub fn new(index: usize, group: &RadioGroup) -> Result<Self> {
        let mut seen = HashSet::new();
        for wrapper in &group.wrappers {
            if !seen.insert(&wrapper.key) {
                return Err(eyre!(
                    "duplicate wrapper key `{}` in group `{}`",
                    wrapper.key,
                    group.name
                ));
            }
        }

        let targets = group
            .options
            .iter()
            .map(|o| (o.value.clone(), WrapperKey::for_option(&group.name, &o.value)))
            .collect();

        Ok(Self {
            name: group.name.clone(),
            group: index,
            targets,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group_index(&self) -> usize {
        self.group
    }

    /// Establish the initial visibility: everything hidden, then the checked
    /// option's wrapper revealed if its slot is non-empty.
    pub fn init(&self, group: &mut RadioGroup) {
        for wrapper in &mut group.wrappers {
            wrapper.hidden = true;
        }
        let checked: Option<&WrapperKey> = group
            .options
            .iter()
            .find(|o| o.checked)
            .and_then(|o| self.targets.get(&o.value));
        if let Some(target) = checked {
            for wrapper in &mut group.wrappers {
                if wrapper.key == *target && !wrapper.is_empty() {
                    wrapper.hidden = false;
                }
            }
        }
    }

    /// Re-evaluate every wrapper in the group against a change event.
    ///
    /// The wrapper keyed to the newly checked option is revealed only if its
    /// slot is non-empty; every other wrapper is hidden. An unchecked event
    /// hides everything.
    pub fn apply(&self, group: &mut RadioGroup, change: &RadioChanged) {
        let target = if change.checked {
            self.targets.get(&change.value)
        } else {
            None
        };
        for wrapper in &mut group.wrappers {
            wrapper.hidden = match target {
                Some(key) if wrapper.key == *key => wrapper.is_empty(),
                _ => true,
            };
        }
        debug!(group = %self.name, value = %change.value, checked = change.checked,
            "re-evaluated group visibility");
    }
}

/// Owns one controller per radio group and routes events to them.
pub struct VisibilityController {
    controllers: Vec<GroupController>,
}

impl VisibilityController {
    /// Build controllers group by group.
    ///
    /// A group whose controller cannot be built is skipped (its wrappers stay
    /// hidden); the fault does not abort setup of the remaining groups.
    pub fn new(doc: &FormDocument) -> Self {
        let mut controllers = Vec::with_capacity(doc.groups.len());
        for (index, group) in doc.groups.iter().enumerate() {
            match GroupController::new(index, group) {
                Ok(controller) => controllers.push(controller),
                Err(err) => {
                    warn!(group = %group.name, error = %err,
                        "skipping group setup, its wrappers stay hidden");
                }
            }
        }
        Self { controllers }
    }

    /// Initialization pass over the whole document. Wrappers of skipped
    /// groups are hidden here as well.
    pub fn init(&self, doc: &mut FormDocument) {
        for group in &mut doc.groups {
            for wrapper in &mut group.wrappers {
                wrapper.hidden = true;
            }
        }
        for controller in &self.controllers {
            controller.init(&mut doc.groups[controller.group]);
        }
    }

    /// Dispatch a change event to the controller of the named group.
    /// Events for unknown (or skipped) groups are ignored.
    pub fn apply(&self, doc: &mut FormDocument, change: &RadioChanged) {
        if let Some(controller) = self.controllers.iter().find(|c| c.name == change.name) {
            controller.apply(&mut doc.groups[controller.group], change);
        }
    }
}
