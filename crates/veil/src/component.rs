//! Interactive radio form component (logic / state only, rendering lives in
//! `render.rs`).
//!
//! `RadioForm` owns the relocated document and its visibility controller.
//! Key events are mapped to [`Action`]s; `update` executes them. Everything
//! runs synchronously on the caller's thread: one event is handled to
//! completion (full re-evaluation of the affected group) before the next one
//! is seen.

use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::action::{Action, RadioChanged};
use crate::bindings::BindingMap;
use crate::relocate::relocate;
use crate::render;
use crate::schema::FormDocument;
use crate::visibility::VisibilityController;

/// A form of radio groups with conditional reveal behavior.
pub struct RadioForm {
    doc: FormDocument,
    controller: VisibilityController,

    // UI / navigation state
    focused_group: usize,
    focused_option: usize,
}

impl RadioForm {
    /// Run the one-time startup pass over a document and wire up the
    /// controller: build the binding map, relocate fields, establish initial
    /// visibility.
    ///
    /// Relocation must complete before visibility is evaluated, because a
    /// wrapper is only revealed once its slot actually contains content.
    pub fn new(mut doc: FormDocument) -> Self {
        let bindings = BindingMap::build(&doc);
        relocate(&mut doc, &bindings);
        let controller = VisibilityController::new(&doc);
        controller.init(&mut doc);
        Self {
            doc,
            controller,
            focused_group: 0,
            focused_option: 0,
        }
    }

    pub fn document(&self) -> &FormDocument {
        &self.doc
    }

    pub fn focus(&self) -> (usize, usize) {
        (self.focused_group, self.focused_option)
    }

    /// Map a key event to an action. No state changes happen here.
    ///
    /// - Up / Down: move option focus (wraps around)
    /// - Tab / BackTab: move group focus (wraps around)
    /// - Space / Enter: check the focused option
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Up => Some(Action::FocusPrev),
            KeyCode::Down => Some(Action::FocusNext),
            KeyCode::Tab => Some(Action::FocusNextGroup),
            KeyCode::BackTab => Some(Action::FocusPrevGroup),
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_action(),
            _ => None,
        };
        Ok(action)
    }

    /// Execute an action against the form state.
    pub fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::FocusNext => {
                self.focus_next_option();
                Ok(Some(Action::Update))
            }
            Action::FocusPrev => {
                self.focus_prev_option();
                Ok(Some(Action::Update))
            }
            Action::FocusNextGroup => {
                self.focus_group(1);
                Ok(Some(Action::Update))
            }
            Action::FocusPrevGroup => {
                self.focus_group(-1);
                Ok(Some(Action::Update))
            }
            Action::Toggle(change) => {
                self.toggle(&change);
                Ok(Some(Action::Update))
            }
            Action::Update => Ok(None),
        }
    }

    /// Check an option programmatically and re-evaluate its group, as if the
    /// matching radio input had been clicked.
    pub fn select(&mut self, name: &str, value: &str) {
        let change = RadioChanged {
            name: name.to_string(),
            value: value.to_string(),
            checked: true,
        };
        self.toggle(&change);
    }

    pub fn draw(&self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        render::render_form(&self.doc, self.focus(), f, area)
    }

    fn toggle(&mut self, change: &RadioChanged) {
        // Mirror the exclusivity the browser enforces on radio inputs before
        // the controller re-evaluates the group.
        if change.checked {
            if let Some(group) = self.doc.groups.iter_mut().find(|g| g.name == change.name) {
                group.check(&change.value);
            }
        }
        self.controller.apply(&mut self.doc, change);
    }

    fn toggle_action(&self) -> Option<Action> {
        let group = self.doc.groups.get(self.focused_group)?;
        let option = group.options.get(self.focused_option)?;
        Some(Action::Toggle(RadioChanged {
            name: group.name.clone(),
            value: option.value.clone(),
            checked: true,
        }))
    }

    fn focus_next_option(&mut self) {
        let count = self.option_count();
        if count == 0 {
            return;
        }
        self.focused_option = (self.focused_option + 1) % count;
    }

    fn focus_prev_option(&mut self) {
        let count = self.option_count();
        if count == 0 {
            return;
        }
        if self.focused_option == 0 {
            self.focused_option = count - 1;
        } else {
            self.focused_option -= 1;
        }
    }

    fn focus_group(&mut self, dir: i32) {
        let count = self.doc.groups.len();
        if count == 0 {
            return;
        }
        let current = self.focused_group as i32;
        self.focused_group = (current + dir).rem_euclid(count as i32) as usize;
        self.focused_option = 0;
    }

    fn option_count(&self) -> usize {
        self.doc
            .groups
            .get(self.focused_group)
            .map(|g| g.options.len())
            .unwrap_or(0)
    }
}
