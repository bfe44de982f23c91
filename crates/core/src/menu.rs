//! Selection menu state.
//!
//! Up/Down move the highlight and wrap around at both ends; Confirm picks the
//! highlighted entry.

use crate::types::MenuEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuStep {
    /// Highlight changed (or stayed put on a one-entry menu).
    Moved(usize),
    Selected(usize),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    len: usize,
    selected: usize,
}

impl Menu {
    /// A menu with `len` entries, first entry highlighted.
    ///
    /// `len` is clamped to at least 1.
    pub fn new(len: usize) -> Self {
        Self {
            len: len.max(1),
            selected: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn apply(&mut self, event: MenuEvent) -> MenuStep {
        match event {
            MenuEvent::Up => {
                self.selected = (self.selected + self.len - 1) % self.len;
                MenuStep::Moved(self.selected)
            }
            MenuEvent::Down => {
                self.selected = (self.selected + 1) % self.len;
                MenuStep::Moved(self.selected)
            }
            MenuEvent::Confirm => MenuStep::Selected(self.selected),
            MenuEvent::Quit => MenuStep::Quit,
        }
    }
}
