use crate::tui::logic::{Column, FocusSurface, FocusTarget};

/// One clickable column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderButton {
    pub column: Column,
    pub disabled: bool,
}

impl FocusTarget for HeaderButton {
    fn column(&self) -> Option<Column> {
        Some(self.column)
    }
}

/// The row of header buttons and which one holds keyboard focus.
#[derive(Debug, Clone)]
pub struct HeaderBar {
    pub buttons: Vec<HeaderButton>,
    pub focused: Option<Column>,
}

impl HeaderBar {
    pub fn new(disabled: &[Column]) -> Self {
        let mut bar = Self {
            buttons: Column::ALL
                .iter()
                .map(|&column| HeaderButton {
                    column,
                    disabled: false,
                })
                .collect(),
            focused: None,
        };
        for &column in disabled {
            bar.set_disabled(column, true);
        }
        bar
    }

    pub fn focus(&mut self, target: Option<HeaderButton>) {
        if let Some(button) = target {
            self.focused = Some(button.column);
        }
    }

    pub fn is_focused(&self, column: Column) -> bool {
        self.focused == Some(column)
            && self
                .buttons
                .iter()
                .any(|b| b.column == column && !b.disabled)
    }

    pub fn set_disabled(&mut self, column: Column, disabled: bool) {
        if let Some(button) = self.buttons.iter_mut().find(|b| b.column == column) {
            button.disabled = disabled;
        }
    }
}

impl Default for HeaderBar {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl FocusSurface for HeaderBar {
    type Target = HeaderButton;

    fn focusable_targets(&self) -> Vec<HeaderButton> {
        self.buttons.iter().filter(|b| !b.disabled).copied().collect()
    }

    fn current_focus_index(&self) -> Option<usize> {
        let focused = self.focused?;
        self.focusable_targets()
            .iter()
            .position(|b| b.column == focused)
    }
}
