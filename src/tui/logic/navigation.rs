//! Keyboard focus traversal over the header controls.
//!
//! The resolve functions are pure: they map the current focus position and
//! a requested move onto the position that should receive focus next. The
//! focusable set is circular, so stepping past either end wraps around.
//! Callers hand in a [`FocusSurface`] that is queried fresh on every move,
//! since controls can be enabled or disabled between two key presses.

use crate::tui::logic::columns::Column;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    First,
    Last,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    Jump(Edge),
    Step(Direction),
}

/// A control that can hold keyboard focus.
pub trait FocusTarget {
    /// The column this control sorts, when it is a column header.
    fn column(&self) -> Option<Column>;
}

/// Live view of the focusable controls, implemented by the presentation
/// state.
pub trait FocusSurface {
    type Target: FocusTarget + Clone;

    /// Currently enabled controls, in traversal order.
    fn focusable_targets(&self) -> Vec<Self::Target>;

    /// Position of the focused control within [`Self::focusable_targets`],
    /// or `None` when nothing focusable has focus.
    fn current_focus_index(&self) -> Option<usize>;
}

pub fn resolve_absolute(edge: Edge, last_index: usize) -> usize {
    match edge {
        Edge::First => 0,
        Edge::Last => last_index,
    }
}

pub fn resolve_relative(direction: Direction, current: Option<usize>, last_index: usize) -> usize {
    let current = match current {
        Some(index) if index <= last_index => index,
        // focus was lost or the set shrank underneath it
        _ => {
            return match direction {
                Direction::Next => 0,
                Direction::Previous => last_index,
            }
        }
    };

    match direction {
        Direction::Previous if current == 0 => last_index,
        Direction::Next if current == last_index => 0,
        Direction::Next => current + 1,
        Direction::Previous => current - 1,
    }
}

/// Column to sort when the focused control is activated. Activating
/// anything that is not a column header does nothing.
pub fn resolve_activation<T: FocusTarget>(focused: Option<&T>) -> Option<Column> {
    focused.and_then(|target| target.column())
}

/// Resolves `movement` against the surface's current targets and returns
/// the target that should receive focus. `None` when nothing is focusable.
pub fn navigate<S: FocusSurface>(surface: &S, movement: FocusMove) -> Option<S::Target> {
    let targets = surface.focusable_targets();
    let last_index = targets.len().checked_sub(1)?;

    let index = match movement {
        FocusMove::Jump(edge) => resolve_absolute(edge, last_index),
        FocusMove::Step(direction) => {
            resolve_relative(direction, surface.current_focus_index(), last_index)
        }
    };

    targets.get(index).cloned()
}

/// Column behind the currently focused control of `surface`, if any.
pub fn focused_column<S: FocusSurface>(surface: &S) -> Option<Column> {
    let targets = surface.focusable_targets();
    let focused = surface.current_focus_index().and_then(|i| targets.get(i));
    resolve_activation(focused)
}
