use ratatui_tablegrid_core::direction::Direction;

use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::key_ctrl;
use crate::input::key_event_matches;

/// Actions the table controller understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableAction {
    SelectAll,
    Copy,
    ClearSelection,
    /// Arrow key: move the focus and re-seat the selection at it.
    FocusMove(Direction),
    /// Tab/Enter style: move the focus inside the current selection without
    /// changing the selection.
    FocusMoveInSelection(Direction),
    /// Shift+arrow: grow/shrink the active selected region.
    SelectionResize(Direction),
}

/// Key bindings for table interactions.
///
/// Directional actions are structural (arrows, Tab, Enter, with shift
/// selecting the resize/backward variants); only the chord-style bindings are
/// configurable.
#[derive(Clone, Debug)]
pub struct TableBindings {
    pub select_all: Vec<KeyEvent>,
    pub copy: Vec<KeyEvent>,
    pub clear: Vec<KeyEvent>,
}

impl Default for TableBindings {
    fn default() -> Self {
        Self {
            select_all: vec![key_ctrl('a')],
            copy: vec![key_ctrl('c')],
            clear: vec![KeyEvent::new(KeyCode::Esc)],
        }
    }
}

impl TableBindings {
    pub fn action_for(&self, key: &KeyEvent) -> Option<TableAction> {
        if self.select_all.iter().any(|p| key_event_matches(p, key)) {
            return Some(TableAction::SelectAll);
        }
        if self.copy.iter().any(|p| key_event_matches(p, key)) {
            return Some(TableAction::Copy);
        }
        if self.clear.iter().any(|p| key_event_matches(p, key)) {
            return Some(TableAction::ClearSelection);
        }

        if key.modifiers.ctrl || key.modifiers.alt {
            return None;
        }

        let direction = match key.code {
            KeyCode::Up => Some(Direction::Up),
            KeyCode::Down => Some(Direction::Down),
            KeyCode::Left => Some(Direction::Left),
            KeyCode::Right => Some(Direction::Right),
            _ => None,
        };
        if let Some(direction) = direction {
            return Some(if key.modifiers.shift {
                TableAction::SelectionResize(direction)
            } else {
                TableAction::FocusMove(direction)
            });
        }

        match key.code {
            KeyCode::Tab => Some(TableAction::FocusMoveInSelection(if key.modifiers.shift {
                Direction::Left
            } else {
                Direction::Right
            })),
            KeyCode::Enter => Some(TableAction::FocusMoveInSelection(if key.modifiers.shift {
                Direction::Up
            } else {
                Direction::Down
            })),
            _ => None,
        }
    }
}
