//! `ratatui-tablegrid` is a spreadsheet-style table widget for ratatui with
//! multi-region selection, cell/row focus, and scroll-to-focus.
//!
//! The coordinate model (regions, focus, navigation, scroll math) lives in
//! `ratatui-tablegrid-core`; this crate adds the terminal-facing pieces.
//!
//! ## Design goals
//!
//! - Event-loop agnostic: you drive input + rendering from your app.
//! - State lives with the caller: selection and focus are passed into
//!   [`view::TableGridView::render`] each frame, and the keyboard controller
//!   reports changes through the [`hotkeys::TableHandlers`] trait instead of
//!   mutating anything itself.
//! - Clipboard is app-controlled: copy hands the cell list to a handler and
//!   the caller decides how to reach the clipboard.
//!
//! Useful entry points:
//! - [`view::TableGridView`]: the widget (headers, frozen rows/columns,
//!   selection and focus styling, mouse hit-testing).
//! - [`hotkeys::TableHotkeys`]: keyboard controller (arrows, shift+arrows,
//!   Tab/Enter, select-all, copy).
//! - [`drag::DragSelect`]: header drag-selection state machine.
pub mod bindings;
pub mod drag;
pub mod hotkeys;
pub mod input;
pub mod view;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;
