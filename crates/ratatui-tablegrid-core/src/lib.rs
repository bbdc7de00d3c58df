//! `ratatui-tablegrid-core` is the coordinate model behind `ratatui-tablegrid`.
//!
//! It contains no rendering: everything here is plain index and pixel math, so
//! the crate is usable from any front end that can supply grid geometry and
//! apply selection/focus updates.
//!
//! ## What lives here
//!
//! - [`region::Region`]: an axis-aligned selection unit (whole table, row
//!   range, column range, or cell rectangle), plus sequence helpers for
//!   multi-region selections.
//! - [`focus::FocusedRegion`]: the single focused cell or row that anchors
//!   keyboard navigation, with conversion between focus modes.
//! - [`selection::resize_region`]: grows/shrinks the active selection by one
//!   step while keeping the focus anchored (shift+arrow).
//! - [`navigation`]: plain focus movement and the wrap-around walk through a
//!   multi-region selection (tab/enter style movement).
//! - [`layout::GridLayout`] / [`scroll::scroll_to_focus`]: cumulative
//!   row/column offsets and the minimal scroll correction that keeps the
//!   focus inside the visible, non-frozen part of the viewport.
//!
//! ## Policy
//!
//! Out-of-bounds results are never errors: a move that would leave the grid
//! returns `None` and the caller treats the event as inert. The only real
//! error is [`focus::ExpandError`], raised when a focus-anchored expansion is
//! asked to reach a multi-index destination.
pub mod cell;
pub mod direction;

pub mod focus;
pub mod navigation;
pub mod region;
pub mod selection;

pub mod layout;
pub mod scroll;
