use ratatui_tablegrid_core::focus::ExpandError;
use ratatui_tablegrid_core::focus::FocusedRegion;
use ratatui_tablegrid_core::region::Region;

/// Which header strip a drag runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderAxis {
    Rows,
    Columns,
}

impl HeaderAxis {
    /// The full-row or full-column region spanning `a..=b` (any order).
    pub fn to_region(self, a: usize, b: usize) -> Region {
        match self {
            HeaderAxis::Rows => Region::rows(a, b),
            HeaderAxis::Columns => Region::cols(a, b),
        }
    }
}

/// Drag-selection state for one header strip.
///
/// The index where the drag started is the anchor; every update re-derives
/// the selected region between the anchor and the pointer. `update` and
/// `end` return `None` when no drag is active, which callers treat as
/// "leave the selection alone".
#[derive(Clone, Copy, Debug, Default)]
pub struct DragSelect {
    anchor: Option<(HeaderAxis, usize)>,
}

impl DragSelect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    /// Starts a drag at `index` and returns the initial single-index region.
    pub fn begin(&mut self, axis: HeaderAxis, index: usize) -> Region {
        self.anchor = Some((axis, index));
        axis.to_region(index, index)
    }

    /// The region between the anchor and the pointer's current index.
    pub fn update(&self, index: usize) -> Option<Region> {
        let (axis, anchor) = self.anchor?;
        Some(axis.to_region(anchor, index))
    }

    /// Finishes the drag. A release with no matching press yields `None`.
    pub fn end(&mut self, index: usize) -> Option<Region> {
        let region = self.update(index);
        self.anchor = None;
        region
    }

    pub fn abort(&mut self) {
        self.anchor = None;
    }
}

/// Shift-click expansion: grows the focused region along `axis` so it spans
/// from the focus to `index`.
pub fn expand_from_focus(
    focused_region: &FocusedRegion,
    axis: HeaderAxis,
    index: usize,
) -> Result<Region, ExpandError> {
    focused_region.expand_region(&axis.to_region(index, index))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn drag_tracks_the_anchor_in_both_directions() {
        let mut drag = DragSelect::new();
        assert_eq!(drag.begin(HeaderAxis::Columns, 3), Region::col(3));
        assert_eq!(drag.update(5), Some(Region::cols(3, 5)));
        // dragging back past the anchor reverses the span
        assert_eq!(drag.update(1), Some(Region::cols(1, 3)));
        assert_eq!(drag.end(1), Some(Region::cols(1, 3)));
        assert!(!drag.is_active());
    }

    #[test]
    fn release_without_press_selects_nothing() {
        let mut drag = DragSelect::new();
        assert_eq!(drag.update(4), None);
        assert_eq!(drag.end(4), None);
    }

    #[test]
    fn abort_discards_the_anchor() {
        let mut drag = DragSelect::new();
        drag.begin(HeaderAxis::Rows, 2);
        drag.abort();
        assert_eq!(drag.end(7), None);
    }

    #[test]
    fn shift_click_expands_from_the_focus() {
        let focus = FocusedRegion::Cell {
            row: 4,
            col: 2,
            focus_selection_index: Some(0),
        };
        assert_eq!(
            expand_from_focus(&focus, HeaderAxis::Rows, 1),
            Ok(Region::rows(1, 4))
        );
        assert_eq!(
            expand_from_focus(&focus, HeaderAxis::Columns, 6),
            Ok(Region::cols(2, 6))
        );
    }
}
