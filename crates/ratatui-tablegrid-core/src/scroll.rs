use crate::focus::FocusedRegion;
use crate::layout::GridGeometry;

/// Pixel sizes of the column header (above the body) and row header (left of
/// the body).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderDimensions {
    pub column_header_height: i64,
    pub row_header_width: i64,
}

/// The currently visible viewport, in content pixels: `left`/`top` are the
/// scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewportRect {
    pub left: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
}

impl ViewportRect {
    pub fn new(left: i64, top: i64, width: i64, height: i64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Scroll corrections that bring the focused region into view. An axis that
/// needs no correction is absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollRequest {
    pub next_scroll_top: Option<i64>,
    pub next_scroll_left: Option<i64>,
}

impl ScrollRequest {
    pub fn is_noop(&self) -> bool {
        self.next_scroll_top.is_none() && self.next_scroll_left.is_none()
    }
}

// TRBL edges of a rectangle, in the viewport's coordinate space.
#[derive(Clone, Copy)]
struct Bounds {
    top: i64,
    right: i64,
    bottom: i64,
    left: i64,
}

/// Computes the minimal scroll change that keeps `focused_region` inside the
/// scrollable section of the viewport (the part not covered by headers or
/// frozen rows/columns).
///
/// The horizontal axis is skipped entirely for a row focus, which has no
/// column. The frozen counts are clamped against the grid extents.
pub fn scroll_to_focus<G: GridGeometry + ?Sized>(
    focused_region: &FocusedRegion,
    geometry: &G,
    num_frozen_rows: usize,
    num_frozen_cols: usize,
    header: HeaderDimensions,
    viewport: ViewportRect,
) -> ScrollRequest {
    let row = focused_region.row();
    let col = focused_region.column();

    let frozen_rows_height =
        geometry.cumulative_height_before(num_frozen_rows.min(geometry.num_rows()));
    let frozen_cols_width =
        geometry.cumulative_width_before(num_frozen_cols.min(geometry.num_cols()));

    let viewport_bounds = Bounds {
        top: viewport.top,
        right: viewport.left + viewport.width,
        bottom: viewport.top + viewport.height,
        left: viewport.left,
    };

    // the part of the viewport that contains visible, scrollable cells
    let scrollable = Bounds {
        top: viewport_bounds.top + header.column_header_height + frozen_rows_height,
        right: viewport_bounds.right,
        bottom: viewport_bounds.bottom,
        left: viewport_bounds.left + header.row_header_width + frozen_cols_width,
    };

    // Cumulative offsets do not include header size; the viewport rect does.
    // Shift the cell bounds into the same origin.
    let focused_cell = Bounds {
        top: geometry.cumulative_height_before(row) + header.column_header_height,
        right: geometry.cumulative_width_at(col.unwrap_or(0)) + header.row_header_width,
        bottom: geometry.cumulative_height_at(row) + header.column_header_height,
        left: geometry.cumulative_width_before(col.unwrap_or(0)) + header.row_header_width,
    };

    let mut request = ScrollRequest::default();

    let focused_cell_height = focused_cell.bottom - focused_cell.top;
    let scrollable_height = scrollable.bottom - scrollable.top;
    if focused_cell_height > scrollable_height || focused_cell.top < scrollable.top {
        // scroll up, minus one pixel to avoid clipping the focus border
        request.next_scroll_top =
            Some(viewport_bounds.top - (scrollable.top - focused_cell.top) - 1);
    } else if scrollable.bottom < focused_cell.bottom {
        // scroll down
        request.next_scroll_top =
            Some(viewport_bounds.top + (focused_cell.bottom - viewport_bounds.bottom));
    }

    if col.is_some() {
        let focused_cell_width = focused_cell.right - focused_cell.left;
        let scrollable_width = scrollable.right - scrollable.left;
        if focused_cell_width > scrollable_width || focused_cell.left < scrollable.left {
            // scroll left, again minus the one-pixel margin
            request.next_scroll_left =
                Some(viewport_bounds.left - (scrollable.left - focused_cell.left) - 1);
        } else if scrollable.right < focused_cell.right {
            // scroll right
            request.next_scroll_left =
                Some(viewport_bounds.left + (focused_cell.right - viewport_bounds.right));
        }
    }

    request
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::layout::GridLayout;

    fn cell_focus(row: usize, col: usize) -> FocusedRegion {
        FocusedRegion::Cell {
            row,
            col,
            focus_selection_index: Some(0),
        }
    }

    fn layout() -> GridLayout {
        // 10 rows of 20px, 10 cols of 100px
        GridLayout::uniform(10, 10, 20, 100)
    }

    #[test]
    fn focus_inside_the_scrollable_section_needs_no_scroll() {
        let viewport = ViewportRect::new(0, 0, 500, 200);
        let request = scroll_to_focus(
            &cell_focus(2, 2),
            &layout(),
            0,
            0,
            HeaderDimensions::default(),
            viewport,
        );
        assert!(request.is_noop());
        assert_eq!(request, ScrollRequest::default());
    }

    #[test]
    fn focus_below_the_viewport_scrolls_down_by_the_overflow() {
        let viewport = ViewportRect::new(0, 0, 500, 100);
        // row 7 spans 140..160, viewport bottom is 100
        let request = scroll_to_focus(
            &cell_focus(7, 0),
            &layout(),
            0,
            0,
            HeaderDimensions::default(),
            viewport,
        );
        assert_eq!(request.next_scroll_top, Some(60));
        assert_eq!(request.next_scroll_left, None);
    }

    #[test]
    fn focus_above_the_viewport_scrolls_up_with_anti_clip_margin() {
        let viewport = ViewportRect::new(0, 100, 500, 100);
        // row 2 spans 40..60, viewport top is 100
        let request = scroll_to_focus(
            &cell_focus(2, 0),
            &layout(),
            0,
            0,
            HeaderDimensions::default(),
            viewport,
        );
        assert_eq!(request.next_scroll_top, Some(39));
    }

    #[test]
    fn headers_and_frozen_rows_shrink_the_scrollable_section() {
        let header = HeaderDimensions {
            column_header_height: 30,
            row_header_width: 40,
        };
        let viewport = ViewportRect::new(0, 40, 500, 200);
        // with 2 frozen rows (40px) the scrollable top is 40+30+40=110;
        // row 3 sits at 60+30=90 in content space, above the band
        let request = scroll_to_focus(&cell_focus(3, 0), &layout(), 2, 0, header, viewport);
        assert_eq!(request.next_scroll_top, Some(40 - (110 - 90) - 1));
    }

    #[test]
    fn row_focus_never_requests_horizontal_scroll() {
        let focus = FocusedRegion::Row {
            row: 9,
            focus_selection_index: Some(0),
        };
        // narrow viewport that would certainly need horizontal correction
        // for a cell focus in a far column
        let viewport = ViewportRect::new(0, 0, 50, 50);
        let request = scroll_to_focus(
            &focus,
            &layout(),
            0,
            0,
            HeaderDimensions::default(),
            viewport,
        );
        assert_eq!(request.next_scroll_left, None);
        // vertical correction still happens: row 9 ends at 200, viewport at 50
        assert_eq!(request.next_scroll_top, Some(150));
    }

    #[test]
    fn focus_right_of_the_viewport_scrolls_right() {
        let viewport = ViewportRect::new(0, 0, 250, 200);
        // col 4 spans 400..500
        let request = scroll_to_focus(
            &cell_focus(0, 4),
            &layout(),
            0,
            0,
            HeaderDimensions::default(),
            viewport,
        );
        assert_eq!(request.next_scroll_left, Some(250));
        assert_eq!(request.next_scroll_top, None);
    }

    #[test]
    fn oversized_focused_cell_aligns_to_the_top() {
        let mut layout = layout();
        layout.set_row_height(5, 500);
        let viewport = ViewportRect::new(0, 0, 500, 100);
        // the cell is taller than the viewport: align its top (minus margin)
        let request = scroll_to_focus(
            &cell_focus(5, 0),
            &layout,
            0,
            0,
            HeaderDimensions::default(),
            viewport,
        );
        assert_eq!(request.next_scroll_top, Some(99));
    }
}
