use crate::cell::Axis;
use crate::direction::Direction;
use crate::focus::FocusedRegion;
use crate::region::Interval;
use crate::region::Region;

/// Grows or shrinks `region` by one step in `direction`, keeping the focus
/// point (when provided) as the fixed anchor and moving the edge opposite it.
///
/// A full-table region and a direction off the region's axis (full rows moved
/// left/right, full columns moved up/down) are no-ops that return the region
/// unchanged. The result is normalized to increasing order and floored at 0;
/// callers clamp the far bound against grid extents.
pub fn resize_region(
    region: &Region,
    direction: Direction,
    focused_region: Option<&FocusedRegion>,
) -> Region {
    let move_end = moves_end_edge(region, direction, focused_region);
    match (region, direction.axis()) {
        (Region::Table, _) => *region,
        (Region::Rows(_), Axis::Col) | (Region::Cols(_), Axis::Row) => *region,
        (Region::Rows(rows), Axis::Row) => Region::Rows(resized(*rows, direction, move_end)),
        (Region::Cols(cols), Axis::Col) => Region::Cols(resized(*cols, direction, move_end)),
        (Region::Cells { rows, cols }, Axis::Row) => Region::Cells {
            rows: resized(*rows, direction, move_end),
            cols: *cols,
        },
        (Region::Cells { rows, cols }, Axis::Col) => Region::Cells {
            rows: *rows,
            cols: resized(*cols, direction, move_end),
        },
    }
}

/// Decides which edge moves on the direction's axis. With a focus anchor the
/// edge opposite the focus moves; without one, Down/Right move the end edge
/// and Up/Left the start edge.
fn moves_end_edge(
    region: &Region,
    direction: Direction,
    focused_region: Option<&FocusedRegion>,
) -> bool {
    match focused_region {
        Some(focused) => match direction.axis() {
            Axis::Row => focused.is_at_region_top(region),
            Axis::Col => focused.is_at_region_left(region),
        },
        None => direction.is_forward(),
    }
}

fn resized(interval: Interval, direction: Direction, move_end: bool) -> Interval {
    let (anchor, edge) = if move_end {
        (interval.start, interval.end)
    } else {
        (interval.end, interval.start)
    };
    let moved = (edge as i64 + direction.step()).max(0) as usize;
    Interval::new(anchor, moved)
}
