use crate::cell::Axis;
use crate::cell::CellCoords;
use crate::direction::Direction;
use crate::focus::FocusedRegion;
use crate::region::CellBounds;
use crate::region::Region;

/// Outcome of a focus move attempted within the current selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionMove {
    /// The focus moved to a new position inside (or wrapped across) the
    /// selected regions.
    Moved(FocusedRegion),
    /// The move degenerates to a plain focus move; the caller should perform
    /// that instead.
    Fallthrough,
}

/// Moves the focus one step in `direction`, independent of any selection.
///
/// A row focus moves only on Up/Down; Left/Right return it unchanged. Moves
/// reset the associated selection index to 0 (the caller replaces the
/// selection with a fresh single region at the new focus). A move that would
/// leave `[0, num_rows) x [0, num_cols)` returns `None` and the triggering
/// event is inert.
pub fn move_focus(
    focused_region: &FocusedRegion,
    direction: Direction,
    num_rows: usize,
    num_cols: usize,
) -> Option<FocusedRegion> {
    let moved = match *focused_region {
        FocusedRegion::Row { row, .. } => match direction {
            Direction::Up | Direction::Down => FocusedRegion::Row {
                row: stepped(row, direction)?,
                focus_selection_index: Some(0),
            },
            // a row focus has no column axis to move on
            Direction::Left | Direction::Right => *focused_region,
        },
        FocusedRegion::Cell { row, col, .. } => {
            let (row, col) = match direction.axis() {
                Axis::Row => (stepped(row, direction)?, col),
                Axis::Col => (row, stepped(col, direction)?),
            };
            FocusedRegion::Cell {
                row,
                col,
                focus_selection_index: Some(0),
            }
        }
    };
    in_bounds(&moved, num_rows, num_cols).then_some(moved)
}

/// Moves the focus within the bounds of the selected regions, wrapping from
/// region to region, without changing the selection itself.
///
/// Only defined for cell focus; any other focus yields `None`. When the focus
/// has no associated region and a selection exists, the focus jumps to the
/// top-left cell of the first region. An empty selection, or a single
/// selected region that collapses to one cell, yields
/// [`SelectionMove::Fallthrough`].
///
/// Otherwise the focus walks one step along the direction's axis inside the
/// associated region; exiting that axis wraps to the opposite edge and steps
/// the perpendicular axis once; exiting both axes hops to the adjacent
/// region (modulo the region count), landing on its bottom-right corner when
/// moving Up/Left and its top-left corner when moving Down/Right. Region
/// order is taken as the caller supplies it, never re-sorted.
pub fn move_focus_in_selection(
    focused_region: &FocusedRegion,
    direction: Direction,
    selected_regions: &[Region],
    num_rows: usize,
    num_cols: usize,
) -> Option<SelectionMove> {
    let FocusedRegion::Cell {
        row,
        col,
        focus_selection_index,
    } = *focused_region
    else {
        // moving within a selection is only supported for cell focus
        return None;
    };

    let moved = match focus_selection_index {
        None if !selected_regions.is_empty() => {
            let bounds = selected_regions[0].as_cell_bounds(num_rows, num_cols);
            FocusedRegion::Cell {
                row: bounds.rows.start,
                col: bounds.cols.start,
                focus_selection_index: Some(0),
            }
        }
        _ => {
            if selected_regions.is_empty() {
                return Some(SelectionMove::Fallthrough);
            }
            let index = focus_selection_index.unwrap_or(0);
            let region = selected_regions.get(index)?;
            let bounds = region.as_cell_bounds(num_rows, num_cols);
            if bounds.is_single_cell() && selected_regions.len() == 1 {
                return Some(SelectionMove::Fallthrough);
            }
            walk(
                CellCoords::new(row, col),
                index,
                direction,
                bounds,
                selected_regions,
                num_rows,
                num_cols,
            )
        }
    };

    in_bounds(&moved, num_rows, num_cols).then_some(SelectionMove::Moved(moved))
}

/// One step of the intra-selection walk: primary axis first, then wrap and
/// step the secondary axis, then hop to the adjacent region.
fn walk(
    mut cell: CellCoords,
    mut index: usize,
    direction: Direction,
    bounds: CellBounds,
    selected_regions: &[Region],
    num_rows: usize,
    num_cols: usize,
) -> FocusedRegion {
    let primary = direction.axis();
    let secondary = primary.other();
    let backward = !direction.is_forward();
    let primary_interval = bounds.interval(primary);
    let secondary_interval = bounds.interval(secondary);

    let moved_primary = primary.of(cell) as i64 + direction.step();
    if moved_primary >= primary_interval.start as i64 && moved_primary <= primary_interval.end as i64
    {
        primary.set(&mut cell, moved_primary as usize);
    } else {
        // wrap to the opposite primary edge, take one step along the secondary
        let wrapped = if backward {
            primary_interval.end
        } else {
            primary_interval.start
        };
        primary.set(&mut cell, wrapped);

        let moved_secondary = secondary.of(cell) as i64 + direction.step();
        if moved_secondary >= secondary_interval.start as i64
            && moved_secondary <= secondary_interval.end as i64
        {
            secondary.set(&mut cell, moved_secondary as usize);
        } else {
            // exited the region on both axes: hop to the adjacent region,
            // wrapping around the sequence
            index = if backward {
                index.checked_sub(1).unwrap_or(selected_regions.len() - 1)
            } else if index + 1 >= selected_regions.len() {
                0
            } else {
                index + 1
            };
            let next_bounds = selected_regions[index].as_cell_bounds(num_rows, num_cols);
            cell = if backward {
                CellCoords::new(next_bounds.rows.end, next_bounds.cols.end)
            } else {
                CellCoords::new(next_bounds.rows.start, next_bounds.cols.start)
            };
        }
    }

    FocusedRegion::Cell {
        row: cell.row,
        col: cell.col,
        focus_selection_index: Some(index),
    }
}

fn stepped(value: usize, direction: Direction) -> Option<usize> {
    let moved = value as i64 + direction.step();
    usize::try_from(moved).ok()
}

/// Bounds check shared by both movement modes. Compatibility default: a row
/// focus is checked against column 0.
pub(crate) fn in_bounds(focused_region: &FocusedRegion, num_rows: usize, num_cols: usize) -> bool {
    let col = focused_region.column().unwrap_or(0);
    focused_region.row() < num_rows && col < num_cols
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn cell_focus(row: usize, col: usize, index: usize) -> FocusedRegion {
        FocusedRegion::Cell {
            row,
            col,
            focus_selection_index: Some(index),
        }
    }

    #[test]
    fn plain_move_steps_one_cell_and_resets_selection_index() {
        let focus = cell_focus(3, 3, 5);
        assert_eq!(
            move_focus(&focus, Direction::Up, 10, 10),
            Some(cell_focus(2, 3, 0))
        );
        assert_eq!(
            move_focus(&focus, Direction::Right, 10, 10),
            Some(cell_focus(3, 4, 0))
        );
    }

    #[test]
    fn plain_move_at_the_grid_edge_is_inert() {
        assert_eq!(move_focus(&cell_focus(0, 0, 0), Direction::Up, 10, 10), None);
        assert_eq!(move_focus(&cell_focus(0, 0, 0), Direction::Left, 10, 10), None);
        assert_eq!(move_focus(&cell_focus(9, 9, 0), Direction::Down, 10, 10), None);
        assert_eq!(move_focus(&cell_focus(9, 9, 0), Direction::Right, 10, 10), None);
    }

    #[test]
    fn plain_move_of_row_focus_ignores_horizontal_directions() {
        let focus = FocusedRegion::Row {
            row: 4,
            focus_selection_index: Some(3),
        };
        assert_eq!(
            move_focus(&focus, Direction::Down, 10, 10),
            Some(FocusedRegion::Row {
                row: 5,
                focus_selection_index: Some(0),
            })
        );
        // left/right keep the focus (and its index) as-is
        assert_eq!(move_focus(&focus, Direction::Left, 10, 10), Some(focus));
        assert_eq!(
            move_focus(
                &FocusedRegion::Row {
                    row: 0,
                    focus_selection_index: Some(0)
                },
                Direction::Up,
                10,
                10
            ),
            None
        );
    }

    #[test]
    fn selection_move_walks_along_the_primary_axis() {
        let selected = vec![Region::cells(1, 1, 3, 3)];
        let result = move_focus_in_selection(&cell_focus(1, 1, 0), Direction::Down, &selected, 10, 10);
        assert_eq!(result, Some(SelectionMove::Moved(cell_focus(2, 1, 0))));
    }

    #[test]
    fn selection_move_wraps_primary_axis_and_steps_secondary() {
        let selected = vec![Region::cells(1, 1, 3, 3)];
        // at the bottom edge: wrap to the top, move one column right
        let result = move_focus_in_selection(&cell_focus(3, 1, 0), Direction::Down, &selected, 10, 10);
        assert_eq!(result, Some(SelectionMove::Moved(cell_focus(1, 2, 0))));
        // at the top edge going up: wrap to the bottom, move one column left
        let result = move_focus_in_selection(&cell_focus(1, 2, 0), Direction::Up, &selected, 10, 10);
        assert_eq!(result, Some(SelectionMove::Moved(cell_focus(3, 1, 0))));
    }

    #[test]
    fn selection_move_hops_to_the_next_region_after_exiting_both_axes() {
        // two stacked 1x2 regions; focus at the right edge of the first
        let selected = vec![Region::cells(0, 0, 0, 1), Region::cells(1, 0, 1, 1)];
        let result = move_focus_in_selection(&cell_focus(0, 1, 0), Direction::Right, &selected, 10, 10);
        // forward hop lands on the top-left corner of the next region
        assert_eq!(result, Some(SelectionMove::Moved(cell_focus(1, 0, 1))));

        // and backward from there wraps to the bottom-right of the previous
        let result = move_focus_in_selection(&cell_focus(1, 0, 1), Direction::Left, &selected, 10, 10);
        assert_eq!(result, Some(SelectionMove::Moved(cell_focus(0, 1, 0))));
    }

    #[test]
    fn selection_move_wraps_around_the_region_sequence() {
        let selected = vec![Region::cells(0, 0, 0, 1), Region::cells(1, 0, 1, 1)];
        // exiting the last region forward wraps to the first
        let result = move_focus_in_selection(&cell_focus(1, 1, 1), Direction::Right, &selected, 10, 10);
        assert_eq!(result, Some(SelectionMove::Moved(cell_focus(0, 0, 0))));
        // exiting the first region backward wraps to the last
        let result = move_focus_in_selection(&cell_focus(0, 0, 0), Direction::Left, &selected, 10, 10);
        assert_eq!(result, Some(SelectionMove::Moved(cell_focus(1, 1, 1))));
    }

    #[test]
    fn selection_move_without_associated_region_jumps_to_first_region() {
        let focus = FocusedRegion::Cell {
            row: 7,
            col: 7,
            focus_selection_index: None,
        };
        let selected = vec![Region::cells(2, 3, 4, 5)];
        let result = move_focus_in_selection(&focus, Direction::Down, &selected, 10, 10);
        assert_eq!(result, Some(SelectionMove::Moved(cell_focus(2, 3, 0))));
    }

    #[test]
    fn selection_move_falls_through_for_degenerate_selections() {
        // no selection at all
        assert_eq!(
            move_focus_in_selection(&cell_focus(1, 1, 0), Direction::Down, &[], 10, 10),
            Some(SelectionMove::Fallthrough)
        );
        // a single selected region that is a single cell
        let selected = vec![Region::cell(1, 1)];
        assert_eq!(
            move_focus_in_selection(&cell_focus(1, 1, 0), Direction::Down, &selected, 10, 10),
            Some(SelectionMove::Fallthrough)
        );
    }

    #[test]
    fn selection_move_is_unsupported_for_row_focus() {
        let focus = FocusedRegion::Row {
            row: 1,
            focus_selection_index: Some(0),
        };
        assert_eq!(
            move_focus_in_selection(&focus, Direction::Down, &[Region::rows(0, 3)], 10, 10),
            None
        );
    }

    #[test]
    fn selection_move_out_of_grid_bounds_is_inert() {
        // region nominally spans rows 0..=1 but the grid has a single row;
        // walking off the end would land outside the grid
        let selected = vec![Region::cells(0, 0, 1, 0), Region::cells(1, 0, 1, 0)];
        let result = move_focus_in_selection(&cell_focus(0, 0, 0), Direction::Down, &selected, 1, 1);
        assert_eq!(result, None);
    }
}
