use crate::cell::Axis;
use crate::cell::CellCoords;
use crate::region::Interval;
use crate::region::Region;

/// Focus granularity selected by table configuration.
///
/// "Focus disabled" is represented as `Option<FocusMode>::None` everywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusMode {
    Cell,
    Row,
}

/// The single cell or row currently acting as the keyboard-navigation anchor.
///
/// `focus_selection_index` points at the selected region this focus belongs
/// to; `None` means "no specific associated region yet".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusedRegion {
    Cell {
        row: usize,
        col: usize,
        focus_selection_index: Option<usize>,
    },
    Row {
        row: usize,
        focus_selection_index: Option<usize>,
    },
}

/// Raised when a focus-anchored expansion is asked to reach a multi-index
/// destination range. Expansion is only defined from the focus point to a
/// single destination index; callers should prevent the triggering gesture
/// rather than catch this routinely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExpandError {
    #[error("cannot expand a focused region into a multi-row destination; a single row index is required")]
    MultiRowDestination,
    #[error(
        "cannot expand a focused region into a multi-column destination; a single column index is required"
    )]
    MultiColumnDestination,
}

/// Two-tier configuration resolution: the explicit (current API) value wins,
/// falling back to the value derived from the deprecated API when absent.
///
/// Every legacy/new field pair goes through this one helper instead of ad hoc
/// fallback chains.
pub fn resolve<T>(explicit: Option<T>, legacy: Option<T>) -> Option<T> {
    explicit.or(legacy)
}

/// Infers the focus mode from configuration. The explicit `focus_mode` wins;
/// otherwise the deprecated `enable_focused_cell` flag maps `true` to
/// [`FocusMode::Cell`].
pub fn focus_mode_from_config(
    focus_mode: Option<FocusMode>,
    enable_focused_cell: bool,
) -> Option<FocusMode> {
    resolve(focus_mode, enable_focused_cell.then_some(FocusMode::Cell))
}

/// Infers the focused region from configuration. The explicit region wins;
/// otherwise deprecated cell coordinates become a cell focus associated with
/// region 0.
pub fn focused_region_from_config(
    focused_region: Option<FocusedRegion>,
    legacy_cell: Option<CellCoords>,
) -> Option<FocusedRegion> {
    resolve(
        focused_region,
        legacy_cell.map(|c| FocusedRegion::Cell {
            row: c.row,
            col: c.col,
            focus_selection_index: Some(0),
        }),
    )
}

/// The tie-break rule for choosing the single "active" region of a
/// selection: the focus's associated index when a focus exists, else the last
/// region. An empty selection has no active region.
pub fn focused_or_last_selected_index(
    selected_regions: &[Region],
    focused_region: Option<&FocusedRegion>,
) -> Option<usize> {
    if selected_regions.is_empty() {
        None
    } else if let Some(focused) = focused_region {
        focused.focus_selection_index()
    } else {
        Some(selected_regions.len() - 1)
    }
}

/// Picks the focused region for a fresh set of initial conditions: the
/// caller-supplied region wins, then internal state, then the top-left cell
/// of the last selected region (`{0,0}` when nothing is selected). The result
/// is validated against `focus_mode` and may therefore be `None`.
pub fn initial_focused_region(
    focus_mode: Option<FocusMode>,
    from_props: Option<FocusedRegion>,
    from_state: Option<FocusedRegion>,
    selected_regions: &[Region],
) -> Option<FocusedRegion> {
    from_props
        .or(from_state)
        .unwrap_or_else(|| initial_focus_from_selection(selected_regions))
        .with_mode(focus_mode)
}

fn initial_focus_from_selection(selected_regions: &[Region]) -> FocusedRegion {
    match selected_regions.last() {
        None => FocusedRegion::Cell {
            row: 0,
            col: 0,
            focus_selection_index: Some(0),
        },
        Some(region) => {
            let anchor = region.focus_anchor();
            FocusedRegion::Cell {
                row: anchor.row,
                col: anchor.col,
                focus_selection_index: Some(selected_regions.len() - 1),
            }
        }
    }
}

impl FocusedRegion {
    /// Builds a focus at `coords` in the given mode. A row-mode focus keeps
    /// only the row coordinate; a disabled mode yields `None`.
    pub fn from_coords(
        focus_mode: Option<FocusMode>,
        coords: CellCoords,
        focus_selection_index: usize,
    ) -> Option<FocusedRegion> {
        match focus_mode? {
            FocusMode::Cell => Some(FocusedRegion::Cell {
                row: coords.row,
                col: coords.col,
                focus_selection_index: Some(focus_selection_index),
            }),
            FocusMode::Row => Some(FocusedRegion::Row {
                row: coords.row,
                focus_selection_index: Some(focus_selection_index),
            }),
        }
    }

    pub fn mode(&self) -> FocusMode {
        match self {
            FocusedRegion::Cell { .. } => FocusMode::Cell,
            FocusedRegion::Row { .. } => FocusMode::Row,
        }
    }

    pub fn row(&self) -> usize {
        match self {
            FocusedRegion::Cell { row, .. } | FocusedRegion::Row { row, .. } => *row,
        }
    }

    /// The focused column. A row focus has no column concept, so this is
    /// `None` in row mode.
    pub fn column(&self) -> Option<usize> {
        match self {
            FocusedRegion::Cell { col, .. } => Some(*col),
            FocusedRegion::Row { .. } => None,
        }
    }

    pub fn focus_selection_index(&self) -> Option<usize> {
        match self {
            FocusedRegion::Cell {
                focus_selection_index,
                ..
            }
            | FocusedRegion::Row {
                focus_selection_index,
                ..
            } => *focus_selection_index,
        }
    }

    /// Converts this focus to the given mode if a conversion path exists.
    ///
    /// Same mode is the identity. Cell -> Row keeps the row and selection
    /// index and drops the column; Row -> Cell adds column 0. The round trip
    /// through row mode is therefore lossy on the column, by design. A
    /// disabled mode yields `None`.
    pub fn with_mode(self, focus_mode: Option<FocusMode>) -> Option<FocusedRegion> {
        let mode = focus_mode?;
        if self.mode() == mode {
            return Some(self);
        }
        match mode {
            FocusMode::Row => Some(FocusedRegion::Row {
                row: self.row(),
                focus_selection_index: self.focus_selection_index(),
            }),
            FocusMode::Cell => Some(FocusedRegion::Cell {
                row: self.row(),
                col: 0,
                focus_selection_index: self.focus_selection_index(),
            }),
        }
    }

    /// The single-region selection this focus stands for: a one-cell region
    /// for a cell focus, a full-row region for a row focus.
    pub fn as_region(&self) -> Region {
        match self {
            FocusedRegion::Cell { row, col, .. } => Region::cell(*row, *col),
            FocusedRegion::Row { row, .. } => Region::row(*row),
        }
    }

    /// Position equality, ignoring the associated selection index. Used to
    /// decide whether a focus change needs a scroll correction.
    pub fn same_position(&self, other: &FocusedRegion) -> bool {
        match (self, other) {
            (
                FocusedRegion::Cell { row, col, .. },
                FocusedRegion::Cell {
                    row: other_row,
                    col: other_col,
                    ..
                },
            ) => row == other_row && col == other_col,
            (FocusedRegion::Row { row, .. }, FocusedRegion::Row { row: other_row, .. }) => {
                row == other_row
            }
            _ => false,
        }
    }

    /// `true` if this focus lies on the top boundary of `region`. Always
    /// `false` when the region does not constrain rows.
    pub fn is_at_region_top(&self, region: &Region) -> bool {
        region
            .row_interval()
            .is_some_and(|rows| self.row() == rows.start)
    }

    pub fn is_at_region_bottom(&self, region: &Region) -> bool {
        region
            .row_interval()
            .is_some_and(|rows| self.row() == rows.end)
    }

    /// `true` if this focus lies on the left boundary of `region`. A row
    /// focus has no column, so this is always `false` in row mode.
    pub fn is_at_region_left(&self, region: &Region) -> bool {
        region
            .col_interval()
            .is_some_and(|cols| self.column() == Some(cols.start))
    }

    pub fn is_at_region_right(&self, region: &Region) -> bool {
        region
            .col_interval()
            .is_some_and(|cols| self.column() == Some(cols.end))
    }

    /// Expands `new_region` so that this focus stays inside it, keeping the
    /// focus fixed. Used for shift+click style selection anchored to the
    /// focus.
    ///
    /// Each axis the destination region constrains must denote a single
    /// index; the result spans `[min(focus, dest), max(focus, dest)]` on that
    /// axis. A multi-index destination is an [`ExpandError`]. A full-table
    /// destination passes through unchanged.
    pub fn expand_region(&self, new_region: &Region) -> Result<Region, ExpandError> {
        match new_region {
            Region::Table => Ok(Region::Table),
            Region::Rows(rows) => Ok(Region::Rows(self.expanded_interval(*rows, Axis::Row)?)),
            Region::Cols(cols) => Ok(Region::Cols(self.expanded_interval(*cols, Axis::Col)?)),
            Region::Cells { rows, cols } => Ok(Region::Cells {
                rows: self.expanded_interval(*rows, Axis::Row)?,
                cols: self.expanded_interval(*cols, Axis::Col)?,
            }),
        }
    }

    fn expanded_interval(&self, destination: Interval, axis: Axis) -> Result<Interval, ExpandError> {
        if !destination.is_single() {
            return Err(match axis {
                Axis::Row => ExpandError::MultiRowDestination,
                Axis::Col => ExpandError::MultiColumnDestination,
            });
        }
        let source = match axis {
            Axis::Row => self.row(),
            // Compatibility default: a row focus has no column, so column
            // expansion anchors at column 0. Kept for parity with the legacy
            // behavior; not a correctness guarantee.
            Axis::Col => self.column().unwrap_or(0),
        };
        Ok(Interval::new(source, destination.start))
    }
}
