use std::collections::BTreeSet;

use crate::cell::Axis;
use crate::cell::CellCoords;

/// An inclusive index interval, normalized so `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interval {
    pub start: usize,
    pub end: usize,
}

impl Interval {
    /// Builds a normalized interval: the smaller argument always becomes the
    /// start.
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub fn single(index: usize) -> Self {
        Self {
            start: index,
            end: index,
        }
    }

    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// Number of indices covered. Inclusive intervals are never empty.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index <= self.end
    }

    /// Pulls both bounds into `[0, max]`. Never fails; out-of-range bounds
    /// are silently clamped.
    pub fn clamp(&self, max: usize) -> Interval {
        Interval::new(self.start.min(max), self.end.min(max))
    }
}

/// Which axes a region spans.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionCardinality {
    FullTable,
    FullRows,
    FullColumns,
    Cells,
}

/// An axis-aligned selection unit.
///
/// Regions are immutable value objects: every operation returns a new region
/// rather than mutating in place. A selection is an ordered `Vec<Region>`;
/// order matters because the last region is the one an in-progress
/// interaction resizes, and the focused region references a region by index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    /// The whole table.
    Table,
    /// A range of full rows.
    Rows(Interval),
    /// A range of full columns.
    Cols(Interval),
    /// A rectangular cell range.
    Cells { rows: Interval, cols: Interval },
}

impl Region {
    pub fn table() -> Self {
        Region::Table
    }

    pub fn row(row: usize) -> Self {
        Region::Rows(Interval::single(row))
    }

    pub fn rows(a: usize, b: usize) -> Self {
        Region::Rows(Interval::new(a, b))
    }

    pub fn col(col: usize) -> Self {
        Region::Cols(Interval::single(col))
    }

    pub fn cols(a: usize, b: usize) -> Self {
        Region::Cols(Interval::new(a, b))
    }

    pub fn cell(row: usize, col: usize) -> Self {
        Region::Cells {
            rows: Interval::single(row),
            cols: Interval::single(col),
        }
    }

    pub fn cells(row_a: usize, col_a: usize, row_b: usize, col_b: usize) -> Self {
        Region::Cells {
            rows: Interval::new(row_a, row_b),
            cols: Interval::new(col_a, col_b),
        }
    }

    /// Classifies the region. Exactly one cardinality applies, determined
    /// solely by the variant.
    pub fn cardinality(&self) -> RegionCardinality {
        match self {
            Region::Table => RegionCardinality::FullTable,
            Region::Rows(_) => RegionCardinality::FullRows,
            Region::Cols(_) => RegionCardinality::FullColumns,
            Region::Cells { .. } => RegionCardinality::Cells,
        }
    }

    /// The row interval, if this region constrains rows.
    pub fn row_interval(&self) -> Option<Interval> {
        match self {
            Region::Rows(rows) | Region::Cells { rows, .. } => Some(*rows),
            _ => None,
        }
    }

    /// The column interval, if this region constrains columns.
    pub fn col_interval(&self) -> Option<Interval> {
        match self {
            Region::Cols(cols) | Region::Cells { cols, .. } => Some(*cols),
            _ => None,
        }
    }

    /// Returns a copy with all bounds pulled into
    /// `[0, max_row] x [0, max_col]`. Clamping an in-bounds region is the
    /// identity.
    pub fn clamp(&self, max_row: usize, max_col: usize) -> Region {
        match self {
            Region::Table => Region::Table,
            Region::Rows(rows) => Region::Rows(rows.clamp(max_row)),
            Region::Cols(cols) => Region::Cols(cols.clamp(max_col)),
            Region::Cells { rows, cols } => Region::Cells {
                rows: rows.clamp(max_row),
                cols: cols.clamp(max_col),
            },
        }
    }

    /// The single-cell focus anchor for this region: the top-left cell, with
    /// 0 standing in on any unconstrained axis.
    pub fn focus_anchor(&self) -> CellCoords {
        match self {
            Region::Table => CellCoords::new(0, 0),
            Region::Rows(rows) => CellCoords::new(rows.start, 0),
            Region::Cols(cols) => CellCoords::new(0, cols.start),
            Region::Cells { rows, cols } => CellCoords::new(rows.start, cols.start),
        }
    }

    /// Resolves the region to concrete cell-space bounds: unconstrained axes
    /// span the whole grid extent.
    pub fn as_cell_bounds(&self, num_rows: usize, num_cols: usize) -> CellBounds {
        let all_rows = Interval::new(0, num_rows.saturating_sub(1));
        let all_cols = Interval::new(0, num_cols.saturating_sub(1));
        match self {
            Region::Table => CellBounds {
                rows: all_rows,
                cols: all_cols,
            },
            Region::Rows(rows) => CellBounds {
                rows: *rows,
                cols: all_cols,
            },
            Region::Cols(cols) => CellBounds {
                rows: all_rows,
                cols: *cols,
            },
            Region::Cells { rows, cols } => CellBounds {
                rows: *rows,
                cols: *cols,
            },
        }
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        match self {
            Region::Table => true,
            Region::Rows(rows) => rows.contains(row),
            Region::Cols(cols) => cols.contains(col),
            Region::Cells { rows, cols } => rows.contains(row) && cols.contains(col),
        }
    }
}

/// Concrete cell-space bounds of a region, both axes resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellBounds {
    pub rows: Interval,
    pub cols: Interval,
}

impl CellBounds {
    pub fn interval(&self, axis: Axis) -> Interval {
        match axis {
            Axis::Row => self.rows,
            Axis::Col => self.cols,
        }
    }

    pub fn is_single_cell(&self) -> bool {
        self.rows.is_single() && self.cols.is_single()
    }
}

/// Returns a copy of `regions` with the element at `index` replaced.
///
/// Used when an in-progress resize or drag updates the active region of a
/// multi-region selection. An out-of-range index appends instead, matching
/// the forgiving behavior of the rest of the sequence API.
pub fn update(regions: &[Region], region: Region, index: usize) -> Vec<Region> {
    let mut next = regions.to_vec();
    if index < next.len() {
        next[index] = region;
    } else {
        next.push(region);
    }
    next
}

/// Enumerates every unique cell covered by `regions`, deduplicated, in
/// row-major order. This list is what the clipboard collaborator consumes.
pub fn enumerate_unique_cells(
    regions: &[Region],
    num_rows: usize,
    num_cols: usize,
) -> Vec<CellCoords> {
    if num_rows == 0 || num_cols == 0 {
        return Vec::new();
    }
    let mut cells = BTreeSet::new();
    for region in regions {
        let bounds = region.as_cell_bounds(num_rows, num_cols);
        let rows = bounds.rows.clamp(num_rows - 1);
        let cols = bounds.cols.clamp(num_cols - 1);
        for row in rows.start..=rows.end {
            for col in cols.start..=cols.end {
                cells.insert(CellCoords::new(row, col));
            }
        }
    }
    cells.into_iter().collect()
}
