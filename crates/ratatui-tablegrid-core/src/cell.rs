/// A grid cell address.
///
/// Ordering is row-major, which is what clipboard enumeration and the
/// navigation walk rely on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellCoords {
    pub row: usize,
    pub col: usize,
}

impl CellCoords {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// One of the two grid axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
}

impl Axis {
    pub fn other(self) -> Axis {
        match self {
            Axis::Row => Axis::Col,
            Axis::Col => Axis::Row,
        }
    }

    /// Reads the coordinate of `coords` on this axis.
    pub fn of(self, coords: CellCoords) -> usize {
        match self {
            Axis::Row => coords.row,
            Axis::Col => coords.col,
        }
    }

    /// Writes the coordinate of `coords` on this axis.
    pub fn set(self, coords: &mut CellCoords, value: usize) {
        match self {
            Axis::Row => coords.row = value,
            Axis::Col => coords.col = value,
        }
    }
}
