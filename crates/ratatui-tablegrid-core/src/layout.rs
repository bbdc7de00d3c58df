/// Pixel geometry of the grid, supplied by the table's layout collaborator.
///
/// Cumulative queries must be monotonically non-decreasing in the index.
/// Offsets do not include header dimensions; the scroll synchronizer adds
/// those itself.
pub trait GridGeometry {
    fn num_rows(&self) -> usize;
    fn num_cols(&self) -> usize;
    /// Total height of all rows before `row`.
    fn cumulative_height_before(&self, row: usize) -> i64;
    /// Total height of all rows up to and including `row`.
    fn cumulative_height_at(&self, row: usize) -> i64;
    /// Total width of all columns before `col`.
    fn cumulative_width_before(&self, col: usize) -> i64;
    /// Total width of all columns up to and including `col`.
    fn cumulative_width_at(&self, col: usize) -> i64;
}

/// Concrete [`GridGeometry`] backed by per-row heights and per-column widths,
/// with cumulative offsets maintained as prefix sums.
#[derive(Clone, Debug, Default)]
pub struct GridLayout {
    row_heights: Vec<i64>,
    col_widths: Vec<i64>,
    // prefix sums, always one longer than the size vectors
    row_offsets: Vec<i64>,
    col_offsets: Vec<i64>,
}

impl GridLayout {
    pub fn new(row_heights: Vec<i64>, col_widths: Vec<i64>) -> Self {
        let mut layout = Self {
            row_heights,
            col_widths,
            row_offsets: Vec::new(),
            col_offsets: Vec::new(),
        };
        layout.rebuild();
        layout
    }

    /// A grid where every row and column has the same size.
    pub fn uniform(num_rows: usize, num_cols: usize, row_height: i64, col_width: i64) -> Self {
        Self::new(vec![row_height; num_rows], vec![col_width; num_cols])
    }

    pub fn row_heights(&self) -> &[i64] {
        &self.row_heights
    }

    pub fn col_widths(&self) -> &[i64] {
        &self.col_widths
    }

    /// Updates a single row height (a row-resize interaction). Out-of-range
    /// rows are ignored; negative heights are treated as 0.
    pub fn set_row_height(&mut self, row: usize, height: i64) {
        if let Some(h) = self.row_heights.get_mut(row) {
            *h = height.max(0);
            self.rebuild();
        }
    }

    /// Updates a single column width (a column-resize interaction).
    pub fn set_col_width(&mut self, col: usize, width: i64) {
        if let Some(w) = self.col_widths.get_mut(col) {
            *w = width.max(0);
            self.rebuild();
        }
    }

    pub fn total_height(&self) -> i64 {
        *self.row_offsets.last().unwrap_or(&0)
    }

    pub fn total_width(&self) -> i64 {
        *self.col_offsets.last().unwrap_or(&0)
    }

    /// The row whose pixel span contains `y`, or `None` past the content end.
    pub fn row_at_offset(&self, y: i64) -> Option<usize> {
        index_at_offset(&self.row_offsets, y)
    }

    /// The column whose pixel span contains `x`, or `None` past the content
    /// end.
    pub fn col_at_offset(&self, x: i64) -> Option<usize> {
        index_at_offset(&self.col_offsets, x)
    }

    fn rebuild(&mut self) {
        self.row_offsets = prefix_sums(&self.row_heights);
        self.col_offsets = prefix_sums(&self.col_widths);
    }
}

fn prefix_sums(sizes: &[i64]) -> Vec<i64> {
    let mut offsets = Vec::with_capacity(sizes.len() + 1);
    let mut total = 0i64;
    offsets.push(0);
    for size in sizes {
        total += (*size).max(0);
        offsets.push(total);
    }
    offsets
}

fn index_at_offset(offsets: &[i64], position: i64) -> Option<usize> {
    if position < 0 || offsets.len() < 2 {
        return None;
    }
    let total = offsets[offsets.len() - 1];
    if position >= total {
        return None;
    }
    // first index whose end offset is past `position`
    let index = offsets[1..].partition_point(|end| *end <= position);
    (index < offsets.len() - 1).then_some(index)
}

impl GridGeometry for GridLayout {
    fn num_rows(&self) -> usize {
        self.row_heights.len()
    }

    fn num_cols(&self) -> usize {
        self.col_widths.len()
    }

    fn cumulative_height_before(&self, row: usize) -> i64 {
        offset_at(&self.row_offsets, row)
    }

    fn cumulative_height_at(&self, row: usize) -> i64 {
        offset_at(&self.row_offsets, row + 1)
    }

    fn cumulative_width_before(&self, col: usize) -> i64 {
        offset_at(&self.col_offsets, col)
    }

    fn cumulative_width_at(&self, col: usize) -> i64 {
        offset_at(&self.col_offsets, col + 1)
    }
}

// Out-of-range indices clamp to the content edge, keeping the cumulative
// queries monotone.
fn offset_at(offsets: &[i64], index: usize) -> i64 {
    match offsets.is_empty() {
        true => 0,
        false => offsets[index.min(offsets.len() - 1)],
    }
}
