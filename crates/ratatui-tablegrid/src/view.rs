use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui_tablegrid_core::cell::CellCoords;
use ratatui_tablegrid_core::focus::FocusedRegion;
use ratatui_tablegrid_core::layout::GridGeometry;
use ratatui_tablegrid_core::layout::GridLayout;
use ratatui_tablegrid_core::region::Region;
use ratatui_tablegrid_core::scroll::HeaderDimensions;
use ratatui_tablegrid_core::scroll::ScrollRequest;
use ratatui_tablegrid_core::scroll::ViewportRect;
use unicode_width::UnicodeWidthChar;

/// Options for [`TableGridView`].
#[derive(Clone, Debug)]
pub struct TableGridOptions {
    pub show_column_header: bool,
    pub show_row_header: bool,
    pub row_header_width: u16,
    pub num_frozen_rows: usize,
    pub num_frozen_cols: usize,
    pub style: Style,
    pub header_style: Style,
    pub selected_style: Style,
    pub focused_style: Style,
}

impl Default for TableGridOptions {
    fn default() -> Self {
        Self {
            show_column_header: true,
            show_row_header: true,
            row_header_width: 4,
            num_frozen_rows: 0,
            num_frozen_cols: 0,
            style: Style::default(),
            header_style: Style::default().add_modifier(Modifier::BOLD),
            selected_style: Style::default().add_modifier(Modifier::BOLD),
            focused_style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }
}

/// What a screen coordinate lands on, from [`TableGridView::hit_test`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableHit {
    /// The select-all corner between the two headers.
    Corner,
    ColumnHeader(usize),
    RowHeader(usize),
    Cell(CellCoords),
}

/// Context passed to the `render_cell` callback in [`TableGridView::render`].
#[derive(Clone, Copy, Debug)]
pub struct TableCellContext {
    pub coords: CellCoords,
    /// Leading content columns hidden by horizontal scrolling.
    pub clip_left: u16,
    pub is_selected: bool,
    pub is_focused: bool,
}

/// A scrollable table grid with region selection, focus highlighting, and
/// frozen rows/columns.
///
/// The view owns only presentation state (geometry, scroll position); the
/// selection and focus are passed into `render` each frame, so the keyboard
/// controller and any external state store stay the single source of truth.
/// Cell content is delegated to a user callback.
pub struct TableGridView {
    layout: GridLayout,
    columns: Vec<String>,
    options: TableGridOptions,
    scroll_x: i64,
    scroll_y: i64,
}

// Per-quadrant paint parameters: which slice of the grid, which scroll
// offsets apply, and the screen rectangle it may touch.
struct Quadrant {
    clip: Rect,
    row_range: std::ops::Range<usize>,
    col_range: std::ops::Range<usize>,
    scroll_x: i64,
    scroll_y: i64,
}

struct PaintContext<'a> {
    selected: &'a [Region],
    focused: Option<&'a FocusedRegion>,
}

impl TableGridView {
    pub fn new(layout: GridLayout, columns: Vec<String>) -> Self {
        Self {
            layout,
            columns,
            options: TableGridOptions::default(),
            scroll_x: 0,
            scroll_y: 0,
        }
    }

    pub fn with_options(layout: GridLayout, columns: Vec<String>, options: TableGridOptions) -> Self {
        Self {
            layout,
            columns,
            options,
            scroll_x: 0,
            scroll_y: 0,
        }
    }

    pub fn options(&self) -> &TableGridOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: TableGridOptions) {
        self.options = options;
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Mutable access for row/column resize interactions.
    pub fn layout_mut(&mut self) -> &mut GridLayout {
        &mut self.layout
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn set_columns(&mut self, columns: Vec<String>) {
        self.columns = columns;
    }

    pub fn scroll_position(&self) -> (i64, i64) {
        (self.scroll_x, self.scroll_y)
    }

    /// Header sizes in the same units as the grid geometry, for the scroll
    /// synchronizer.
    pub fn header_dimensions(&self) -> HeaderDimensions {
        HeaderDimensions {
            column_header_height: if self.options.show_column_header { 1 } else { 0 },
            row_header_width: if self.options.show_row_header {
                self.options.row_header_width as i64
            } else {
                0
            },
        }
    }

    /// The visible window in content coordinates, spanning the whole widget
    /// area. Header bands are accounted for by the scroll synchronizer via
    /// [`TableGridView::header_dimensions`].
    pub fn viewport_rect(&self, area: Rect) -> ViewportRect {
        ViewportRect::new(
            self.scroll_x,
            self.scroll_y,
            area.width as i64,
            area.height as i64,
        )
    }

    /// Applies a scroll correction. Each axis is clamped to the content.
    pub fn apply_scroll(&mut self, request: ScrollRequest) {
        if let Some(top) = request.next_scroll_top {
            self.scroll_y = top.clamp(0, self.layout.total_height());
        }
        if let Some(left) = request.next_scroll_left {
            self.scroll_x = left.clamp(0, self.layout.total_width());
        }
    }

    pub fn scroll_by(&mut self, dx: i64, dy: i64) {
        self.scroll_x = (self.scroll_x + dx).clamp(0, self.layout.total_width());
        self.scroll_y = (self.scroll_y + dy).clamp(0, self.layout.total_height());
    }

    /// Maps a screen coordinate to the table part under it.
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<TableHit> {
        if !area.contains(ratatui::layout::Position { x, y }) {
            return None;
        }
        let header_h = self.header_dimensions().column_header_height as u16;
        let row_header_w = self.header_dimensions().row_header_width as u16;
        let in_column_header = y < area.y + header_h;
        let in_row_header = x < area.x + row_header_w;

        if in_column_header && in_row_header {
            return Some(TableHit::Corner);
        }
        if in_column_header {
            let col = self.col_at_screen(area, row_header_w, x)?;
            return Some(TableHit::ColumnHeader(col));
        }
        if in_row_header {
            let row = self.row_at_screen(area, header_h, y)?;
            return Some(TableHit::RowHeader(row));
        }
        let row = self.row_at_screen(area, header_h, y)?;
        let col = self.col_at_screen(area, row_header_w, x)?;
        Some(TableHit::Cell(CellCoords::new(row, col)))
    }

    fn row_at_screen(&self, area: Rect, header_h: u16, y: u16) -> Option<usize> {
        let local = (y - area.y - header_h) as i64;
        let frozen_h = self
            .layout
            .cumulative_height_before(self.options.num_frozen_rows.min(self.layout.num_rows()));
        if local < frozen_h {
            self.layout.row_at_offset(local)
        } else {
            self.layout.row_at_offset(local + self.scroll_y)
        }
    }

    fn col_at_screen(&self, area: Rect, row_header_w: u16, x: u16) -> Option<usize> {
        let local = (x - area.x - row_header_w) as i64;
        let frozen_w = self
            .layout
            .cumulative_width_before(self.options.num_frozen_cols.min(self.layout.num_cols()));
        if local < frozen_w {
            self.layout.col_at_offset(local)
        } else {
            self.layout.col_at_offset(local + self.scroll_x)
        }
    }

    /// Renders the table. `selected` and `focused` come from the table's
    /// state store; cell text is drawn by `render_cell`.
    pub fn render<F>(
        &self,
        area: Rect,
        buf: &mut Buffer,
        selected: &[Region],
        focused: Option<&FocusedRegion>,
        mut render_cell: F,
    ) where
        F: FnMut(Rect, TableCellContext, &mut Buffer),
    {
        if area.width == 0 || area.height == 0 {
            return;
        }
        buf.set_style(area, self.options.style);

        let header_h = (self.header_dimensions().column_header_height as u16).min(area.height);
        let row_header_w = (self.header_dimensions().row_header_width as u16).min(area.width);
        let body = Rect::new(
            area.x + row_header_w,
            area.y + header_h,
            area.width - row_header_w,
            area.height - header_h,
        );

        let num_rows = self.layout.num_rows();
        let num_cols = self.layout.num_cols();
        let frozen_rows = self.options.num_frozen_rows.min(num_rows);
        let frozen_cols = self.options.num_frozen_cols.min(num_cols);
        let frozen_h = (self.layout.cumulative_height_before(frozen_rows) as u16).min(body.height);
        let frozen_w = (self.layout.cumulative_width_before(frozen_cols) as u16).min(body.width);

        let ctx = PaintContext { selected, focused };

        // main quadrant first; the frozen bands then pin over it
        self.paint_quadrant(
            &ctx,
            buf,
            Quadrant {
                clip: body,
                row_range: 0..num_rows,
                col_range: 0..num_cols,
                scroll_x: self.scroll_x,
                scroll_y: self.scroll_y,
            },
            &mut render_cell,
        );
        if frozen_rows > 0 {
            self.paint_quadrant(
                &ctx,
                buf,
                Quadrant {
                    clip: Rect::new(body.x, body.y, body.width, frozen_h),
                    row_range: 0..frozen_rows,
                    col_range: 0..num_cols,
                    scroll_x: self.scroll_x,
                    scroll_y: 0,
                },
                &mut render_cell,
            );
        }
        if frozen_cols > 0 {
            self.paint_quadrant(
                &ctx,
                buf,
                Quadrant {
                    clip: Rect::new(body.x, body.y, frozen_w, body.height),
                    row_range: 0..num_rows,
                    col_range: 0..frozen_cols,
                    scroll_x: 0,
                    scroll_y: self.scroll_y,
                },
                &mut render_cell,
            );
        }
        if frozen_rows > 0 && frozen_cols > 0 {
            self.paint_quadrant(
                &ctx,
                buf,
                Quadrant {
                    clip: Rect::new(body.x, body.y, frozen_w, frozen_h),
                    row_range: 0..frozen_rows,
                    col_range: 0..frozen_cols,
                    scroll_x: 0,
                    scroll_y: 0,
                },
                &mut render_cell,
            );
        }

        if header_h > 0 {
            self.render_column_header(area, body, buf, frozen_cols, frozen_w);
        }
        if row_header_w > 0 {
            self.render_row_header(area, body, buf, row_header_w, frozen_rows, frozen_h);
        }
        if header_h > 0 && row_header_w > 0 {
            let corner = Rect::new(area.x, area.y, row_header_w, header_h);
            buf.set_style(corner, self.options.header_style);
        }
    }

    fn paint_quadrant<F>(
        &self,
        ctx: &PaintContext<'_>,
        buf: &mut Buffer,
        q: Quadrant,
        render_cell: &mut F,
    ) where
        F: FnMut(Rect, TableCellContext, &mut Buffer),
    {
        if q.clip.width == 0 || q.clip.height == 0 {
            return;
        }
        let clip_h = q.clip.height as i64;
        let clip_w = q.clip.width as i64;

        for row in q.row_range.clone() {
            let top = self.layout.cumulative_height_before(row) - q.scroll_y;
            let bottom = self.layout.cumulative_height_at(row) - q.scroll_y;
            if bottom <= 0 {
                continue;
            }
            if top >= clip_h {
                break;
            }
            let visible_top = top.max(0);
            let height = (bottom.min(clip_h) - visible_top) as u16;
            if height == 0 {
                continue;
            }
            let y = q.clip.y + visible_top as u16;

            for col in q.col_range.clone() {
                let left = self.layout.cumulative_width_before(col) - q.scroll_x;
                let right = self.layout.cumulative_width_at(col) - q.scroll_x;
                if right <= 0 {
                    continue;
                }
                if left >= clip_w {
                    break;
                }
                let visible_left = left.max(0);
                let width = (right.min(clip_w) - visible_left) as u16;
                if width == 0 {
                    continue;
                }
                let cell_rect = Rect::new(q.clip.x + visible_left as u16, y, width, height);

                let coords = CellCoords::new(row, col);
                let is_selected = ctx.selected.iter().any(|r| r.contains(row, col));
                let is_focused = ctx.focused.is_some_and(|f| match f {
                    FocusedRegion::Cell { row: r, col: c, .. } => *r == row && *c == col,
                    FocusedRegion::Row { row: r, .. } => *r == row,
                });
                if is_selected {
                    buf.set_style(cell_rect, self.options.selected_style);
                }
                if is_focused {
                    buf.set_style(cell_rect, self.options.focused_style);
                }

                render_cell(
                    cell_rect,
                    TableCellContext {
                        coords,
                        clip_left: (visible_left - left) as u16,
                        is_selected,
                        is_focused,
                    },
                    buf,
                );
            }
        }
    }

    fn render_column_header(
        &self,
        area: Rect,
        body: Rect,
        buf: &mut Buffer,
        frozen_cols: usize,
        frozen_w: u16,
    ) {
        let strip = Rect::new(body.x, area.y, body.width, 1);
        buf.set_style(strip, self.options.header_style);

        self.paint_header_titles(strip, buf, frozen_cols..self.layout.num_cols(), self.scroll_x);
        if frozen_cols > 0 {
            let pinned = Rect::new(strip.x, strip.y, frozen_w.min(strip.width), 1);
            self.paint_header_titles(pinned, buf, 0..frozen_cols, 0);
        }
    }

    fn paint_header_titles(
        &self,
        strip: Rect,
        buf: &mut Buffer,
        col_range: std::ops::Range<usize>,
        scroll_x: i64,
    ) {
        if strip.width == 0 {
            return;
        }
        let clip_w = strip.width as i64;
        for col in col_range {
            let left = self.layout.cumulative_width_before(col) - scroll_x;
            let right = self.layout.cumulative_width_at(col) - scroll_x;
            if right <= 0 {
                continue;
            }
            if left >= clip_w {
                break;
            }
            let visible_left = left.max(0);
            let width = (right.min(clip_w) - visible_left) as u16;
            if width == 0 {
                continue;
            }
            let title = self.columns.get(col).map(String::as_str).unwrap_or("");
            draw_str_clipped(
                buf,
                strip.x + visible_left as u16,
                strip.y,
                (visible_left - left) as u16,
                width,
                title,
                self.options.header_style,
            );
        }
    }

    fn render_row_header(
        &self,
        area: Rect,
        body: Rect,
        buf: &mut Buffer,
        row_header_w: u16,
        frozen_rows: usize,
        frozen_h: u16,
    ) {
        let strip = Rect::new(area.x, body.y, row_header_w, body.height);
        buf.set_style(strip, self.options.header_style);

        self.paint_row_labels(strip, buf, frozen_rows..self.layout.num_rows(), self.scroll_y);
        if frozen_rows > 0 {
            let pinned = Rect::new(strip.x, strip.y, strip.width, frozen_h.min(strip.height));
            self.paint_row_labels(pinned, buf, 0..frozen_rows, 0);
        }
    }

    fn paint_row_labels(
        &self,
        strip: Rect,
        buf: &mut Buffer,
        row_range: std::ops::Range<usize>,
        scroll_y: i64,
    ) {
        if strip.height == 0 {
            return;
        }
        let clip_h = strip.height as i64;
        for row in row_range {
            let top = self.layout.cumulative_height_before(row) - scroll_y;
            let bottom = self.layout.cumulative_height_at(row) - scroll_y;
            if bottom <= 0 {
                continue;
            }
            if top >= clip_h {
                break;
            }
            // label on the row's first visible line, 1-based like spreadsheets
            if top >= 0 {
                let label = (row + 1).to_string();
                draw_str_clipped(
                    buf,
                    strip.x,
                    strip.y + top as u16,
                    0,
                    strip.width,
                    &label,
                    self.options.header_style,
                );
            }
        }
    }
}

/// Writes `text` at `(x, y)`, skipping the first `clip_left` display columns
/// and truncating to `max_width` columns. Wide characters straddling either
/// edge are dropped rather than split.
pub fn draw_str_clipped(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    clip_left: u16,
    max_width: u16,
    text: &str,
    style: Style,
) {
    if max_width == 0 {
        return;
    }
    let clip_left = clip_left as usize;
    let max_width = max_width as usize;
    let mut col = 0usize;
    let mut out_cols = 0usize;
    let mut dx = 0u16;

    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if w == 0 {
            continue;
        }
        if col + w <= clip_left || col < clip_left {
            col += w;
            continue;
        }
        if out_cols + w > max_width {
            return;
        }
        if let Some(cell) = buf.cell_mut((x + dx, y)) {
            cell.set_style(style);
            cell.set_symbol(&ch.to_string());
        }
        dx += 1;
        out_cols += 1;
        col += w;

        if w == 2 {
            if out_cols >= max_width {
                return;
            }
            if let Some(cell) = buf.cell_mut((x + dx, y)) {
                cell.set_style(style);
                cell.set_symbol("");
            }
            dx += 1;
            out_cols += 1;
        }
    }
}
