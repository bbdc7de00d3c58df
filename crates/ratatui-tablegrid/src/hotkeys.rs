use ratatui_tablegrid_core::cell::CellCoords;
use ratatui_tablegrid_core::direction::Direction;
use ratatui_tablegrid_core::focus;
use ratatui_tablegrid_core::focus::FocusMode;
use ratatui_tablegrid_core::focus::FocusedRegion;
use ratatui_tablegrid_core::layout::GridGeometry;
use ratatui_tablegrid_core::navigation;
use ratatui_tablegrid_core::navigation::SelectionMove;
use ratatui_tablegrid_core::region;
use ratatui_tablegrid_core::region::Region;
use ratatui_tablegrid_core::region::RegionCardinality;
use ratatui_tablegrid_core::scroll::HeaderDimensions;
use ratatui_tablegrid_core::scroll::ScrollRequest;
use ratatui_tablegrid_core::scroll::ViewportRect;
use ratatui_tablegrid_core::scroll::scroll_to_focus;
use ratatui_tablegrid_core::selection::resize_region;

use crate::bindings::TableAction;
use crate::bindings::TableBindings;
use crate::input::KeyEvent;

/// Which region cardinalities the user may select.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionModes {
    pub full_table: bool,
    pub full_rows: bool,
    pub full_columns: bool,
    pub cells: bool,
}

impl Default for SelectionModes {
    fn default() -> Self {
        Self {
            full_table: true,
            full_rows: true,
            full_columns: true,
            cells: true,
        }
    }
}

impl SelectionModes {
    pub fn allows(&self, cardinality: RegionCardinality) -> bool {
        match cardinality {
            RegionCardinality::FullTable => self.full_table,
            RegionCardinality::FullRows => self.full_rows,
            RegionCardinality::FullColumns => self.full_columns,
            RegionCardinality::Cells => self.cells,
        }
    }
}

/// Static table configuration, resolved once per component lifetime.
#[derive(Clone, Copy, Debug, Default)]
pub struct TableConfig {
    pub focus_mode: Option<FocusMode>,
    /// Deprecated two-tier fallback: maps to [`FocusMode::Cell`] when `true`
    /// and `focus_mode` is absent.
    pub enable_focused_cell: bool,
    pub num_frozen_rows: usize,
    pub num_frozen_cols: usize,
    pub header: HeaderDimensions,
    pub selection_modes: SelectionModes,
}

/// Snapshot of the table's current state, passed into every call. The
/// controller deliberately holds no live references to any of this.
pub struct TableContext<'a> {
    pub geometry: &'a dyn GridGeometry,
    pub viewport: ViewportRect,
    pub selected_regions: &'a [Region],
    pub focused_region: Option<FocusedRegion>,
}

/// Consumer callbacks. Within a single event, `handle_selection` is always
/// invoked before `handle_focus`, so a consumer observing both may rely on
/// the selection already reflecting the new region when focus is reported.
pub trait TableHandlers {
    fn handle_selection(&mut self, selected_regions: Vec<Region>);
    fn handle_focus(&mut self, focused_region: FocusedRegion);
    /// Called only when at least one axis needs a scroll correction.
    fn sync_viewport(&mut self, request: ScrollRequest);
    /// Clipboard collaborator: receives the deduplicated, row-major cell
    /// list and reports whether the copy succeeded.
    fn copy_cells(&mut self, cells: Vec<CellCoords>) -> bool;
}

/// Keyboard controller for the table: translates key events into selection,
/// focus, and scroll updates.
///
/// The only state kept across calls is the last focus position reported
/// through [`TableHotkeys::sync_focus`], used to skip redundant scroll
/// corrections. Everything else arrives per call in [`TableContext`].
#[derive(Debug)]
pub struct TableHotkeys {
    config: TableConfig,
    bindings: TableBindings,
    last_focus: Option<FocusedRegion>,
}

impl TableHotkeys {
    pub fn new(config: TableConfig) -> Self {
        Self {
            config,
            bindings: TableBindings::default(),
            last_focus: None,
        }
    }

    pub fn with_bindings(config: TableConfig, bindings: TableBindings) -> Self {
        Self {
            config,
            bindings,
            last_focus: None,
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: TableConfig) {
        self.config = config;
    }

    /// The effective focus mode, resolving the deprecated flag.
    pub fn focus_mode(&self) -> Option<FocusMode> {
        focus::focus_mode_from_config(self.config.focus_mode, self.config.enable_focused_cell)
    }

    /// The focused region to start with, given caller-supplied and internal
    /// candidates. Validated against the effective focus mode.
    pub fn initial_focus(
        &self,
        from_props: Option<FocusedRegion>,
        legacy_cell: Option<CellCoords>,
        from_state: Option<FocusedRegion>,
        selected_regions: &[Region],
    ) -> Option<FocusedRegion> {
        let from_props = focus::focused_region_from_config(from_props, legacy_cell);
        focus::initial_focused_region(self.focus_mode(), from_props, from_state, selected_regions)
    }

    /// Dispatches one key event. Returns `true` if the event was consumed.
    pub fn handle_key(
        &mut self,
        key: &KeyEvent,
        ctx: &TableContext<'_>,
        handlers: &mut impl TableHandlers,
    ) -> bool {
        let Some(action) = self.bindings.action_for(key) else {
            return false;
        };
        match action {
            // selecting-all via the keyboard does not move the focus
            TableAction::SelectAll => self.select_all(false, ctx, handlers),
            TableAction::Copy => self.copy(ctx, handlers),
            TableAction::ClearSelection => {
                handlers.handle_selection(Vec::new());
                true
            }
            TableAction::SelectionResize(direction) => {
                self.resize_selection(direction, ctx, handlers)
            }
            TableAction::FocusMove(direction) => self.focus_move(direction, ctx, handlers),
            TableAction::FocusMoveInSelection(direction) => {
                self.focus_move_in_selection(direction, ctx, handlers)
            }
        }
    }

    /// Selects the whole table. Clicking the corner always selects all, even
    /// when the table is already selected; `update_focus` moves the focus to
    /// the table's anchor cell (pointer interactions) or leaves it alone
    /// (keyboard).
    pub fn select_all(
        &mut self,
        update_focus: bool,
        ctx: &TableContext<'_>,
        handlers: &mut impl TableHandlers,
    ) -> bool {
        if !self.config.selection_modes.allows(RegionCardinality::FullTable) {
            return false;
        }
        handlers.handle_selection(vec![Region::table()]);

        if update_focus {
            let anchor = Region::table().focus_anchor();
            if let Some(focused) = FocusedRegion::from_coords(self.focus_mode(), anchor, 0) {
                handlers.handle_focus(focused);
                self.scroll_to(focused, ctx, handlers);
                self.last_focus = Some(focused);
            }
        }
        true
    }

    fn resize_selection(
        &mut self,
        direction: Direction,
        ctx: &TableContext<'_>,
        handlers: &mut impl TableHandlers,
    ) -> bool {
        let focused = ctx.focused_region;
        let Some(index) =
            focus::focused_or_last_selected_index(ctx.selected_regions, focused.as_ref())
        else {
            return false;
        };
        let Some(current) = ctx.selected_regions.get(index) else {
            return false;
        };

        let next = resize_region(current, direction, focused.as_ref());
        let max_row = ctx.geometry.num_rows().saturating_sub(1);
        let max_col = ctx.geometry.num_cols().saturating_sub(1);
        let clamped = next.clamp(max_row, max_col);

        handlers.handle_selection(region::update(ctx.selected_regions, clamped, index));
        true
    }

    fn focus_move(
        &mut self,
        direction: Direction,
        ctx: &TableContext<'_>,
        handlers: &mut impl TableHandlers,
    ) -> bool {
        let Some(focused) = ctx.focused_region else {
            return false;
        };
        let Some(next) = navigation::move_focus(
            &focused,
            direction,
            ctx.geometry.num_rows(),
            ctx.geometry.num_cols(),
        ) else {
            // out of bounds: the event is inert
            return false;
        };

        // the selection follows the focus: a fresh single region at the new
        // location, reported before the focus itself
        handlers.handle_selection(vec![next.as_region()]);
        handlers.handle_focus(next);
        self.scroll_to(next, ctx, handlers);
        self.last_focus = Some(next);
        true
    }

    fn focus_move_in_selection(
        &mut self,
        direction: Direction,
        ctx: &TableContext<'_>,
        handlers: &mut impl TableHandlers,
    ) -> bool {
        let Some(focused) = ctx.focused_region else {
            return false;
        };
        match navigation::move_focus_in_selection(
            &focused,
            direction,
            ctx.selected_regions,
            ctx.geometry.num_rows(),
            ctx.geometry.num_cols(),
        ) {
            None => false,
            Some(SelectionMove::Fallthrough) => self.focus_move(direction, ctx, handlers),
            Some(SelectionMove::Moved(next)) => {
                // the selection stays as it is; only the focus moves
                handlers.handle_focus(next);
                self.scroll_to(next, ctx, handlers);
                self.last_focus = Some(next);
                true
            }
        }
    }

    fn copy(&mut self, ctx: &TableContext<'_>, handlers: &mut impl TableHandlers) -> bool {
        let cells = region::enumerate_unique_cells(
            ctx.selected_regions,
            ctx.geometry.num_rows(),
            ctx.geometry.num_cols(),
        );
        if cells.is_empty() {
            return false;
        }
        handlers.copy_cells(cells)
    }

    /// Reports externally applied focus state back to the controller. Emits
    /// a scroll correction only when the focus position actually changed
    /// since the last report.
    pub fn sync_focus(
        &mut self,
        focused_region: Option<FocusedRegion>,
        ctx: &TableContext<'_>,
        handlers: &mut impl TableHandlers,
    ) {
        if let Some(focused) = focused_region {
            let changed = self
                .last_focus
                .is_none_or(|previous| !previous.same_position(&focused));
            if changed {
                self.scroll_to(focused, ctx, handlers);
            }
        }
        self.last_focus = focused_region;
    }

    fn scroll_to(
        &self,
        focused: FocusedRegion,
        ctx: &TableContext<'_>,
        handlers: &mut impl TableHandlers,
    ) {
        let request = scroll_to_focus(
            &focused,
            ctx.geometry,
            self.config.num_frozen_rows,
            self.config.num_frozen_cols,
            self.config.header,
            ctx.viewport,
        );
        if !request.is_noop() {
            handlers.sync_viewport(request);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui_tablegrid_core::layout::GridLayout;

    use super::*;
    use crate::input::KeyCode;
    use crate::input::KeyModifiers;

    /// Records handler invocations in order.
    #[derive(Default)]
    struct Recorder {
        events: Vec<Event>,
        copy_ok: bool,
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    enum Event {
        Selection(Vec<Region>),
        Focus(FocusedRegion),
        Scroll(ScrollRequest),
        Copy(Vec<CellCoords>),
    }

    impl TableHandlers for Recorder {
        fn handle_selection(&mut self, selected_regions: Vec<Region>) {
            self.events.push(Event::Selection(selected_regions));
        }

        fn handle_focus(&mut self, focused_region: FocusedRegion) {
            self.events.push(Event::Focus(focused_region));
        }

        fn sync_viewport(&mut self, request: ScrollRequest) {
            self.events.push(Event::Scroll(request));
        }

        fn copy_cells(&mut self, cells: Vec<CellCoords>) -> bool {
            self.events.push(Event::Copy(cells));
            self.copy_ok
        }
    }

    fn cell_focus(row: usize, col: usize, index: usize) -> FocusedRegion {
        FocusedRegion::Cell {
            row,
            col,
            focus_selection_index: Some(index),
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code)
    }

    fn shift(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code).with_modifiers(KeyModifiers::shift())
    }

    fn config() -> TableConfig {
        TableConfig {
            focus_mode: Some(FocusMode::Cell),
            ..TableConfig::default()
        }
    }

    // 10x10 grid of 20px rows and 100px cols, wide-open viewport
    fn geometry() -> GridLayout {
        GridLayout::uniform(10, 10, 20, 100)
    }

    fn ctx<'a>(
        geometry: &'a GridLayout,
        selected: &'a [Region],
        focused: Option<FocusedRegion>,
    ) -> TableContext<'a> {
        TableContext {
            geometry,
            viewport: ViewportRect::new(0, 0, 1000, 200),
            selected_regions: selected,
            focused_region: focused,
        }
    }

    #[test]
    fn focus_move_reports_selection_before_focus() {
        let geometry = geometry();
        let selected = vec![Region::cell(1, 1)];
        let ctx = ctx(&geometry, &selected, Some(cell_focus(1, 1, 0)));
        let mut hotkeys = TableHotkeys::new(config());
        let mut recorder = Recorder::default();

        assert!(hotkeys.handle_key(&key(KeyCode::Down), &ctx, &mut recorder));
        assert_eq!(
            recorder.events,
            vec![
                Event::Selection(vec![Region::cell(2, 1)]),
                Event::Focus(cell_focus(2, 1, 0)),
            ]
        );
    }

    #[test]
    fn focus_move_at_the_edge_is_inert() {
        let geometry = geometry();
        let selected = vec![Region::cell(0, 0)];
        let ctx = ctx(&geometry, &selected, Some(cell_focus(0, 0, 0)));
        let mut hotkeys = TableHotkeys::new(config());
        let mut recorder = Recorder::default();

        assert!(!hotkeys.handle_key(&key(KeyCode::Up), &ctx, &mut recorder));
        assert!(recorder.events.is_empty());
    }

    #[test]
    fn focus_move_requests_scroll_when_focus_leaves_the_viewport() {
        let geometry = geometry();
        let selected = vec![Region::cell(9, 0)];
        let mut context = ctx(&geometry, &selected, Some(cell_focus(9, 0, 0)));
        context.viewport = ViewportRect::new(0, 0, 1000, 100);
        let mut hotkeys = TableHotkeys::new(config());
        let mut recorder = Recorder::default();

        assert!(hotkeys.handle_key(&key(KeyCode::Up), &context, &mut recorder));
        let scrolls: Vec<_> = recorder
            .events
            .iter()
            .filter(|e| matches!(e, Event::Scroll(_)))
            .collect();
        // row 8 spans 160..180, below the 100px viewport: one correction
        assert_eq!(
            scrolls,
            vec![&Event::Scroll(ScrollRequest {
                next_scroll_top: Some(80),
                next_scroll_left: None,
            })]
        );
    }

    #[test]
    fn selection_resize_replaces_the_active_region() {
        let geometry = geometry();
        let selected = vec![Region::cell(5, 5), Region::cells(2, 1, 2, 3)];
        let focused = cell_focus(2, 1, 1);
        let ctx = ctx(&geometry, &selected, Some(focused));
        let mut hotkeys = TableHotkeys::new(config());
        let mut recorder = Recorder::default();

        assert!(hotkeys.handle_key(&shift(KeyCode::Right), &ctx, &mut recorder));
        assert_eq!(
            recorder.events,
            vec![Event::Selection(vec![
                Region::cell(5, 5),
                Region::cells(2, 1, 2, 4),
            ])]
        );
    }

    #[test]
    fn selection_resize_without_selection_is_inert() {
        let geometry = geometry();
        let ctx = ctx(&geometry, &[], None);
        let mut hotkeys = TableHotkeys::new(config());
        let mut recorder = Recorder::default();
        assert!(!hotkeys.handle_key(&shift(KeyCode::Down), &ctx, &mut recorder));
        assert!(recorder.events.is_empty());
    }

    #[test]
    fn selection_resize_clamps_to_grid_extents() {
        let geometry = geometry();
        let selected = vec![Region::cells(8, 0, 9, 0)];
        let focused = cell_focus(8, 0, 0);
        let ctx = ctx(&geometry, &selected, Some(focused));
        let mut hotkeys = TableHotkeys::new(config());
        let mut recorder = Recorder::default();

        // growing past the last row clamps back to row 9
        assert!(hotkeys.handle_key(&shift(KeyCode::Down), &ctx, &mut recorder));
        assert_eq!(
            recorder.events,
            vec![Event::Selection(vec![Region::cells(8, 0, 9, 0)])]
        );
    }

    #[test]
    fn intra_selection_move_keeps_the_selection() {
        let geometry = geometry();
        let selected = vec![Region::cells(0, 0, 0, 1), Region::cells(1, 0, 1, 1)];
        let ctx = ctx(&geometry, &selected, Some(cell_focus(0, 1, 0)));
        let mut hotkeys = TableHotkeys::new(config());
        let mut recorder = Recorder::default();

        assert!(hotkeys.handle_key(&key(KeyCode::Tab), &ctx, &mut recorder));
        // wraps into the second region; no Selection event at all
        assert_eq!(recorder.events, vec![Event::Focus(cell_focus(1, 0, 1))]);
    }

    #[test]
    fn intra_selection_move_falls_back_to_plain_move_for_single_cell() {
        let geometry = geometry();
        let selected = vec![Region::cell(3, 3)];
        let ctx = ctx(&geometry, &selected, Some(cell_focus(3, 3, 0)));
        let mut hotkeys = TableHotkeys::new(config());
        let mut recorder = Recorder::default();

        assert!(hotkeys.handle_key(&key(KeyCode::Enter), &ctx, &mut recorder));
        assert_eq!(
            recorder.events,
            vec![
                Event::Selection(vec![Region::cell(4, 3)]),
                Event::Focus(cell_focus(4, 3, 0)),
            ]
        );
    }

    #[test]
    fn select_all_selects_the_table_without_moving_focus() {
        let geometry = geometry();
        let selected = vec![Region::cell(3, 3)];
        let ctx = ctx(&geometry, &selected, Some(cell_focus(3, 3, 0)));
        let mut hotkeys = TableHotkeys::new(config());
        let mut recorder = Recorder::default();

        assert!(hotkeys.handle_key(&crate::input::key_ctrl('a'), &ctx, &mut recorder));
        assert_eq!(recorder.events, vec![Event::Selection(vec![Region::table()])]);
    }

    #[test]
    fn select_all_respects_selection_modes() {
        let geometry = geometry();
        let ctx = ctx(&geometry, &[], None);
        let mut cfg = config();
        cfg.selection_modes.full_table = false;
        let mut hotkeys = TableHotkeys::new(cfg);
        let mut recorder = Recorder::default();
        assert!(!hotkeys.handle_key(&crate::input::key_ctrl('a'), &ctx, &mut recorder));
        assert!(recorder.events.is_empty());
    }

    #[test]
    fn copy_hands_the_unique_cell_list_to_the_collaborator() {
        let geometry = geometry();
        let selected = vec![Region::cells(0, 0, 0, 1)];
        let ctx = ctx(&geometry, &selected, None);
        let mut hotkeys = TableHotkeys::new(config());
        let mut recorder = Recorder {
            copy_ok: true,
            ..Recorder::default()
        };

        assert!(hotkeys.handle_key(&crate::input::key_ctrl('c'), &ctx, &mut recorder));
        assert_eq!(
            recorder.events,
            vec![Event::Copy(vec![CellCoords::new(0, 0), CellCoords::new(0, 1)])]
        );

        // an empty selection copies nothing
        let empty_ctx = TableContext {
            selected_regions: &[],
            ..ctx
        };
        recorder.events.clear();
        assert!(!hotkeys.handle_key(&crate::input::key_ctrl('c'), &empty_ctx, &mut recorder));
        assert!(recorder.events.is_empty());
    }

    #[test]
    fn sync_focus_scrolls_only_on_position_change() {
        let geometry = geometry();
        let selected = vec![Region::cell(9, 9)];
        let mut context = ctx(&geometry, &selected, None);
        context.viewport = ViewportRect::new(0, 0, 300, 100);
        let mut hotkeys = TableHotkeys::new(config());
        let mut recorder = Recorder::default();

        let focused = cell_focus(9, 9, 0);
        hotkeys.sync_focus(Some(focused), &context, &mut recorder);
        assert_eq!(recorder.events.len(), 1);
        assert!(matches!(recorder.events[0], Event::Scroll(_)));

        // same position again: no new correction
        hotkeys.sync_focus(Some(cell_focus(9, 9, 3)), &context, &mut recorder);
        assert_eq!(recorder.events.len(), 1);
    }
}
