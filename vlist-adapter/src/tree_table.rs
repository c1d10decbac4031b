use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use vlist::{
    Column, ColumnLayout, ColumnWidths, ConfigError, DragSession, ExpansionKey, ExpansionState,
    RowEvent, RowEventKind, ScrollEvent, Size, TreeNode, WidthUpdate, Window, WindowOptions,
};

use crate::{KeyFn, TableOptions};

/// A realized row of a tree table.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeRow<'a, T> {
    pub data: &'a T,
    /// Absolute index into the flattened tree.
    pub index: usize,
    pub depth: usize,
    pub expanded: bool,
    pub has_children: bool,
    /// Leading indent of the tree column.
    pub indent: f64,
    pub class: String,
    pub style_phase: usize,
}

/// A framework-neutral controller for a virtualized tree table.
///
/// The forest belongs to the caller and is passed to every call that needs it; the controller
/// owns the expansion state, the window and the column widths.
pub struct TreeTableController<T, K> {
    window: Window,
    columns: ColumnLayout,
    options: TableOptions<T>,
    expansion: ExpansionState<K>,
    key_of: KeyFn<T, K>,
    remeasure: bool,
}

impl<T, K: ExpansionKey + Clone> TreeTableController<T, K> {
    /// # Panics
    ///
    /// Panics on an invalid window or splitter configuration.
    pub fn new(
        window_options: WindowOptions,
        columns: Vec<Column>,
        options: TableOptions<T>,
        key_of: impl Fn(&T) -> K + Send + Sync + 'static,
    ) -> Self {
        match Self::try_new(window_options, columns, options, key_of) {
            Ok(c) => c,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_new(
        window_options: WindowOptions,
        columns: Vec<Column>,
        options: TableOptions<T>,
        key_of: impl Fn(&T) -> K + Send + Sync + 'static,
    ) -> Result<Self, ConfigError> {
        let window = Window::try_new(window_options)?;
        let columns = ColumnLayout::new(columns).with_splitter_width(options.splitter_width)?;
        Ok(Self {
            window,
            columns,
            options,
            expansion: ExpansionState::new(),
            key_of: Arc::new(key_of),
            remeasure: false,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn columns(&self) -> &ColumnLayout {
        &self.columns
    }

    pub fn options(&self) -> &TableOptions<T> {
        &self.options
    }

    pub fn expansion(&self) -> &ExpansionState<K> {
        &self.expansion
    }

    pub fn set_on_scroll(&mut self, on_scroll: Option<impl Fn(ScrollEvent) + Send + Sync + 'static>) {
        self.window.set_on_scroll(on_scroll);
    }

    fn key_fn(&self) -> impl Fn(&T) -> K + '_ {
        move |data: &T| (self.key_of)(data)
    }

    /// Number of rows currently visible in the flattened tree.
    pub fn item_count(&self, roots: &[TreeNode<T>]) -> usize {
        vlist::item_count(roots, &self.expansion, self.key_fn())
    }

    /// Whether the container must be measured again (see [`Self::on_resize`]).
    pub fn needs_remeasure(&self) -> bool {
        self.remeasure
    }

    /// Recomputes row count and content width. Call this whenever the forest changes.
    pub fn sync(&mut self, roots: &[TreeNode<T>]) {
        let count = self.item_count(roots);
        self.remeasure |= self.window.set_item_count(count);
        self.sync_content_width();
    }

    fn sync_content_width(&mut self) {
        let width = self.columns.content_width();
        self.remeasure |= self.window.set_content_width(width);
    }

    pub fn on_scroll(&mut self, scroll_left: f64, scroll_top: f64) -> ScrollEvent {
        self.window.apply_scroll(scroll_left, scroll_top)
    }

    pub fn on_resize(&mut self, bounding: Size, client: Size) -> bool {
        let changed = self.window.apply_measurement(bounding, client);
        // Only a changed measurement may request another one.
        self.remeasure = changed && self.window.scrollbars_stale();
        changed
    }

    /// Replaces the expansion state wholesale.
    pub fn set_expansion(&mut self, roots: &[TreeNode<T>], expansion: ExpansionState<K>) {
        self.expansion = expansion;
        self.sync(roots);
    }

    /// Expands or collapses the node carrying `item`. Returns whether it is now expanded.
    pub fn toggle_expand(&mut self, roots: &[TreeNode<T>], item: &T) -> bool {
        let key = (self.key_of)(item);
        let next = vlist::toggle_expand(&self.expansion, key.clone());
        let expanded = next.is_expanded(&key);
        self.set_expansion(roots, next);
        expanded
    }

    pub fn expand_all(&mut self, roots: &[TreeNode<T>]) {
        let all = vlist::expand_all(roots, self.key_fn());
        self.set_expansion(roots, all);
    }

    pub fn collapse_all(&mut self, roots: &[TreeNode<T>]) {
        self.set_expansion(roots, ExpansionState::new());
    }

    /// Scrolls so the node keyed `key` is fully shown, if it is currently visible.
    pub fn reveal(&mut self, roots: &[TreeNode<T>], key: &K) -> Option<ScrollEvent> {
        let index = vlist::find_visible_index(roots, &self.expansion, self.key_fn(), key)?;
        self.window.reveal(index)
    }

    pub fn header_height(&self) -> f64 {
        self.options
            .resolve_header_height(self.window.options().row_height)
    }

    pub fn indent(&self, depth: usize) -> f64 {
        depth as f64 * self.options.resolve_indent_width(self.window.options().row_height)
    }

    /// The first column carries the expander and indentation.
    pub fn is_tree_column(&self, column_id: &str) -> bool {
        self.columns.first_column_id() == Some(column_id)
    }

    /// The rows to realize for the current window.
    pub fn visible_rows<'a>(&self, roots: &'a [TreeNode<T>]) -> Vec<TreeRow<'a, T>> {
        let range = self.window.visible_range();
        vlist::slice_visible(
            roots,
            &self.expansion,
            self.key_fn(),
            range.start_index,
            range.end_index,
        )
        .into_iter()
        .enumerate()
        .map(|(i, node)| {
            let index = range.start_index + i;
            TreeRow {
                data: node.data,
                index,
                depth: node.depth,
                expanded: node.expanded,
                has_children: node.has_children,
                indent: self.indent(node.depth),
                class: self.options.resolve_row_class(node.data, index),
                style_phase: self.window.row_style_phase(index),
            }
        })
        .collect()
    }

    /// Renders the realized rows with `render(payload, absolute_index)`.
    pub fn render_rows<R>(
        &self,
        roots: &[TreeNode<T>],
        mut render: impl FnMut(&T, usize) -> R,
    ) -> Vec<R> {
        let range = self.window.visible_range();
        vlist::slice_visible(
            roots,
            &self.expansion,
            self.key_fn(),
            range.start_index,
            range.end_index,
        )
        .into_iter()
        .zip(range.indexes())
        .map(|(node, index)| render(node.data, index))
        .collect()
    }

    /// Translates an interaction on the `window_index`-th realized row.
    ///
    /// The event carries the caller's payload, not the flattened-node wrapper.
    pub fn row_event<'a>(
        &self,
        roots: &'a [TreeNode<T>],
        window_index: usize,
        kind: RowEventKind,
    ) -> Option<RowEvent<&'a T>> {
        let index = self.window.absolute_index(window_index);
        if index >= self.window.visible_range().end_index {
            return None;
        }
        let node = vlist::slice_visible(roots, &self.expansion, self.key_fn(), index, index + 1)
            .into_iter()
            .next()?;
        Some(self.window.row_event(window_index, node.data, kind))
    }

    /// Switches to caller-controlled widths (`Some`) or local widths (`None`).
    pub fn set_controlled_widths(&mut self, widths: Option<ColumnWidths>) {
        self.columns.set_controlled_widths(widths);
        self.sync_content_width();
    }

    pub fn set_column_width(&mut self, index: usize, width: f64) -> Option<WidthUpdate> {
        let update = self.columns.set_column_width(index, width);
        self.sync_content_width();
        update
    }

    pub fn begin_column_drag(&mut self, index: usize, pointer_x: f64) -> Option<DragSession> {
        self.columns.begin_drag(index, pointer_x)
    }

    pub fn drag_column(&mut self, session: &DragSession, pointer_x: f64) -> Option<WidthUpdate> {
        let update = self.columns.drag_to(session, pointer_x);
        self.sync_content_width();
        update
    }

    pub fn end_column_drag(&mut self, session: DragSession) {
        self.columns.end_drag(session);
    }
}

impl<T, K: core::fmt::Debug> core::fmt::Debug for TreeTableController<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TreeTableController")
            .field("window", &self.window)
            .field("columns", &self.columns)
            .field("options", &self.options)
            .field("expansion", &self.expansion)
            .field("remeasure", &self.remeasure)
            .finish_non_exhaustive()
    }
}
