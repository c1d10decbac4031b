use alloc::sync::Arc;
use alloc::vec::Vec;

use vlist::{ConfigError, RowEvent, RowEventKind, ScrollEvent, Size, Window, WindowOptions};

/// Extracts the render identity of an item.
pub type KeyFn<T, K> = Arc<dyn Fn(&T) -> K + Send + Sync>;

/// A realized row of a flat list.
#[derive(Clone, Debug, PartialEq)]
pub struct ListRow<'a, T, K> {
    pub item: &'a T,
    pub key: K,
    /// Absolute index into the item sequence.
    pub index: usize,
    /// Offset of the row inside the content area.
    pub top: f64,
    pub style_phase: usize,
}

/// A framework-neutral controller for a flat virtualized list.
///
/// The caller keeps ownership of the items and passes them in on every query; the controller
/// only holds the window state and the key function.
pub struct ListController<T, K> {
    window: Window,
    key_of: KeyFn<T, K>,
    remeasure: bool,
}

impl<T, K> ListController<T, K> {
    /// # Panics
    ///
    /// Panics if `options` are invalid (see [`WindowOptions::validate`]).
    pub fn new(options: WindowOptions, key_of: impl Fn(&T) -> K + Send + Sync + 'static) -> Self {
        Self::from_window(Window::new(options), key_of)
    }

    pub fn try_new(
        options: WindowOptions,
        key_of: impl Fn(&T) -> K + Send + Sync + 'static,
    ) -> Result<Self, ConfigError> {
        Ok(Self::from_window(Window::try_new(options)?, key_of))
    }

    pub fn from_window(window: Window, key_of: impl Fn(&T) -> K + Send + Sync + 'static) -> Self {
        Self {
            window,
            key_of: Arc::new(key_of),
            remeasure: false,
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn set_on_scroll(&mut self, on_scroll: Option<impl Fn(ScrollEvent) + Send + Sync + 'static>) {
        self.window.set_on_scroll(on_scroll);
    }

    /// Whether the container must be measured again (see [`Self::on_resize`]).
    pub fn needs_remeasure(&self) -> bool {
        self.remeasure
    }

    /// Call this whenever the item sequence changes.
    pub fn sync_items(&mut self, items: &[T]) {
        self.remeasure |= self.window.set_item_count(items.len());
    }

    pub fn set_content_width(&mut self, content_width: f64) {
        self.remeasure |= self.window.set_content_width(content_width);
    }

    /// Call this when the UI reports a scroll offset change.
    pub fn on_scroll(&mut self, scroll_left: f64, scroll_top: f64) -> ScrollEvent {
        self.window.apply_scroll(scroll_left, scroll_top)
    }

    /// Call this with a fresh measurement of the scroll container.
    ///
    /// Returns `true` if the viewport geometry changed.
    pub fn on_resize(&mut self, bounding: Size, client: Size) -> bool {
        let changed = self.window.apply_measurement(bounding, client);
        // Only a changed measurement may request another one.
        self.remeasure = changed && self.window.scrollbars_stale();
        changed
    }

    pub fn key_for(&self, item: &T) -> K {
        (self.key_of)(item)
    }

    /// The rows to realize for the current window.
    pub fn rows<'a>(&self, items: &'a [T]) -> Vec<ListRow<'a, T, K>> {
        let start = self.window.visible_range().start_index;
        self.window
            .rendered_items(items)
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let index = start + i;
                ListRow {
                    item,
                    key: self.key_for(item),
                    index,
                    top: self.window.row_top(index),
                    style_phase: self.window.row_style_phase(index),
                }
            })
            .collect()
    }

    /// Renders the realized rows with a caller-supplied `render(item, absolute_index)`.
    pub fn render<R>(&self, items: &[T], render: impl FnMut(&T, usize) -> R) -> Vec<R> {
        self.window.render_rows(items, render)
    }

    /// Translates an interaction on the `window_index`-th realized row.
    pub fn row_event<'a>(
        &self,
        items: &'a [T],
        window_index: usize,
        kind: RowEventKind,
    ) -> Option<RowEvent<&'a T>> {
        let item = self.window.rendered_items(items).get(window_index)?;
        Some(self.window.row_event(window_index, item, kind))
    }

    /// Scrolls just enough to fully show row `index`.
    ///
    /// Returns the scroll notification, or `None` if no scroll was needed.
    pub fn ensure_visible(&mut self, index: usize) -> Option<ScrollEvent> {
        self.window.reveal(index)
    }
}

impl<T, K> Clone for ListController<T, K> {
    fn clone(&self) -> Self {
        Self {
            window: self.window.clone(),
            key_of: Arc::clone(&self.key_of),
            remeasure: self.remeasure,
        }
    }
}

impl<T, K> core::fmt::Debug for ListController<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListController")
            .field("window", &self.window)
            .field("remeasure", &self.remeasure)
            .finish_non_exhaustive()
    }
}
