//! The windowing engine: scroll position → realized row range.
//!
//! Rows have a fixed height, so every query here is O(1). The engine never measures anything
//! itself; the layout layer reports bounding/client sizes and scroll offsets as plain numbers.

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::error::{ConfigError, check_row_height};
use crate::float::{ceil, floor};
use crate::{RowEvent, RowEventKind, ScrollEvent, ScrollbarSize, Size, VisibleRange};

/// A callback fired with the new offsets every time a scroll is applied.
pub type OnScrollCallback = Arc<dyn Fn(ScrollEvent) + Send + Sync>;

/// Row geometry for a [`Window`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowOptions {
    /// Height of every row, in pixels. Must be finite and `> 0`.
    pub row_height: f64,
    /// Period of alternating-row styling. `1` disables cycling.
    pub row_style_cycle: usize,
    /// Extra rows realized on each side of the strict visible range.
    pub overscan: usize,
}

impl WindowOptions {
    pub fn new(row_height: f64) -> Self {
        Self {
            row_height,
            row_style_cycle: 1,
            overscan: 0,
        }
    }

    pub fn with_row_style_cycle(mut self, row_style_cycle: usize) -> Self {
        self.row_style_cycle = row_style_cycle;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_row_height(self.row_height)?;
        if self.row_style_cycle == 0 {
            return Err(ConfigError::InvalidRowStyleCycle);
        }
        Ok(())
    }
}

fn enforce(result: Result<(), ConfigError>) {
    if let Err(err) = result {
        panic!("{err}");
    }
}

/// Clamps a non-negative row position to `max`.
fn clamp_index(position: f64, max: usize) -> usize {
    if position >= max as f64 {
        max
    } else {
        position as usize
    }
}

fn align_down(index: usize, row_style_cycle: usize) -> usize {
    if row_style_cycle > 1 {
        index - index % row_style_cycle
    } else {
        index
    }
}

/// Computes the rows intersecting `[scroll_top, scroll_top + viewport_height]`.
///
/// The first index is rounded down to a multiple of `row_style_cycle`, so banding keeps its
/// phase while scrolling. Negative offsets/heights are treated as zero.
///
/// # Panics
///
/// Panics if `row_height` is not finite and `> 0`, or if `row_style_cycle == 0`.
pub fn compute_visible_range(
    item_count: usize,
    row_height: f64,
    row_style_cycle: usize,
    scroll_top: f64,
    viewport_height: f64,
) -> VisibleRange {
    enforce(check_row_height(row_height));
    if row_style_cycle == 0 {
        enforce(Err(ConfigError::InvalidRowStyleCycle));
    }
    if item_count == 0 {
        return VisibleRange::EMPTY;
    }

    let top = scroll_top.max(0.0);
    let bottom = top + viewport_height.max(0.0);
    let max_index = item_count - 1;

    let last = clamp_index(ceil(bottom / row_height), max_index);
    let first = clamp_index(floor(top / row_height), last);
    VisibleRange::inclusive(align_down(first, row_style_cycle), last)
}

/// Widens `range` by `overscan` rows on both sides, clamped to `[0, item_count)`.
///
/// The widened start is re-aligned to the style cycle.
pub fn overscan_range(
    range: VisibleRange,
    overscan: usize,
    row_style_cycle: usize,
    item_count: usize,
) -> VisibleRange {
    if range.is_empty() || overscan == 0 {
        return range;
    }
    let start = align_down(range.start_index.saturating_sub(overscan), row_style_cycle);
    let end = range.end_index.saturating_add(overscan).min(item_count);
    VisibleRange {
        start_index: start,
        end_index: end,
    }
}

/// Total scrollable height of `item_count` rows.
pub fn content_height(item_count: usize, row_height: f64) -> f64 {
    item_count as f64 * row_height
}

/// Derives scrollbar sizes from a bounding box and the client area inside it.
///
/// Negative differences happen transiently while a resize is in flight and are clamped to 0.
pub fn recompute_viewport_geometry(bounding: Size, client: Size) -> ScrollbarSize {
    let vertical_width = floor(bounding.width - client.width);
    let horizontal_height = floor(bounding.height - client.height);
    if vertical_width < 0.0 || horizontal_height < 0.0 {
        vwarn!(
            vertical_width,
            horizontal_height,
            "negative scrollbar size clamped to zero"
        );
    }
    ScrollbarSize {
        vertical_width: vertical_width.max(0.0),
        horizontal_height: horizontal_height.max(0.0),
    }
}

/// Returns `true` when a recorded scrollbar disagrees with the content extent on its axis.
///
/// A scrollbar is present exactly when the content overflows the client extent. Showing or
/// hiding one changes the client area, so a stale axis means geometry has to be measured again.
/// Once a measurement agrees with the content, the test stays quiet until the content crosses
/// the viewport edge again.
pub fn scrollbar_is_stale(scrollbar_size: f64, content_extent: f64, viewport_extent: f64) -> bool {
    (scrollbar_size > 0.0) == (content_extent <= viewport_extent)
}

/// An immutable snapshot of scroll and viewport geometry.
///
/// Transitions return a new snapshot; the rendering layer compares snapshots to decide what to
/// redraw.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowState {
    pub scroll_left: f64,
    pub scroll_top: f64,
    /// Client width of the scrollable area (excludes the vertical scrollbar).
    pub viewport_width: f64,
    /// Client height of the scrollable area (excludes the horizontal scrollbar).
    pub viewport_height: f64,
    pub vertical_scrollbar_width: f64,
    pub horizontal_scrollbar_height: f64,
}

impl WindowState {
    pub fn scrolled(self, scroll_left: f64, scroll_top: f64) -> Self {
        Self {
            scroll_left,
            scroll_top,
            ..self
        }
    }

    pub fn measured(self, bounding: Size, client: Size) -> Self {
        let scrollbars = recompute_viewport_geometry(bounding, client);
        Self {
            viewport_width: client.width,
            viewport_height: client.height,
            vertical_scrollbar_width: scrollbars.vertical_width,
            horizontal_scrollbar_height: scrollbars.horizontal_height,
            ..self
        }
    }

    pub fn viewport(&self) -> Size {
        Size::new(self.viewport_width, self.viewport_height)
    }

    pub fn scrollbars(&self) -> ScrollbarSize {
        ScrollbarSize {
            vertical_width: self.vertical_scrollbar_width,
            horizontal_height: self.horizontal_scrollbar_height,
        }
    }

    pub fn scroll_event(&self) -> ScrollEvent {
        ScrollEvent {
            scroll_left: self.scroll_left,
            scroll_top: self.scroll_top,
        }
    }
}

/// A windowing engine instance: one per rendered list or table.
///
/// The adapter drives it with item counts, scroll offsets and geometry measurements, then asks
/// which rows to realize.
#[derive(Clone)]
pub struct Window {
    options: WindowOptions,
    state: WindowState,
    item_count: usize,
    content_width: f64,
    on_scroll: Option<OnScrollCallback>,
}

impl Window {
    /// Creates a window with no items and zero geometry.
    ///
    /// # Panics
    ///
    /// Panics if `options` fail [`WindowOptions::validate`].
    pub fn new(options: WindowOptions) -> Self {
        enforce(options.validate());
        Self::new_unchecked(options)
    }

    pub fn try_new(options: WindowOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self::new_unchecked(options))
    }

    fn new_unchecked(options: WindowOptions) -> Self {
        vdebug!(
            row_height = options.row_height,
            row_style_cycle = options.row_style_cycle,
            overscan = options.overscan,
            "Window::new"
        );
        Self {
            options,
            state: WindowState::default(),
            item_count: 0,
            content_width: 0.0,
            on_scroll: None,
        }
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    /// Replaces the row geometry.
    ///
    /// # Panics
    ///
    /// Panics if `options` fail [`WindowOptions::validate`].
    pub fn set_options(&mut self, options: WindowOptions) {
        enforce(options.validate());
        self.options = options;
    }

    pub fn set_on_scroll(&mut self, on_scroll: Option<impl Fn(ScrollEvent) + Send + Sync + 'static>) {
        self.on_scroll = on_scroll.map(|f| Arc::new(f) as _);
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    /// Restores a previously captured snapshot without notifying scroll observers.
    pub fn restore_state(&mut self, state: WindowState) {
        self.state = state;
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Updates the number of logical rows.
    ///
    /// Returns `true` when the recorded vertical scrollbar no longer matches the content height;
    /// the caller must then measure geometry again and call [`Self::apply_measurement`].
    pub fn set_item_count(&mut self, item_count: usize) -> bool {
        self.item_count = item_count;
        let recheck = self.vertical_scrollbar_stale();
        if recheck {
            vtrace!(item_count, "vertical scrollbar is stale");
        }
        recheck
    }

    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    /// Updates the width of the scrollable content (e.g. the sum of column widths).
    ///
    /// Returns `true` when the recorded horizontal scrollbar no longer matches the content width.
    pub fn set_content_width(&mut self, content_width: f64) -> bool {
        self.content_width = content_width;
        let recheck = self.horizontal_scrollbar_stale();
        if recheck {
            vtrace!(content_width, "horizontal scrollbar is stale");
        }
        recheck
    }

    fn vertical_scrollbar_stale(&self) -> bool {
        scrollbar_is_stale(
            self.state.vertical_scrollbar_width,
            self.content_height(),
            self.state.viewport_height,
        )
    }

    fn horizontal_scrollbar_stale(&self) -> bool {
        scrollbar_is_stale(
            self.state.horizontal_scrollbar_height,
            self.content_width,
            self.state.viewport_width,
        )
    }

    /// Whether either recorded scrollbar disagrees with the current content extent.
    ///
    /// Stays `true` after a measurement taken while the layout was still settling.
    pub fn scrollbars_stale(&self) -> bool {
        self.vertical_scrollbar_stale() || self.horizontal_scrollbar_stale()
    }

    /// Applies a scroll from the UI layer and notifies the scroll observer.
    pub fn apply_scroll(&mut self, scroll_left: f64, scroll_top: f64) -> ScrollEvent {
        vtrace!(scroll_left, scroll_top, "apply_scroll");
        self.state = self.state.scrolled(scroll_left, scroll_top);
        let event = self.state.scroll_event();
        if let Some(cb) = &self.on_scroll {
            cb(event);
        }
        event
    }

    /// Applies a measurement of the scrollable container.
    ///
    /// Returns `true` if viewport or scrollbar sizes changed.
    pub fn apply_measurement(&mut self, bounding: Size, client: Size) -> bool {
        let next = self.state.measured(bounding, client);
        if next == self.state {
            return false;
        }
        vtrace!(
            viewport_width = next.viewport_width,
            viewport_height = next.viewport_height,
            vertical_scrollbar_width = next.vertical_scrollbar_width,
            horizontal_scrollbar_height = next.horizontal_scrollbar_height,
            "apply_measurement"
        );
        self.state = next;
        true
    }

    /// Rows to realize for the current state, overscan included.
    pub fn visible_range(&self) -> VisibleRange {
        self.visible_range_for(self.state.scroll_top, self.state.viewport_height)
    }

    pub fn visible_range_for(&self, scroll_top: f64, viewport_height: f64) -> VisibleRange {
        let o = &self.options;
        let strict = compute_visible_range(
            self.item_count,
            o.row_height,
            o.row_style_cycle,
            scroll_top,
            viewport_height,
        );
        overscan_range(strict, o.overscan, o.row_style_cycle, self.item_count)
    }

    pub fn content_height(&self) -> f64 {
        content_height(self.item_count, self.options.row_height)
    }

    /// Height of the empty block placed before the first realized row.
    pub fn spacer_height(&self) -> f64 {
        self.visible_range().start_index as f64 * self.options.row_height
    }

    pub fn row_top(&self, index: usize) -> f64 {
        index as f64 * self.options.row_height
    }

    /// Position of `index` within the style cycle, for banding.
    pub fn row_style_phase(&self, index: usize) -> usize {
        index % self.options.row_style_cycle
    }

    /// Converts a window-relative row position into an absolute logical index.
    pub fn absolute_index(&self, window_index: usize) -> usize {
        self.visible_range().start_index + window_index
    }

    /// Builds a row event for the row at `window_index` within the realized rows.
    pub fn row_event<T>(&self, window_index: usize, item: T, kind: RowEventKind) -> RowEvent<T> {
        RowEvent {
            item,
            index: self.absolute_index(window_index),
            kind,
        }
    }

    /// The realized sub-slice of the caller's logical item sequence.
    pub fn rendered_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.visible_range();
        let end = range.end_index.min(items.len());
        let start = range.start_index.min(end);
        &items[start..end]
    }

    /// Renders every realized row with `render(item, absolute_index)`.
    pub fn render_rows<T, R>(&self, items: &[T], mut render: impl FnMut(&T, usize) -> R) -> Vec<R> {
        let start = self.visible_range().start_index;
        self.rendered_items(items)
            .iter()
            .enumerate()
            .map(|(i, item)| render(item, start + i))
            .collect()
    }

    pub fn max_scroll_top(&self) -> f64 {
        (self.content_height() - self.state.viewport_height).max(0.0)
    }

    /// The smallest scroll move that fully reveals row `index`.
    ///
    /// Returns the current offset when the row is already fully visible.
    pub fn scroll_top_to_reveal(&self, index: usize) -> f64 {
        if self.item_count == 0 {
            return 0.0;
        }
        let index = index.min(self.item_count - 1);
        let top = self.row_top(index);
        let bottom = top + self.options.row_height;
        let cur = self.state.scroll_top;
        let view = self.state.viewport_height;

        let target = if top >= cur && bottom <= cur + view {
            cur
        } else if top < cur {
            top
        } else {
            bottom - view
        };
        target.clamp(0.0, self.max_scroll_top())
    }

    /// Scrolls just enough to fully show row `index` and notifies the scroll observer.
    ///
    /// Returns `None` when the row is already fully visible.
    pub fn reveal(&mut self, index: usize) -> Option<ScrollEvent> {
        let target = self.scroll_top_to_reveal(index);
        if target == self.state.scroll_top {
            return None;
        }
        Some(self.apply_scroll(self.state.scroll_left, target))
    }

    /// Horizontal translation keeping a header aligned with the scrolled content.
    pub fn header_offset(&self) -> f64 {
        -self.state.scroll_left
    }

    /// Trailing padding a header needs so it does not sit above the vertical scrollbar.
    pub fn header_padding_end(&self) -> f64 {
        self.state.vertical_scrollbar_width
    }
}

impl core::fmt::Debug for Window {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Window")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("item_count", &self.item_count)
            .field("content_width", &self.content_width)
            .finish_non_exhaustive()
    }
}
