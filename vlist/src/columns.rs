//! Column widths for tree tables, and the splitter drag that resizes them.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::ConfigError;

/// Width used when a column does not declare `min_width`.
pub const DEFAULT_MIN_WIDTH: f64 = 5.0;
/// Width of the splitter following every column when not configured.
pub const DEFAULT_SPLITTER_WIDTH: f64 = 3.0;

/// Column id → width in pixels.
pub type ColumnWidths = BTreeMap<String, f64>;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    pub id: String,
    /// Header text; the id is shown when absent.
    pub title: Option<String>,
    pub default_width: f64,
    pub min_width: Option<f64>,
    pub class_name: Option<String>,
}

impl Column {
    pub fn new(id: impl Into<String>, default_width: f64) -> Self {
        Self {
            id: id.into(),
            title: None,
            default_width,
            min_width: None,
            class_name: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_min_width(mut self, min_width: f64) -> Self {
        self.min_width = Some(min_width);
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn title_or_id(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }

    pub fn effective_min_width(&self) -> f64 {
        self.min_width.unwrap_or(DEFAULT_MIN_WIDTH)
    }
}

/// Resolves a column's width: controlled map, then local map, then `default_width`.
pub fn effective_width(
    column: &Column,
    controlled: Option<&ColumnWidths>,
    local: &ColumnWidths,
) -> f64 {
    controlled
        .and_then(|w| w.get(&column.id))
        .or_else(|| local.get(&column.id))
        .copied()
        .unwrap_or(column.default_width)
}

/// Where a width change went.
#[derive(Clone, Debug, PartialEq)]
pub enum WidthUpdate {
    /// Stored in the locally-owned map.
    Local,
    /// The caller controls widths; this is the map it should adopt.
    Controlled(ColumnWidths),
}

/// An in-progress splitter drag.
///
/// Owned by the caller's input layer between pointer-down and pointer-up. It only turns pointer
/// positions into widths; [`ColumnLayout`] stores them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    column: usize,
    start_x: f64,
    start_width: f64,
    min_width: f64,
}

impl DragSession {
    pub fn begin(column: usize, pointer_x: f64, start_width: f64, min_width: f64) -> Self {
        vdebug!(column, pointer_x, start_width, "drag begin");
        Self {
            column,
            start_x: pointer_x,
            start_width,
            min_width,
        }
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Width of the dragged column for the given pointer position.
    pub fn width_at(&self, pointer_x: f64) -> f64 {
        (self.start_width + (pointer_x - self.start_x)).max(self.min_width)
    }
}

/// The columns of a table together with their width bookkeeping.
#[derive(Clone, Debug)]
pub struct ColumnLayout {
    columns: Vec<Column>,
    controlled: Option<ColumnWidths>,
    local: ColumnWidths,
    splitter_width: f64,
    dragging: Option<usize>,
}

impl ColumnLayout {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            controlled: None,
            local: ColumnWidths::new(),
            splitter_width: DEFAULT_SPLITTER_WIDTH,
            dragging: None,
        }
    }

    pub fn with_splitter_width(mut self, splitter_width: f64) -> Result<Self, ConfigError> {
        if !(splitter_width.is_finite() && splitter_width >= 0.0) {
            return Err(ConfigError::InvalidSplitterWidth(splitter_width));
        }
        self.splitter_width = splitter_width;
        Ok(self)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
        self.dragging = None;
    }

    pub fn splitter_width(&self) -> f64 {
        self.splitter_width
    }

    /// Switches to controlled mode (`Some`) or back to locally-owned widths (`None`).
    pub fn set_controlled_widths(&mut self, widths: Option<ColumnWidths>) {
        self.controlled = widths;
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled.is_some()
    }

    pub fn first_column_id(&self) -> Option<&str> {
        self.columns.first().map(|c| c.id.as_str())
    }

    pub fn width(&self, index: usize) -> Option<f64> {
        let column = self.columns.get(index)?;
        Some(effective_width(column, self.controlled.as_ref(), &self.local))
    }

    pub fn widths(&self) -> impl Iterator<Item = f64> + '_ {
        self.columns
            .iter()
            .map(|c| effective_width(c, self.controlled.as_ref(), &self.local))
    }

    /// Total width of all columns and their splitters.
    pub fn content_width(&self) -> f64 {
        self.widths().map(|w| w + self.splitter_width).sum()
    }

    /// Sets the width of column `index`. Returns `None` for an unknown column.
    pub fn set_column_width(&mut self, index: usize, width: f64) -> Option<WidthUpdate> {
        let id = self.columns.get(index)?.id.clone();
        match &self.controlled {
            Some(controlled) => {
                let mut next = controlled.clone();
                next.insert(id, width);
                Some(WidthUpdate::Controlled(next))
            }
            None => {
                self.local.insert(id, width);
                Some(WidthUpdate::Local)
            }
        }
    }

    /// Starts a splitter drag on column `index`.
    ///
    /// Only one drag is tracked: a new one replaces any active one.
    pub fn begin_drag(&mut self, index: usize, pointer_x: f64) -> Option<DragSession> {
        let start_width = self.width(index)?;
        let min_width = self.columns[index].effective_min_width();
        self.dragging = Some(index);
        Some(DragSession::begin(index, pointer_x, start_width, min_width))
    }

    pub fn drag_to(&mut self, session: &DragSession, pointer_x: f64) -> Option<WidthUpdate> {
        let width = session.width_at(pointer_x);
        self.dragging = Some(session.column());
        self.set_column_width(session.column(), width)
    }

    pub fn end_drag(&mut self, _session: DragSession) {
        vdebug!(column = ?self.dragging, "drag end");
        self.dragging = None;
    }

    /// The column whose splitter is being dragged.
    pub fn dragging_column(&self) -> Option<usize> {
        self.dragging
    }
}
