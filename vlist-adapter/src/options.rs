use alloc::string::{String, ToString};
use alloc::sync::Arc;

/// Row class used when neither a class function nor a fixed class is configured.
pub const DEFAULT_ROW_CLASS: &str = "vtable-row";

/// Computes a row's class from its payload and absolute index.
pub type RowClassFn<T> = Arc<dyn Fn(&T, usize) -> String + Send + Sync>;

/// Table presentation settings for [`crate::TreeTableController`].
///
/// Heights default to the row height of the underlying window.
pub struct TableOptions<T> {
    pub header_height: Option<f64>,
    /// Horizontal indent per tree level.
    pub indent_width: Option<f64>,
    pub splitter_width: f64,
    pub row_class: Option<String>,
    pub get_row_class: Option<RowClassFn<T>>,
}

impl<T> Default for TableOptions<T> {
    fn default() -> Self {
        Self {
            header_height: None,
            indent_width: None,
            splitter_width: vlist::columns::DEFAULT_SPLITTER_WIDTH,
            row_class: None,
            get_row_class: None,
        }
    }
}

impl<T> Clone for TableOptions<T> {
    fn clone(&self) -> Self {
        Self {
            header_height: self.header_height,
            indent_width: self.indent_width,
            splitter_width: self.splitter_width,
            row_class: self.row_class.clone(),
            get_row_class: self.get_row_class.clone(),
        }
    }
}

impl<T> TableOptions<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header_height(mut self, header_height: f64) -> Self {
        self.header_height = Some(header_height);
        self
    }

    pub fn with_indent_width(mut self, indent_width: f64) -> Self {
        self.indent_width = Some(indent_width);
        self
    }

    pub fn with_splitter_width(mut self, splitter_width: f64) -> Self {
        self.splitter_width = splitter_width;
        self
    }

    pub fn with_row_class(mut self, row_class: impl Into<String>) -> Self {
        self.row_class = Some(row_class.into());
        self
    }

    pub fn with_get_row_class(
        mut self,
        f: Option<impl Fn(&T, usize) -> String + Send + Sync + 'static>,
    ) -> Self {
        self.get_row_class = f.map(|f| Arc::new(f) as _);
        self
    }

    /// Header height, falling back to `row_height` when unset or not positive.
    pub fn resolve_header_height(&self, row_height: f64) -> f64 {
        match self.header_height {
            Some(h) if h > 0.0 => h,
            _ => row_height,
        }
    }

    pub fn resolve_indent_width(&self, row_height: f64) -> f64 {
        match self.indent_width {
            Some(w) if w > 0.0 => w,
            _ => row_height,
        }
    }

    pub fn resolve_row_class(&self, item: &T, index: usize) -> String {
        if let Some(f) = &self.get_row_class {
            return f(item, index);
        }
        self.row_class
            .clone()
            .unwrap_or_else(|| DEFAULT_ROW_CLASS.to_string())
    }
}

impl<T> core::fmt::Debug for TableOptions<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TableOptions")
            .field("header_height", &self.header_height)
            .field("indent_width", &self.indent_width)
            .field("splitter_width", &self.splitter_width)
            .field("row_class", &self.row_class)
            .finish_non_exhaustive()
    }
}
