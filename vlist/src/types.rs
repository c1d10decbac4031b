use core::ops;

/// The contiguous window of rows that must be realized.
///
/// `end_index` is exclusive; an empty range means nothing is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl VisibleRange {
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
    };

    /// Builds a range from inclusive bounds.
    pub fn inclusive(first_index: usize, last_index: usize) -> Self {
        debug_assert!(first_index <= last_index, "inverted range");
        Self {
            start_index: first_index,
            end_index: last_index + 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    /// First realized index, if any.
    pub fn first_index(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.start_index)
    }

    /// Last realized index (inclusive), if any.
    pub fn last_index(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.end_index - 1)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start_index <= index && index < self.end_index
    }

    pub fn indexes(&self) -> ops::Range<usize> {
        self.start_index..self.end_index.max(self.start_index)
    }
}

/// A width/height pair in pixels, as reported by the layout layer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Space taken by native scrollbars inside the scrollable container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollbarSize {
    /// Width of the vertical scrollbar (0 when absent).
    pub vertical_width: f64,
    /// Height of the horizontal scrollbar (0 when absent).
    pub horizontal_height: f64,
}

/// Notification emitted whenever the scroll offset changes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollEvent {
    pub scroll_left: f64,
    pub scroll_top: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowEventKind {
    Click,
    DoubleClick,
    DragEnter,
    DragLeave,
    DragStart,
    DragEnd,
    DragOver,
    Drop,
}

impl RowEventKind {
    pub const ALL: [RowEventKind; 8] = [
        Self::Click,
        Self::DoubleClick,
        Self::DragEnter,
        Self::DragLeave,
        Self::DragStart,
        Self::DragEnd,
        Self::DragOver,
        Self::Drop,
    ];

    /// The observer-facing event name (`rowclick`, `rowdblclick`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Self::Click => "rowclick",
            Self::DoubleClick => "rowdblclick",
            Self::DragEnter => "rowdragenter",
            Self::DragLeave => "rowdragleave",
            Self::DragStart => "rowdragstart",
            Self::DragEnd => "rowdragend",
            Self::DragOver => "rowdragover",
            Self::Drop => "rowdrop",
        }
    }
}

/// An interaction on a rendered row.
///
/// `index` is always the absolute index into the logical item sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowEvent<T> {
    pub item: T,
    pub index: usize,
    pub kind: RowEventKind,
}

impl<T> RowEvent<T> {
    /// Replaces the payload while keeping index and kind.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RowEvent<U> {
        RowEvent {
            item: f(self.item),
            index: self.index,
            kind: self.kind,
        }
    }
}
