//! A headless windowing and tree-flattening engine for virtualized lists and tree tables.
//!
//! For list/tree-table controllers that compose these engines, see the `vlist-adapter` crate.
//!
//! Two independent pieces:
//! - [`window`]: maps a scroll offset and fixed row height to the contiguous range of rows that
//!   must be realized, keeps alternating-row styling phase-stable, and tracks scrollbar sizes.
//! - [`tree`]: turns a forest plus a set of expanded keys into the ordered, depth-annotated
//!   sequence of visible rows that feeds the window.
//!
//! It is UI-agnostic. The rendering layer is expected to provide:
//! - the logical item sequence (or forest) and a key function
//! - row height and container geometry measurements
//! - scroll offsets
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

pub mod columns;
mod error;
mod float;
mod key;
pub mod tree;
mod types;
pub mod window;


pub use columns::{Column, ColumnLayout, ColumnWidths, DragSession, WidthUpdate};
pub use error::ConfigError;
pub use key::ExpansionKey;
pub use tree::{
    ExpansionState, TreeNode, VisibleNode, VisibleNodes, expand_all, find_visible_index, flatten,
    item_count, slice_visible, toggle_expand,
};
pub use types::{RowEvent, RowEventKind, ScrollEvent, ScrollbarSize, Size, VisibleRange};
pub use window::{
    OnScrollCallback, Window, WindowOptions, WindowState, compute_visible_range, content_height,
    overscan_range, recompute_viewport_geometry, scrollbar_is_stale,
};
