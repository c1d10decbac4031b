//! Controllers composing the `vlist` engines for UI adapters.
//!
//! The `vlist` crate only does the math. This crate wires it into the two shapes a UI layer
//! usually wants:
//!
//! - [`ListController`]: a flat virtualized list over a caller-owned slice
//! - [`TreeTableController`]: a virtualized tree table with expansion state, resizable columns
//!   and per-row classes
//!
//! No rendering toolkit is assumed; the caller feeds measurements and scroll offsets in and
//! realizes the rows it gets back.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod list;
mod options;
mod tree_table;


pub use list::{KeyFn, ListController, ListRow};
pub use options::{DEFAULT_ROW_CLASS, RowClassFn, TableOptions};
pub use tree_table::{TreeRow, TreeTableController};
