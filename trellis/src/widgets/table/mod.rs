//! Table widget - typed rows, declarative columns, sorting and selection.
//!
//! The moving parts:
//!
//! - [`ColumnSet`] declares which fields are shown and which sort.
//! - [`TableState`] holds the sort and the selection and is changed only by
//!   `toggle_sort` and `toggle_row_selection`.
//! - [`derive_view`] orders records for a sort state without touching them.
//! - [`TableDisplay`] decides between loading, empty and rows.
//! - [`Table`] bundles all of the above behind a shareable handle.

mod compare;
mod config;
mod error;
mod item;
mod render;
mod state;
mod view;

pub use crate::utils::text::Alignment;
pub use compare::{compare_cells, compare_text};
pub use config::TableConfig;
pub use error::TableError;
pub use item::{CellValue, Column, ColumnSet, DEFAULT_COLUMN_WIDTH, TableRow};
pub use render::{EMPTY_TEXT, GridRow, HeaderCell, LOADING_TEXT, TableDisplay, render_table};
pub use state::{Table, TableId};
pub use view::{SortDirection, SortState, TableState, derive_view};
