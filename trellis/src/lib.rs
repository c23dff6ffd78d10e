//! A small terminal widget toolkit.
//!
//! Two widgets live here:
//!
//! - [`Table`](widgets::table::Table): a typed data table with client-side
//!   sorting and multi-row selection, driven by declarative column
//!   descriptors.
//! - [`InputField`](widgets::input::InputField): a text input with
//!   validation, loading, clear and password-reveal affordances.
//!
//! Widgets only hold state and produce plain text lines; drawing them to a
//! terminal and forwarding key presses is left to the caller.

pub mod utils;
pub mod validation;
pub mod widgets;

pub mod prelude {
    pub use crate::validation::{FieldError, Validatable, ValidationResult, Validator};
    pub use crate::widgets::input::{
        Affordances, Footer, InputField, InputId, InputKind, InputSize, InputTheme, InputVariant,
        render_input,
    };
    pub use crate::widgets::selection::{Selection, SelectionChange};
    pub use crate::widgets::table::{
        Alignment, CellValue, Column, ColumnSet, SortDirection, SortState, Table, TableConfig,
        TableDisplay, TableError, TableId, TableRow, TableState, derive_view, render_table,
    };
}
