//! What a table shows, and its text rendering.

use crate::utils::text::{Alignment, display_width, fit_to_width};

use super::config::TableConfig;
use super::item::{ColumnSet, TableRow};
use super::view::{SortDirection, TableState};

/// Shown instead of rows while loading.
pub const LOADING_TEXT: &str = "Loading...";
/// Shown when there are no rows.
pub const EMPTY_TEXT: &str = "No data available";

/// One header cell.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub key: String,
    pub title: String,
    pub sortable: bool,
    /// Set on the active sort column.
    pub marker: Option<SortDirection>,
    pub width: u16,
    pub align: Alignment,
}

/// One data row in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow<T> {
    pub record: T,
    /// `Some` when the table is selectable.
    pub selected: Option<bool>,
    pub cells: Vec<String>,
}

/// The rendering decision for a table.
///
/// Loading wins over everything, then an empty record list; only otherwise
/// are rows derived.
#[derive(Debug, Clone, PartialEq)]
pub enum TableDisplay<T> {
    Loading,
    Empty,
    Grid {
        header: Vec<HeaderCell>,
        rows: Vec<GridRow<T>>,
        selectable: bool,
    },
}

impl<T: TableRow> TableDisplay<T> {
    /// Decide what to show for `records` under `state` and `config`.
    pub fn decide(
        records: &[T],
        columns: &ColumnSet<T>,
        state: &TableState<T::Key>,
        config: &TableConfig,
    ) -> Self {
        if config.loading {
            return TableDisplay::Loading;
        }
        if records.is_empty() {
            return TableDisplay::Empty;
        }

        let sort = state.sort();
        let header = columns
            .iter()
            .map(|column| HeaderCell {
                key: column.key.clone(),
                title: column.title.clone(),
                sortable: column.sortable,
                marker: sort.marker_for(&column.key),
                width: column.width,
                align: column.align,
            })
            .collect();

        let rows = state
            .view(records, columns)
            .into_iter()
            .map(|record| GridRow {
                selected: config
                    .selectable
                    .then(|| state.selection().contains(&record.key())),
                cells: columns.iter().map(|c| c.value(record).to_string()).collect(),
                record: record.clone(),
            })
            .collect();

        TableDisplay::Grid {
            header,
            rows,
            selectable: config.selectable,
        }
    }

    /// Records in display order. Empty unless rows are shown.
    pub fn records(&self) -> Vec<&T> {
        match self {
            TableDisplay::Grid { rows, .. } => rows.iter().map(|r| &r.record).collect(),
            _ => Vec::new(),
        }
    }
}

const CELL_GAP: &str = "  ";

/// Render a table decision as text lines.
///
/// `cursor` is an index into the displayed rows; that row gets a `›` gutter.
pub fn render_table<T>(display: &TableDisplay<T>, cursor: Option<usize>) -> Vec<String> {
    let (header, rows, selectable) = match display {
        TableDisplay::Loading => return vec![LOADING_TEXT.to_string()],
        TableDisplay::Empty => return vec![EMPTY_TEXT.to_string()],
        TableDisplay::Grid {
            header,
            rows,
            selectable,
        } => (header, rows, *selectable),
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);

    let mut head = String::from("  ");
    if selectable {
        head.push_str("  ");
    }
    let titles: Vec<String> = header
        .iter()
        .map(|cell| {
            let title = match cell.marker {
                Some(direction) => format!("{} {}", cell.title, direction.indicator()),
                None => cell.title.clone(),
            };
            fit_to_width(&title, cell.width as usize, cell.align)
        })
        .collect();
    head.push_str(&titles.join(CELL_GAP));
    let rule_width = display_width(head.trim_end());
    lines.push(head.trim_end().to_string());
    lines.push("─".repeat(rule_width));

    for (index, row) in rows.iter().enumerate() {
        let mut line = String::from(if cursor == Some(index) { "› " } else { "  " });
        if let Some(selected) = row.selected {
            line.push_str(if selected { "■ " } else { "□ " });
        }
        let cells: Vec<String> = row
            .cells
            .iter()
            .zip(header)
            .map(|(text, cell)| fit_to_width(text, cell.width as usize, cell.align))
            .collect();
        line.push_str(&cells.join(CELL_GAP));
        lines.push(line.trim_end().to_string());
    }

    lines
}
