//! Table widget state.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::debug;

use super::config::TableConfig;
use super::item::{ColumnSet, TableRow};
use super::render::TableDisplay;
use super::view::{SortState, TableState};

/// Unique identifier for a Table widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

type SelectCallback<T> = Arc<dyn Fn(&[T]) + Send + Sync>;

/// Internal state for the Table widget.
struct TableInner<T: TableRow> {
    columns: ColumnSet<T>,
    /// Rows in source order.
    rows: Vec<T>,
    state: TableState<T::Key>,
    config: TableConfig,
    /// Index into the derived view.
    cursor: Option<usize>,
}

impl<T: TableRow> TableInner<T> {
    fn view(&self) -> Vec<&T> {
        self.state.view(&self.rows, &self.columns)
    }

    /// Selected rows in selection order. Keys without a current row are skipped.
    fn selected_rows(&self) -> Vec<T> {
        self.state
            .selection()
            .keys()
            .iter()
            .filter_map(|key| self.rows.iter().find(|row| &row.key() == key))
            .cloned()
            .collect()
    }

    fn clamp_cursor(&mut self) {
        if let Some(cursor) = self.cursor
            && cursor >= self.rows.len()
        {
            self.cursor = self.rows.len().checked_sub(1);
        }
    }
}

/// A data table with client-side sorting and multi-row selection.
///
/// `Table<T>` owns its rows, column descriptors and interaction state.
/// Clones share the same state, so a clone can be moved into an event
/// handler. Selection changes are reported through [`on_select`](Self::on_select)
/// with the full selection, in the order rows were selected.
///
/// # Example
///
/// ```ignore
/// let columns = ColumnSet::new(vec![
///     Column::new("name", "Name", |u: &User| u.name.as_str().into()).sortable(),
///     Column::new("email", "Email", |u: &User| u.email.as_str().into()).sortable(),
/// ])?;
///
/// let table = Table::with_rows(columns, users)
///     .with_config(TableConfig::new().selectable(true))
///     .on_select(|rows| log::info!("{} selected", rows.len()));
///
/// table.toggle_sort("name");
/// let lines = render_table(&table.display(), table.cursor());
/// ```
pub struct Table<T: TableRow> {
    id: TableId,
    inner: Arc<RwLock<TableInner<T>>>,
    on_select: Option<SelectCallback<T>>,
    dirty: Arc<AtomicBool>,
}

impl<T: TableRow> Table<T> {
    /// Create an empty table.
    pub fn new(columns: ColumnSet<T>) -> Self {
        Self::with_rows(columns, Vec::new())
    }

    /// Create a table with initial rows.
    pub fn with_rows(columns: ColumnSet<T>, rows: Vec<T>) -> Self {
        Self {
            id: TableId::new(),
            inner: Arc::new(RwLock::new(TableInner {
                columns,
                rows,
                state: TableState::new(),
                config: TableConfig::default(),
                cursor: None,
            })),
            on_select: None,
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Set the loading and selectable flags.
    pub fn with_config(self, config: TableConfig) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.config = config;
        }
        self
    }

    /// Register the selection-changed callback.
    ///
    /// Called synchronously after every selection toggle, outside the
    /// table's lock, so the callback may read the table.
    pub fn on_select<F>(mut self, f: F) -> Self
    where
        F: Fn(&[T]) + Send + Sync + 'static,
    {
        self.on_select = Some(Arc::new(f));
        self
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Rows and configuration
    // -------------------------------------------------------------------------

    /// Rows in source order.
    pub fn rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.rows.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace all rows.
    ///
    /// Selected rows whose key is absent from `rows` are deselected without a
    /// notification; rows that keep their key stay selected.
    pub fn set_rows(&self, rows: Vec<T>) {
        if let Ok(mut guard) = self.inner.write() {
            let dropped = guard
                .state
                .retain_selection(|key| rows.iter().any(|row| &row.key() == key));
            if dropped > 0 {
                debug!("{}: dropped {} stale selections", self.id, dropped);
            }
            guard.rows = rows;
            guard.clamp_cursor();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn columns(&self) -> Option<ColumnSet<T>> {
        self.inner.read().ok().map(|g| g.columns.clone())
    }

    pub fn config(&self) -> TableConfig {
        self.inner.read().map(|g| g.config).unwrap_or_default()
    }

    pub fn set_loading(&self, loading: bool) {
        if let Ok(mut guard) = self.inner.write()
            && guard.config.loading != loading
        {
            guard.config.loading = loading;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn set_selectable(&self, selectable: bool) {
        if let Ok(mut guard) = self.inner.write()
            && guard.config.selectable != selectable
        {
            guard.config.selectable = selectable;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Current sort state.
    pub fn sort(&self) -> SortState {
        self.inner
            .read()
            .map(|g| g.state.sort().clone())
            .unwrap_or_default()
    }

    /// Toggle sort for a column by key.
    ///
    /// Returns true if the sort changed; unsortable columns are ignored.
    pub fn toggle_sort(&self, key: &str) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            let inner = &mut *guard;
            if inner.state.toggle_sort(&inner.columns, key) {
                self.dirty.store(true, Ordering::SeqCst);
                return true;
            }
        }
        false
    }

    /// Toggle sort for the column at a display position (header click).
    pub fn toggle_sort_at(&self, index: usize) -> bool {
        let key = self
            .inner
            .read()
            .ok()
            .and_then(|g| g.columns.at(index).map(|c| c.key.clone()));
        key.is_some_and(|key| self.toggle_sort(&key))
    }

    // -------------------------------------------------------------------------
    // Derived view
    // -------------------------------------------------------------------------

    /// Rows in display order.
    pub fn view(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.view().into_iter().cloned().collect())
            .unwrap_or_default()
    }

    /// The rendering decision for the current state.
    pub fn display(&self) -> TableDisplay<T> {
        self.inner
            .read()
            .map(|g| TableDisplay::decide(&g.rows, &g.columns, &g.state, &g.config))
            .unwrap_or(TableDisplay::Empty)
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Toggle selection of a row and notify the selection callback.
    ///
    /// Returns the updated selection in selection order.
    pub fn toggle_row_selection(&self, row: &T) -> Vec<T> {
        self.toggle_row_selection_key(row.key())
    }

    /// Toggle selection of the row with `key` and notify the selection callback.
    pub fn toggle_row_selection_key(&self, key: T::Key) -> Vec<T> {
        let selected = match self.inner.write() {
            Ok(mut guard) => {
                guard.state.toggle_row_selection(key);
                self.dirty.store(true, Ordering::SeqCst);
                guard.selected_rows()
            }
            Err(_) => return Vec::new(),
        };

        if let Some(callback) = &self.on_select {
            callback(&selected);
        }
        selected
    }

    /// Selected rows in selection order.
    pub fn selected_rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.selected_rows())
            .unwrap_or_default()
    }

    pub fn is_selected(&self, row: &T) -> bool {
        self.inner
            .read()
            .map(|g| g.state.selection().contains(&row.key()))
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Cursor
    // -------------------------------------------------------------------------

    /// Cursor position in the displayed rows.
    pub fn cursor(&self) -> Option<usize> {
        self.inner.read().ok().and_then(|g| g.cursor)
    }

    /// Move the cursor up. Returns the new position if it moved.
    pub fn cursor_up(&self) -> Option<usize> {
        if let Ok(mut guard) = self.inner.write() {
            let next = match guard.cursor {
                Some(cursor) if cursor > 0 => cursor - 1,
                None if !guard.rows.is_empty() => 0,
                _ => return None,
            };
            guard.cursor = Some(next);
            self.dirty.store(true, Ordering::SeqCst);
            return Some(next);
        }
        None
    }

    /// Move the cursor down. Returns the new position if it moved.
    pub fn cursor_down(&self) -> Option<usize> {
        if let Ok(mut guard) = self.inner.write() {
            let last = guard.rows.len().checked_sub(1)?;
            let next = match guard.cursor {
                Some(cursor) if cursor < last => cursor + 1,
                None => 0,
                _ => return None,
            };
            guard.cursor = Some(next);
            self.dirty.store(true, Ordering::SeqCst);
            return Some(next);
        }
        None
    }

    /// Toggle selection of the displayed row under the cursor.
    ///
    /// Does nothing unless the table is selectable and not loading.
    pub fn toggle_select_at_cursor(&self) -> Option<Vec<T>> {
        let key = self.inner.read().ok().and_then(|g| {
            if !g.config.selectable || g.config.loading {
                return None;
            }
            let cursor = g.cursor?;
            g.view().get(cursor).map(|row| row.key())
        })?;
        Some(self.toggle_row_selection_key(key))
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the table state has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T: TableRow> Clone for Table<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            on_select: self.on_select.clone(),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: TableRow> fmt::Debug for Table<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("id", &self.id)
            .field("rows", &self.len())
            .field("sort", &self.sort())
            .finish_non_exhaustive()
    }
}
