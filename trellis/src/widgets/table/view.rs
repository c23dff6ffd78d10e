//! Sort and selection state, and the sorted view derived from it.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::widgets::selection::{Selection, SelectionChange};

use super::compare::compare_cells;
use super::item::ColumnSet;

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Apply this direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Header glyph for this direction.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Which column, if any, orders the view and in which direction.
///
/// With no active column the view keeps source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    active: Option<String>,
    direction: SortDirection,
}

impl SortState {
    /// Unsorted, ascending.
    pub fn new() -> Self {
        Self::default()
    }

    /// A state sorted by `key` in `direction`.
    pub fn by(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            active: Some(key.into()),
            direction,
        }
    }

    /// Key of the active sort column.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Direction marker for a column header, if `key` is the active column.
    pub fn marker_for(&self, key: &str) -> Option<SortDirection> {
        (self.active() == Some(key)).then_some(self.direction)
    }

    /// Returns true if the state changed.
    fn toggle<T>(&mut self, columns: &ColumnSet<T>, key: &str) -> bool {
        if !columns.is_sortable(key) {
            return false;
        }

        if self.active() == Some(key) {
            self.direction = self.direction.flipped();
        } else {
            self.active = Some(key.to_string());
            self.direction = SortDirection::Ascending;
        }
        true
    }
}

/// Records in display order for the given sort state.
///
/// Returns a new sequence borrowing from `records`; the input is never
/// reordered. The sort is stable in both directions, so records whose keys
/// compare equal keep their source order. An active key that does not name a
/// sortable column leaves the records in source order.
pub fn derive_view<'a, T>(
    records: &'a [T],
    columns: &ColumnSet<T>,
    sort: &SortState,
) -> Vec<&'a T> {
    let Some(column) = sort
        .active()
        .and_then(|key| columns.get(key))
        .filter(|column| column.sortable)
    else {
        return records.iter().collect();
    };

    let direction = sort.direction();
    let values: Vec<_> = records.iter().map(|row| column.value(row)).collect();
    let order = merge_order(values.len(), |a, b| {
        direction.apply(compare_cells(&values[a], &values[b]))
    });

    trace!(
        "Derived view of {} rows by '{}' {:?}",
        order.len(),
        column.key,
        direction
    );

    order.into_iter().map(|index| &records[index]).collect()
}

/// Stable bottom-up merge sort over the indices `0..len`.
///
/// `compare` need not be a total order: mixed kinds and NaN compare equal
/// to everything. An element from a later run is placed ahead of
/// an earlier one only when the earlier one compares `Greater`.
fn merge_order<F>(len: usize, mut compare: F) -> Vec<usize>
where
    F: FnMut(usize, usize) -> Ordering,
{
    let mut order: Vec<usize> = (0..len).collect();
    let mut merged = vec![0; len];
    let mut width = 1;

    while width < len {
        for start in (0..len).step_by(2 * width) {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut left, mut right) = (start, mid);

            for slot in &mut merged[start..end] {
                let take_left = right >= end
                    || (left < mid && compare(order[left], order[right]) != Ordering::Greater);
                if take_left {
                    *slot = order[left];
                    left += 1;
                } else {
                    *slot = order[right];
                    right += 1;
                }
            }
        }
        std::mem::swap(&mut order, &mut merged);
        width *= 2;
    }

    order
}

/// Interaction state of one table: the sort and the row selection.
///
/// Both start empty. The only ways to change them are
/// [`toggle_sort`](Self::toggle_sort) and
/// [`toggle_row_selection`](Self::toggle_row_selection).
#[derive(Debug, Clone)]
pub struct TableState<K: Clone + Eq + Hash> {
    sort: SortState,
    selection: Selection<K>,
}

impl<K: Clone + Eq + Hash + Debug> Default for TableState<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq + Hash + Debug> TableState<K> {
    pub fn new() -> Self {
        Self {
            sort: SortState::new(),
            selection: Selection::new(),
        }
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn selection(&self) -> &Selection<K> {
        &self.selection
    }

    /// Toggle sort for a column.
    ///
    /// A new column becomes active ascending; the active column flips
    /// direction. Unknown or unsortable columns are ignored. Returns true if
    /// the sort state changed.
    pub fn toggle_sort<T>(&mut self, columns: &ColumnSet<T>, key: &str) -> bool {
        let changed = self.sort.toggle(columns, key);
        if changed {
            debug!("Sort by '{}' {:?}", key, self.sort.direction);
        } else {
            debug!("Ignored sort toggle on '{}'", key);
        }
        changed
    }

    /// Select the row if it is not selected, deselect it otherwise.
    pub fn toggle_row_selection(&mut self, key: K) -> SelectionChange {
        let change = self.selection.toggle(key.clone());
        debug!("Row {:?} {:?}, {} selected", key, change, self.selection.len());
        change
    }

    /// Display order of `records` under the current sort.
    pub fn view<'a, T>(&self, records: &'a [T], columns: &ColumnSet<T>) -> Vec<&'a T> {
        derive_view(records, columns, &self.sort)
    }

    /// Forget selected keys rejected by `keep`. Returns how many were dropped.
    pub(crate) fn retain_selection(&mut self, keep: impl FnMut(&K) -> bool) -> usize {
        self.selection.retain(keep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_order_sorts_and_keeps_ties() {
        let keys = [3, 1, 2, 1, 3, 0];
        let order = merge_order(keys.len(), |a, b| keys[a].cmp(&keys[b]));
        assert_eq!(order, vec![5, 1, 3, 2, 0, 4]);
    }

    #[test]
    fn test_merge_order_tolerates_cyclic_comparator() {
        // Each value beats the next one around the cycle.
        let values: Vec<usize> = (0..50).map(|i| i % 3).collect();
        let order = merge_order(values.len(), |a, b| match (values[a] + 3 - values[b]) % 3 {
            0 => Ordering::Equal,
            1 => Ordering::Less,
            _ => Ordering::Greater,
        });

        let mut seen = order.clone();
        seen.sort_unstable();
        assert_eq!(seen, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_merge_order_empty_and_single() {
        assert!(merge_order(0, |_, _| Ordering::Equal).is_empty());
        assert_eq!(merge_order(1, |_, _| Ordering::Equal), vec![0]);
    }
}
