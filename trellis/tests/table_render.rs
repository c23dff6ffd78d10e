//! Tests for the table rendering decision and its text output.

use trellis::widgets::table::{
    Alignment, Column, ColumnSet, EMPTY_TEXT, LOADING_TEXT, SortDirection, TableConfig,
    TableDisplay, TableRow, TableState, render_table,
};

#[derive(Debug, Clone, PartialEq)]
struct Person {
    name: &'static str,
    email: &'static str,
    age: u32,
}

impl TableRow for Person {
    type Key = &'static str;

    fn key(&self) -> &'static str {
        self.email
    }
}

fn columns() -> ColumnSet<Person> {
    ColumnSet::new(vec![
        Column::new("name", "Name", |p: &Person| p.name.into())
            .sortable()
            .width(8),
        Column::new("email", "Email", |p: &Person| p.email.into()).width(12),
    ])
    .unwrap()
}

fn people() -> Vec<Person> {
    vec![
        Person {
            name: "Prakhar Parihar",
            email: "p@x.io",
            age: 31,
        },
        Person {
            name: "Aarav",
            email: "aarav@x.io",
            age: 27,
        },
    ]
}

#[test]
fn test_loading_wins_over_rows() {
    let display = TableDisplay::decide(
        &people(),
        &columns(),
        &TableState::new(),
        &TableConfig::new().loading(true).selectable(true),
    );
    assert_eq!(display, TableDisplay::Loading);
    assert!(display.records().is_empty());
    assert_eq!(render_table(&display, None), vec![LOADING_TEXT.to_string()]);
}

#[test]
fn test_empty_when_not_loading_without_records() {
    let display = TableDisplay::decide(&[], &columns(), &TableState::new(), &TableConfig::new());
    assert_eq!(display, TableDisplay::Empty);
    assert_eq!(render_table(&display, Some(0)), vec![EMPTY_TEXT.to_string()]);
}

#[test]
fn test_header_has_one_cell_per_column() {
    let mut state = TableState::new();
    state.toggle_sort(&columns(), "name");
    state.toggle_sort(&columns(), "name");

    let display = TableDisplay::decide(&people(), &columns(), &state, &TableConfig::new());
    let TableDisplay::Grid { header, .. } = display else {
        panic!("expected rows");
    };

    let keys: Vec<_> = header.iter().map(|h| h.key.as_str()).collect();
    assert_eq!(keys, vec!["name", "email"]);
    assert!(header[0].sortable);
    assert!(!header[1].sortable);
    assert_eq!(header[0].marker, Some(SortDirection::Descending));
    assert_eq!(header[0].width, 8);
    assert_eq!(header[1].align, Alignment::Left);
}

#[test]
fn test_render_selectable_grid() {
    let mut state = TableState::new();
    state.toggle_sort(&columns(), "name");
    state.toggle_row_selection("p@x.io");

    let display = TableDisplay::decide(
        &people(),
        &columns(),
        &state,
        &TableConfig::new().selectable(true),
    );
    let names: Vec<_> = display.records().iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Aarav", "Prakhar Parihar"]);

    let lines = render_table(&display, Some(1));
    assert_eq!(
        lines,
        vec![
            "    Name ▲    Email".to_string(),
            "─".repeat(19),
            "  □ Aarav     aarav@x.io".to_string(),
            "› ■ Prakhar…  p@x.io".to_string(),
        ]
    );
}

#[test]
fn test_render_without_selection_cells() {
    let display = TableDisplay::decide(
        &people(),
        &columns(),
        &TableState::new(),
        &TableConfig::new(),
    );

    let lines = render_table(&display, None);
    assert_eq!(lines[0], "  Name      Email");
    assert_eq!(lines[2], "  Prakhar…  p@x.io");
    assert_eq!(lines[3], "  Aarav     aarav@x.io");
}

#[test]
fn test_numeric_cells_render_without_fraction() {
    let columns = ColumnSet::new(vec![
        Column::new("age", "Age", |p: &Person| p.age.into())
            .sortable()
            .width(5)
            .align(Alignment::Right),
    ])
    .unwrap();
    let display =
        TableDisplay::decide(&people(), &columns, &TableState::new(), &TableConfig::new());

    let lines = render_table(&display, None);
    assert_eq!(lines[0], "    Age");
    assert_eq!(lines[2], "     31");
    assert_eq!(lines[3], "     27");
}
