//! The users shown in the demo table.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use trellis::widgets::table::{Column, ColumnSet, TableError, TableRow};

use crate::error::DemoError;

const BUILTIN_USERS: &str = include_str!("../fixtures/users.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
}

impl TableRow for User {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }
}

/// Name and email, both sortable.
pub fn user_columns() -> Result<ColumnSet<User>, TableError> {
    ColumnSet::new(vec![
        Column::new("name", "Name", |u: &User| u.name.as_str().into())
            .sortable()
            .width(24),
        Column::new("email", "Email", |u: &User| u.email.as_str().into())
            .sortable()
            .width(28),
    ])
}

/// Load users from a JSON file, or the bundled fixture when `path` is `None`.
pub fn load_users(path: Option<&Path>) -> Result<Vec<User>, DemoError> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| DemoError::ReadFixture {
                path: path.to_path_buf(),
                source,
            })?;
            parse_users(&text, &path.display().to_string())
        }
        None => parse_users(BUILTIN_USERS, "builtin"),
    }
}

pub fn parse_users(text: &str, origin: &str) -> Result<Vec<User>, DemoError> {
    serde_json::from_str(text).map_err(|e| DemoError::parse_fixture(origin, e))
}
