//! Terminal demo of the trellis widgets: a sign-up form and a users table.

pub mod app;
pub mod error;
pub mod terminal;
pub mod users;

pub use app::{App, Focus};
pub use error::DemoError;
pub use terminal::TerminalGuard;
pub use users::{User, load_users, user_columns};
