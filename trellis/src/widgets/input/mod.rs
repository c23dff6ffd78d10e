//! InputField widget - a text input with validation and loading affordances.

mod render;
mod state;

pub use render::render_input;
pub use state::{
    Affordances, Footer, InputField, InputId, InputKind, InputSize, InputTheme, InputVariant,
};
