//! Built-in widgets.
//!
//! Each widget is a cheaply cloneable handle over shared interior state
//! (`Arc<RwLock<_>>` plus a dirty flag), so the same widget can be held by
//! the view code and by event handlers. Rendering goes through the
//! `render_*` functions, which turn a widget snapshot into text lines.

pub mod input;
pub mod selection;
pub mod table;
