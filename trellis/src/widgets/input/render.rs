//! InputField text rendering.

use crate::utils::text::{Alignment, display_width, fit_to_width};

use super::state::{Footer, InputField, InputVariant};

const CLEAR_GLYPH: &str = "×";
const REVEAL_GLYPH: &str = "○";
const HIDE_GLYPH: &str = "◉";
const LOADING_GLYPH: &str = "⏳";

/// Render an input field as text lines, `width` columns wide.
///
/// Produces an optional label line, the value line and a footer line. The
/// footer line is always present (blank without helper or error text) so
/// toggling validation does not shift what follows.
pub fn render_input(field: &InputField, width: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(3);

    if let Some(label) = field.get_label() {
        lines.push(fit_to_width(&label, width, Alignment::Left).trim_end().to_string());
    }

    let affordances = field.affordances();
    let mut glyphs = Vec::new();
    if affordances.clear {
        glyphs.push(CLEAR_GLYPH);
    }
    if let Some(revealed) = affordances.password_toggle {
        glyphs.push(if revealed { HIDE_GLYPH } else { REVEAL_GLYPH });
    }
    if affordances.loading {
        glyphs.push(LOADING_GLYPH);
    }
    let trailer = if glyphs.is_empty() {
        String::new()
    } else {
        format!(" {}", glyphs.join(" "))
    };

    let (open, close) = match field.get_variant() {
        InputVariant::Outlined => ("[", "]"),
        InputVariant::Filled => ("▌", "▐"),
        InputVariant::Ghost => ("", ""),
    };
    let padding = " ".repeat(field.get_size().padding());

    let content = if field.is_empty() {
        field.get_placeholder()
    } else {
        field.display_value()
    };
    let frame_width =
        display_width(open) + display_width(close) + 2 * padding.len() + display_width(&trailer);
    let content_width = width.saturating_sub(frame_width);

    lines.push(format!(
        "{open}{padding}{}{trailer}{padding}{close}",
        fit_to_width(&content, content_width, Alignment::Left)
    ));

    lines.push(match field.footer() {
        Some(Footer::Error(msg)) => format!("! {msg}"),
        Some(Footer::Helper(msg)) => msg,
        None => String::new(),
    });

    lines
}
