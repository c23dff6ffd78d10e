//! Tests for InputField behavior and rendering.

use std::sync::{Arc, Mutex};

use trellis::validation::Validatable;
use trellis::widgets::input::{
    Affordances, Footer, InputField, InputKind, InputSize, InputTheme, InputVariant, render_input,
};

/// Field that records every value passed to its change callback.
fn recording_field() -> (InputField, Arc<Mutex<Vec<String>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let field = InputField::new().on_change(move |v| sink.lock().unwrap().push(v.to_string()));
    (field, seen)
}

fn type_str(field: &InputField, text: &str) {
    for c in text.chars() {
        field.insert_char(c);
    }
}

#[test]
fn test_defaults() {
    let field = InputField::new();
    assert_eq!(field.value(), "");
    assert_eq!(field.get_variant(), InputVariant::Outlined);
    assert_eq!(field.get_size(), InputSize::Md);
    assert_eq!(field.effective_kind(), InputKind::Text);
    assert!(field.is_interactive());
    assert_eq!(field.affordances(), Affordances::default());
    assert_eq!(field.footer(), None);
}

#[test]
fn test_edits_notify_change_callback() {
    let (field, seen) = recording_field();

    type_str(&field, "ab");
    assert!(field.delete_char_before());

    assert_eq!(field.value(), "a");
    assert_eq!(*seen.lock().unwrap(), vec!["a", "ab", "a"]);
}

#[test]
fn test_set_value_is_silent() {
    let (field, seen) = recording_field();
    field.set_value("preset");

    assert_eq!(field.value(), "preset");
    assert_eq!(field.cursor(), 6);
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn test_edits_ignored_while_disabled_or_loading() {
    let (field, seen) = recording_field();
    field.set_value("x");

    field.set_disabled(true);
    assert!(!field.insert_char('y'));

    field.set_disabled(false);
    field.set_loading(true);
    assert!(!field.insert_char('y'));
    assert!(!field.delete_char_before());

    assert_eq!(field.value(), "x");
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn test_cursor_moves_over_multibyte_chars() {
    let field = InputField::new();
    type_str(&field, "né");
    assert_eq!(field.cursor(), 3);

    field.cursor_left();
    assert_eq!(field.cursor(), 1);
    field.insert_char('a');
    assert_eq!(field.value(), "naé");

    field.cursor_right();
    assert_eq!(field.cursor(), field.value().len());
    field.cursor_right();
    assert_eq!(field.cursor(), field.value().len());
}

#[test]
fn test_backspace_at_start_is_noop() {
    let (field, seen) = recording_field();
    assert!(!field.delete_char_before());
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn test_clear_requires_visible_button() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let field = InputField::new()
        .show_clear(true)
        .on_change(move |v| sink.lock().unwrap().push(v.to_string()));

    assert!(!field.affordances().clear);
    assert!(!field.clear());

    field.set_value("abc");
    assert!(field.affordances().clear);

    field.set_loading(true);
    assert!(!field.affordances().clear);
    assert!(!field.clear());

    field.set_loading(false);
    field.set_disabled(true);
    assert!(!field.clear());

    field.set_disabled(false);
    assert!(field.clear());
    assert_eq!(field.value(), "");
    assert_eq!(field.cursor(), 0);
    assert_eq!(*seen.lock().unwrap(), vec![""]);
}

#[test]
fn test_clear_hidden_without_flag() {
    let field = InputField::new();
    field.set_value("abc");
    assert!(!field.affordances().clear);
    assert!(!field.clear());
    assert_eq!(field.value(), "abc");
}

#[test]
fn test_password_toggle_flips_masking() {
    let field = InputField::new()
        .kind(InputKind::Password)
        .show_password_toggle(true);
    field.set_value("pässword");

    assert_eq!(field.display_value(), "••••••••");
    assert_eq!(field.affordances().password_toggle, Some(false));

    assert_eq!(field.toggle_password_visibility(), Some(true));
    assert_eq!(field.effective_kind(), InputKind::Text);
    assert_eq!(field.display_value(), "pässword");
    assert_eq!(field.affordances().password_toggle, Some(true));

    assert_eq!(field.toggle_password_visibility(), Some(false));
    assert_eq!(field.effective_kind(), InputKind::Password);
}

#[test]
fn test_password_toggle_requires_password_kind() {
    let text = InputField::new().show_password_toggle(true);
    assert_eq!(text.toggle_password_visibility(), None);
    assert_eq!(text.affordances().password_toggle, None);

    let hidden = InputField::new().kind(InputKind::Password);
    assert_eq!(hidden.toggle_password_visibility(), None);
    assert_eq!(hidden.effective_kind(), InputKind::Password);
}

#[test]
fn test_footer_prefers_error_when_invalid() {
    let field = InputField::new()
        .helper_text("Use at least 8 characters")
        .error_message("Too short");

    assert_eq!(
        field.footer(),
        Some(Footer::Helper("Use at least 8 characters".into()))
    );

    field.set_invalid(true);
    assert_eq!(field.footer(), Some(Footer::Error("Too short".into())));
}

#[test]
fn test_invalid_without_message_falls_back_to_helper() {
    let field = InputField::new().helper_text("Help");
    field.set_invalid(true);
    assert_eq!(field.footer(), Some(Footer::Helper("Help".into())));

    let bare = InputField::new();
    bare.set_invalid(true);
    assert_eq!(bare.footer(), None);
}

#[test]
fn test_validatable_sets_and_clears_error() {
    let field = InputField::new().helper_text("Help");

    field.set_error("Required");
    assert!(field.is_invalid());
    assert!(field.has_error());
    assert_eq!(field.error(), Some("Required".to_string()));
    assert_eq!(field.footer(), Some(Footer::Error("Required".into())));

    field.clear_error();
    assert!(!field.has_error());
    assert_eq!(field.error(), None);
    assert_eq!(field.footer(), Some(Footer::Helper("Help".into())));
}

#[test]
fn test_loading_affordance() {
    let field = InputField::new();
    field.set_loading(true);
    assert!(field.affordances().loading);
    assert!(!field.is_interactive());
}

#[test]
fn test_clones_share_state() {
    let field = InputField::new();
    let other = field.clone();
    other.set_value("shared");
    assert_eq!(field.value(), "shared");
    assert_eq!(field.id(), other.id());
    assert!(field.is_dirty());
    field.clear_dirty();
    assert!(!other.is_dirty());
}

#[test]
fn test_render_outlined_with_label() {
    let field = InputField::new().label("Email *");
    field.set_value("a@b.co");

    assert_eq!(
        render_input(&field, 20),
        vec!["Email *", "[ a@b.co           ]", ""]
    );
}

#[test]
fn test_render_placeholder_and_error() {
    let field = InputField::new()
        .placeholder("Enter your email")
        .variant(InputVariant::Filled)
        .size(InputSize::Sm)
        .error_message("Email already in use");
    field.set_invalid(true);

    assert_eq!(
        render_input(&field, 20),
        vec!["▌Enter your email  ▐", "! Email already in use"]
    );
}

#[test]
fn test_render_masked_password_with_affordances() {
    let field = InputField::new()
        .kind(InputKind::Password)
        .variant(InputVariant::Ghost)
        .size(InputSize::Sm)
        .show_clear(true)
        .show_password_toggle(true)
        .helper_text("Use at least 8 characters");
    field.set_value("secret");

    assert_eq!(
        render_input(&field, 12),
        vec!["••••••   × ○", "Use at least 8 characters"]
    );

    field.toggle_password_visibility();
    assert_eq!(render_input(&field, 12)[0], "secret   × ◉");
}

#[test]
fn test_theme_is_carried_for_the_shell() {
    let light = InputField::new().label("Name");
    let dark = InputField::new().label("Name").theme(InputTheme::Dark);

    assert_eq!(light.get_theme(), InputTheme::Light);
    assert_eq!(dark.get_theme(), InputTheme::Dark);
    assert_eq!(render_input(&light, 16), render_input(&dark, 16));
}
