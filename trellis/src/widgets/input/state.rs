use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::validation::Validatable;

/// Unique identifier for an InputField instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputId(usize);

impl InputId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__input_{}", self.0)
    }
}

/// Visual treatment of the input box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputVariant {
    Filled,
    #[default]
    Outlined,
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl InputSize {
    /// Horizontal padding inside the box, in columns.
    pub fn padding(self) -> usize {
        match self {
            InputSize::Sm => 0,
            InputSize::Md => 1,
            InputSize::Lg => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Text,
    Password,
}

/// Color scheme hint; carried for shells that draw with color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputTheme {
    #[default]
    Light,
    Dark,
}

/// Text shown under the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Footer {
    Error(String),
    Helper(String),
}

/// Which optional controls are visible next to the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Affordances {
    pub clear: bool,
    /// `Some(revealed)` when the password toggle is shown.
    pub password_toggle: Option<bool>,
    pub loading: bool,
}

type ChangeCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Internal state for an InputField
#[derive(Debug, Default)]
struct InputInner {
    value: String,
    /// Cursor position (byte offset)
    cursor: usize,
    label: Option<String>,
    placeholder: String,
    helper_text: Option<String>,
    error_message: Option<String>,
    disabled: bool,
    invalid: bool,
    loading: bool,
    variant: InputVariant,
    size: InputSize,
    kind: InputKind,
    theme: InputTheme,
    show_clear: bool,
    show_password_toggle: bool,
    /// Password shown in clear text.
    revealed: bool,
}

impl InputInner {
    fn interactive(&self) -> bool {
        !self.disabled && !self.loading
    }

    fn can_clear(&self) -> bool {
        self.show_clear && !self.value.is_empty() && self.interactive()
    }

    fn has_password_toggle(&self) -> bool {
        self.show_password_toggle && self.kind == InputKind::Password
    }
}

/// A text input with label, helper/error text and optional affordances.
///
/// User edits go through [`insert_char`](Self::insert_char) and
/// [`delete_char_before`](Self::delete_char_before), which report the new
/// value to the [`on_change`](Self::on_change) callback. Edits are ignored
/// while the field is disabled or loading.
///
/// # Example
///
/// ```ignore
/// let password = InputField::new()
///     .label("Password *")
///     .kind(InputKind::Password)
///     .helper_text("Use at least 8 characters")
///     .error_message("Too short")
///     .show_password_toggle(true)
///     .show_clear(true)
///     .on_change(|value| log::debug!("{} chars", value.len()));
/// ```
pub struct InputField {
    id: InputId,
    inner: Arc<RwLock<InputInner>>,
    on_change: Option<ChangeCallback>,
    dirty: Arc<AtomicBool>,
}

impl InputField {
    /// Create a new empty input
    pub fn new() -> Self {
        Self {
            id: InputId::new(),
            inner: Arc::new(RwLock::new(InputInner::default())),
            on_change: None,
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> InputId {
        self.id
    }

    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    fn configure(self, f: impl FnOnce(&mut InputInner)) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            f(&mut *guard);
        }
        self
    }

    // -------------------------------------------------------------------------
    // Builder
    // -------------------------------------------------------------------------

    pub fn label(self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.configure(|i| i.label = Some(label))
    }

    pub fn placeholder(self, placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        self.configure(|i| i.placeholder = placeholder)
    }

    pub fn helper_text(self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.configure(|i| i.helper_text = Some(text))
    }

    /// Message shown while the field is invalid.
    pub fn error_message(self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.configure(|i| i.error_message = Some(text))
    }

    pub fn variant(self, variant: InputVariant) -> Self {
        self.configure(|i| i.variant = variant)
    }

    pub fn size(self, size: InputSize) -> Self {
        self.configure(|i| i.size = size)
    }

    pub fn kind(self, kind: InputKind) -> Self {
        self.configure(|i| i.kind = kind)
    }

    /// Color scheme hint for the presentation shell.
    ///
    /// Text rendering through [`render_input`](super::render_input) is
    /// theme-independent; shells that draw with color read it back through
    /// [`get_theme`](Self::get_theme).
    pub fn theme(self, theme: InputTheme) -> Self {
        self.configure(|i| i.theme = theme)
    }

    pub fn show_clear(self, show: bool) -> Self {
        self.configure(|i| i.show_clear = show)
    }

    pub fn show_password_toggle(self, show: bool) -> Self {
        self.configure(|i| i.show_password_toggle = show)
    }

    /// Register the change callback, called with the new value after each edit.
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(f));
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.value.is_empty())
            .unwrap_or(true)
    }

    /// Cursor position (byte offset)
    pub fn cursor(&self) -> usize {
        self.inner.read().map(|guard| guard.cursor).unwrap_or(0)
    }

    pub fn get_label(&self) -> Option<String> {
        self.inner.read().ok().and_then(|guard| guard.label.clone())
    }

    pub fn get_placeholder(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.placeholder.clone())
            .unwrap_or_default()
    }

    pub fn get_variant(&self) -> InputVariant {
        self.inner.read().map(|g| g.variant).unwrap_or_default()
    }

    pub fn get_size(&self) -> InputSize {
        self.inner.read().map(|g| g.size).unwrap_or_default()
    }

    pub fn get_theme(&self) -> InputTheme {
        self.inner.read().map(|g| g.theme).unwrap_or_default()
    }

    pub fn is_disabled(&self) -> bool {
        self.inner.read().map(|g| g.disabled).unwrap_or(false)
    }

    pub fn is_loading(&self) -> bool {
        self.inner.read().map(|g| g.loading).unwrap_or(false)
    }

    pub fn is_invalid(&self) -> bool {
        self.inner.read().map(|g| g.invalid).unwrap_or(false)
    }

    /// Whether the field accepts edits.
    pub fn is_interactive(&self) -> bool {
        self.inner.read().map(|g| g.interactive()).unwrap_or(false)
    }

    /// The kind the field currently displays as.
    ///
    /// A password field shows as text while revealed.
    pub fn effective_kind(&self) -> InputKind {
        self.inner
            .read()
            .map(|g| match g.kind {
                InputKind::Password if g.revealed => InputKind::Text,
                kind => kind,
            })
            .unwrap_or_default()
    }

    /// The value as displayed, masked while showing as a password.
    pub fn display_value(&self) -> String {
        let value = self.value();
        match self.effective_kind() {
            InputKind::Password => "•".repeat(value.chars().count()),
            InputKind::Text => value,
        }
    }

    /// Visible controls next to the value.
    pub fn affordances(&self) -> Affordances {
        self.inner
            .read()
            .map(|g| Affordances {
                clear: g.can_clear(),
                password_toggle: g.has_password_toggle().then_some(g.revealed),
                loading: g.loading,
            })
            .unwrap_or_default()
    }

    /// Error text when invalid with a message, otherwise helper text.
    pub fn footer(&self) -> Option<Footer> {
        self.inner.read().ok().and_then(|g| {
            match (&g.error_message, &g.helper_text) {
                (Some(msg), _) if g.invalid => Some(Footer::Error(msg.clone())),
                (_, Some(helper)) => Some(Footer::Helper(helper.clone())),
                _ => None,
            }
        })
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Replace the value without notifying the change callback.
    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
            guard.cursor = guard.value.len();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn set_disabled(&self, disabled: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.disabled = disabled;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn set_loading(&self, loading: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.loading = loading;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn set_invalid(&self, invalid: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.invalid = invalid;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Insert a character at the cursor position
    pub fn insert_char(&self, c: char) -> bool {
        self.edit(|guard| {
            let cursor = guard.cursor;
            guard.value.insert(cursor, c);
            guard.cursor += c.len_utf8();
            true
        })
    }

    /// Delete the character before the cursor (backspace)
    pub fn delete_char_before(&self) -> bool {
        self.edit(|guard| {
            if guard.cursor == 0 {
                return false;
            }
            let prev_cursor = guard.value[..guard.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            guard.value.remove(prev_cursor);
            guard.cursor = prev_cursor;
            true
        })
    }

    /// Move cursor left
    pub fn cursor_left(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.cursor > 0
        {
            guard.cursor = guard.value[..guard.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Move cursor right
    pub fn cursor_right(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.cursor < guard.value.len()
        {
            guard.cursor = guard.value[guard.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| guard.cursor + i)
                .unwrap_or(guard.value.len());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clear the value through the clear button.
    ///
    /// Only acts when the button is visible: `show_clear` is set, the value
    /// is non-empty and the field is neither disabled nor loading.
    pub fn clear(&self) -> bool {
        self.edit(|guard| {
            if !guard.can_clear() {
                return false;
            }
            guard.value.clear();
            guard.cursor = 0;
            true
        })
    }

    /// Flip a password field between masked and revealed.
    ///
    /// Only acts when the toggle is shown. Returns the new reveal state.
    pub fn toggle_password_visibility(&self) -> Option<bool> {
        let mut guard = self.inner.write().ok()?;
        if !guard.has_password_toggle() {
            return None;
        }
        guard.revealed = !guard.revealed;
        self.dirty.store(true, Ordering::SeqCst);
        debug!("{}: password revealed = {}", self.id, guard.revealed);
        Some(guard.revealed)
    }

    /// Apply a user edit and notify the change callback outside the lock.
    fn edit(&self, f: impl FnOnce(&mut InputInner) -> bool) -> bool {
        let value = match self.inner.write() {
            Ok(mut guard) if guard.interactive() => {
                if !f(&mut *guard) {
                    return false;
                }
                guard.value.clone()
            }
            _ => return false,
        };

        self.dirty.store(true, Ordering::SeqCst);
        if let Some(callback) = &self.on_change {
            callback(&value);
        }
        true
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for InputField {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            on_change: self.on_change.clone(),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for InputField {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputField")
            .field("id", &self.id)
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// Validatable implementation
// -----------------------------------------------------------------------------

impl Validatable for InputField {
    type Value = String;

    fn validation_value(&self) -> Self::Value {
        self.value()
    }

    fn set_error(&self, msg: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.invalid = true;
            guard.error_message = Some(msg.into());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    fn clear_error(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.invalid
        {
            guard.invalid = false;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    fn error(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.invalid.then(|| g.error_message.clone()).flatten())
    }

    fn has_error(&self) -> bool {
        self.is_invalid()
    }

    fn widget_id(&self) -> String {
        self.id_string()
    }
}
