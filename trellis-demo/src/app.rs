//! The demo form and users table, driven by key events.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info, warn};
use trellis::prelude::*;

use crate::error::DemoError;
use crate::users::{User, user_columns};

/// Delay between the last email edit and the availability check.
pub const EMAIL_CHECK_DELAY: Duration = Duration::from_secs(1);

const PASSWORD_MIN_LEN: usize = 8;
const PASSWORD_TOO_SHORT: &str = "Too short";
const EMAIL_TAKEN: &str = "Email already in use";
const FORM_WIDTH: usize = 48;

const TITLE: &str = "User Information Form";
const SUBTITLE: &str = "Please fill out the fields below. Fields marked with * are required.";
const HELP: &str =
    "Tab focus | Ctrl+U clear | Ctrl+R show password | 1/2 sort | Space select | Esc quit";

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Password,
    Name,
    Email,
    Submit,
    Table,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Password,
        Focus::Name,
        Focus::Email,
        Focus::Submit,
        Focus::Table,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

pub struct App {
    password: InputField,
    name: InputField,
    email: InputField,
    table: Table<User>,
    focus: Focus,
    submitting: bool,
    running: bool,
    /// When the pending email check is due.
    email_check: Arc<Mutex<Option<Instant>>>,
    redraw: bool,
}

impl App {
    pub fn new(users: Vec<User>) -> Result<Self, DemoError> {
        let password = InputField::new()
            .label("Password *")
            .placeholder("Enter your password")
            .kind(InputKind::Password)
            .helper_text("Use at least 8 characters")
            .error_message(PASSWORD_TOO_SHORT)
            .show_password_toggle(true)
            .show_clear(true)
            .variant(InputVariant::Outlined)
            .size(InputSize::Md)
            .theme(InputTheme::Dark);
        let watched = password.clone();
        let password = password.on_change(move |value| check_password(&watched, value));
        check_password(&password, "");

        let name = InputField::new()
            .label("Cardholder Name *")
            .placeholder("Full name as on card")
            .helper_text("This must match your card")
            .variant(InputVariant::Filled)
            .size(InputSize::Lg)
            .theme(InputTheme::Light);

        let email_check = Arc::new(Mutex::new(None));
        let email = InputField::new()
            .label("Email *")
            .placeholder("you@example.com")
            .error_message(EMAIL_TAKEN)
            .variant(InputVariant::Outlined)
            .size(InputSize::Md)
            .theme(InputTheme::Light);
        let watched = email.clone();
        let pending = Arc::clone(&email_check);
        let email = email.on_change(move |value| {
            if value.is_empty() {
                return;
            }
            watched.set_loading(true);
            if let Ok(mut due) = pending.lock() {
                *due = Some(Instant::now() + EMAIL_CHECK_DELAY);
            }
        });

        let table = Table::with_rows(user_columns()?, users)
            .with_config(TableConfig::new().selectable(true))
            .on_select(|rows| {
                let names: Vec<&str> = rows.iter().map(|u| u.name.as_str()).collect();
                info!("Selected: {:?}", names);
            });

        Ok(Self {
            password,
            name,
            email,
            table,
            focus: Focus::Password,
            submitting: false,
            running: true,
            email_check,
            redraw: true,
        })
    }

    pub fn password(&self) -> &InputField {
        &self.password
    }

    pub fn name(&self) -> &InputField {
        &self.name
    }

    pub fn email(&self) -> &InputField {
        &self.email
    }

    pub fn table(&self) -> &Table<User> {
        &self.table
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Char('c') if ctrl => self.quit(),
            KeyCode::Tab => self.set_focus(self.focus.next()),
            KeyCode::BackTab => self.set_focus(self.focus.prev()),
            _ => match self.focus {
                Focus::Table => self.handle_table_key(key.code),
                Focus::Submit => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.submit();
                    }
                }
                Focus::Password | Focus::Name | Focus::Email => {
                    self.handle_input_key(key.code, ctrl)
                }
            },
        }
    }

    fn handle_input_key(&mut self, code: KeyCode, ctrl: bool) {
        if code == KeyCode::Enter {
            self.submit();
            return;
        }
        let Some(field) = self.focused_input() else {
            return;
        };
        match code {
            KeyCode::Char('u') if ctrl => {
                field.clear();
            }
            KeyCode::Char('r') if ctrl => {
                field.toggle_password_visibility();
            }
            KeyCode::Char(c) if !ctrl => {
                field.insert_char(c);
            }
            KeyCode::Backspace => {
                field.delete_char_before();
            }
            KeyCode::Left => field.cursor_left(),
            KeyCode::Right => field.cursor_right(),
            _ => {}
        }
    }

    fn handle_table_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.table.cursor_up();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.table.cursor_down();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.table.toggle_select_at_cursor();
            }
            KeyCode::Char(c) => {
                if let Some(index) = c.to_digit(10).and_then(|d| (d as usize).checked_sub(1)) {
                    self.table.toggle_sort_at(index);
                }
            }
            _ => {}
        }
    }

    fn focused_input(&self) -> Option<&InputField> {
        match self.focus {
            Focus::Password => Some(&self.password),
            Focus::Name => Some(&self.name),
            Focus::Email => Some(&self.email),
            Focus::Submit | Focus::Table => None,
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        debug!("Focus {:?} -> {:?}", self.focus, focus);
        self.focus = focus;
        self.redraw = true;
    }

    fn quit(&mut self) {
        info!("Quit requested");
        self.running = false;
    }

    /// Resolve the email availability check once it is due.
    pub fn tick(&mut self, now: Instant) {
        let due = self
            .email_check
            .lock()
            .map(|mut pending| pending.take_if(|deadline| *deadline <= now).is_some())
            .unwrap_or(false);
        if due {
            self.finish_email_check();
        }
    }

    fn finish_email_check(&self) {
        let email = self.email.value();
        self.email.set_loading(false);
        if email.contains("taken") {
            debug!("Email '{}' is taken", email);
            self.email.set_error(EMAIL_TAKEN);
        } else {
            self.email.clear_error();
        }
    }

    /// Validate the form and start submitting when it passes.
    ///
    /// On failure focus moves to the first invalid field.
    pub fn submit(&mut self) {
        if self.submitting {
            return;
        }

        let result = Validator::new()
            .field(&self.password, "password")
            .min_length(PASSWORD_MIN_LEN, PASSWORD_TOO_SHORT)
            .field(&self.name, "name")
            .required("Name is required")
            .field(&self.email, "email")
            .required("Email is required")
            .email("Please enter a valid email")
            .rule(|v| !v.contains("taken"), EMAIL_TAKEN)
            .validate();

        match result.first_invalid_widget() {
            Some(widget_id) => {
                for error in result.errors() {
                    warn!("{}: {}", error.field_name, error.message);
                }
                let focus = [
                    (Focus::Password, &self.password),
                    (Focus::Name, &self.name),
                    (Focus::Email, &self.email),
                ]
                .into_iter()
                .find(|(_, field)| field.id_string() == widget_id)
                .map(|(focus, _)| focus);
                if let Some(focus) = focus {
                    self.set_focus(focus);
                }
            }
            None => {
                info!("Submitting form for '{}'", self.name.value());
                self.submitting = true;
                self.name.set_disabled(true);
                self.redraw = true;
            }
        }
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    pub fn needs_redraw(&self) -> bool {
        self.redraw
            || self.password.is_dirty()
            || self.name.is_dirty()
            || self.email.is_dirty()
            || self.table.is_dirty()
    }

    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    pub fn mark_drawn(&mut self) {
        self.redraw = false;
        self.password.clear_dirty();
        self.name.clear_dirty();
        self.email.clear_dirty();
        self.table.clear_dirty();
    }

    /// The whole screen as text lines, `width` columns wide.
    pub fn lines(&self, width: usize) -> Vec<String> {
        let form_width = FORM_WIDTH.min(width.saturating_sub(2));
        let mut lines = vec![TITLE.to_string(), SUBTITLE.to_string(), String::new()];

        for (focus, field) in [
            (Focus::Password, &self.password),
            (Focus::Name, &self.name),
            (Focus::Email, &self.email),
        ] {
            let gutter = self.gutter(focus);
            lines.extend(
                render_input(field, form_width)
                    .into_iter()
                    .map(|line| format!("{gutter}{line}")),
            );
        }

        let button = if self.submitting {
            "[ Submitting... ]"
        } else {
            "[ Submit ]"
        };
        lines.push(format!("{}{}", self.gutter(Focus::Submit), button));
        lines.push(String::new());

        let cursor = self.table.cursor().filter(|_| self.focus == Focus::Table);
        let gutter = self.gutter(Focus::Table);
        lines.extend(
            render_table(&self.table.display(), cursor)
                .into_iter()
                .map(|line| format!("{gutter}{line}")),
        );

        lines.push(String::new());
        lines.push(HELP.to_string());
        lines
    }

    fn gutter(&self, focus: Focus) -> &'static str {
        if self.focus == focus { "│ " } else { "  " }
    }
}

fn check_password(field: &InputField, value: &str) {
    if value.chars().count() < PASSWORD_MIN_LEN {
        field.set_error(PASSWORD_TOO_SHORT);
    } else {
        field.clear_error();
    }
}
