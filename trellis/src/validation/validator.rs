//! Fluent, synchronous form validation.

use email_address::EmailAddress;
use log::{trace, warn};
use regex::Regex;

use super::result::{FieldError, ValidationResult};
use super::validatable::Validatable;

struct Rule<V> {
    passes: Box<dyn Fn(&V) -> bool + Send + Sync>,
    message: String,
}

/// A widget with its rules, checked when the validator runs.
trait Check: Send + Sync {
    /// Flag or clear the widget; returns the failure, if any.
    fn check(&self) -> Option<FieldError>;
}

struct Field<W: Validatable> {
    widget: W,
    name: String,
    rules: Vec<Rule<W::Value>>,
}

impl<W> Check for Field<W>
where
    W: Validatable,
    W::Value: Send + Sync,
{
    fn check(&self) -> Option<FieldError> {
        let value = self.widget.validation_value();
        let Some(failed) = self.rules.iter().find(|rule| !(rule.passes)(&value)) else {
            self.widget.clear_error();
            return None;
        };

        trace!("{}: {}", self.name, failed.message);
        self.widget.set_error(failed.message.as_str());
        Some(FieldError {
            field_name: self.name.clone(),
            widget_id: self.widget.widget_id(),
            message: failed.message.clone(),
        })
    }
}

/// Validates a set of form fields in declaration order.
///
/// Each field stops at its first failing rule and is marked with that
/// rule's message. Fields that pass have their error cleared.
///
/// ```ignore
/// let result = Validator::new()
///     .field(&name, "name")
///         .required("Name is required")
///     .field(&email, "email")
///         .required("Email is required")
///         .email("Invalid email format")
///     .validate();
/// ```
#[derive(Default)]
pub struct Validator {
    checks: Vec<Box<dyn Check>>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start declaring rules for `widget`, reported as `name`.
    pub fn field<W>(self, widget: &W, name: impl Into<String>) -> FieldBuilder<W>
    where
        W: Validatable + Clone + 'static,
        W::Value: Send + Sync + 'static,
    {
        FieldBuilder {
            validator: self,
            field: Field {
                widget: widget.clone(),
                name: name.into(),
                rules: Vec::new(),
            },
        }
    }

    pub fn validate(self) -> ValidationResult {
        self.checks.iter().filter_map(|c| c.check()).collect()
    }
}

/// Rules for the field most recently added to a [`Validator`].
pub struct FieldBuilder<W: Validatable> {
    validator: Validator,
    field: Field<W>,
}

impl<W> FieldBuilder<W>
where
    W: Validatable + Clone + 'static,
    W::Value: Send + Sync + 'static,
{
    /// Fail with `msg` unless `passes` holds for the value.
    pub fn rule<F>(mut self, passes: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&W::Value) -> bool + Send + Sync + 'static,
    {
        self.field.rules.push(Rule {
            passes: Box::new(passes),
            message: msg.into(),
        });
        self
    }

    pub fn field<W2>(self, widget: &W2, name: impl Into<String>) -> FieldBuilder<W2>
    where
        W2: Validatable + Clone + 'static,
        W2::Value: Send + Sync + 'static,
    {
        self.done().field(widget, name)
    }

    pub fn validate(self) -> ValidationResult {
        self.done().validate()
    }

    fn done(self) -> Validator {
        let mut validator = self.validator;
        validator.checks.push(Box::new(self.field));
        validator
    }
}

impl<W> FieldBuilder<W>
where
    W: Validatable<Value = String> + Clone + 'static,
{
    /// Non-blank after trimming.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.trim().is_empty(), msg)
    }

    /// At least `min` characters.
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() >= min, msg)
    }

    /// At most `max` characters.
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() <= max, msg)
    }

    /// Matches `pattern`. A pattern that does not compile always fails.
    pub fn pattern(self, pattern: &str, msg: impl Into<String>) -> Self {
        match Regex::new(pattern) {
            Ok(re) => self.rule(move |v| re.is_match(v), msg),
            Err(e) => {
                warn!("Invalid validation pattern '{}': {}", pattern, e);
                self.rule(|_| false, msg)
            }
        }
    }

    /// A well-formed email address. Empty values pass; pair with `required`.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.rule(|v| v.is_empty() || EmailAddress::is_valid(v), msg)
    }

    pub fn equals(self, other: impl Into<String>, msg: impl Into<String>) -> Self {
        let other = other.into();
        self.rule(move |v| *v == other, msg)
    }
}
