/// A widget whose value can be checked and flagged.
///
/// [`Validator`](super::Validator) reads the value, then either marks the
/// widget with the first failing message or clears its error.
pub trait Validatable: Send + Sync {
    type Value;

    fn validation_value(&self) -> Self::Value;

    /// Mark the widget invalid with `msg`.
    fn set_error(&self, msg: impl Into<String>);

    fn clear_error(&self);

    /// The message shown while the widget is invalid.
    fn error(&self) -> Option<String>;

    fn has_error(&self) -> bool {
        self.error().is_some()
    }

    /// Reported back in [`FieldError::widget_id`](super::FieldError::widget_id).
    fn widget_id(&self) -> String;
}
