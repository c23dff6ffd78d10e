//! Form validation.
//!
//! A fluent, synchronous validator for widgets implementing [`Validatable`].
//!
//! # Example
//!
//! ```ignore
//! use trellis::validation::Validator;
//!
//! let result = Validator::new()
//!     .field(&password, "password")
//!         .required("Password is required")
//!         .min_length(8, "Too short")
//!     .field(&email, "email")
//!         .email("Please enter a valid email")
//!     .validate();
//!
//! if let Some(error) = result.first_error() {
//!     log::warn!("{}: {}", error.field_name, error.message);
//! }
//! ```

mod result;
mod validatable;
mod validator;

pub use result::{FieldError, ValidationResult};
pub use validatable::Validatable;
pub use validator::{FieldBuilder, Validator};
