//! Field validation errors
//!
//! There is exactly one error kind in this crate: a field failed validation.
//! It is always recoverable and always surfaced inline next to the field.
//!
//! ```
//! use brochure::{Field, FieldErrors, ValidationError, Semigroup};
//!
//! let errors = FieldErrors::single(ValidationError::new(Field::Name, "Name is required"))
//!     .combine(FieldErrors::single(ValidationError::new(Field::Message, "Message is required")));
//!
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors.first().map(|e| e.field), Some(Field::Name));
//! assert_eq!(errors.message_for(Field::Message), Some("Message is required"));
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::field::Field;
use crate::Semigroup;

/// A single field that failed validation, with the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed.
    pub field: Field,
    /// The inline message displayed under the field.
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl StdError for ValidationError {}

/// Every field error from one submission, kept in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<ValidationError>);

impl FieldErrors {
    /// An error collection holding one error.
    pub fn single(error: ValidationError) -> Self {
        Self(vec![error])
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no field failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first failing field in document order.
    pub fn first(&self) -> Option<&ValidationError> {
        self.0.iter().min_by_key(|e| e.field.position())
    }

    /// The message recorded for `field`, if it failed.
    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Iterate over the errors.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }
}

impl Semigroup for FieldErrors {
    fn combine(mut self, other: Self) -> Self {
        self.0.extend(other.0);
        self.0.sort_by_key(|e| e.field.position());
        self
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl StdError for FieldErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_sorts_into_document_order() {
        let errors = FieldErrors::single(ValidationError::new(Field::Message, "m"))
            .combine(FieldErrors::single(ValidationError::new(Field::Name, "n")));

        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Name, Field::Message]);
        assert_eq!(errors.first().map(|e| e.field), Some(Field::Name));
    }

    #[test]
    fn message_for_missing_field_is_none() {
        let errors = FieldErrors::single(ValidationError::new(Field::Email, "bad"));
        assert_eq!(errors.message_for(Field::Name), None);
    }

    #[test]
    fn display_joins_errors() {
        let errors = FieldErrors::single(ValidationError::new(Field::Name, "Name is required"))
            .combine(FieldErrors::single(ValidationError::new(
                Field::Email,
                "Email is required",
            )));
        assert_eq!(
            errors.to_string(),
            "name: Name is required; email: Email is required"
        );
    }

    #[test]
    fn empty_by_default() {
        assert!(FieldErrors::default().is_empty());
        assert!(FieldErrors::default().first().is_none());
    }
}
