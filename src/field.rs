//! Contact form fields and their validators
//!
//! Each validator trims its input, applies its rules in a fixed order and
//! returns the first failure as a [`Verdict`]. Emptiness is always checked
//! before length or pattern rules.
//!
//! Trimming and lengths follow what the browser sees: the byte order mark
//! counts as whitespace and lengths are measured in UTF-16 code units, so
//! `"😀"` is two units long.
//!
//! ```
//! use brochure::field::{validate_email, validate_message, validate_name, Verdict};
//!
//! assert_eq!(validate_name("Jo"), Verdict::Valid);
//! assert_eq!(
//!     validate_email("a@b"),
//!     Verdict::invalid("Please enter a valid email address")
//! );
//! assert_eq!(
//!     validate_message("short"),
//!     Verdict::invalid("Message must be at least 10 characters")
//! );
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{FieldErrors, ValidationError};
use crate::Validation;

/// Minimum trimmed length of a name, in UTF-16 code units.
pub const NAME_MIN_CHARS: usize = 2;

/// Minimum trimmed length of a message, in UTF-16 code units.
pub const MESSAGE_MIN_CHARS: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

fn trimmed(raw: &str) -> &str {
    // NEL is Unicode whitespace but not trimmed by the browser.
    raw.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}')
}

fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// One of the three contact form fields, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// The sender's name.
    Name,
    /// The sender's email address.
    Email,
    /// The message body.
    Message,
}

impl Field {
    /// All fields in document order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// The element id of the field.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Position of the field in the document.
    pub fn position(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Message => 2,
        }
    }

    /// Run this field's validator.
    pub fn validate(self, raw: &str) -> Verdict {
        match self {
            Field::Name => validate_name(raw),
            Field::Email => validate_email(raw),
            Field::Message => validate_message(raw),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The outcome of validating a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The value passed every rule.
    Valid,
    /// The value failed; the message is shown under the field.
    Invalid(String),
}

impl Verdict {
    /// Shorthand for `Verdict::Invalid(message.into())`.
    pub fn invalid(message: impl Into<String>) -> Self {
        Verdict::Invalid(message.into())
    }

    /// True for [`Verdict::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// The error message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(message) => Some(message),
        }
    }

    /// Lift this verdict into an accumulating [`Validation`] for `field`.
    ///
    /// ```
    /// use brochure::{Field, Validation};
    /// use brochure::field::Verdict;
    ///
    /// let v = Verdict::invalid("Name is required").into_validation(Field::Name);
    /// assert!(v.is_failure());
    /// assert!(Verdict::Valid.into_validation(Field::Name).is_success());
    /// ```
    pub fn into_validation(self, field: Field) -> Validation<(), FieldErrors> {
        match self {
            Verdict::Valid => Validation::success(()),
            Verdict::Invalid(message) => {
                Validation::failure(FieldErrors::single(ValidationError::new(field, message)))
            }
        }
    }
}

/// Validate the name field.
pub fn validate_name(raw: &str) -> Verdict {
    let name = trimmed(raw);
    if name.is_empty() {
        return Verdict::invalid("Name is required");
    }
    if utf16_len(name) < NAME_MIN_CHARS {
        return Verdict::invalid("Name must be at least 2 characters");
    }
    if !name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        return Verdict::invalid("Name can only contain letters and spaces");
    }
    Verdict::Valid
}

/// Validate the email field.
///
/// Requires a single `@` with a `.` somewhere after it and no whitespace.
pub fn validate_email(raw: &str) -> Verdict {
    let email = trimmed(raw);
    if email.is_empty() {
        return Verdict::invalid("Email is required");
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Verdict::invalid("Please enter a valid email address");
    }
    Verdict::Valid
}

/// Validate the message field.
pub fn validate_message(raw: &str) -> Verdict {
    let message = trimmed(raw);
    if message.is_empty() {
        return Verdict::invalid("Message is required");
    }
    if utf16_len(message) < MESSAGE_MIN_CHARS {
        return Verdict::invalid("Message must be at least 10 characters");
    }
    Verdict::Valid
}
