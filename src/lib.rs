//! # Brochure
//!
//! The interaction core of a static marketing page, kept free of the DOM.
//!
//! ## Philosophy
//!
//! **Pure core, imperative shell**:
//! - Validators and the active-section computation are pure functions.
//! - Controllers hold the page's display state and push changes through
//!   injected view traits.
//! - The host (a browser binding, a test, a headless driver) owns the event
//!   loop and feeds events in.
//!
//! ## Quick Example
//!
//! ```rust
//! use brochure::field::{validate_email, validate_name, Verdict};
//! use brochure::form::validate_form;
//! use brochure::Field;
//!
//! assert_eq!(validate_name("Jo"), Verdict::Valid);
//! assert!(!validate_email("a b@c.com").is_valid());
//!
//! // Submitting reports every failing field at once.
//! let errors = validate_form("", "", "hello").into_result().unwrap_err();
//! let failing: Vec<Field> = errors.iter().map(|e| e.field).collect();
//! assert_eq!(failing, vec![Field::Name, Field::Email, Field::Message]);
//! ```
//!
//! ## Features
//!
//! - `tracing`: debug events for submissions, section changes and timers
//! - `async`: `TokioScheduler` and `Page::run`
//! - `serde`: (de)serialize `PageSettings`
//! - `proptest`: `Arbitrary` for `Field`

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

pub mod chrome;
pub mod error;
pub mod field;
pub mod form;
pub mod page;
pub mod sections;
pub mod semigroup;
pub mod settings;
pub mod testing;
pub mod timer;
pub mod validation;
pub mod view;

// Re-exports
pub use error::{FieldErrors, ValidationError};
pub use field::{Field, Verdict};
pub use form::{FormController, SubmissionOutcome};
pub use page::{Page, PageEvent};
pub use sections::{ActiveSectionTracker, Section};
pub use semigroup::Semigroup;
pub use settings::PageSettings;
pub use validation::Validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{FieldErrors, ValidationError};
    pub use crate::field::{Field, Verdict};
    pub use crate::form::{FormController, SubmissionOutcome};
    pub use crate::page::{EventSource, Page, PageEvent, PageLayout};
    pub use crate::sections::{ActiveSectionTracker, Section};
    pub use crate::semigroup::Semigroup;
    pub use crate::settings::PageSettings;
    pub use crate::timer::{ManualScheduler, Scheduler, TimerId};
    pub use crate::validation::Validation;
    pub use crate::view::{ChromeView, FormView, Indicator, NavView, RevealTarget};
}
