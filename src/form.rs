//! Contact form submission controller
//!
//! The controller reacts to three kinds of events and keeps the form's
//! display state in [`FormState`]:
//!
//! - **input**: typing can only *clear* an error that is already shown, once
//!   the field becomes valid. It never introduces one.
//! - **blur**: validates the field and shows its error or success indicator.
//! - **submit**: validates every field, shows every failure at once, or shows
//!   the success banner, resets the form and arms the banner's hide timer.
//!
//! # Example
//!
//! ```rust
//! use brochure::form::{FormController, SubmissionOutcome};
//! use brochure::testing::RecordingView;
//! use brochure::timer::ManualScheduler;
//! use brochure::{Field, PageSettings};
//! use std::time::Duration;
//!
//! let mut form = FormController::new(
//!     RecordingView::new(),
//!     ManualScheduler::new(),
//!     PageSettings::default(),
//! );
//!
//! form.on_input(Field::Name, "Jo");
//! form.on_input(Field::Email, "jo@example.com");
//! form.on_input(Field::Message, "Hello there, world");
//!
//! assert_eq!(form.on_submit(), &SubmissionOutcome::Success);
//! assert!(form.state().banner_visible());
//!
//! let fired = form.scheduler_mut().advance(Duration::from_millis(5000));
//! for id in fired {
//!     form.on_timer(id);
//! }
//! assert!(!form.state().banner_visible());
//! ```

use crate::error::FieldErrors;
use crate::field::{Field, Verdict};
use crate::settings::PageSettings;
use crate::timer::{Scheduler, TimerId};
use crate::validation::Validation;
use crate::view::{FormView, Indicator, RevealTarget};

/// Result of the latest submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Every field passed; the form was reset.
    Success,
    /// At least one field failed; all failures, in document order.
    Failure(FieldErrors),
}

impl SubmissionOutcome {
    /// True for [`SubmissionOutcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success)
    }
}

/// Display state of the contact form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: [String; 3],
    errors: [Option<String>; 3],
    indicators: [Indicator; 3],
    banner_visible: bool,
    outcome: Option<SubmissionOutcome>,
}

impl FormState {
    /// Current text of a field.
    pub fn value(&self, field: Field) -> &str {
        &self.values[field.position()]
    }

    /// Error currently displayed under a field.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors[field.position()].as_deref()
    }

    /// Current border indicator of a field.
    pub fn indicator(&self, field: Field) -> Indicator {
        self.indicators[field.position()]
    }

    /// Whether the success banner is showing.
    pub fn banner_visible(&self) -> bool {
        self.banner_visible
    }

    /// Outcome of the latest submission, `None` before the first.
    pub fn outcome(&self) -> Option<&SubmissionOutcome> {
        self.outcome.as_ref()
    }
}

/// Validate all three fields, accumulating every failure.
///
/// ```rust
/// use brochure::form::validate_form;
/// use brochure::Field;
///
/// let errors = validate_form("J", "jo@example.com", "")
///     .into_result()
///     .unwrap_err();
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.first().map(|e| e.field), Some(Field::Name));
/// ```
pub fn validate_form(name: &str, email: &str, message: &str) -> Validation<(), FieldErrors> {
    Validation::<(), FieldErrors>::all((
        Field::Name.validate(name).into_validation(Field::Name),
        Field::Email.validate(email).into_validation(Field::Email),
        Field::Message.validate(message).into_validation(Field::Message),
    ))
    .map(|_| ())
}

/// Drives the contact form through its view and banner timer.
#[derive(Debug)]
pub struct FormController<V, S> {
    view: V,
    scheduler: S,
    settings: PageSettings,
    state: FormState,
    pending_hide: Option<TimerId>,
}

impl<V: FormView, S: Scheduler> FormController<V, S> {
    /// Create a controller over the form's view, using `scheduler` for the
    /// banner timer.
    pub fn new(view: V, scheduler: S, settings: PageSettings) -> Self {
        Self {
            view,
            scheduler,
            settings,
            state: FormState::default(),
            pending_hide: None,
        }
    }

    /// The field text changed.
    pub fn on_input(&mut self, field: Field, text: impl Into<String>) {
        let i = field.position();
        self.state.values[i] = text.into();

        if self.state.errors[i].is_some() && field.validate(&self.state.values[i]).is_valid() {
            self.state.errors[i] = None;
            self.state.indicators[i] = Indicator::Neutral;
            self.view.set_error(field, None);
            self.view.set_indicator(field, Indicator::Neutral);
            debug_event!(field = %field, "inline error resolved while typing");
        }
    }

    /// The field lost focus with `text` as its value.
    pub fn on_blur(&mut self, field: Field, text: impl Into<String>) {
        let i = field.position();
        self.state.values[i] = text.into();

        match field.validate(&self.state.values[i]) {
            Verdict::Valid => {
                self.state.errors[i] = None;
                self.state.indicators[i] = Indicator::Success;
                self.view.set_error(field, None);
                self.view.set_indicator(field, Indicator::Success);
            }
            Verdict::Invalid(message) => {
                self.view.set_error(field, Some(message.as_str()));
                self.view.set_indicator(field, Indicator::Error);
                self.state.errors[i] = Some(message);
                self.state.indicators[i] = Indicator::Error;
            }
        }
        debug_event!(field = %field, indicator = ?self.state.indicators[i], "field blurred");
    }

    /// The form was submitted.
    pub fn on_submit(&mut self) -> &SubmissionOutcome {
        self.state.outcome = None;
        self.clear_display();

        let result = validate_form(
            self.state.value(Field::Name),
            self.state.value(Field::Email),
            self.state.value(Field::Message),
        );

        let outcome = match result {
            Validation::Failure(errors) => {
                for error in &errors {
                    let i = error.field.position();
                    self.view.set_error(error.field, Some(error.message.as_str()));
                    self.view.set_indicator(error.field, Indicator::Error);
                    self.state.errors[i] = Some(error.message.clone());
                    self.state.indicators[i] = Indicator::Error;
                }
                if let Some(first) = errors.first() {
                    self.view.reveal(RevealTarget::FieldError(first.field));
                }
                debug_event!(failures = errors.len(), "submission rejected");
                SubmissionOutcome::Failure(errors)
            }
            Validation::Success(()) => {
                self.view.show_banner(self.settings.success_message());
                self.state.banner_visible = true;

                self.state.values = Default::default();
                self.view.reset_fields();

                self.view.reveal(RevealTarget::SuccessBanner);

                let id = self.scheduler.schedule(self.settings.banner_hide_delay());
                self.pending_hide = Some(id);
                debug_event!(timer = %id, "submission accepted, banner hide armed");
                SubmissionOutcome::Success
            }
        };

        self.state.outcome.insert(outcome)
    }

    /// A timer fired. Returns `true` if it was the live banner timer.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.pending_hide != Some(id) {
            debug_event!(timer = %id, "ignoring superseded timer");
            return false;
        }
        self.pending_hide = None;
        self.state.banner_visible = false;
        self.view.hide_banner();
        true
    }

    /// Clear every error, indicator and the banner, and disarm the hide timer.
    fn clear_display(&mut self) {
        for field in Field::ALL {
            let i = field.position();
            self.state.errors[i] = None;
            self.state.indicators[i] = Indicator::Neutral;
            self.view.set_error(field, None);
            self.view.set_indicator(field, Indicator::Neutral);
        }

        if let Some(id) = self.pending_hide.take() {
            self.scheduler.cancel(id);
            debug_event!(timer = %id, "banner hide superseded");
        }
        self.state.banner_visible = false;
        self.view.hide_banner();
    }

    /// Current display state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Outcome of the latest submission.
    pub fn outcome(&self) -> Option<&SubmissionOutcome> {
        self.state.outcome()
    }

    /// The armed banner hide timer, if any.
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending_hide
    }

    /// The form's view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The banner timer's scheduler.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Active settings.
    pub fn settings(&self) -> &PageSettings {
        &self.settings
    }
}
