//! Testing utilities
//!
//! [`RecordingView`] implements every view trait and records what it was
//! told, so controller behaviour can be asserted without a browser. Clones
//! share one log, which lets a single recording observe a whole [`Page`].
//!
//! [`Page`]: crate::page::Page
//!
//! # Examples
//!
//! ```rust
//! use brochure::testing::{RecordingView, ViewOp};
//! use brochure::view::NavView;
//!
//! let view = RecordingView::new();
//! let mut nav = view.clone();
//! nav.set_active("about");
//!
//! assert_eq!(view.ops(), vec![ViewOp::Active("about".to_string())]);
//! ```
//!
//! ```rust
//! use brochure::{assert_invalid, assert_valid};
//! use brochure::field::{validate_email, validate_name};
//!
//! assert_valid!(validate_name("Jo"));
//! assert_invalid!(validate_email("a@b"), "Please enter a valid email address");
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::field::Field;
use crate::view::{ChromeView, FormView, Indicator, NavView, RevealTarget};

/// One call made on a view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewOp {
    /// `FormView::set_error`
    Error(Field, Option<String>),
    /// `FormView::set_indicator`
    Indicator(Field, Indicator),
    /// `FormView::show_banner`
    ShowBanner(String),
    /// `FormView::hide_banner`
    HideBanner,
    /// `FormView::reset_fields`
    ResetFields,
    /// `FormView::reveal`
    Reveal(RevealTarget),
    /// `NavView::set_active`
    Active(String),
    /// `ChromeView::set_menu_open`
    MenuOpen(bool),
    /// `ChromeView::set_navbar_scrolled`
    NavbarScrolled(bool),
    /// `ChromeView::set_scroll_top_visible`
    ScrollTopVisible(bool),
    /// `ChromeView::set_hero_offset`
    HeroOffset(f64),
    /// `ChromeView::reveal_element`
    Revealed(String),
    /// `ChromeView::scroll_to`
    ScrollTo(f64),
}

/// A view that records every call.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    ops: Rc<RefCell<Vec<ViewOp>>>,
}

impl RecordingView {
    /// An empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, oldest first.
    pub fn ops(&self) -> Vec<ViewOp> {
        self.ops.borrow().clone()
    }

    /// Forget what has been recorded.
    pub fn clear(&self) {
        self.ops.borrow_mut().clear();
    }

    fn push(&self, op: ViewOp) {
        self.ops.borrow_mut().push(op);
    }
}

impl FormView for RecordingView {
    fn set_error(&mut self, field: Field, message: Option<&str>) {
        self.push(ViewOp::Error(field, message.map(str::to_string)));
    }

    fn set_indicator(&mut self, field: Field, indicator: Indicator) {
        self.push(ViewOp::Indicator(field, indicator));
    }

    fn show_banner(&mut self, message: &str) {
        self.push(ViewOp::ShowBanner(message.to_string()));
    }

    fn hide_banner(&mut self) {
        self.push(ViewOp::HideBanner);
    }

    fn reset_fields(&mut self) {
        self.push(ViewOp::ResetFields);
    }

    fn reveal(&mut self, target: RevealTarget) {
        self.push(ViewOp::Reveal(target));
    }
}

impl NavView for RecordingView {
    fn set_active(&mut self, section_id: &str) {
        self.push(ViewOp::Active(section_id.to_string()));
    }
}

impl ChromeView for RecordingView {
    fn set_menu_open(&mut self, open: bool) {
        self.push(ViewOp::MenuOpen(open));
    }

    fn set_navbar_scrolled(&mut self, scrolled: bool) {
        self.push(ViewOp::NavbarScrolled(scrolled));
    }

    fn set_scroll_top_visible(&mut self, visible: bool) {
        self.push(ViewOp::ScrollTopVisible(visible));
    }

    fn set_hero_offset(&mut self, offset: f64) {
        self.push(ViewOp::HeroOffset(offset));
    }

    fn reveal_element(&mut self, element_id: &str) {
        self.push(ViewOp::Revealed(element_id.to_string()));
    }

    fn scroll_to(&mut self, top: f64) {
        self.push(ViewOp::ScrollTo(top));
    }
}

/// Assert that a verdict is valid.
#[macro_export]
macro_rules! assert_valid {
    ($verdict:expr) => {
        match $verdict {
            $crate::field::Verdict::Valid => {}
            $crate::field::Verdict::Invalid(message) => {
                panic!("Expected Valid, got Invalid: {:?}", message);
            }
        }
    };
}

/// Assert that a verdict is invalid, optionally with a specific message.
#[macro_export]
macro_rules! assert_invalid {
    ($verdict:expr) => {
        match $verdict {
            $crate::field::Verdict::Invalid(_) => {}
            $crate::field::Verdict::Valid => {
                panic!("Expected Invalid, got Valid");
            }
        }
    };
    ($verdict:expr, $expected:expr) => {
        match $verdict {
            $crate::field::Verdict::Invalid(message) => {
                assert_eq!(message, $expected);
            }
            $crate::field::Verdict::Valid => {
                panic!("Expected Invalid({:?}), got Valid", $expected);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for Field {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![Just(Field::Name), Just(Field::Email), Just(Field::Message)].boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{validate_message, validate_name};

    #[test]
    fn clones_share_the_log() {
        let view = RecordingView::new();
        let mut form = view.clone();
        form.hide_banner();
        assert_eq!(view.ops(), vec![ViewOp::HideBanner]);
        view.clear();
        assert!(form.ops().is_empty());
    }

    #[test]
    fn assert_invalid_macro_checks_message() {
        assert_invalid!(validate_message("short"), "Message must be at least 10 characters");
        assert_invalid!(validate_name(""));
    }

    #[test]
    #[should_panic(expected = "Expected Valid, got Invalid")]
    fn assert_valid_panics_on_invalid() {
        assert_valid!(validate_name("J"));
    }

    #[test]
    #[should_panic(expected = "Expected Invalid")]
    fn assert_invalid_panics_on_valid() {
        assert_invalid!(validate_name("Jo"), "Name is required");
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn empty_input_is_required_for_any_field(field in any::<Field>()) {
                let verdict = field.validate("");
                prop_assert!(verdict.message().is_some_and(|m| m.ends_with("is required")));
            }
        }
    }
}
