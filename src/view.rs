//! Presentation sinks.
//!
//! Controllers never touch the page directly. Each one owns a handle to the
//! part of the page it drives and pushes state changes through one of these
//! traits. A browser host implements them over real elements; tests use
//! [`RecordingView`](crate::testing::RecordingView).

use crate::field::Field;

/// Visual state of a form field's border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indicator {
    /// No highlight.
    #[default]
    Neutral,
    /// The field failed validation.
    Error,
    /// The field passed validation on blur.
    Success,
}

/// Something the form can move focus to and scroll into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTarget {
    /// The inline error message of a field.
    FieldError(Field),
    /// The success banner.
    SuccessBanner,
}

/// The contact form's elements: three inputs, their error slots and the
/// success banner.
pub trait FormView {
    /// Set or clear the inline error text of a field.
    fn set_error(&mut self, field: Field, message: Option<&str>);

    /// Set a field's border indicator.
    fn set_indicator(&mut self, field: Field, indicator: Indicator);

    /// Show the success banner with `message`.
    fn show_banner(&mut self, message: &str);

    /// Hide the success banner.
    fn hide_banner(&mut self);

    /// Clear the text of every input.
    fn reset_fields(&mut self);

    /// Move focus to `target` and scroll it into view.
    fn reveal(&mut self, target: RevealTarget);
}

/// Navigation links that highlight the active section.
pub trait NavView {
    /// Highlight the link pointing at `section_id` and un-highlight the rest.
    fn set_active(&mut self, section_id: &str);
}

/// Navbar, mobile menu, hero and animated elements.
pub trait ChromeView {
    /// Open or close the mobile menu (and animate the hamburger icon).
    fn set_menu_open(&mut self, open: bool);

    /// Toggle the navbar's scrolled style.
    fn set_navbar_scrolled(&mut self, scrolled: bool);

    /// Show or hide the scroll-to-top button.
    fn set_scroll_top_visible(&mut self, visible: bool);

    /// Translate the hero section vertically by `offset` pixels.
    fn set_hero_offset(&mut self, offset: f64);

    /// Play the fade-in animation on an element.
    fn reveal_element(&mut self, element_id: &str);

    /// Smoothly scroll the window to `top`.
    fn scroll_to(&mut self, top: f64);
}
