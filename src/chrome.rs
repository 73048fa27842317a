//! Page chrome: mobile menu, scroll-driven navbar effects and fade-in reveals.
//!
//! The pure threshold functions live on [`ScrollEffects`]; the stateful
//! pieces push only changes to their [`ChromeView`].

use std::collections::BTreeSet;

use crate::settings::PageSettings;
use crate::view::ChromeView;

/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    /// Whether the menu is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The hamburger button was clicked.
    pub fn toggle(&mut self, view: &mut impl ChromeView) {
        self.set(!self.open, view);
    }

    /// A navigation link was clicked.
    pub fn on_link_click(&mut self, view: &mut impl ChromeView) {
        self.set(false, view);
    }

    /// A click landed somewhere on the document.
    pub fn on_document_click(&mut self, inside_menu: bool, view: &mut impl ChromeView) {
        if !inside_menu {
            self.set(false, view);
        }
    }

    fn set(&mut self, open: bool, view: &mut impl ChromeView) {
        if self.open != open {
            self.open = open;
            view.set_menu_open(open);
        }
    }
}

/// Scroll-position effects on the navbar, scroll-to-top button and hero.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollEffects {
    navbar_threshold: f64,
    scroll_top_threshold: f64,
    anchor_offset: f64,
    parallax_factor: f64,
    navbar_scrolled: bool,
    scroll_top_visible: bool,
}

impl ScrollEffects {
    /// Effects using the thresholds in `settings`.
    pub fn new(settings: &PageSettings) -> Self {
        Self {
            navbar_threshold: settings.navbar_threshold(),
            scroll_top_threshold: settings.scroll_top_threshold(),
            anchor_offset: settings.anchor_offset(),
            parallax_factor: settings.parallax_factor(),
            navbar_scrolled: false,
            scroll_top_visible: false,
        }
    }

    /// Whether the navbar should carry its scrolled style.
    pub fn navbar_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.navbar_threshold
    }

    /// Whether the scroll-to-top button should show.
    pub fn scroll_top_visible(&self, scroll_y: f64) -> bool {
        scroll_y > self.scroll_top_threshold
    }

    /// Hero translation while the hero is still on screen.
    pub fn hero_parallax(&self, scroll_y: f64, viewport_height: f64) -> Option<f64> {
        (scroll_y < viewport_height).then(|| scroll_y * self.parallax_factor)
    }

    /// Where to scroll so an anchor target clears the fixed navbar.
    pub fn anchor_scroll_target(&self, target_top: f64) -> f64 {
        target_top - self.anchor_offset
    }

    /// Apply a scroll sample.
    pub fn on_scroll(&mut self, scroll_y: f64, viewport_height: f64, view: &mut impl ChromeView) {
        let scrolled = self.navbar_scrolled(scroll_y);
        if scrolled != self.navbar_scrolled {
            self.navbar_scrolled = scrolled;
            view.set_navbar_scrolled(scrolled);
        }

        let visible = self.scroll_top_visible(scroll_y);
        if visible != self.scroll_top_visible {
            self.scroll_top_visible = visible;
            view.set_scroll_top_visible(visible);
        }

        if let Some(offset) = self.hero_parallax(scroll_y, viewport_height) {
            view.set_hero_offset(offset);
        }
    }

    /// An in-page anchor was clicked. `target_top` is `None` when the
    /// anchor points at nothing.
    pub fn on_anchor_click(&self, target_top: Option<f64>, view: &mut impl ChromeView) {
        if let Some(top) = target_top {
            view.scroll_to(self.anchor_scroll_target(top));
        }
    }

    /// The scroll-to-top button was clicked.
    pub fn on_scroll_top_click(&self, view: &mut impl ChromeView) {
        view.scroll_to(0.0);
    }
}

/// Fade-in animation for elements as they enter the viewport.
///
/// Reveals are sticky: an element animates once and stays visible.
///
/// ```
/// use brochure::chrome::RevealTracker;
/// use brochure::testing::RecordingView;
///
/// let mut view = RecordingView::new();
/// let mut reveals = RevealTracker::new(["about-card", "skill-card"]);
///
/// assert!(reveals.on_intersection("about-card", true, &mut view));
/// assert!(!reveals.on_intersection("about-card", true, &mut view));
/// assert!(!reveals.on_intersection("unknown", true, &mut view));
/// assert!(reveals.is_revealed("about-card"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    observed: BTreeSet<String>,
    revealed: BTreeSet<String>,
}

impl RevealTracker {
    /// Observe the given element ids.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            observed: ids.into_iter().map(Into::into).collect(),
            revealed: BTreeSet::new(),
        }
    }

    /// An intersection report arrived. Returns `true` if the element was
    /// revealed by this report.
    pub fn on_intersection(
        &mut self,
        id: &str,
        is_intersecting: bool,
        view: &mut impl ChromeView,
    ) -> bool {
        if !is_intersecting || !self.observed.contains(id) || self.revealed.contains(id) {
            return false;
        }
        self.revealed.insert(id.to_string());
        view.reveal_element(id);
        true
    }

    /// Reveal elements already above the fold at page load. `elements` pairs
    /// an id with the element's top relative to the viewport.
    pub fn on_ready<'a>(
        &mut self,
        elements: impl IntoIterator<Item = (&'a str, f64)>,
        viewport_height: f64,
        view: &mut impl ChromeView,
    ) {
        for (id, top) in elements {
            if top < viewport_height && self.revealed.insert(id.to_string()) {
                view.reveal_element(id);
            }
        }
    }

    /// Whether `id` has been revealed.
    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }
}
