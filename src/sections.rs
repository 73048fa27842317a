//! Active section tracking.
//!
//! A section is active while the scroll offset lies in
//! `[start - offset, start - offset + height)`. Sections are laid out
//! contiguously so at most one matches. When nothing matches the previous
//! highlight stays as it was.
//!
//! ```
//! use brochure::sections::{active_section, Section};
//!
//! let sections = [Section::new("a", 0.0, 500.0), Section::new("b", 500.0, 500.0)];
//!
//! assert_eq!(active_section(450.0, &sections, 100.0).map(Section::id), Some("b"));
//! assert_eq!(active_section(350.0, &sections, 100.0).map(Section::id), Some("a"));
//! ```

use crate::settings::PageSettings;
use crate::view::NavView;

/// A page region that a navigation link points at.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    id: String,
    start: f64,
    height: f64,
}

impl Section {
    /// A section starting `start` pixels from the page top.
    pub fn new(id: impl Into<String>, start: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            start,
            height,
        }
    }

    /// The section's element id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Offset of the section's top edge.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Height of the section.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Whether `scroll_y` falls in this section's active range.
    pub fn contains(&self, scroll_y: f64, offset: f64) -> bool {
        let top = self.start - offset;
        scroll_y >= top && scroll_y < top + self.height
    }
}

/// The first section whose active range contains `scroll_y`.
pub fn active_section(scroll_y: f64, sections: &[Section], offset: f64) -> Option<&Section> {
    sections.iter().find(|s| s.contains(scroll_y, offset))
}

/// Keeps the navigation highlight in step with the scroll position.
#[derive(Debug)]
pub struct ActiveSectionTracker<V> {
    view: V,
    sections: Vec<Section>,
    offset: f64,
    active: Option<String>,
}

impl<V: NavView> ActiveSectionTracker<V> {
    /// Track `sections`, highlighting links through `view`.
    pub fn new(view: V, sections: Vec<Section>, settings: &PageSettings) -> Self {
        Self {
            view,
            sections,
            offset: settings.section_offset(),
            active: None,
        }
    }

    /// The id that would be active at `scroll_y`, without changing anything.
    pub fn recompute(&self, scroll_y: f64) -> Option<&str> {
        active_section(scroll_y, &self.sections, self.offset).map(Section::id)
    }

    /// Handle a scroll sample. Returns the active id afterwards.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<&str> {
        self.apply(scroll_y, false);
        self.active.as_deref()
    }

    /// Highlight the section under the initial scroll position.
    pub fn on_ready(&mut self, scroll_y: f64) -> Option<&str> {
        self.apply(scroll_y, true);
        self.active.as_deref()
    }

    fn apply(&mut self, scroll_y: f64, force: bool) {
        let Some(section) = active_section(scroll_y, &self.sections, self.offset) else {
            return;
        };
        if !force && self.active.as_deref() == Some(section.id()) {
            return;
        }
        debug_event!(section = section.id(), scroll_y, "active section changed");
        self.view.set_active(section.id());
        self.active = Some(section.id.clone());
    }

    /// Currently highlighted section id.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The tracked sections.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// The navigation view.
    pub fn view(&self) -> &V {
        &self.view
    }
}
