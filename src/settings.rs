//! Page configuration.
//!
//! Settings are pure data: thresholds and delays the controllers read. The
//! defaults match the marketing page layout (a fixed navbar roughly 80px
//! tall, sections highlighted 100px before they reach the top).

use std::time::Duration;

/// Default delay before the success banner hides itself.
pub const DEFAULT_BANNER_HIDE_DELAY: Duration = Duration::from_millis(5000);

/// The success banner text shown after a valid submission.
pub const DEFAULT_SUCCESS_MESSAGE: &str =
    "Thank you! Your message has been sent successfully. We will get back to you soon.";

/// Tunable thresholds for the page's controllers.
///
/// # Examples
///
/// ```rust
/// use brochure::PageSettings;
/// use std::time::Duration;
///
/// let settings = PageSettings::default()
///     .with_banner_hide_delay(Duration::from_secs(3))
///     .with_section_offset(120.0);
///
/// assert_eq!(settings.banner_hide_delay(), Duration::from_secs(3));
/// assert_eq!(settings.section_offset(), 120.0);
/// assert_eq!(settings.navbar_threshold(), 50.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageSettings {
    banner_hide_delay: Duration,
    success_message: String,
    section_offset: f64,
    navbar_threshold: f64,
    scroll_top_threshold: f64,
    anchor_offset: f64,
    parallax_factor: f64,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            banner_hide_delay: DEFAULT_BANNER_HIDE_DELAY,
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            section_offset: 100.0,
            navbar_threshold: 50.0,
            scroll_top_threshold: 300.0,
            anchor_offset: 80.0,
            parallax_factor: 0.5,
        }
    }
}

impl PageSettings {
    /// Set how long the success banner stays visible.
    pub fn with_banner_hide_delay(mut self, delay: Duration) -> Self {
        self.banner_hide_delay = delay;
        self
    }

    /// Set the success banner text.
    pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = message.into();
        self
    }

    /// Set how far above a section's top its active range begins.
    pub fn with_section_offset(mut self, offset: f64) -> Self {
        self.section_offset = offset;
        self
    }

    /// Set the scroll offset past which the navbar gets its scrolled style.
    pub fn with_navbar_threshold(mut self, threshold: f64) -> Self {
        self.navbar_threshold = threshold;
        self
    }

    /// Set the scroll offset past which the scroll-to-top button shows.
    pub fn with_scroll_top_threshold(mut self, threshold: f64) -> Self {
        self.scroll_top_threshold = threshold;
        self
    }

    /// Set the height reserved for the fixed navbar when jumping to anchors.
    pub fn with_anchor_offset(mut self, offset: f64) -> Self {
        self.anchor_offset = offset;
        self
    }

    /// Set the hero parallax speed relative to the scroll offset.
    pub fn with_parallax_factor(mut self, factor: f64) -> Self {
        self.parallax_factor = factor;
        self
    }

    /// Delay before the success banner hides.
    pub fn banner_hide_delay(&self) -> Duration {
        self.banner_hide_delay
    }

    /// Success banner text.
    pub fn success_message(&self) -> &str {
        &self.success_message
    }

    /// Offset subtracted from each section's start.
    pub fn section_offset(&self) -> f64 {
        self.section_offset
    }

    /// Navbar scrolled-style threshold.
    pub fn navbar_threshold(&self) -> f64 {
        self.navbar_threshold
    }

    /// Scroll-to-top visibility threshold.
    pub fn scroll_top_threshold(&self) -> f64 {
        self.scroll_top_threshold
    }

    /// Fixed navbar height used for anchor jumps.
    pub fn anchor_offset(&self) -> f64 {
        self.anchor_offset
    }

    /// Hero parallax factor.
    pub fn parallax_factor(&self) -> f64 {
        self.parallax_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_layout() {
        let s = PageSettings::default();
        assert_eq!(s.banner_hide_delay(), Duration::from_millis(5000));
        assert_eq!(s.section_offset(), 100.0);
        assert_eq!(s.scroll_top_threshold(), 300.0);
        assert_eq!(s.anchor_offset(), 80.0);
        assert_eq!(s.parallax_factor(), 0.5);
        assert!(s.success_message().starts_with("Thank you!"));
    }

    #[test]
    fn builders_override_single_values() {
        let s = PageSettings::default()
            .with_navbar_threshold(10.0)
            .with_success_message("Sent");
        assert_eq!(s.navbar_threshold(), 10.0);
        assert_eq!(s.success_message(), "Sent");
        assert_eq!(s.anchor_offset(), 80.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_partial_config() {
        let s: PageSettings =
            serde_json::from_str(r#"{ "section_offset": 64.0, "anchor_offset": 60.0 }"#)
                .expect("valid settings");
        assert_eq!(s.section_offset(), 64.0);
        assert_eq!(s.anchor_offset(), 60.0);
        assert_eq!(s.banner_hide_delay(), DEFAULT_BANNER_HIDE_DELAY);
    }
}
