//! Active section tracking, examples and properties

use brochure::prelude::*;
use brochure::sections::active_section;
use brochure::testing::{RecordingView, ViewOp};
use proptest::prelude::*;

fn two_sections() -> Vec<Section> {
    vec![Section::new("a", 0.0, 500.0), Section::new("b", 500.0, 500.0)]
}

fn tracker(view: &RecordingView) -> ActiveSectionTracker<RecordingView> {
    ActiveSectionTracker::new(view.clone(), two_sections(), &PageSettings::default())
}

#[test]
fn ranges_start_one_hundred_pixels_early() {
    let view = RecordingView::new();
    let mut t = tracker(&view);

    assert_eq!(t.on_scroll(350.0), Some("a"));
    assert_eq!(t.on_scroll(399.0), Some("a"));
    assert_eq!(t.on_scroll(400.0), Some("b"));
    assert_eq!(t.on_scroll(550.0), Some("b"));
}

#[test]
fn initial_load_highlights_without_any_scroll() {
    let view = RecordingView::new();
    let mut page = Page::new(
        view.clone(),
        view.clone(),
        view.clone(),
        ManualScheduler::new(),
        PageLayout::new(two_sections()),
        PageSettings::default(),
    );

    page.dispatch(PageEvent::Ready {
        scroll_y: 0.0,
        viewport_height: 900.0,
        hero: vec![("hero-title".to_string(), 200.0)],
    });

    assert_eq!(page.state().sections().active(), Some("a"));
    assert_eq!(
        view.ops(),
        vec![
            ViewOp::Revealed("hero-title".to_string()),
            ViewOp::Active("a".to_string()),
        ]
    );
}

#[test]
fn gaps_keep_the_previous_highlight() {
    let view = RecordingView::new();
    let sections = vec![Section::new("a", 0.0, 300.0), Section::new("b", 1000.0, 300.0)];
    let mut t = ActiveSectionTracker::new(view.clone(), sections, &PageSettings::default());

    t.on_scroll(100.0);
    assert_eq!(t.on_scroll(500.0), Some("a"));
    assert_eq!(view.ops(), vec![ViewOp::Active("a".to_string())]);
}

#[test]
fn custom_offset_shifts_ranges() {
    let settings = PageSettings::default().with_section_offset(0.0);
    let t = ActiveSectionTracker::new(RecordingView::new(), two_sections(), &settings);
    assert_eq!(t.recompute(450.0), Some("a"));
    assert_eq!(t.recompute(500.0), Some("b"));
}

fn contiguous_layout() -> impl Strategy<Value = Vec<Section>> {
    prop::collection::vec(1u32..2000, 1..8).prop_map(|heights| {
        let mut start = 0.0;
        heights
            .into_iter()
            .enumerate()
            .map(|(i, height)| {
                let height = f64::from(height);
                let section = Section::new(format!("s{i}"), start, height);
                start += height;
                section
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_recompute_is_idempotent(sections in contiguous_layout(), y in -500.0f64..20000.0) {
        let t = ActiveSectionTracker::new(RecordingView::new(), sections, &PageSettings::default());
        let first = t.recompute(y).map(str::to_string);
        let second = t.recompute(y).map(str::to_string);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_at_most_one_section_matches(sections in contiguous_layout(), y in -500.0f64..20000.0) {
        let matches = sections.iter().filter(|s| s.contains(y, 100.0)).count();
        prop_assert!(matches <= 1);
    }

    #[test]
    fn prop_scroll_result_agrees_with_pure_function(
        sections in contiguous_layout(),
        ys in prop::collection::vec(-500.0f64..20000.0, 1..20),
    ) {
        let view = RecordingView::new();
        let mut t = ActiveSectionTracker::new(view.clone(), sections.clone(), &PageSettings::default());
        let mut expected: Option<String> = None;
        for y in ys {
            if let Some(section) = active_section(y, &sections, 100.0) {
                expected = Some(section.id().to_string());
            }
            prop_assert_eq!(t.on_scroll(y).map(str::to_string), expected.clone());
        }
    }
}
