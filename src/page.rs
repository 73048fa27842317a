//! Event sources, handler registration and the page composition root.
//!
//! The host turns browser events into [`PageEvent`]s and hands them to
//! [`Page::dispatch`]. Handlers are registered per [`EventSource`] on an
//! [`EventRouter`], so the controllers never see event plumbing and extra
//! behaviour can be attached without touching them.
//!
//! ```rust
//! use brochure::page::{Page, PageEvent, PageLayout};
//! use brochure::sections::Section;
//! use brochure::testing::{RecordingView, ViewOp};
//! use brochure::timer::ManualScheduler;
//! use brochure::PageSettings;
//!
//! let view = RecordingView::new();
//! let layout = PageLayout::new(vec![
//!     Section::new("home", 0.0, 600.0),
//!     Section::new("contact", 600.0, 400.0),
//! ]);
//! let mut page = Page::new(
//!     view.clone(),
//!     view.clone(),
//!     view.clone(),
//!     ManualScheduler::new(),
//!     layout,
//!     PageSettings::default(),
//! );
//!
//! page.dispatch(PageEvent::Ready { scroll_y: 0.0, viewport_height: 800.0, hero: vec![] });
//! assert_eq!(view.ops(), vec![ViewOp::Active("home".to_string())]);
//! ```

use std::collections::HashMap;
use std::fmt;

use crate::chrome::{NavMenu, RevealTracker, ScrollEffects};
use crate::field::Field;
use crate::form::FormController;
use crate::sections::{ActiveSectionTracker, Section};
use crate::settings::PageSettings;
use crate::timer::{Scheduler, TimerId};
use crate::view::{ChromeView, FormView, NavView};

/// A named source of page events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventSource {
    /// Text typed into a form field.
    Input(Field),
    /// A form field lost focus.
    Blur(Field),
    /// The contact form was submitted.
    Submit,
    /// The window scrolled.
    Scroll,
    /// The document finished loading.
    Ready,
    /// A scheduled timer fired.
    TimerFired,
    /// The hamburger button was clicked.
    MenuToggle,
    /// A navigation link was clicked.
    NavLinkClick,
    /// Any click on the document.
    DocumentClick,
    /// An observed element crossed the viewport edge.
    Intersection,
    /// An in-page anchor was clicked.
    AnchorClick,
    /// The scroll-to-top button was clicked.
    ScrollTopClick,
}

/// An event with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// A field's text changed.
    Input {
        /// The field.
        field: Field,
        /// Its current text.
        value: String,
    },
    /// A field lost focus.
    Blur {
        /// The field.
        field: Field,
        /// Its current text.
        value: String,
    },
    /// The form was submitted. Default navigation is always suppressed.
    Submit,
    /// A scroll sample.
    Scroll {
        /// Vertical scroll offset.
        scroll_y: f64,
        /// Height of the viewport.
        viewport_height: f64,
    },
    /// The document finished loading.
    Ready {
        /// Vertical scroll offset at load.
        scroll_y: f64,
        /// Height of the viewport.
        viewport_height: f64,
        /// Hero elements and their tops relative to the viewport.
        hero: Vec<(String, f64)>,
    },
    /// A timer fired.
    TimerFired(TimerId),
    /// The hamburger button was clicked.
    MenuToggle,
    /// A navigation link was clicked.
    NavLinkClick,
    /// A click on the document.
    DocumentClick {
        /// Whether the click hit the menu or the hamburger.
        inside_menu: bool,
    },
    /// An intersection report for an observed element.
    Intersection {
        /// The element id.
        element_id: String,
        /// Whether it is now intersecting the viewport.
        is_intersecting: bool,
    },
    /// An in-page anchor was clicked.
    AnchorClick {
        /// Top of the anchor's target, `None` if it points at nothing.
        target_top: Option<f64>,
    },
    /// The scroll-to-top button was clicked.
    ScrollTopClick,
}

impl PageEvent {
    /// The source this event belongs to.
    pub fn source(&self) -> EventSource {
        match self {
            PageEvent::Input { field, .. } => EventSource::Input(*field),
            PageEvent::Blur { field, .. } => EventSource::Blur(*field),
            PageEvent::Submit => EventSource::Submit,
            PageEvent::Scroll { .. } => EventSource::Scroll,
            PageEvent::Ready { .. } => EventSource::Ready,
            PageEvent::TimerFired(_) => EventSource::TimerFired,
            PageEvent::MenuToggle => EventSource::MenuToggle,
            PageEvent::NavLinkClick => EventSource::NavLinkClick,
            PageEvent::DocumentClick { .. } => EventSource::DocumentClick,
            PageEvent::Intersection { .. } => EventSource::Intersection,
            PageEvent::AnchorClick { .. } => EventSource::AnchorClick,
            PageEvent::ScrollTopClick => EventSource::ScrollTopClick,
        }
    }
}

/// A registered event handler.
pub type Handler<C> = Box<dyn FnMut(&mut C, &PageEvent)>;

/// Handlers registered against event sources.
///
/// Handlers for one source run in registration order, each to completion.
///
/// ```rust
/// use brochure::page::{EventRouter, EventSource, PageEvent};
///
/// let mut router = EventRouter::<Vec<&str>>::new();
/// router
///     .on(EventSource::Submit, |log, _| log.push("first"))
///     .on(EventSource::Submit, |log, _| log.push("second"));
///
/// let mut log = Vec::new();
/// assert_eq!(router.dispatch(&mut log, &PageEvent::Submit), 2);
/// assert_eq!(router.dispatch(&mut log, &PageEvent::MenuToggle), 0);
/// assert_eq!(log, vec!["first", "second"]);
/// ```
pub struct EventRouter<C> {
    handlers: HashMap<EventSource, Vec<Handler<C>>>,
}

impl<C> EventRouter<C> {
    /// A router with no handlers.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register `handler` for `source`.
    pub fn on<H>(&mut self, source: EventSource, handler: H) -> &mut Self
    where
        H: FnMut(&mut C, &PageEvent) + 'static,
    {
        self.handlers
            .entry(source)
            .or_default()
            .push(Box::new(handler));
        self
    }

    /// Run every handler registered for the event's source. Returns how many
    /// ran.
    pub fn dispatch(&mut self, ctx: &mut C, event: &PageEvent) -> usize {
        let source = event.source();
        let Some(handlers) = self.handlers.get_mut(&source) else {
            trace_event!(source = ?source, "no handlers registered");
            return 0;
        };
        for handler in handlers.iter_mut() {
            handler(ctx, event);
        }
        trace_event!(source = ?source, handlers = handlers.len(), "event dispatched");
        handlers.len()
    }

    /// Number of handlers registered for `source`.
    pub fn handler_count(&self, source: EventSource) -> usize {
        self.handlers.get(&source).map_or(0, Vec::len)
    }
}

impl<C> Default for EventRouter<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for EventRouter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<&EventSource, usize> =
            self.handlers.iter().map(|(k, v)| (k, v.len())).collect();
        f.debug_struct("EventRouter")
            .field("handlers", &counts)
            .finish()
    }
}

/// Static geometry of the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    /// Sections that navigation links point at, top to bottom.
    pub sections: Vec<Section>,
    /// Ids of elements that fade in when scrolled into view.
    pub animated: Vec<String>,
}

impl PageLayout {
    /// A layout with `sections` and no animated elements.
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            animated: Vec::new(),
        }
    }

    /// Add elements that fade in when scrolled into view.
    pub fn with_animated<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.animated.extend(ids.into_iter().map(Into::into));
        self
    }
}

/// Everything the standard handlers act on.
#[derive(Debug)]
pub struct PageState<F, N, C, S> {
    form: FormController<F, S>,
    sections: ActiveSectionTracker<N>,
    chrome: C,
    menu: NavMenu,
    effects: ScrollEffects,
    reveals: RevealTracker,
}

impl<F, N, C, S> PageState<F, N, C, S> {
    /// The contact form controller.
    pub fn form(&self) -> &FormController<F, S> {
        &self.form
    }

    /// The contact form controller, mutably.
    pub fn form_mut(&mut self) -> &mut FormController<F, S> {
        &mut self.form
    }

    /// The section tracker.
    pub fn sections(&self) -> &ActiveSectionTracker<N> {
        &self.sections
    }

    /// The mobile menu.
    pub fn menu(&self) -> &NavMenu {
        &self.menu
    }

    /// The fade-in tracker.
    pub fn reveals(&self) -> &RevealTracker {
        &self.reveals
    }
}

/// The whole page: controllers, their views and the handlers wiring them.
#[derive(Debug)]
pub struct Page<F, N, C, S> {
    router: EventRouter<PageState<F, N, C, S>>,
    state: PageState<F, N, C, S>,
}

impl<F, N, C, S> Page<F, N, C, S>
where
    F: FormView + 'static,
    N: NavView + 'static,
    C: ChromeView + 'static,
    S: Scheduler + 'static,
{
    /// Build a page and register the standard handlers.
    pub fn new(
        form_view: F,
        nav_view: N,
        chrome_view: C,
        scheduler: S,
        layout: PageLayout,
        settings: PageSettings,
    ) -> Self {
        let state = PageState {
            sections: ActiveSectionTracker::new(nav_view, layout.sections, &settings),
            chrome: chrome_view,
            menu: NavMenu::default(),
            effects: ScrollEffects::new(&settings),
            reveals: RevealTracker::new(layout.animated),
            form: FormController::new(form_view, scheduler, settings),
        };

        let mut router: EventRouter<PageState<F, N, C, S>> = EventRouter::new();
        for field in Field::ALL {
            router.on(EventSource::Input(field), handle_input);
            router.on(EventSource::Blur(field), handle_blur);
        }
        router
            .on(EventSource::Submit, |page: &mut PageState<F, N, C, S>, _| {
                page.form.on_submit();
            })
            .on(EventSource::TimerFired, handle_timer)
            .on(EventSource::Scroll, handle_scroll_effects)
            .on(EventSource::Scroll, handle_scroll_sections)
            .on(EventSource::Ready, handle_ready)
            .on(EventSource::MenuToggle, |page: &mut PageState<F, N, C, S>, _| {
                page.menu.toggle(&mut page.chrome);
            })
            .on(EventSource::NavLinkClick, |page: &mut PageState<F, N, C, S>, _| {
                page.menu.on_link_click(&mut page.chrome);
            })
            .on(EventSource::DocumentClick, handle_document_click)
            .on(EventSource::Intersection, handle_intersection)
            .on(EventSource::AnchorClick, handle_anchor_click)
            .on(EventSource::ScrollTopClick, |page: &mut PageState<F, N, C, S>, _| {
                page.effects.on_scroll_top_click(&mut page.chrome);
            });

        Self { router, state }
    }

    /// Route one event. Returns how many handlers ran.
    pub fn dispatch(&mut self, event: PageEvent) -> usize {
        self.router.dispatch(&mut self.state, &event)
    }

    /// Register additional handlers.
    pub fn router_mut(&mut self) -> &mut EventRouter<PageState<F, N, C, S>> {
        &mut self.router
    }

    /// Controller state.
    pub fn state(&self) -> &PageState<F, N, C, S> {
        &self.state
    }

    /// Controller state, mutably.
    pub fn state_mut(&mut self) -> &mut PageState<F, N, C, S> {
        &mut self.state
    }
}

#[cfg(feature = "async")]
impl<F, N, C, S> Page<F, N, C, S>
where
    F: FormView + 'static,
    N: NavView + 'static,
    C: ChromeView + 'static,
    S: Scheduler + 'static,
{
    /// Drive the page from an event stream and a stream of fired timers
    /// until the event stream ends. Returns how many handlers ran.
    pub async fn run<E, T>(&mut self, mut events: E, mut fired: T) -> usize
    where
        E: futures::Stream<Item = PageEvent> + Unpin,
        T: futures::Stream<Item = TimerId> + Unpin,
    {
        use futures::StreamExt;

        let mut handled = 0;
        loop {
            tokio::select! {
                event = events.next() => match event {
                    Some(event) => handled += self.dispatch(event),
                    None => break,
                },
                Some(id) = fired.next() => {
                    handled += self.dispatch(PageEvent::TimerFired(id));
                }
            }
        }
        handled
    }
}

fn handle_input<F: FormView, N, C, S: Scheduler>(
    page: &mut PageState<F, N, C, S>,
    event: &PageEvent,
) {
    if let PageEvent::Input { field, value } = event {
        page.form.on_input(*field, value.as_str());
    }
}

fn handle_blur<F: FormView, N, C, S: Scheduler>(
    page: &mut PageState<F, N, C, S>,
    event: &PageEvent,
) {
    if let PageEvent::Blur { field, value } = event {
        page.form.on_blur(*field, value.as_str());
    }
}

fn handle_timer<F: FormView, N, C, S: Scheduler>(
    page: &mut PageState<F, N, C, S>,
    event: &PageEvent,
) {
    if let PageEvent::TimerFired(id) = event {
        page.form.on_timer(*id);
    }
}

fn handle_scroll_effects<F, N, C: ChromeView, S>(
    page: &mut PageState<F, N, C, S>,
    event: &PageEvent,
) {
    if let PageEvent::Scroll {
        scroll_y,
        viewport_height,
    } = event
    {
        page.effects
            .on_scroll(*scroll_y, *viewport_height, &mut page.chrome);
    }
}

fn handle_scroll_sections<F, N: NavView, C, S>(
    page: &mut PageState<F, N, C, S>,
    event: &PageEvent,
) {
    if let PageEvent::Scroll { scroll_y, .. } = event {
        page.sections.on_scroll(*scroll_y);
    }
}

fn handle_ready<F, N: NavView, C: ChromeView, S>(
    page: &mut PageState<F, N, C, S>,
    event: &PageEvent,
) {
    if let PageEvent::Ready {
        scroll_y,
        viewport_height,
        hero,
    } = event
    {
        page.reveals.on_ready(
            hero.iter().map(|(id, top)| (id.as_str(), *top)),
            *viewport_height,
            &mut page.chrome,
        );
        page.sections.on_ready(*scroll_y);
    }
}

fn handle_document_click<F, N, C: ChromeView, S>(
    page: &mut PageState<F, N, C, S>,
    event: &PageEvent,
) {
    if let PageEvent::DocumentClick { inside_menu } = event {
        page.menu.on_document_click(*inside_menu, &mut page.chrome);
    }
}

fn handle_intersection<F, N, C: ChromeView, S>(
    page: &mut PageState<F, N, C, S>,
    event: &PageEvent,
) {
    if let PageEvent::Intersection {
        element_id,
        is_intersecting,
    } = event
    {
        page.reveals
            .on_intersection(element_id, *is_intersecting, &mut page.chrome);
    }
}

fn handle_anchor_click<F, N, C: ChromeView, S>(
    page: &mut PageState<F, N, C, S>,
    event: &PageEvent,
) {
    if let PageEvent::AnchorClick { target_top } = event {
        page.effects.on_anchor_click(*target_top, &mut page.chrome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingView, ViewOp};
    use crate::timer::ManualScheduler;

    type TestPage = Page<RecordingView, RecordingView, RecordingView, ManualScheduler>;

    fn page(view: &RecordingView) -> TestPage {
        let layout = PageLayout::new(vec![
            Section::new("home", 0.0, 600.0),
            Section::new("about", 600.0, 600.0),
        ])
        .with_animated(["about-card"]);
        Page::new(
            view.clone(),
            view.clone(),
            view.clone(),
            ManualScheduler::new(),
            layout,
            PageSettings::default(),
        )
    }

    #[test]
    fn every_source_has_standard_handlers() {
        let view = RecordingView::new();
        let page = page(&view);
        for field in Field::ALL {
            assert_eq!(page.router.handler_count(EventSource::Input(field)), 1);
            assert_eq!(page.router.handler_count(EventSource::Blur(field)), 1);
        }
        assert_eq!(page.router.handler_count(EventSource::Scroll), 2);
        assert_eq!(page.router.handler_count(EventSource::Submit), 1);
    }

    #[test]
    fn scroll_runs_effects_then_sections() {
        let view = RecordingView::new();
        let mut page = page(&view);
        assert_eq!(
            page.dispatch(PageEvent::Scroll {
                scroll_y: 700.0,
                viewport_height: 800.0
            }),
            2
        );
        assert_eq!(
            view.ops(),
            vec![
                ViewOp::NavbarScrolled(true),
                ViewOp::ScrollTopVisible(true),
                ViewOp::HeroOffset(350.0),
                ViewOp::Active("about".to_string()),
            ]
        );
    }

    #[test]
    fn extra_handlers_run_after_standard_ones() {
        let view = RecordingView::new();
        let mut page = page(&view);
        page.router_mut()
            .on(EventSource::MenuToggle, |state: &mut PageState<_, _, _, _>, _| {
                assert!(state.menu().is_open());
            });
        assert_eq!(page.dispatch(PageEvent::MenuToggle), 2);
    }

    #[test]
    fn menu_closes_on_outside_click() {
        let view = RecordingView::new();
        let mut page = page(&view);
        page.dispatch(PageEvent::MenuToggle);
        page.dispatch(PageEvent::DocumentClick { inside_menu: true });
        assert!(page.state().menu().is_open());
        page.dispatch(PageEvent::DocumentClick { inside_menu: false });
        assert!(!page.state().menu().is_open());
    }

    #[test]
    fn intersection_reveals_observed_elements() {
        let view = RecordingView::new();
        let mut page = page(&view);
        page.dispatch(PageEvent::Intersection {
            element_id: "about-card".to_string(),
            is_intersecting: true,
        });
        assert!(page.state().reveals().is_revealed("about-card"));
    }
}
