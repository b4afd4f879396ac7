use super::links::{links_for, NavLink};
use super::route::{normalize_path, Route, Section};
use super::scroll_spy::{is_past_threshold, resolve_active_section, ScrollState};

/// What the controller needs from the page it is mounted in.
///
/// The browser implementation lives in `crate::dom`; tests use an in-memory
/// document.
pub trait Viewport {
    fn scroll_y(&self) -> f64;
    /// Top offset of the section's element, or `None` if it is not rendered.
    fn section_offset_top(&self, section: Section) -> Option<f64>;
    /// Smooth-scroll to the section. Returns `false` if it is not rendered.
    fn scroll_into_view(&self, section: Section) -> bool;
    fn open_in_new_tab(&self, href: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Section(Section),
    Route(Route),
}

/// Navbar state: the route's link set, scroll-spy state and the mobile menu flag.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationController {
    path: String,
    route: Route,
    links: &'static [NavLink],
    scroll: ScrollState,
    mobile_menu_open: bool,
}

impl NavigationController {
    pub fn new(route: Route) -> Self {
        Self::at(route.path(), route)
    }

    pub fn for_path(path: &str) -> Self {
        Self::at(normalize_path(path), Route::from_path(path))
    }

    fn at(path: &str, route: Route) -> Self {
        Self {
            path: path.to_string(),
            route,
            links: links_for(route),
            scroll: ScrollState::default(),
            mobile_menu_open: false,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn links(&self) -> &'static [NavLink] {
        self.links
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll
    }

    pub fn active_section(&self) -> Section {
        self.scroll.active_section
    }

    pub fn is_past_threshold(&self) -> bool {
        self.scroll.is_past_threshold
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn shows_reservation_cta(&self) -> bool {
        self.route.has_section(Section::Reservations)
    }

    /// Follow a new router location. Any change of pathname starts scroll
    /// and mobile state over, even between paths sharing a link set.
    pub fn set_route(&mut self, path: &str) -> bool {
        if normalize_path(path) == self.path {
            return false;
        }
        *self = Self::for_path(path);
        true
    }

    /// Resample the viewport. Returns `true` if anything visible changed.
    pub fn on_scroll<V: Viewport + ?Sized>(&mut self, viewport: &V) -> bool {
        let scroll_y = viewport.scroll_y();
        let active = resolve_active_section(self.links, scroll_y, |section| {
            viewport.section_offset_top(section)
        })
        .unwrap_or(self.scroll.active_section);

        let next = ScrollState {
            scroll_y,
            is_past_threshold: is_past_threshold(scroll_y),
            active_section: active,
        };
        let changed = next.is_past_threshold != self.scroll.is_past_threshold
            || next.active_section != self.scroll.active_section;
        self.scroll = next;
        changed
    }

    /// Follow a nav link. Always leaves the mobile menu closed. A section
    /// that is not on the page is skipped silently.
    pub fn navigate_to<V: Viewport + ?Sized>(&mut self, target: NavTarget, viewport: &V) {
        match target {
            NavTarget::Section(section) => {
                if !viewport.scroll_into_view(section) {
                    leptos::logging::log!(
                        "Chincha Piro: no #{} section on this page, skipping scroll",
                        section.id()
                    );
                }
            }
            NavTarget::Route(route) => viewport.open_in_new_tab(route.path()),
        }
        self.mobile_menu_open = false;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeDocument {
        scroll_y: Cell<f64>,
        offsets: HashMap<Section, f64>,
        scrolled_to: RefCell<Vec<Section>>,
        opened: RefCell<Vec<String>>,
    }

    impl FakeDocument {
        fn with_sections(sections: &[(Section, f64)]) -> Self {
            Self {
                offsets: sections.iter().copied().collect(),
                ..Default::default()
            }
        }
    }

    impl Viewport for FakeDocument {
        fn scroll_y(&self) -> f64 {
            self.scroll_y.get()
        }

        fn section_offset_top(&self, section: Section) -> Option<f64> {
            self.offsets.get(&section).copied()
        }

        fn scroll_into_view(&self, section: Section) -> bool {
            match self.offsets.get(&section) {
                Some(top) => {
                    self.scroll_y.set(*top);
                    self.scrolled_to.borrow_mut().push(section);
                    true
                }
                None => false,
            }
        }

        fn open_in_new_tab(&self, href: &str) {
            self.opened.borrow_mut().push(href.to_string());
        }
    }

    fn sample_page() -> FakeDocument {
        FakeDocument::with_sections(&[
            (Section::Home, 0.0),
            (Section::About, 800.0),
            (Section::Menu, 1600.0),
        ])
    }

    #[test]
    fn test_initial_state() {
        let nav = NavigationController::for_path("/restaurant");
        assert_eq!(nav.route(), Route::Restaurant);
        assert_eq!(nav.active_section(), Section::Home);
        assert!(!nav.is_past_threshold());
        assert!(!nav.is_mobile_menu_open());
    }

    #[test]
    fn test_scroll_updates_threshold_and_active_section() {
        let doc = sample_page();
        let mut nav = NavigationController::new(Route::Restaurant);

        doc.scroll_y.set(100.0);
        nav.on_scroll(&doc);
        assert!(!nav.is_past_threshold());
        assert_eq!(nav.active_section(), Section::Home);

        doc.scroll_y.set(850.0);
        assert!(nav.on_scroll(&doc));
        assert!(nav.is_past_threshold());
        assert_eq!(nav.active_section(), Section::About);

        doc.scroll_y.set(1450.0);
        assert!(nav.on_scroll(&doc));
        assert_eq!(nav.active_section(), Section::Menu);
        assert_eq!(nav.scroll_state().scroll_y, 1450.0);
    }

    #[test]
    fn test_scroll_reports_no_change_within_same_section() {
        let doc = sample_page();
        let mut nav = NavigationController::new(Route::Restaurant);
        doc.scroll_y.set(850.0);
        assert!(nav.on_scroll(&doc));
        doc.scroll_y.set(900.0);
        assert!(!nav.on_scroll(&doc));
    }

    #[test]
    fn test_active_section_kept_when_nothing_qualifies() {
        let mut nav = NavigationController::new(Route::Landing);
        let doc = sample_page();
        doc.scroll_y.set(900.0);
        nav.on_scroll(&doc);
        assert_eq!(nav.active_section(), Section::About);

        let empty = FakeDocument::default();
        empty.scroll_y.set(50.0);
        nav.on_scroll(&empty);
        assert_eq!(nav.active_section(), Section::About);
    }

    #[test]
    fn test_active_section_is_always_a_scroll_link() {
        let doc = FakeDocument::with_sections(&[
            (Section::Home, 0.0),
            (Section::About, 700.0),
            (Section::Menu, 1500.0),
            (Section::Lounge, 2400.0),
            (Section::Reservations, 3000.0),
        ]);
        for route in Route::ALL {
            let mut nav = NavigationController::new(route);
            let mut y = 0.0;
            while y < 4000.0 {
                doc.scroll_y.set(y);
                nav.on_scroll(&doc);
                let active = nav.active_section();
                assert!(
                    nav.links().iter().any(|l| l.section() == Some(active)),
                    "{:?} active {:?} at {}",
                    route,
                    active,
                    y
                );
                y += 50.0;
            }
        }
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut nav = NavigationController::new(Route::TeaSpot);
        nav.toggle_mobile_menu();
        assert!(nav.is_mobile_menu_open());
        nav.toggle_mobile_menu();
        assert!(!nav.is_mobile_menu_open());
        nav.toggle_mobile_menu();
        assert!(nav.is_mobile_menu_open());
    }

    #[test]
    fn test_toggle_leaves_scroll_state_alone() {
        let doc = sample_page();
        let mut nav = NavigationController::new(Route::Restaurant);
        doc.scroll_y.set(850.0);
        nav.on_scroll(&doc);
        let before = nav.scroll_state();
        nav.toggle_mobile_menu();
        assert_eq!(nav.scroll_state(), before);
    }

    #[test]
    fn test_section_navigation_closes_mobile_menu() {
        let doc = sample_page();
        for start_open in [false, true] {
            let mut nav = NavigationController::new(Route::Restaurant);
            if start_open {
                nav.toggle_mobile_menu();
            }
            nav.navigate_to(NavTarget::Section(Section::Menu), &doc);
            assert!(!nav.is_mobile_menu_open());
        }
        assert_eq!(*doc.scrolled_to.borrow(), [Section::Menu, Section::Menu]);
    }

    #[test]
    fn test_missing_section_is_a_silent_no_op() {
        let doc = sample_page();
        let mut nav = NavigationController::new(Route::Restaurant);
        doc.scroll_y.set(850.0);
        nav.on_scroll(&doc);
        nav.toggle_mobile_menu();

        nav.navigate_to(NavTarget::Section(Section::Lounge), &doc);

        assert_eq!(nav.active_section(), Section::About);
        assert!(!nav.is_mobile_menu_open());
        assert!(doc.scrolled_to.borrow().is_empty());
        assert_eq!(doc.scroll_y.get(), 850.0);
    }

    #[test]
    fn test_route_navigation_opens_new_tab() {
        let doc = sample_page();
        let mut nav = NavigationController::new(Route::Restaurant);
        nav.toggle_mobile_menu();
        nav.navigate_to(NavTarget::Route(Route::TeaSpot), &doc);
        assert_eq!(*doc.opened.borrow(), ["/tea-spot"]);
        assert!(doc.scrolled_to.borrow().is_empty());
        assert!(!nav.is_mobile_menu_open());
        assert_eq!(nav.route(), Route::Restaurant);
    }

    #[test]
    fn test_set_route_resets_state() {
        let doc = sample_page();
        let mut nav = NavigationController::new(Route::Restaurant);
        doc.scroll_y.set(1450.0);
        nav.on_scroll(&doc);
        nav.toggle_mobile_menu();

        assert!(nav.set_route("/tea-spot"));
        assert_eq!(nav, NavigationController::new(Route::TeaSpot));
        assert!(!nav.set_route("/tea-spot/"));
    }

    #[test]
    fn test_leaving_unknown_path_for_landing_resets_state() {
        let doc = sample_page();
        let mut nav = NavigationController::for_path("/no-such-page");
        assert_eq!(nav.route(), Route::Landing);
        doc.scroll_y.set(900.0);
        nav.on_scroll(&doc);
        nav.toggle_mobile_menu();

        assert!(nav.set_route("/"));
        assert_eq!(nav.route(), Route::Landing);
        assert_eq!(nav.active_section(), Section::Home);
        assert!(!nav.is_past_threshold());
        assert!(!nav.is_mobile_menu_open());
        assert_eq!(nav, NavigationController::new(Route::Landing));
    }

    #[test]
    fn test_reservation_cta_follows_route() {
        assert!(NavigationController::new(Route::Landing).shows_reservation_cta());
        assert!(NavigationController::new(Route::Restaurant).shows_reservation_cta());
        assert!(NavigationController::new(Route::FishSpot).shows_reservation_cta());
        assert!(!NavigationController::new(Route::TeaSpot).shows_reservation_cta());
    }
}
