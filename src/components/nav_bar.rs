use crate::dom::{DomViewport, ScrollListener};
use crate::nav::{NavLink, NavTarget, NavigationController, Section};
use leptos::*;
use leptos_router::use_location;

/// Memoised slices of the controller, so each part of the navbar only
/// re-renders when its own piece changes.
#[derive(Clone, Copy)]
struct NavView {
    links: Memo<&'static [NavLink]>,
    active_section: Memo<Section>,
    past_threshold: Memo<bool>,
    menu_open: Memo<bool>,
    show_cta: Memo<bool>,
}

impl NavView {
    fn new(controller: RwSignal<NavigationController>) -> Self {
        Self {
            links: create_memo(move |_| controller.with(|c| c.links())),
            active_section: create_memo(move |_| controller.with(|c| c.active_section())),
            past_threshold: create_memo(move |_| controller.with(|c| c.is_past_threshold())),
            menu_open: create_memo(move |_| controller.with(|c| c.is_mobile_menu_open())),
            show_cta: create_memo(move |_| controller.with(|c| c.shows_reservation_cta())),
        }
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let location = use_location();
    let controller = create_rw_signal(NavigationController::for_path(
        &location.pathname.get_untracked(),
    ));

    // Follow client-side route changes
    create_effect(move |_| {
        let path = location.pathname.get();
        let mut next = controller.get_untracked();
        if next.set_route(&path) {
            controller.set(next);
        }
    });

    let sample = move || {
        let Some(mut next) = controller.try_get_untracked() else {
            return;
        };
        if next.on_scroll(&DomViewport) {
            controller.set(next);
        }
    };

    let listener = ScrollListener::attach(sample);
    on_cleanup(move || drop(listener));
    // Pick up the position of a page that was reloaded mid-scroll
    request_animation_frame(sample);

    let navigate = move |target: NavTarget| {
        controller.update(|c| c.navigate_to(target, &DomViewport));
    };

    let NavView {
        links,
        active_section,
        past_threshold,
        menu_open,
        show_cta,
    } = NavView::new(controller);
    let is_active = move |section: Section| active_section.get() == section;

    let render_link = move |link: NavLink, mobile: bool| match link {
        NavLink::Scroll { name, section } => {
            let class = if mobile { "mobile-nav-link" } else { "nav-link" };
            view! {
                <a
                    href={format!("#{}", section.id())}
                    class=class
                    class:active=move || is_active(section)
                    on:click=move |ev| {
                        ev.prevent_default();
                        navigate(NavTarget::Section(section));
                    }
                >
                    {name}
                </a>
            }
            .into_view()
        }
        NavLink::Dropdown { name, items } => view! {
            <div class="nav-dropdown" class:mobile=mobile>
                <button class="nav-link nav-dropdown-trigger" aria-haspopup="true">
                    {name} <span class="chevron">"\u{25BE}"</span>
                </button>
                <div class="nav-dropdown-menu">
                    {items
                        .iter()
                        .map(|item| {
                            let route = item.route;
                            view! {
                                <a
                                    href=route.path()
                                    target="_blank"
                                    rel="noopener"
                                    class="dropdown-item"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        navigate(NavTarget::Route(route));
                                    }
                                >
                                    {item.name}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
        .into_view(),
    };

    view! {
        <nav class="site-nav" class:scrolled=move || past_threshold.get()>
            <div class="site-nav-inner">
                <a
                    href="#home"
                    class="nav-brand"
                    on:click=move |ev| {
                        ev.prevent_default();
                        navigate(NavTarget::Section(Section::Home));
                    }
                >
                    <span class="brand-mark">"\u{2728}"</span>
                    <span class="brand-text">
                        <span class="brand-name">"Chincha Piro"</span>
                        <span class="brand-tagline">"Lounge & Bar"</span>
                    </span>
                </a>

                <div class="nav-links desktop-only">
                    {move || links.get().iter().map(|link| render_link(*link, false)).collect_view()}
                </div>

                <Show when=move || show_cta.get()>
                    <button
                        class="btn btn-hero nav-cta desktop-only"
                        on:click=move |_| navigate(NavTarget::Section(Section::Reservations))
                    >
                        "Reserve Now"
                    </button>
                </Show>

                <button
                    class="mobile-menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| controller.update(|c| c.toggle_mobile_menu())
                >
                    {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>
        </nav>

        <Show when=move || menu_open.get()>
            <div class="mobile-menu">
                <div class="mobile-menu-links">
                    {move || {
                        links
                            .get()
                            .iter()
                            .enumerate()
                            .map(|(i, link)| {
                                view! {
                                    <div
                                        class="mobile-menu-item"
                                        style={format!("animation-delay: {:.2}s", i as f64 * 0.08)}
                                    >
                                        {render_link(*link, true)}
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                    <Show when=move || show_cta.get()>
                        <button
                            class="btn btn-hero btn-xl"
                            on:click=move |_| navigate(NavTarget::Section(Section::Reservations))
                        >
                            "Reserve Table"
                        </button>
                    </Show>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{Route, Viewport};
    use std::cell::Cell;
    use std::rc::Rc;

    struct ScrolledPage(f64);

    impl Viewport for ScrolledPage {
        fn scroll_y(&self) -> f64 {
            self.0
        }

        fn section_offset_top(&self, section: Section) -> Option<f64> {
            match section {
                Section::Home => Some(0.0),
                Section::About => Some(800.0),
                _ => None,
            }
        }

        fn scroll_into_view(&self, _: Section) -> bool {
            true
        }

        fn open_in_new_tab(&self, _: &str) {}
    }

    fn count_runs<T: Clone + 'static>(memo: Memo<T>) -> Rc<Cell<u32>> {
        let runs = Rc::new(Cell::new(0));
        let counter = runs.clone();
        create_effect(move |_| {
            memo.with(|_| ());
            counter.set(counter.get() + 1);
        });
        runs
    }

    #[test]
    fn test_link_list_ignores_scroll_and_menu_changes() {
        let runtime = create_runtime();
        let controller = create_rw_signal(NavigationController::new(Route::Restaurant));
        let view = NavView::new(controller);
        let link_runs = count_runs(view.links);
        let active_runs = count_runs(view.active_section);
        assert_eq!(link_runs.get(), 1);

        controller.update(|c| {
            c.on_scroll(&ScrolledPage(900.0));
        });
        controller.update(|c| c.toggle_mobile_menu());
        controller.update(|c| c.navigate_to(NavTarget::Section(Section::About), &ScrolledPage(900.0)));

        assert_eq!(link_runs.get(), 1);
        assert_eq!(active_runs.get(), 2);
        assert_eq!(view.active_section.get_untracked(), Section::About);
        assert!(view.past_threshold.get_untracked());
        assert!(!view.menu_open.get_untracked());
        runtime.dispose();
    }

    #[test]
    fn test_link_list_follows_route_change() {
        let runtime = create_runtime();
        let controller = create_rw_signal(NavigationController::new(Route::Restaurant));
        let view = NavView::new(controller);
        let link_runs = count_runs(view.links);

        controller.update(|c| {
            c.set_route("/tea-spot");
        });

        assert_eq!(link_runs.get(), 2);
        assert!(!view.show_cta.get_untracked());
        runtime.dispose();
    }
}
