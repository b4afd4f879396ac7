use crate::nav::{FrameGate, Section, Viewport};
use leptos::request_animation_frame;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

fn section_element(section: Section) -> Option<web_sys::Element> {
    web_sys::window()?
        .document()?
        .get_element_by_id(section.id())
}

/// The live browser window and document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomViewport;

impl Viewport for DomViewport {
    fn scroll_y(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn section_offset_top(&self, section: Section) -> Option<f64> {
        let element = section_element(section)?.dyn_into::<HtmlElement>().ok()?;
        Some(element.offset_top() as f64)
    }

    fn scroll_into_view(&self, section: Section) -> bool {
        scroll_to_section(section)
    }

    fn open_in_new_tab(&self, href: &str) {
        if let Some(window) = web_sys::window() {
            if window.open_with_url_and_target(href, "_blank").is_err() {
                leptos::logging::warn!("Chincha Piro: could not open {} in a new tab", href);
            }
        }
    }
}

/// Smooth-scroll to a section. Returns `false` (and does nothing) if the
/// current page doesn't render it.
pub fn scroll_to_section(section: Section) -> bool {
    match section_element(section) {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => false,
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// A passive window scroll listener that runs its handler at most once per
/// animation frame. Dropping it removes the listener.
pub struct ScrollListener {
    closure: Closure<dyn Fn()>,
}

impl ScrollListener {
    pub fn attach(on_frame: impl Fn() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let gate = FrameGate::new();
        let on_frame = Rc::new(on_frame);

        let closure = Closure::wrap(Box::new(move || {
            if !gate.try_schedule() {
                return;
            }
            let gate = gate.clone();
            let on_frame = on_frame.clone();
            request_animation_frame(move || {
                gate.release();
                on_frame();
            });
        }) as Box<dyn Fn()>);

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        if window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .is_err()
        {
            leptos::logging::warn!("Chincha Piro: could not attach scroll listener");
            return None;
        }
        Some(Self { closure })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("scroll", self.closure.as_ref().unchecked_ref());
        }
    }
}
