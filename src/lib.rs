pub mod components;
pub mod content;
pub mod dom;
pub mod nav;
pub mod pages;
pub mod state;

use components::{NavBar, ToastViewport, Toaster};
use leptos::*;
use leptos_router::*;
use pages::{FishSpotPage, LandingPage, NotFoundPage, RestaurantPage, TeaSpotPage};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

/// Workaround for Leptos 0.6 router not re-rendering on browser back/forward.
///
/// On `popstate` the router updates its location signal but `<Routes>` does
/// not always swap the page view. Reloading boots the app at the right URL;
/// nothing on the site needs to survive it.
fn setup_popstate_reload() {
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }) as Box<dyn Fn(web_sys::Event)>);

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Root component with routing
#[component]
fn Root() -> impl IntoView {
    let toaster = Toaster::provide();

    view! {
        <ErrorBoundary fallback=|errors| view! {
            <main class="error-page">
                <div class="error-card glass-card">
                    <h2>"Something went wrong"</h2>
                    <p>"This page couldn't be loaded. Try refreshing or head back to the start."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect_view()
                        }
                    </ul>
                    <a class="btn btn-hero" href="/">"Return Home"</a>
                </div>
            </main>
        }>
            <Router>
                <NavBar/>
                <Routes>
                    <Route path="/" view=LandingPage/>
                    <Route path="/restaurant" view=RestaurantPage/>
                    <Route path="/tea-spot" view=TeaSpotPage/>
                    <Route path="/fish-spot" view=FishSpotPage/>
                    <Route path="/*" view=NotFoundPage/>
                </Routes>
            </Router>
        </ErrorBoundary>
        <ToastViewport toaster=toaster/>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    setup_popstate_reload();
    mount_to_body(Root);
}
