use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="not-found">
            <div class="not-found-card fade-in">
                <h1 class="text-gradient">"404"</h1>
                <h2>"Page Not Found"</h2>
                <p>"Looks like you've wandered off the menu. Let's get you back to the good stuff."</p>
                <A href="/" class="btn btn-hero btn-xl">"\u{2302} Return Home"</A>
            </div>
        </main>
    }
}
