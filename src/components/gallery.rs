use crate::content::GalleryImage;
use crate::nav::Section;
use leptos::*;

const SOCIAL_STATS: [(&str, &str); 3] = [("15K+", "Followers"), ("2K+", "Posts"), ("50K+", "Likes")];

/// Masonry grid with a click-to-zoom lightbox and a looping marquee strip.
///
/// Renders nothing for an empty gallery.
#[component]
pub fn GallerySection(images: Vec<GalleryImage>) -> impl IntoView {
    if images.is_empty() {
        return ().into_view();
    }

    let (selected, set_selected) = create_signal(None::<String>);
    let (hovered, set_hovered) = create_signal(None::<usize>);

    let tiles = images
        .iter()
        .enumerate()
        .map(|(index, image)| {
            let src = image.src.clone();
            view! {
                <div
                    class={format!("gallery-tile reveal {}", image.size.aspect_class())}
                    class:hovered=move || hovered.get() == Some(index)
                    style={format!("animation-delay: {:.2}s", index as f64 * 0.08)}
                    on:mouseenter=move |_| set_hovered.set(Some(index))
                    on:mouseleave=move |_| set_hovered.set(None)
                    on:click=move |_| set_selected.set(Some(src.clone()))
                >
                    <img src=image.src.clone() alt=image.alt.clone()/>
                    <div class="gallery-zoom">"\u{1F50D}"</div>
                </div>
            }
        })
        .collect_view();

    // The strip is rendered twice so the CSS loop has no visible seam
    let marquee = images
        .iter()
        .chain(images.iter())
        .map(|image| view! { <img src=image.src.clone() alt="" loading="lazy"/> })
        .collect_view();

    view! {
        <section id={Section::Gallery.id()} class="section gallery bg-card">
            <div class="container">
                <div class="gallery-header reveal">
                    <div>
                        <span class="eyebrow secondary">"Visual Stories"</span>
                        <h2 class="section-title">
                            "Captured " <span class="text-gradient italic">"Moments"</span>
                        </h2>
                    </div>
                    <a
                        class="btn btn-hero instagram-link"
                        href="https://instagram.com/chinchapiro"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "@chinchapiro"
                    </a>
                </div>

                <div class="gallery-masonry">{tiles}</div>
            </div>

            <div class="marquee" aria-hidden="true">
                <div class="marquee-track">{marquee}</div>
            </div>

            <div class="container">
                <div class="social-stats glass-card reveal">
                    {SOCIAL_STATS
                        .iter()
                        .map(|(value, label)| view! {
                            <div class="social-stat">
                                <div class="stat-value text-gradient">{*value}</div>
                                <div class="stat-label">{*label}</div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>

            <Show when=move || selected.with(Option::is_some)>
                <div class="lightbox" on:click=move |_| set_selected.set(None)>
                    <button
                        class="lightbox-close"
                        aria-label="Close"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_selected.set(None);
                        }
                    >
                        "\u{2715}"
                    </button>
                    <img
                        src=move || selected.get().unwrap_or_default()
                        alt="Gallery image"
                        on:click=|ev| ev.stop_propagation()
                    />
                </div>
            </Show>
        </section>
    }
    .into_view()
}
