use crate::content::ContactContent;
use crate::nav::Section;
use leptos::*;

#[component]
pub fn ContactSection(contact: ContactContent) -> impl IntoView {
    let city = contact
        .location
        .address
        .first()
        .cloned()
        .unwrap_or_default();

    view! {
        <section id={Section::Contact.id()} class="section contact">
            <div class="contact-glow" aria-hidden="true"></div>
            <div class="container">
                <div class="section-header reveal">
                    <span class="eyebrow">"Find Us"</span>
                    <h2 class="section-title">
                        "Visit " <span class="text-gradient italic">"Chincha Piro"</span>
                    </h2>
                    <p class="section-lead">
                        {format!("We're located in {}. Come experience the magic in person.", city)}
                    </p>
                </div>

                <div class="contact-grid">
                    <div class="contact-map glass-card reveal" style="animation-delay: 0.2s">
                        <iframe
                            src=contact.location.map_embed_url
                            width="100%"
                            height="100%"
                            style="border: 0"
                            allowfullscreen=true
                            loading="lazy"
                            referrerpolicy="no-referrer-when-downgrade"
                            title="Location Map"
                        ></iframe>
                        <div class="contact-map-shade" aria-hidden="true"></div>
                        <a
                            class="directions-link"
                            href="https://maps.google.com"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            "Get Directions \u{2197}"
                        </a>
                    </div>

                    <div class="contact-info">
                        {contact
                            .info
                            .into_iter()
                            .enumerate()
                            .map(|(i, info)| view! {
                                <div
                                    class="contact-card glass-card-hover reveal-right"
                                    style={format!("animation-delay: {:.1}s", 0.3 + i as f64 * 0.1)}
                                >
                                    <div class={format!("contact-icon gradient-{}", info.color)}>
                                        {info.icon.glyph()}
                                    </div>
                                    <div>
                                        <h3>{info.title}</h3>
                                        {info
                                            .lines
                                            .into_iter()
                                            .map(|line| view! { <p>{line}</p> })
                                            .collect_view()}
                                    </div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
