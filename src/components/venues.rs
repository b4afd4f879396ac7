use crate::content::VenueCard;
use crate::nav::Section;
use leptos::*;
use leptos_router::A;

#[component]
fn VenueCardView(card: VenueCard, index: usize) -> impl IntoView {
    let accent = card.accent_color.class();
    view! {
        <article
            class={format!("venue-card reveal {}", accent)}
            style={format!("animation-delay: {:.2}s", index as f64 * 0.15)}
        >
            <A href=card.path class="venue-card-link">
                <div class="venue-card-glow"></div>
                <div class="venue-card-media">
                    <img src=card.image alt=card.title.clone()/>
                    <div class="venue-card-shade"></div>
                </div>
                <div class="venue-card-body">
                    <div class="venue-card-icon">{card.icon.glyph()}</div>
                    <span class="venue-card-subtitle">{card.subtitle}</span>
                    <h3>{card.title}</h3>
                    <p>{card.description}</p>
                    <span class="venue-card-cta">"Visit Venue \u{2192}"</span>
                </div>
            </A>
        </article>
    }
}

/// The landing page's venue chooser.
#[component]
pub fn VenuesSection(cards: Vec<VenueCard>) -> impl IntoView {
    view! {
        <section id={Section::Venues.id()} class="section venues">
            <div class="venues-ambient" aria-hidden="true"></div>
            <div class="container">
                <div class="section-header">
                    <span class="eyebrow reveal">"Discover Our Locations"</span>
                    <h2 class="section-title reveal" style="animation-delay: 0.1s">
                        "Choose Your " <span class="text-gradient italic">"Experience"</span>
                    </h2>
                    <p class="section-lead reveal" style="animation-delay: 0.2s">
                        "Three unique destinations, each crafted to deliver an unforgettable journey"
                    </p>
                </div>
                <div class="venues-grid">
                    {cards
                        .into_iter()
                        .enumerate()
                        .map(|(index, card)| view! { <VenueCardView card=card index=index/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
