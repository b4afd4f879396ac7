use crate::nav::Section;
use leptos::*;

struct LoungeFeature {
    glyph: &'static str,
    title: &'static str,
    description: &'static str,
    color: &'static str,
}

const FEATURES: [LoungeFeature; 3] = [
    LoungeFeature {
        glyph: "\u{2728}",
        title: "Signature Cocktails",
        description: "Expertly crafted with premium spirits",
        color: "primary-pink",
    },
    LoungeFeature {
        glyph: "\u{1F3B5}",
        title: "Live Entertainment",
        description: "Weekly DJ sets and performances",
        color: "secondary-orange",
    },
    LoungeFeature {
        glyph: "\u{1F552}",
        title: "Late Night Vibes",
        description: "Open until 2 AM on weekends",
        color: "primary-secondary",
    },
];

/// Lounge & bar showcase. Only the restaurant and landing pages render it.
#[component]
pub fn LoungeSection() -> impl IntoView {
    view! {
        <section id={Section::Lounge.id()} class="section lounge">
            <div class="lounge-mesh" aria-hidden="true"></div>
            <div class="container">
                <div class="section-header reveal">
                    <span class="eyebrow">"The Experience"</span>
                    <h2 class="section-title">
                        "Lounge & " <span class="text-gradient italic">"Bar"</span>
                    </h2>
                    <p class="section-lead">
                        "Where the night comes alive. Immerse yourself in sophistication, "
                        "handcrafted cocktails, and curated beats."
                    </p>
                </div>

                <div class="bento-grid">
                    <div class="bento-tile bento-large reveal" style="animation-delay: 0.1s">
                        <img class="parallax-slow" src="/assets/lounge-1.svg" alt="Lounge Interior"/>
                        <div class="bento-caption">
                            <h3>"Premium Lounge"</h3>
                            <p>"Intimate ambiance designed for unforgettable conversations"</p>
                        </div>
                        <div class="bento-badge">"Live Music Fridays"</div>
                    </div>
                    <div class="bento-tile reveal" style="animation-delay: 0.2s">
                        <img class="parallax-fast" src="/assets/cocktail-1.svg" alt="Signature Cocktail"/>
                        <div class="bento-caption">
                            <span class="eyebrow">"Craft"</span>
                            <h3>"Artisan Cocktails"</h3>
                        </div>
                    </div>
                    <div class="bento-tile reveal" style="animation-delay: 0.3s">
                        <img src="/assets/lounge-2.svg" alt="Bar Experience"/>
                        <div class="bento-caption">
                            <span class="eyebrow secondary">"Mixology"</span>
                            <h3>"Expert Bartenders"</h3>
                        </div>
                    </div>
                </div>

                <div class="lounge-features">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(i, feature)| view! {
                            <div
                                class="lounge-feature glass-card-hover reveal"
                                style={format!("animation-delay: {:.1}s", 0.5 + i as f64 * 0.1)}
                            >
                                <div class={format!("feature-icon gradient-{}", feature.color)}>
                                    {feature.glyph}
                                </div>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
