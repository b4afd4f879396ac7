use crate::content::HeroContent;
use crate::dom::scroll_to_section;
use crate::nav::Section;
use leptos::*;

/// Staggered entrance delays for the three title lines, in seconds.
const TITLE_DELAYS: [f64; 3] = [0.4, 0.5, 0.6];

#[component]
pub fn HeroSection(hero: HeroContent) -> impl IntoView {
    let HeroContent {
        title_line1,
        title_line2,
        title_line3,
        subtitle,
        background_image,
        show_reservation,
    } = hero;

    // The restaurant's third line is split into a solid and an outlined word
    let third_line = if title_line3 == "Meets Vibe" {
        view! {
            <span class="text-foreground">"Meets "</span>
            <span class="text-outline">"Vibe"</span>
        }
        .into_view()
    } else {
        view! { <span class="text-foreground">{title_line3}</span> }.into_view()
    };

    view! {
        <section id={Section::Home.id()} class="hero">
            <div class="hero-background">
                <img src=background_image alt="Hero Background" loading="eager"/>
                <div class="hero-overlay"></div>
            </div>
            <div class="hero-orbs" aria-hidden="true">
                <div class="orb orb-pink"></div>
                <div class="orb orb-orange"></div>
            </div>

            <div class="hero-content container">
                <div class="hero-badge reveal" style="animation-delay: 0.2s">
                    <span class="badge">"\u{2728} " <span class="text-gradient">"Premium Experience"</span></span>
                </div>

                <h1 class="hero-title">
                    <span class="hero-line reveal-up" style={format!("animation-delay: {}s", TITLE_DELAYS[0])}>
                        {title_line1}
                    </span>
                    <span class="hero-line reveal-up" style={format!("animation-delay: {}s", TITLE_DELAYS[1])}>
                        <span class="text-gradient-animated italic">{title_line2}</span>
                    </span>
                    <span class="hero-line reveal-up" style={format!("animation-delay: {}s", TITLE_DELAYS[2])}>
                        {third_line}
                    </span>
                </h1>

                <p class="hero-subtitle reveal" style="animation-delay: 0.8s">{subtitle}</p>

                <div class="hero-actions reveal" style="animation-delay: 1s">
                    <button
                        class="btn btn-hero btn-xl"
                        on:click=move |_| {
                            scroll_to_section(Section::Menu);
                        }
                    >
                        "Explore Menu " <span class="nudge">"\u{2192}"</span>
                    </button>
                    {show_reservation.then(|| view! {
                        <button
                            class="btn btn-hero-outline btn-xl"
                            on:click=move |_| {
                                scroll_to_section(Section::Reservations);
                            }
                        >
                            "\u{25B6} Reserve Table"
                        </button>
                    })}
                </div>
            </div>

            <div class="hero-side-text" aria-hidden="true">
                <span>"Est. 2014"</span>
            </div>
        </section>
    }
}
