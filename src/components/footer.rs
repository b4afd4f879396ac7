use crate::dom::{scroll_to_section, scroll_to_top};
use crate::nav::Section;
use leptos::*;

struct FooterColumn {
    title: &'static str,
    links: &'static [(&'static str, Section)],
}

const COLUMNS: [FooterColumn; 2] = [
    FooterColumn {
        title: "Navigate",
        links: &[
            ("Home", Section::Home),
            ("About", Section::About),
            ("Menu", Section::Menu),
            ("Gallery", Section::Gallery),
        ],
    },
    FooterColumn {
        title: "Experience",
        links: &[
            ("Lounge", Section::Lounge),
            ("Events", Section::Reservations),
            ("Reservations", Section::Reservations),
            ("Contact", Section::Contact),
        ],
    },
];

const SOCIALS: [(&str, &str, &str); 4] = [
    ("Instagram", "https://instagram.com/chinchapiro", "IG"),
    ("Facebook", "https://facebook.com/chinchapiro", "FB"),
    ("Twitter", "https://twitter.com/chinchapiro", "X"),
    ("Youtube", "https://youtube.com/chinchapiro", "YT"),
];

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Site footer. Its links scroll within the page and quietly do nothing when
/// the page doesn't render the target section.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer bg-card">
            <div class="container footer-grid">
                <div class="footer-brand reveal">
                    <div class="brand">
                        <div class="brand-mark gradient-primary-secondary">"\u{2728}"</div>
                        <div>
                            <h3 class="brand-name text-gradient">"Chincha Piro"</h3>
                            <span class="brand-tag">"Lounge & Bar"</span>
                        </div>
                    </div>
                    <p class="footer-blurb">
                        "Where flavor meets vibe. Experience authentic Nepali fusion cuisine, "
                        "crafted cocktails, and unforgettable nights in the heart of Kathmandu."
                    </p>
                    <div class="footer-socials">
                        {SOCIALS
                            .iter()
                            .map(|(label, href, mark)| view! {
                                <a
                                    class="social-link glass-card"
                                    href=*href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=*label
                                >
                                    {*mark}
                                </a>
                            })
                            .collect_view()}
                    </div>
                </div>

                {COLUMNS
                    .iter()
                    .enumerate()
                    .map(|(i, column)| view! {
                        <div
                            class="footer-column reveal"
                            style={format!("animation-delay: {:.1}s", 0.1 * (i + 1) as f64)}
                        >
                            <h4>{column.title}</h4>
                            <ul>
                                {column
                                    .links
                                    .iter()
                                    .map(|&(name, section)| view! {
                                        <li>
                                            <a
                                                href={format!("#{}", section.id())}
                                                on:click=move |ev| {
                                                    ev.prevent_default();
                                                    scroll_to_section(section);
                                                }
                                            >
                                                {name}
                                                <span class="link-arrow">"\u{2197}"</span>
                                            </a>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="container footer-bottom">
                <p>
                    {format!(
                        "\u{A9} {} Chincha Piro Restaurant Lounge & Bar. All rights reserved.",
                        current_year()
                    )}
                </p>
                <div class="footer-credits">
                    <p>
                        "Design and Developed by "
                        <a href="https://bleedingtech.com.np" target="_blank" rel="noopener noreferrer">
                            "Bleeding Tech Pvt. Ltd."
                        </a>
                    </p>
                    <button
                        class="back-to-top glass-card"
                        aria-label="Back to top"
                        on:click=move |_| scroll_to_top()
                    >
                        "\u{2303}"
                    </button>
                </div>
            </div>
        </footer>
    }
}
