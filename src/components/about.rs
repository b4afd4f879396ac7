use crate::content::AboutContent;
use crate::nav::Section;
use leptos::*;

/// Split a title so its tail can be rendered in the accent style.
fn split_title(title: &str, lead_words: usize) -> (String, String) {
    let words: Vec<&str> = title.split_whitespace().collect();
    let cut = lead_words.min(words.len());
    (words[..cut].join(" "), words[cut..].join(" "))
}

#[component]
pub fn AboutSection(about: AboutContent) -> impl IntoView {
    let (lead, accent) = split_title(&about.title, 3);

    view! {
        <section id={Section::About.id()} class="section about noise-overlay">
            <div class="about-watermark" aria-hidden="true">"CHINCHA PIRO"</div>

            <div class="container about-grid">
                <div class="about-images reveal-left">
                    <div class="about-main-image">
                        <img src=about.image_main alt="Venue Ambience"/>
                    </div>
                    <div class="about-small-image reveal" style="animation-delay: 0.3s">
                        <img src=about.image_small alt="Detail"/>
                    </div>
                    <div class="experience-badge reveal" style="animation-delay: 0.5s">
                        <span class="badge-value">"10+"</span>
                        <span class="badge-label">"Years"</span>
                    </div>
                </div>

                <div class="about-copy reveal-right" style="animation-delay: 0.2s">
                    <span class="eyebrow">"Our Story"</span>
                    <h2 class="section-title">
                        <span class="block">{lead}</span>
                        <span class="text-gradient italic">{accent}</span>
                    </h2>
                    <p class="lead">{about.description}</p>

                    <div class="feature-list">
                        {about
                            .features
                            .into_iter()
                            .enumerate()
                            .map(|(i, feature)| {
                                view! {
                                    <div
                                        class="feature-card glass-card-hover reveal-right"
                                        style={format!("animation-delay: {:.1}s", 0.4 + i as f64 * 0.1)}
                                    >
                                        <div class="feature-icon">{feature.icon.glyph()}</div>
                                        <div class="feature-text">
                                            <h3>{feature.title}</h3>
                                            <p>{feature.description}</p>
                                        </div>
                                        <span class="feature-arrow">"\u{2197}"</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_title_after_three_words() {
        let (lead, accent) = split_title("A Culinary Journey Beyond the Ordinary", 3);
        assert_eq!(lead, "A Culinary Journey");
        assert_eq!(accent, "Beyond the Ordinary");
    }

    #[test]
    fn test_short_title_has_no_accent() {
        let (lead, accent) = split_title("Ocean to Table", 3);
        assert_eq!(lead, "Ocean to Table");
        assert_eq!(accent, "");
    }
}
