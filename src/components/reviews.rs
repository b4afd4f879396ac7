use crate::content::Review;
use crate::nav::Section;
use crate::state::{Carousel, AUTOPLAY_PERIOD};
use leptos::*;
use std::rc::Rc;

const STATS: [(&str, &str, &str); 4] = [
    ("4.9", "Rating", "\u{2B50}"),
    ("15K+", "Followers", "\u{1F4F8}"),
    ("500+", "Reviews", "\u{1F4AC}"),
    ("10+", "Years", "\u{1F3C6}"),
];

#[component]
pub fn ReviewsSection(reviews: Vec<Review>) -> impl IntoView {
    if reviews.is_empty() {
        return ().into_view();
    }

    let reviews = Rc::new(reviews);
    let carousel = create_rw_signal(Carousel::new(reviews.len()));

    let autoplay = move || {
        if carousel.with_untracked(|c| c.is_autoplay()) {
            carousel.update(|c| c.tick());
        }
    };
    match set_interval_with_handle(autoplay, AUTOPLAY_PERIOD) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(_) => leptos::logging::warn!("Chincha Piro: review autoplay unavailable"),
    }

    let current = {
        let reviews = reviews.clone();
        move || reviews[carousel.with(|c| c.index())].clone()
    };

    let slide = move || {
        let review = current();
        view! {
            <div class="review-slide fade-in">
                <div class="review-stars">
                    {(0..review.rating).map(|_| view! { <span class="star">"\u{2605}"</span> }).collect_view()}
                </div>
                <p class="review-quote">"\u{201C}" {review.content} "\u{201D}"</p>
                <div class="review-author">
                    <div class="review-avatar">{review.avatar}</div>
                    <div>
                        <div class="review-name">{review.name}</div>
                        <div class="review-role">{review.role}</div>
                    </div>
                </div>
            </div>
        }
    };

    let dots = (0..reviews.len())
        .map(|index| {
            view! {
                <button
                    class="carousel-dot"
                    class:active=move || carousel.with(|c| c.index() == index)
                    aria-label={format!("Show review {}", index + 1)}
                    on:click=move |_| carousel.update(|c| c.select(index))
                ></button>
            }
        })
        .collect_view();

    view! {
        <section id={Section::Reviews.id()} class="section reviews">
            <div class="container">
                <div class="stats-grid reveal">
                    {STATS
                        .iter()
                        .enumerate()
                        .map(|(i, (value, label, icon))| view! {
                            <div
                                class="stat-card glass-card-hover reveal"
                                style={format!("animation-delay: {:.1}s", i as f64 * 0.1)}
                            >
                                <div class="stat-icon">{*icon}</div>
                                <div class="stat-value text-gradient">{*value}</div>
                                <div class="stat-label">{*label}</div>
                            </div>
                        })
                        .collect_view()}
                </div>

                <div class="section-header reveal">
                    <span class="eyebrow">"Testimonials"</span>
                    <h2 class="section-title">
                        "What Our Guests " <span class="text-gradient italic">"Say"</span>
                    </h2>
                </div>

                <div class="carousel">
                    <div class="carousel-card glass-card">{slide}</div>
                    <div class="carousel-controls">
                        <div class="carousel-dots">{dots}</div>
                        <div class="carousel-arrows">
                            <button
                                class="carousel-arrow"
                                aria-label="Previous review"
                                on:click=move |_| carousel.update(|c| c.prev())
                            >
                                "\u{2039}"
                            </button>
                            <button
                                class="carousel-arrow"
                                aria-label="Next review"
                                on:click=move |_| carousel.update(|c| c.next())
                            >
                                "\u{203A}"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
    .into_view()
}
