use crate::components::{
    AboutSection, ContactSection, FloatingButtons, Footer, GallerySection, HeroSection,
    LoungeSection, MenuSection, ReservationSection, ReviewsSection, VenuesSection,
};
use crate::content::{load_venue, load_venue_cards, ContentError, Venue, VenueCard, VenueContent};
use crate::nav::{Route, Section};
use leptos::*;

/// Which venue's content a route's page is filled with. The landing page
/// borrows the restaurant's.
fn venue_for(route: Route) -> Venue {
    match route {
        Route::Landing | Route::Restaurant => Venue::Restaurant,
        Route::TeaSpot => Venue::TeaSpot,
        Route::FishSpot => Venue::FishSpot,
    }
}

fn render_section(section: Section, content: &VenueContent, cards: &[VenueCard]) -> View {
    match section {
        Section::Home => view! { <HeroSection hero=content.hero.clone()/> }.into_view(),
        Section::Venues => view! { <VenuesSection cards=cards.to_vec()/> }.into_view(),
        Section::About => view! { <AboutSection about=content.about.clone()/> }.into_view(),
        Section::Menu => view! { <MenuSection menu=content.menu.clone()/> }.into_view(),
        Section::Lounge => view! { <LoungeSection/> }.into_view(),
        Section::Gallery => {
            view! { <GallerySection images=content.gallery.clone()/> }.into_view()
        }
        Section::Reviews => {
            view! { <ReviewsSection reviews=content.reviews.clone()/> }.into_view()
        }
        Section::Reservations => view! {
            <ReservationSection background_image=content.hero.background_image.clone()/>
        }
        .into_view(),
        Section::Contact => {
            view! { <ContactSection contact=content.contact.clone()/> }.into_view()
        }
    }
}

/// One scrolling page: the route's sections in document order, then the
/// footer and quick actions.
fn venue_page(route: Route, cards: &[VenueCard]) -> Result<View, ContentError> {
    let content = load_venue(venue_for(route))?;
    let sections = route
        .sections()
        .iter()
        .map(|&section| render_section(section, &content, cards))
        .collect_view();

    Ok(view! {
        <div class={format!("page page-{}", venue_for(route).name())}>
            <main>{sections}</main>
            <Footer/>
            <FloatingButtons/>
        </div>
    }
    .into_view())
}

#[component]
pub fn LandingPage() -> impl IntoView {
    load_venue_cards().and_then(|cards| venue_page(Route::Landing, &cards))
}

#[component]
pub fn RestaurantPage() -> impl IntoView {
    venue_page(Route::Restaurant, &[])
}

#[component]
pub fn TeaSpotPage() -> impl IntoView {
    venue_page(Route::TeaSpot, &[])
}

#[component]
pub fn FishSpotPage() -> impl IntoView {
    venue_page(Route::FishSpot, &[])
}
