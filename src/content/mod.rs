//! Static venue content.
//!
//! Each venue's copy, menu, reviews and contact details live as JSON under
//! `content/` and are compiled into the binary. Parsing happens on first use
//! and is cached per thread.

mod menu;
mod model;

pub use menu::{filter_menu, initial_category, ALL_CATEGORY};
pub use model::{
    AboutContent, AccentColor, ContactContent, ContactInfo, ContactLocation, Feature,
    GalleryImage, HeroContent, Icon, ImageSize, MenuContent, MenuItem, Review, VenueCard,
    VenueContent,
};

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

const RESTAURANT_JSON: &str = include_str!("../../content/restaurant.json");
const TEA_SPOT_JSON: &str = include_str!("../../content/tea-spot.json");
const FISH_SPOT_JSON: &str = include_str!("../../content/fish-spot.json");
const VENUES_JSON: &str = include_str!("../../content/venues.json");

/// The three venue variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Venue {
    Restaurant,
    TeaSpot,
    FishSpot,
}

impl Venue {
    pub const ALL: [Venue; 3] = [Venue::Restaurant, Venue::TeaSpot, Venue::FishSpot];

    pub fn name(&self) -> &'static str {
        match self {
            Venue::Restaurant => "restaurant",
            Venue::TeaSpot => "tea-spot",
            Venue::FishSpot => "fish-spot",
        }
    }

    fn source(&self) -> &'static str {
        match self {
            Venue::Restaurant => RESTAURANT_JSON,
            Venue::TeaSpot => TEA_SPOT_JSON,
            Venue::FishSpot => FISH_SPOT_JSON,
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum ContentError {
    #[error("content for {venue} is malformed: {message}")]
    Malformed { venue: &'static str, message: String },
    #[error("content for {venue} is incomplete: {message}")]
    Incomplete { venue: &'static str, message: String },
}

thread_local! {
    static CACHE: RefCell<HashMap<Venue, Rc<VenueContent>>> = RefCell::new(HashMap::new());
}

/// Parse and sanity-check one venue's content without touching the cache.
pub fn parse_venue(venue: Venue, json: &str) -> Result<VenueContent, ContentError> {
    let content: VenueContent =
        serde_json::from_str(json).map_err(|e| ContentError::Malformed {
            venue: venue.name(),
            message: e.to_string(),
        })?;
    content.check().map_err(|message| ContentError::Incomplete {
        venue: venue.name(),
        message,
    })?;
    Ok(content)
}

/// Load a venue's compiled-in content.
pub fn load_venue(venue: Venue) -> Result<Rc<VenueContent>, ContentError> {
    if let Some(cached) = CACHE.with(|cache| cache.borrow().get(&venue).cloned()) {
        return Ok(cached);
    }
    let content = Rc::new(parse_venue(venue, venue.source()).inspect_err(|e| {
        leptos::logging::warn!("Chincha Piro: {}", e);
    })?);
    CACHE.with(|cache| cache.borrow_mut().insert(venue, content.clone()));
    Ok(content)
}

/// Cards for the landing page's venue chooser.
pub fn load_venue_cards() -> Result<Vec<VenueCard>, ContentError> {
    serde_json::from_str(VENUES_JSON).map_err(|e| ContentError::Malformed {
        venue: "venues",
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_venues_parse() {
        for venue in Venue::ALL {
            let content = load_venue(venue).unwrap_or_else(|e| panic!("{}", e));
            assert!(!content.menu.items.is_empty(), "{:?} has no menu", venue);
            assert!(!content.reviews.is_empty(), "{:?} has no reviews", venue);
            assert!(!content.gallery.is_empty(), "{:?} has no gallery", venue);
        }
    }

    #[test]
    fn test_load_is_cached() {
        let a = load_venue(Venue::FishSpot).unwrap();
        let b = load_venue(Venue::FishSpot).unwrap();
        assert!(Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_hero_reservation_flags() {
        assert!(load_venue(Venue::Restaurant).unwrap().hero.show_reservation);
        assert!(!load_venue(Venue::TeaSpot).unwrap().hero.show_reservation);
        assert!(load_venue(Venue::FishSpot).unwrap().hero.show_reservation);
    }

    #[test]
    fn test_fish_spot_is_in_pokhara() {
        let content = load_venue(Venue::FishSpot).unwrap();
        assert_eq!(content.contact.location.address[0], "Lakeside, Pokhara");
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let err = parse_venue(Venue::TeaSpot, "{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Malformed { venue: "tea-spot", .. }));
        assert!(err.to_string().starts_with("content for tea-spot is malformed"));
    }

    #[test]
    fn test_menu_item_with_unknown_category_is_rejected() {
        let mut json: serde_json::Value = serde_json::from_str(RESTAURANT_JSON).unwrap();
        json["menu"]["items"][0]["category"] = "Desserts".into();
        let err = parse_venue(Venue::Restaurant, &json.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::Incomplete { .. }));
    }

    #[test]
    fn test_venue_cards_cover_every_venue() {
        let cards = load_venue_cards().unwrap();
        let paths: Vec<_> = cards.iter().map(|c| c.path.as_str()).collect();
        assert_eq!(paths, ["/restaurant", "/tea-spot", "/fish-spot"]);
    }

    fn local_assets(source: &str) -> Vec<&str> {
        source
            .match_indices("/assets/")
            .map(|(start, _)| {
                let rest = &source[start..];
                let end = rest.find('"').unwrap_or(rest.len());
                &rest[..end]
            })
            .collect()
    }

    #[test]
    fn test_local_images_exist() {
        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
        let sources = [
            RESTAURANT_JSON,
            TEA_SPOT_JSON,
            FISH_SPOT_JSON,
            VENUES_JSON,
            include_str!("../components/lounge.rs"),
        ];
        let referenced: Vec<_> = sources.iter().flat_map(|s| local_assets(s)).collect();
        assert!(!referenced.is_empty());
        for path in referenced {
            assert!(
                root.join(path.trim_start_matches('/')).is_file(),
                "{} is referenced but missing",
                path
            );
        }
    }
}
