use serde::Deserialize;

use super::menu::ALL_CATEGORY;

/// Icons referenced from content files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Utensils,
    Wine,
    Music,
    Coffee,
    Fish,
    Anchor,
    MapPin,
    Phone,
    Clock,
    Mail,
    Sparkles,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Utensils => "\u{1F374}",
            Icon::Wine => "\u{1F377}",
            Icon::Music => "\u{1F3B5}",
            Icon::Coffee => "\u{2615}",
            Icon::Fish => "\u{1F41F}",
            Icon::Anchor => "\u{2693}",
            Icon::MapPin => "\u{1F4CD}",
            Icon::Phone => "\u{1F4DE}",
            Icon::Clock => "\u{1F552}",
            Icon::Mail => "\u{2709}",
            Icon::Sparkles => "\u{2728}",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub title_line1: String,
    pub title_line2: String,
    pub title_line3: String,
    pub subtitle: String,
    pub background_image: String,
    #[serde(default = "default_show_reservation")]
    pub show_reservation: bool,
}

fn default_show_reservation() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Feature {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub title: String,
    pub description: String,
    pub image_main: String,
    pub image_small: String,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuContent {
    pub title: String,
    pub description: String,
    pub categories: Vec<String>,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Review {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: u8,
    pub avatar: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    Small,
    Medium,
    Large,
}

impl ImageSize {
    pub fn aspect_class(&self) -> &'static str {
        match self {
            ImageSize::Large => "aspect-portrait",
            ImageSize::Medium => "aspect-landscape",
            ImageSize::Small => "aspect-square",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    pub size: ImageSize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactLocation {
    pub address: Vec<String>,
    pub map_embed_url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactInfo {
    pub icon: Icon,
    pub title: String,
    pub lines: Vec<String>,
    /// Gradient class suffix for the icon tile.
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactContent {
    pub location: ContactLocation,
    pub info: Vec<ContactInfo>,
}

/// Everything a venue page renders.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VenueContent {
    pub hero: HeroContent,
    pub about: AboutContent,
    pub menu: MenuContent,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub gallery: Vec<GalleryImage>,
    pub contact: ContactContent,
}

impl VenueContent {
    /// Catch content mistakes the type system can't: ratings out of range and
    /// menu items filed under a category with no filter button.
    pub(super) fn check(&self) -> Result<(), String> {
        for item in &self.menu.items {
            if item.category == ALL_CATEGORY || !self.menu.categories.contains(&item.category) {
                return Err(format!(
                    "menu item {:?} has category {:?} not in {:?}",
                    item.name, item.category, self.menu.categories
                ));
            }
        }
        if let Some(review) = self.reviews.iter().find(|r| !(1..=5).contains(&r.rating)) {
            return Err(format!(
                "review by {:?} has rating {}",
                review.name, review.rating
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    Pink,
    Orange,
}

impl AccentColor {
    pub fn class(&self) -> &'static str {
        match self {
            AccentColor::Pink => "accent-pink",
            AccentColor::Orange => "accent-orange",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueCard {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub path: String,
    pub image: String,
    pub icon: Icon,
    pub accent_color: AccentColor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_names_are_kebab_case() {
        let icon: Icon = serde_json::from_str("\"map-pin\"").unwrap();
        assert_eq!(icon, Icon::MapPin);
        assert!(serde_json::from_str::<Icon>("\"MapPin\"").is_err());
    }

    #[test]
    fn test_image_size_aspect_classes() {
        assert_eq!(ImageSize::Large.aspect_class(), "aspect-portrait");
        assert_eq!(ImageSize::Medium.aspect_class(), "aspect-landscape");
        assert_eq!(ImageSize::Small.aspect_class(), "aspect-square");
    }

    #[test]
    fn test_hero_defaults_to_showing_reservation() {
        let hero: HeroContent = serde_json::from_str(
            r#"{"titleLine1":"A","titleLine2":"B","titleLine3":"C","subtitle":"s","backgroundImage":"/x.jpg"}"#,
        )
        .unwrap();
        assert!(hero.show_reservation);
    }

    #[test]
    fn test_out_of_range_rating_fails_check() {
        let mut content: VenueContent =
            serde_json::from_str(include_str!("../../content/tea-spot.json")).unwrap();
        assert!(content.check().is_ok());
        content.reviews[0].rating = 6;
        assert!(content.check().unwrap_err().contains("rating 6"));
    }
}
