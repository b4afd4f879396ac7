use super::route::{Route, Section};

/// An entry in a dropdown: a sibling venue opened in a new tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteLink {
    pub name: &'static str,
    pub route: Route,
}

/// A navbar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLink {
    /// Smooth-scrolls to a section on the current page.
    Scroll { name: &'static str, section: Section },
    /// Opens a menu of routes; each item navigates in a new browsing context.
    Dropdown {
        name: &'static str,
        items: &'static [RouteLink],
    },
}

impl NavLink {
    pub fn name(&self) -> &'static str {
        match self {
            NavLink::Scroll { name, .. } | NavLink::Dropdown { name, .. } => name,
        }
    }

    pub fn section(&self) -> Option<Section> {
        match self {
            NavLink::Scroll { section, .. } => Some(*section),
            NavLink::Dropdown { .. } => None,
        }
    }
}

const fn scroll(name: &'static str, section: Section) -> NavLink {
    NavLink::Scroll { name, section }
}

const fn venue(name: &'static str, route: Route) -> RouteLink {
    RouteLink { name, route }
}

const LANDING_LINKS: &[NavLink] = &[
    scroll("Home", Section::Home),
    scroll("About", Section::About),
    scroll("Menu", Section::Menu),
    scroll("Lounge", Section::Lounge),
    scroll("Gallery", Section::Gallery),
    scroll("Contact", Section::Contact),
    NavLink::Dropdown {
        name: "Venues",
        items: &[
            venue("Restaurant", Route::Restaurant),
            venue("Tea Spot", Route::TeaSpot),
            venue("Fish Spot", Route::FishSpot),
        ],
    },
];

const RESTAURANT_LINKS: &[NavLink] = &[
    scroll("Home", Section::Home),
    scroll("About", Section::About),
    scroll("Menu", Section::Menu),
    scroll("Lounge", Section::Lounge),
    scroll("Gallery", Section::Gallery),
    scroll("Contact", Section::Contact),
    NavLink::Dropdown {
        name: "Venues",
        items: &[
            venue("Tea Spot", Route::TeaSpot),
            venue("Fish Spot", Route::FishSpot),
        ],
    },
];

const TEA_SPOT_LINKS: &[NavLink] = &[
    scroll("Home", Section::Home),
    scroll("About", Section::About),
    scroll("Menu", Section::Menu),
    scroll("Gallery", Section::Gallery),
    scroll("Contact", Section::Contact),
    NavLink::Dropdown {
        name: "Venues",
        items: &[
            venue("Restaurant", Route::Restaurant),
            venue("Fish Spot", Route::FishSpot),
        ],
    },
];

const FISH_SPOT_LINKS: &[NavLink] = &[
    scroll("Home", Section::Home),
    scroll("About", Section::About),
    scroll("Menu", Section::Menu),
    scroll("Gallery", Section::Gallery),
    scroll("Contact", Section::Contact),
    NavLink::Dropdown {
        name: "Venues",
        items: &[
            venue("Restaurant", Route::Restaurant),
            venue("Tea Spot", Route::TeaSpot),
        ],
    },
];

/// Route-keyed link table. Order within each entry is both the visual order
/// and the scroll-spy precedence.
const LINK_TABLE: [(Route, &[NavLink]); 4] = [
    (Route::Landing, LANDING_LINKS),
    (Route::Restaurant, RESTAURANT_LINKS),
    (Route::TeaSpot, TEA_SPOT_LINKS),
    (Route::FishSpot, FISH_SPOT_LINKS),
];

pub fn links_for(route: Route) -> &'static [NavLink] {
    LINK_TABLE
        .iter()
        .find(|(r, _)| *r == route)
        .map(|(_, links)| *links)
        .unwrap_or(LANDING_LINKS)
}

/// Build the link set for a router pathname. Unrecognized paths get the
/// landing set without any warning.
pub fn compute_link_set(path: &str) -> &'static [NavLink] {
    links_for(Route::from_path(path))
}

/// Scroll-type entries of a link set, in link order.
pub fn scroll_sections(links: &[NavLink]) -> impl DoubleEndedIterator<Item = Section> + '_ {
    links.iter().filter_map(NavLink::section)
}
