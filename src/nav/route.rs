/// Page sections that can be scroll targets.
///
/// `id()` is the DOM id each section component renders, so it doubles as the
/// anchor used by smooth scrolling and the scroll-spy lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Venues,
    About,
    Menu,
    Lounge,
    Gallery,
    Reviews,
    Reservations,
    Contact,
}

impl Section {
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Venues => "venues",
            Section::About => "about",
            Section::Menu => "menu",
            Section::Lounge => "lounge",
            Section::Gallery => "gallery",
            Section::Reviews => "reviews",
            Section::Reservations => "reservations",
            Section::Contact => "contact",
        }
    }
}

/// Drop a single trailing slash, keeping the root path as is.
pub fn normalize_path(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

/// The routes the navbar knows how to build links for.
///
/// `Landing` is also the fallback for any path not in this table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Restaurant,
    TeaSpot,
    FishSpot,
}

impl Route {
    pub const ALL: [Route; 4] = [
        Route::Landing,
        Route::Restaurant,
        Route::TeaSpot,
        Route::FishSpot,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Restaurant => "/restaurant",
            Route::TeaSpot => "/tea-spot",
            Route::FishSpot => "/fish-spot",
        }
    }

    /// Map a router pathname to a route. Unknown paths silently become `Landing`.
    pub fn from_path(path: &str) -> Route {
        let trimmed = normalize_path(path);
        Route::ALL
            .into_iter()
            .find(|route| route.path() == trimmed)
            .unwrap_or(Route::Landing)
    }

    /// Sections the page for this route renders, in document order.
    pub fn sections(&self) -> &'static [Section] {
        use Section::*;
        match self {
            Route::Landing => &[
                Home,
                Venues,
                About,
                Menu,
                Lounge,
                Gallery,
                Reviews,
                Reservations,
                Contact,
            ],
            Route::Restaurant => &[
                Home,
                About,
                Menu,
                Lounge,
                Gallery,
                Reviews,
                Reservations,
                Contact,
            ],
            Route::TeaSpot => &[Home, About, Menu, Gallery, Reviews, Contact],
            Route::FishSpot => &[Home, About, Menu, Gallery, Reviews, Reservations, Contact],
        }
    }

    pub fn has_section(&self, section: Section) -> bool {
        self.sections().contains(&section)
    }
}
