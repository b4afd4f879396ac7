mod about;
mod contact;
mod floating_buttons;
mod footer;
mod gallery;
mod hero;
mod lounge;
mod menu;
mod nav_bar;
mod reservation;
mod reviews;
mod toast;
mod venues;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use floating_buttons::FloatingButtons;
pub use footer::Footer;
pub use gallery::GallerySection;
pub use hero::HeroSection;
pub use lounge::LoungeSection;
pub use menu::MenuSection;
pub use nav_bar::NavBar;
pub use reservation::ReservationSection;
pub use reviews::ReviewsSection;
pub use toast::{ToastMessage, ToastViewport, Toaster};
pub use venues::VenuesSection;
