mod not_found;
mod venue;

pub use not_found::NotFoundPage;
pub use venue::{FishSpotPage, LandingPage, RestaurantPage, TeaSpotPage};
