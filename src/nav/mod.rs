mod controller;
mod frame_gate;
mod links;
mod route;
mod scroll_spy;

pub use controller::{NavTarget, NavigationController, Viewport};
pub use frame_gate::FrameGate;
pub use links::{compute_link_set, links_for, scroll_sections, NavLink, RouteLink};
pub use route::{normalize_path, Route, Section};
pub use scroll_spy::{
    is_past_threshold, resolve_active_section, ScrollState, SCROLL_THRESHOLD_PX,
    SECTION_LOOKAHEAD_PX,
};
