mod carousel;
mod reservation;

pub use carousel::{Carousel, AUTOPLAY_PERIOD};
pub use reservation::{
    guest_label, Field, FormPhase, PendingReset, ReservationForm, DEFAULT_GUESTS, GUEST_OPTIONS,
    NAME_MAX_LEN, PHONE_MAX_LEN, RESET_DELAY,
};
