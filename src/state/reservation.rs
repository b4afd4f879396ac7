use std::time::Duration;

/// How long the confirmation panel stays up before the form clears.
pub const RESET_DELAY: Duration = Duration::from_secs(3);

pub const NAME_MAX_LEN: usize = 100;
pub const PHONE_MAX_LEN: usize = 20;
pub const DEFAULT_GUESTS: &str = "2";

/// Values offered in the guests dropdown, in display order.
pub const GUEST_OPTIONS: [&str; 11] = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "10+"];

pub fn guest_label(value: &str) -> String {
    match value {
        "1" => "1 Guest".to_string(),
        other => format!("{} Guests", other),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Date,
    Time,
    Guests,
}

impl Field {
    pub const ALL: [Field; 5] = [Field::Name, Field::Phone, Field::Date, Field::Time, Field::Guests];

    /// The form control's `name` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Date => "date",
            Field::Time => "time",
            Field::Guests => "guests",
        }
    }
}

/// Reservation request as typed into the form. Nothing is sent anywhere;
/// constraints are enforced by the input attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationForm {
    pub name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: String,
}

impl Default for ReservationForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            date: String::new(),
            time: String::new(),
            guests: DEFAULT_GUESTS.to_string(),
        }
    }
}

impl ReservationForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::Guests => &self.guests,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
            Field::Guests => &mut self.guests,
        };
        *slot = value;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Form lifecycle: editing, then a short confirmation before starting over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitted,
}

/// The form's pending reset timer. The view that arms it clears whatever
/// is left on unmount.
#[derive(Debug)]
pub struct PendingReset<H> {
    handle: Option<H>,
}

impl<H> Default for PendingReset<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> PendingReset<H> {
    /// Track a new timer. Returns the one it replaces, which the caller clears.
    pub fn arm(&mut self, handle: H) -> Option<H> {
        self.handle.replace(handle)
    }

    pub fn disarm(&mut self) -> Option<H> {
        self.handle.take()
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_form_has_two_guests() {
        let form = ReservationForm::default();
        assert_eq!(form.guests, "2");
        assert!(form.name.is_empty());
    }

    #[test]
    fn test_set_each_field() {
        let mut form = ReservationForm::default();
        let values = ["Priya", "+977 9800000000", "2026-11-01", "19:30", "10+"];
        for (field, value) in Field::ALL.into_iter().zip(values) {
            form.set(field, value.to_string());
            assert_eq!(form.get(field), value);
        }
        assert_eq!(form.guests, "10+");
        assert_eq!(form.name, "Priya");
    }

    #[test]
    fn test_field_names_are_distinct() {
        let names: HashSet<_> = Field::ALL.iter().map(Field::name).collect();
        assert_eq!(names.len(), Field::ALL.len());
        assert!(names.contains("guests"));
    }

    #[test]
    fn test_rearming_hands_back_the_stale_timer() {
        let mut pending = PendingReset::default();
        assert!(!pending.is_armed());
        assert_eq!(pending.arm(1), None);
        assert_eq!(pending.arm(2), Some(1));
        assert!(pending.is_armed());
    }

    #[test]
    fn test_unmount_clears_the_pending_timer() {
        let mut pending = PendingReset::default();
        pending.arm(7);
        assert_eq!(pending.disarm(), Some(7));
        assert!(!pending.is_armed());
        assert_eq!(pending.disarm(), None);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = ReservationForm::default();
        form.set(Field::Name, "Rohan".to_string());
        form.set(Field::Guests, "6".to_string());
        form.reset();
        assert_eq!(form, ReservationForm::default());
    }

    #[test]
    fn test_guest_labels() {
        assert_eq!(guest_label("1"), "1 Guest");
        assert_eq!(guest_label("2"), "2 Guests");
        assert_eq!(guest_label("10+"), "10+ Guests");
        assert_eq!(GUEST_OPTIONS.first(), Some(&"1"));
        assert_eq!(GUEST_OPTIONS.last(), Some(&"10+"));
        assert!(GUEST_OPTIONS.contains(&DEFAULT_GUESTS));
    }
}
