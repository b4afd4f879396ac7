use crate::components::Toaster;
use crate::nav::Section;
use crate::state::{
    guest_label, Field, FormPhase, PendingReset, ReservationForm, GUEST_OPTIONS, NAME_MAX_LEN,
    PHONE_MAX_LEN, RESET_DELAY,
};
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;

#[component]
fn TextField(
    form: RwSignal<ReservationForm>,
    focused: RwSignal<Option<Field>>,
    field: Field,
    label: &'static str,
    input_type: &'static str,
    icon: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] max_length: Option<usize>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label>{label}</label>
            <div class="input-wrap">
                <span class="input-icon" class:focused=move || focused.get() == Some(field)>{icon}</span>
                <input
                    type=input_type
                    name=field.name()
                    required=true
                    maxlength=max_length
                    placeholder=placeholder
                    prop:value=move || form.with(|f| f.get(field).to_string())
                    on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                    on:focus=move |_| focused.set(Some(field))
                    on:blur=move |_| focused.set(None)
                />
            </div>
        </div>
    }
}

#[component]
pub fn ReservationSection(background_image: String) -> impl IntoView {
    let form = create_rw_signal(ReservationForm::default());
    let focused = create_rw_signal(None::<Field>);
    let (phase, set_phase) = create_signal(FormPhase::Editing);
    let toaster = Toaster::use_toaster();
    let pending = store_value(PendingReset::<TimeoutHandle>::default());
    on_cleanup(move || {
        if let Some(handle) = pending.try_update_value(|p| p.disarm()).flatten() {
            handle.clear();
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_phase.set(FormPhase::Submitted);
        if let Some(toaster) = toaster {
            toaster.show(
                "Reservation Request Sent! \u{1F389}",
                "We'll confirm your booking shortly via phone.",
            );
        }
        let reset = move || {
            pending.try_update_value(|p| p.disarm());
            set_phase.try_set(FormPhase::Editing);
            form.try_update(|f| f.reset());
        };
        match set_timeout_with_handle(reset, RESET_DELAY) {
            Ok(handle) => {
                if let Some(stale) = pending.try_update_value(|p| p.arm(handle)).flatten() {
                    stale.clear();
                }
            }
            Err(_) => leptos::logging::warn!("Chincha Piro: could not schedule form reset"),
        }
    };

    view! {
        <section id={Section::Reservations.id()} class="reservations">
            <div class="reservations-background">
                <img src=background_image alt=""/>
                <div class="reservations-overlay"></div>
            </div>

            <div class="container reservations-grid">
                <div class="reservations-copy reveal-left">
                    <span class="eyebrow secondary">"\u{2728} Reservations"</span>
                    <h2 class="section-title">
                        "Reserve Your " <span class="text-gradient italic">"Experience"</span>
                    </h2>
                    <p class="lead">
                        "Whether it's an intimate dinner for two or a celebration with friends, "
                        "we're ready to craft an evening you'll never forget."
                    </p>
                    <div class="contact-chips">
                        <div class="contact-chip glass-card-hover">
                            <div class="chip-icon gradient-primary-pink">"\u{1F4DE}"</div>
                            <div>
                                <div class="chip-label">"Call for instant booking"</div>
                                <div class="chip-value">"+977 1-4123456"</div>
                            </div>
                        </div>
                        <div class="contact-chip glass-card-hover">
                            <div class="chip-icon gradient-secondary-orange">"\u{1F552}"</div>
                            <div>
                                <div class="chip-label">"Opening Hours"</div>
                                <div class="chip-value">"12 PM \u{2013} 2 AM Daily"</div>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="reservation-card glass-card reveal-right">
                    <Show
                        when=move || phase.get() == FormPhase::Editing
                        fallback=|| view! {
                            <div class="reservation-confirmed">
                                <div class="confirmed-icon">"\u{2714}"</div>
                                <h3>"Reservation Received!"</h3>
                                <p>"We'll call you to confirm shortly."</p>
                            </div>
                        }
                    >
                        <form class="reservation-form" on:submit=on_submit>
                            <TextField
                                form=form
                                focused=focused
                                field=Field::Name
                                label="Your Name"
                                input_type="text"
                                icon="\u{1F464}"
                                placeholder="John Doe"
                                max_length=NAME_MAX_LEN
                            />
                            <TextField
                                form=form
                                focused=focused
                                field=Field::Phone
                                label="Phone Number"
                                input_type="tel"
                                icon="\u{1F4DE}"
                                placeholder="+977 98XXXXXXXX"
                                max_length=PHONE_MAX_LEN
                            />
                            <div class="form-row">
                                <TextField
                                    form=form
                                    focused=focused
                                    field=Field::Date
                                    label="Date"
                                    input_type="date"
                                    icon="\u{1F4C5}"
                                />
                                <TextField
                                    form=form
                                    focused=focused
                                    field=Field::Time
                                    label="Time"
                                    input_type="time"
                                    icon="\u{1F552}"
                                />
                            </div>
                            <div class="form-field">
                                <label>"Number of Guests"</label>
                                <div class="input-wrap">
                                    <span
                                        class="input-icon"
                                        class:focused=move || focused.get() == Some(Field::Guests)
                                    >
                                        "\u{1F465}"
                                    </span>
                                    <select
                                        name=Field::Guests.name()
                                        on:change=move |ev| {
                                            form.update(|f| f.set(Field::Guests, event_target_value(&ev)))
                                        }
                                        on:focus=move |_| focused.set(Some(Field::Guests))
                                        on:blur=move |_| focused.set(None)
                                    >
                                        {GUEST_OPTIONS
                                            .iter()
                                            .map(|&value| view! {
                                                <option
                                                    value=value
                                                    selected=move || form.with(|f| f.guests == value)
                                                >
                                                    {guest_label(value)}
                                                </option>
                                            })
                                            .collect_view()}
                                    </select>
                                </div>
                            </div>
                            <button type="submit" class="btn btn-hero btn-xl btn-block">
                                "Reserve My Table"
                            </button>
                            <p class="form-note">
                                "We'll call to confirm your reservation within 30 minutes"
                            </p>
                        </form>
                    </Show>
                </div>
            </div>
        </section>
    }
}
