use leptos::*;
use std::time::Duration;

const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub title: String,
    pub description: String,
}

/// Handle for showing transient notifications. Provided once at the root.
#[derive(Clone, Copy)]
pub struct Toaster {
    current: RwSignal<Option<(u64, ToastMessage)>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn provide() -> Self {
        let toaster = Self {
            current: create_rw_signal(None),
            next_id: store_value(0),
        };
        provide_context(toaster);
        toaster
    }

    /// The root's toaster, or `None` outside of it.
    pub fn use_toaster() -> Option<Self> {
        use_context::<Toaster>()
    }

    pub fn show(&self, title: impl Into<String>, description: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.current.set(Some((
            id,
            ToastMessage {
                title: title.into(),
                description: description.into(),
            },
        )));

        // Only dismiss if a newer toast hasn't replaced this one
        let current = self.current;
        set_timeout(
            move || {
                if current.with_untracked(|t| t.as_ref().map(|(i, _)| *i) == Some(id)) {
                    current.set(None);
                }
            },
            TOAST_DURATION,
        );
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

#[component]
pub fn ToastViewport(toaster: Toaster) -> impl IntoView {
    view! {
        <div class="toast-viewport" role="status" aria-live="polite">
            {move || {
                toaster
                    .current
                    .get()
                    .map(|(_, message)| {
                        view! {
                            <div class="toast" on:click=move |_| toaster.dismiss()>
                                <div class="toast-title">{message.title}</div>
                                <div class="toast-description">{message.description}</div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
