use leptos::*;

struct QuickAction {
    label: &'static str,
    href: &'static str,
    glyph: &'static str,
    color: &'static str,
}

const ACTIONS: [QuickAction; 2] = [
    QuickAction {
        label: "Call Now",
        href: "tel:+97714123456",
        glyph: "\u{1F4DE}",
        color: "primary-pink",
    },
    QuickAction {
        label: "WhatsApp",
        href: "https://wa.me/97798XXXXXXXX",
        glyph: "\u{1F4AC}",
        color: "whatsapp",
    },
];

impl QuickAction {
    fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

#[component]
pub fn FloatingButtons() -> impl IntoView {
    let (expanded, set_expanded) = create_signal(false);

    view! {
        <div class="floating-actions">
            <Show when=move || expanded.get()>
                {ACTIONS
                    .iter()
                    .enumerate()
                    .map(|(i, action)| {
                        let external = action.is_external();
                        view! {
                            <a
                                class={format!("floating-action gradient-{}", action.color)}
                                style={format!("animation-delay: {:.1}s", i as f64 * 0.1)}
                                href=action.href
                                target=external.then_some("_blank")
                                rel=external.then_some("noopener noreferrer")
                            >
                                <span>{action.glyph}</span>
                                <span>{action.label}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </Show>

            <button
                class="floating-toggle"
                class:expanded=expanded
                aria-label=move || if expanded.get() { "Close quick actions" } else { "Open quick actions" }
                on:click=move |_| set_expanded.update(|open| *open = !*open)
            >
                {move || if expanded.get() { "\u{2715}" } else { "\u{1F4AC}" }}
            </button>

            <Show when=move || !expanded.get()>
                <div class="floating-pulse" aria-hidden="true"></div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_web_links_open_externally() {
        let external: Vec<_> = ACTIONS.iter().map(QuickAction::is_external).collect();
        assert_eq!(external, [false, true]);
    }
}
