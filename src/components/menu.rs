use crate::content::{filter_menu, initial_category, MenuContent};
use crate::nav::Section;
use leptos::*;
use std::rc::Rc;

#[component]
pub fn MenuSection(menu: MenuContent) -> impl IntoView {
    let (active_category, set_active_category) = create_signal(initial_category(&menu));
    let (hovered_item, set_hovered_item) = create_signal(None::<u32>);

    let (lead, accent) = match menu.title.rsplit_once(' ') {
        Some((lead, last)) => (format!("{} ", lead), last.to_string()),
        None => (String::new(), menu.title.clone()),
    };
    let items = Rc::new(menu.items);

    let category_buttons = menu
        .categories
        .into_iter()
        .map(|category| {
            let label = category.clone();
            let is_active = {
                let category = category.clone();
                move || active_category.with(|active| *active == category)
            };
            view! {
                <button
                    class="category-pill"
                    class:active=is_active
                    on:click=move |_| set_active_category.set(category.clone())
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let grid = move || {
        let category = active_category.get();
        filter_menu(&items, &category)
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                let id = item.id;
                view! {
                    <div
                        class="menu-card glass-card-hover reveal"
                        class:hovered=move || hovered_item.get() == Some(id)
                        style={format!("animation-delay: {:.1}s", i as f64 * 0.1)}
                        on:mouseenter=move |_| set_hovered_item.set(Some(id))
                        on:mouseleave=move |_| set_hovered_item.set(None)
                    >
                        <div class="menu-card-image">
                            <img src=item.image.clone() alt=item.name.clone()/>
                            {item.featured.then(|| view! {
                                <div class="popular-badge">"\u{1F525} Popular"</div>
                            })}
                            <div class="price-tag">
                                <span class="text-gradient">{item.price.clone()}</span>
                            </div>
                        </div>
                        <div class="menu-card-body">
                            <h3>{item.name.clone()}</h3>
                            <p>{item.description.clone()}</p>
                            <div class="menu-card-more">"View Details \u{2192}"</div>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section id={Section::Menu.id()} class="section menu bg-card noise-overlay">
            <div class="container">
                <div class="section-header reveal">
                    <span class="eyebrow secondary">"The Menu"</span>
                    <h2 class="section-title">
                        {lead}
                        <span class="text-gradient italic">{accent}</span>
                    </h2>
                    <p class="section-lead">{menu.description}</p>
                </div>

                <div class="category-pills reveal" style="animation-delay: 0.2s">
                    {category_buttons}
                </div>

                <div class="menu-grid">{grid}</div>

                <div class="section-footer reveal" style="animation-delay: 0.5s">
                    <button class="btn btn-brand btn-xl">"Explore Full Menu \u{2192}"</button>
                </div>
            </div>
        </section>
    }
}
