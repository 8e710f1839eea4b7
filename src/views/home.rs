use crate::catalog::{self, FashionItem};
use crate::ui::{AppTab, Overlay};
use dioxus::prelude::*;

#[component]
pub fn HomeView(active_tab: Signal<AppTab>, overlay: Signal<Vec<Overlay>>) -> Element {
    let mut active_tab = active_tab;
    let mut search_query = use_signal(String::new);

    let query = search_query();
    let items: Vec<FashionItem> = catalog::search_items(&query)
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        div { class: "main-container",
            div { class: "screen-header",
                h1 { "StyleCraft" }
                p { class: "screen-subtitle", "Discover Custom Fashion" }
            }

            input {
                class: "search-input",
                placeholder: "Search designers, styles...",
                value: "{search_query}",
                oninput: move |ev| search_query.set(ev.value()),
            }

            button {
                class: "request-banner",
                r#type: "button",
                onclick: move |_| active_tab.set(AppTab::Request),
                div {
                    h2 { "Need Something Unique?" }
                    p { "Start your custom design journey" }
                }
                span { class: "banner-arrow", "→" }
            }

            h2 { class: "section-title", "Featured Designers" }
            div { class: "designer-strip",
                for designer in catalog::DESIGNERS.iter().take(3) {
                    div { class: "designer-chip-card",
                        img { class: "avatar", src: "{designer.avatar}", alt: "{designer.name}" }
                        p { class: "designer-name", "{designer.name}" }
                        p { class: "designer-speciality", "{designer.speciality}" }
                        p { class: "designer-rating", "★ {designer.rating}" }
                    }
                }
            }

            h2 { class: "section-title",
                if query.is_empty() {
                    "Trending Designs"
                } else {
                    "Results for \"{query}\""
                }
            }
            for item in items.iter() {
                ItemCard { item: item.clone(), overlay }
            }
            if items.is_empty() {
                p { class: "empty-note", "No items found matching your search" }
            }
        }
    }
}

#[component]
fn ItemCard(item: FashionItem, overlay: Signal<Vec<Overlay>>) -> Element {
    let mut overlay = overlay;
    let item_id = item.id.clone();
    let price = catalog::format_naira(item.price);
    let category = item.category.label();

    rsx! {
        button {
            class: "item-card",
            r#type: "button",
            onclick: move |_| {
                let item_id = item_id.clone();
                overlay.with_mut(|stack| stack.push(Overlay::ItemDetails { item_id }));
            },
            div { class: "item-image-wrap",
                img { class: "item-image", src: "{item.image}", alt: "{item.name}" }
                if !item.is_available {
                    span { class: "badge badge-soldout", "Sold Out" }
                }
            }
            div { class: "item-body",
                h3 { class: "item-name", "{item.name}" }
                p { class: "item-designer", "by {item.designer}" }
                div { class: "item-footer",
                    span { class: "item-price", "{price}" }
                    span { class: "item-rating", "★ {item.rating}" }
                    span { class: "chip chip-category", "{category}" }
                }
            }
        }
    }
}
