use crate::catalog::{self, Designer};
use crate::ui::Overlay;
use dioxus::prelude::*;

const SPECIALITY_FILTERS: &[&str] = &[
    "All",
    "Clothing",
    "Accessories",
    "Jewelry",
    "Traditional",
    "Contemporary",
];

#[component]
pub fn DesignersView(overlay: Signal<Vec<Overlay>>) -> Element {
    let mut search_query = use_signal(String::new);
    let mut active_filter = use_signal(|| "All");

    let query = search_query();
    let filter = active_filter();
    let designers: Vec<Designer> = catalog::search_designers(&query)
        .into_iter()
        .filter(|designer| {
            filter == "All"
                || designer
                    .speciality
                    .to_lowercase()
                    .contains(&filter.to_lowercase())
        })
        .cloned()
        .collect();

    rsx! {
        div { class: "main-container",
            div { class: "screen-header",
                h1 { "Designers" }
                p { class: "screen-subtitle", "Find talented creators near you" }
            }

            input {
                class: "search-input",
                placeholder: "Search designers, specialties...",
                value: "{search_query}",
                oninput: move |ev| search_query.set(ev.value()),
            }

            div { class: "chip-row",
                for name in SPECIALITY_FILTERS.iter().copied() {
                    button {
                        class: if filter == name { "chip active" } else { "chip" },
                        r#type: "button",
                        onclick: move |_| active_filter.set(name),
                        "{name}"
                    }
                }
            }

            for designer in designers.iter() {
                DesignerCard { designer: designer.clone(), overlay }
            }
            if designers.is_empty() {
                p { class: "empty-note", "No designers found matching your search" }
            }
        }
    }
}

#[component]
fn DesignerCard(designer: Designer, overlay: Signal<Vec<Overlay>>) -> Element {
    let mut overlay = overlay;
    let starting_price = catalog::format_naira(designer.starting_price);
    let followers = designer.followers;
    let contact_designer = designer.name.clone();
    let contact_item = format!("Custom {}", designer.speciality);

    rsx! {
        div { class: "designer-card",
            div { class: "designer-card-head",
                img { class: "avatar avatar-lg", src: "{designer.avatar}", alt: "{designer.name}" }
                div {
                    h3 { class: "designer-name",
                        "{designer.name} "
                        if designer.is_verified {
                            span { class: "badge badge-verified", "✓" }
                        }
                    }
                    p { class: "designer-speciality", "{designer.speciality}" }
                    p { class: "designer-location", "{designer.location}" }
                }
            }

            div { class: "designer-stats",
                span { "★ {designer.rating} ({designer.review_count} reviews)" }
                span { "{followers} followers" }
            }

            div { class: "portfolio-row",
                for image in designer.portfolio_images.iter().take(3) {
                    img { class: "portfolio-thumb", src: "{image}", alt: "Portfolio" }
                }
            }

            div { class: "designer-card-foot",
                div {
                    p { class: "foot-label", "Starting from" }
                    p { class: "foot-price", "{starting_price}" }
                }
                div {
                    p { class: "foot-label", "Responds in" }
                    p { "{designer.response_time}" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        let designer_name = contact_designer.clone();
                        let item_name = contact_item.clone();
                        overlay.with_mut(|stack| {
                            stack.push(Overlay::Chat { designer_name, item_name })
                        });
                    },
                    "Contact"
                }
            }
        }
    }
}
