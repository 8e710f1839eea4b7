use crate::catalog;
use crate::ui::Overlay;
use dioxus::prelude::*;

const FEATURES: &[&str] = &[
    "Handcrafted with premium materials",
    "Free delivery within Lagos",
    "7-day return policy",
    "Quality guarantee",
];

const SIMILAR_ITEMS: &[(&str, u32)] = &[
    (
        "https://images.unsplash.com/photo-1594633312681-425c7b97ccd1?w=200&h=200&fit=crop",
        35_000,
    ),
    (
        "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=200&h=200&fit=crop",
        42_000,
    ),
    (
        "https://images.unsplash.com/photo-1515562141207-7a88fb7ce338?w=200&h=200&fit=crop",
        18_500,
    ),
];

const DESIGNER_AVATAR: &str =
    "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=60&h=60&fit=crop&crop=face";

#[derive(Clone, Copy, PartialEq, Eq)]
enum OrderState {
    Idle,
    Confirming,
    Placed,
}

#[component]
pub fn ItemDetailsView(item_id: String, overlay: Signal<Vec<Overlay>>) -> Element {
    let mut overlay = overlay;
    let Some(item) = catalog::item_by_id(&item_id).cloned() else {
        return rsx! {
            div { class: "main-container",
                button {
                    class: "back-btn",
                    onclick: move |_| overlay.with_mut(|stack| { stack.pop(); }),
                    "← Back"
                }
                p { class: "empty-note", "This item is no longer listed." }
            }
        };
    };

    let mut order_state = use_signal(|| OrderState::Idle);
    let price = catalog::format_naira(item.price);
    let chat_designer = item.designer.clone();
    let chat_item = item.name.clone();
    let available = item.is_available;

    rsx! {
        div { class: "main-container",
            button {
                class: "back-btn",
                onclick: move |_| overlay.with_mut(|stack| { stack.pop(); }),
                "← Back"
            }

            img { class: "detail-hero", src: "{item.image}", alt: "{item.name}" }

            div { class: "detail-title-row",
                div {
                    h1 { "{item.name}" }
                    p { class: "detail-meta", "★ {item.rating} • {item.likes} likes" }
                }
                span { class: "detail-price", "{price}" }
            }

            div { class: "detail-card",
                div { class: "designer-card-head",
                    img { class: "avatar", src: "{DESIGNER_AVATAR}", alt: "{item.designer}" }
                    div {
                        p { class: "designer-name", "{item.designer}" }
                        p { class: "designer-location", "Lagos, Nigeria" }
                    }
                }
            }

            div { class: "detail-card",
                h2 { class: "section-title", "Description" }
                p { class: "detail-meta", "{item.description}" }
                div { style: "margin-top: 0.75rem;",
                    for feature in FEATURES.iter() {
                        div { class: "feature-row",
                            span { class: "feature-check", "✓" }
                            span { "{feature}" }
                        }
                    }
                }
            }

            h2 { class: "section-title", "Similar Items" }
            div { class: "similar-strip",
                for (image, similar_price) in SIMILAR_ITEMS.iter().copied() {
                    SimilarCard { image, price: similar_price }
                }
            }

            button {
                class: "btn btn-primary btn-block",
                r#type: "button",
                onclick: move |_| {
                    let designer_name = chat_designer.clone();
                    let item_name = chat_item.clone();
                    overlay.with_mut(|stack| {
                        stack.push(Overlay::Chat { designer_name, item_name })
                    });
                },
                "Chat with Designer"
            }

            match order_state() {
                OrderState::Idle => rsx! {
                    button {
                        class: "btn btn-block",
                        r#type: "button",
                        onclick: move |_| {
                            if available {
                                order_state.set(OrderState::Confirming);
                            }
                        },
                        if available { "Order Now" } else { "Sold Out" }
                    }
                },
                OrderState::Confirming => rsx! {
                    p { class: "order-note", "Order \"{item.name}\" for {price}?" }
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "button",
                        onclick: move |_| order_state.set(OrderState::Placed),
                        "Confirm Order"
                    }
                    button {
                        class: "btn btn-block",
                        r#type: "button",
                        onclick: move |_| order_state.set(OrderState::Idle),
                        "Cancel"
                    }
                },
                OrderState::Placed => rsx! {
                    p { class: "order-note",
                        "Your order has been placed. The designer will contact you soon."
                    }
                },
            }
        }
    }
}

#[component]
fn SimilarCard(image: &'static str, price: u32) -> Element {
    let price = catalog::format_naira(price);
    rsx! {
        div { class: "similar-card",
            img { class: "similar-image", src: "{image}", alt: "Similar item" }
            p { class: "foot-price", "{price}" }
        }
    }
}
