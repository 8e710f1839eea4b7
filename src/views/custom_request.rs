use crate::catalog::Category;
use crate::request::{BUDGET_RANGES, RequestForm, TIMELINE_OPTIONS};
use dioxus::events::FormEvent;
use dioxus::prelude::*;

fn parse_category(value: &str) -> Option<Category> {
    match value {
        "clothing" => Some(Category::Clothing),
        "accessories" => Some(Category::Accessories),
        "shoes" => Some(Category::Shoes),
        _ => None,
    }
}

#[component]
pub fn CustomRequestView() -> Element {
    let mut form = use_signal(RequestForm::default);
    let mut error = use_signal(|| Option::<&'static str>::None);
    let mut submitted = use_signal(|| false);

    if submitted() {
        return rsx! {
            div { class: "main-container",
                div { class: "form-card confirm-card",
                    h2 { "Request Submitted! 🎉" }
                    p {
                        "Your custom request has been submitted successfully. Talented \
                         designers will start sending you proposals shortly."
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "button",
                        onclick: move |_| {
                            form.set(RequestForm::default());
                            error.set(None);
                            submitted.set(false);
                        },
                        "Create Another"
                    }
                }
            }
        };
    }

    let current = form();

    rsx! {
        div { class: "main-container",
            div { class: "request-banner", style: "cursor: default;",
                div {
                    h2 { "Create Custom Request" }
                    p { "Share your vision and let designers bring it to life" }
                }
            }

            div { class: "form-card",
                label { class: "form-label", r#for: "request-title", "Request Title *" }
                input {
                    id: "request-title",
                    class: "form-input",
                    placeholder: "e.g., Custom Wedding Dress for December",
                    maxlength: "100",
                    value: "{current.title}",
                    oninput: move |ev| form.with_mut(|f| f.title = ev.value()),
                }
            }

            div { class: "form-card",
                label { class: "form-label", r#for: "request-description", "Description *" }
                textarea {
                    id: "request-description",
                    class: "form-textarea",
                    placeholder: "Describe your vision: style, fabric, occasion...",
                    value: "{current.description}",
                    oninput: move |ev| form.with_mut(|f| f.description = ev.value()),
                }
            }

            div { class: "form-card",
                label { class: "form-label", r#for: "request-category", "Category *" }
                select {
                    id: "request-category",
                    class: "form-select",
                    value: current.category.map(|c| c.label()).unwrap_or(""),
                    onchange: move |ev: FormEvent| {
                        form.with_mut(|f| f.category = parse_category(&ev.value()));
                    },
                    option { value: "", "Select a category" }
                    option { value: "clothing", "Clothing" }
                    option { value: "accessories", "Accessories" }
                    option { value: "shoes", "Shoes" }
                }
            }

            div { class: "form-card",
                label { class: "form-label", r#for: "request-budget", "Budget Range *" }
                select {
                    id: "request-budget",
                    class: "form-select",
                    value: "{current.budget}",
                    onchange: move |ev: FormEvent| form.with_mut(|f| f.budget = ev.value()),
                    option { value: "", "Select a budget range" }
                    for range in BUDGET_RANGES.iter() {
                        option { value: "{range}", "{range}" }
                    }
                }
            }

            div { class: "form-card",
                label { class: "form-label", r#for: "request-timeline", "Timeline *" }
                select {
                    id: "request-timeline",
                    class: "form-select",
                    value: "{current.timeline}",
                    onchange: move |ev: FormEvent| form.with_mut(|f| f.timeline = ev.value()),
                    option { value: "", "Select a timeline" }
                    for option_label in TIMELINE_OPTIONS.iter() {
                        option { value: "{option_label}", "{option_label}" }
                    }
                }
            }

            div { class: "form-card",
                label { class: "form-label", r#for: "request-size", "Size" }
                input {
                    id: "request-size",
                    class: "form-input",
                    placeholder: "e.g., M, UK 10, custom measurements",
                    value: "{current.size}",
                    oninput: move |ev| form.with_mut(|f| f.size = ev.value()),
                }
            }

            div { class: "form-card",
                label { class: "form-label", r#for: "request-color", "Preferred Colors" }
                input {
                    id: "request-color",
                    class: "form-input",
                    placeholder: "e.g., navy blue with gold accents",
                    value: "{current.color}",
                    oninput: move |ev| form.with_mut(|f| f.color = ev.value()),
                }
            }

            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }

            button {
                class: "btn btn-primary btn-block",
                r#type: "button",
                onclick: move |_| {
                    match form.with(|f| f.validate()) {
                        Ok(()) => {
                            error.set(None);
                            submitted.set(true);
                        }
                        Err(message) => error.set(Some(message)),
                    }
                },
                "Submit Request"
            }
        }
    }
}
