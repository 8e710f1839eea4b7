use crate::theme::APP_CSS;
use crate::views::{ChatView, CustomRequestView, DesignersView, HomeView, ItemDetailsView};
use dioxus::prelude::*;
use std::time::Duration;

const SPLASH_HIDE_DELAY: Duration = Duration::from_millis(1500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppTab {
    Discover,
    Designers,
    Request,
}

/// Screens pushed over the tab shell. The top of the stack is rendered;
/// popping returns to the screen underneath.
#[derive(Clone, Debug, PartialEq)]
pub enum Overlay {
    ItemDetails { item_id: String },
    Chat { designer_name: String, item_name: String },
}

#[component]
pub fn App() -> Element {
    let active_tab = use_signal(|| AppTab::Discover);
    let overlay = use_signal(Vec::<Overlay>::new);
    let show_splash = use_signal(|| true);

    use_splash_dismiss(show_splash);

    let top = overlay.with(|stack| stack.last().cloned());

    rsx! {
        style { dangerous_inner_html: "{APP_CSS}" }
        if show_splash() {
            SplashScreen {}
        }
        match top {
            Some(Overlay::ItemDetails { item_id }) => rsx! {
                ItemDetailsView { item_id, overlay }
            },
            Some(Overlay::Chat { designer_name, item_name }) => rsx! {
                ChatView { designer_name, item_name, overlay }
            },
            None => rsx! {
                AppHeader { active_tab }
                TabPanels { active_tab, overlay }
            },
        }
    }
}

fn use_splash_dismiss(show_splash: Signal<bool>) {
    use_effect(move || {
        if show_splash() {
            let mut control = show_splash;
            spawn(async move {
                tokio::time::sleep(SPLASH_HIDE_DELAY).await;
                control.set(false);
            });
        }
    });
}

#[component]
fn AppHeader(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        div { class: "header",
            div { class: "header-content",
                span { class: "header-wordmark", "StyleCraft" }
                TabNavigation { active_tab }
            }
        }
    }
}

#[component]
fn TabPanels(active_tab: Signal<AppTab>, overlay: Signal<Vec<Overlay>>) -> Element {
    rsx! {
        match active_tab() {
            AppTab::Discover => rsx!( HomeView { active_tab, overlay } ),
            AppTab::Designers => rsx!( DesignersView { overlay } ),
            AppTab::Request => rsx!( CustomRequestView {} ),
        }
    }
}

#[component]
fn TabNavigation(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        div { class: "tabs",
            TabButton { active_tab, tab: AppTab::Discover, label: "Discover" }
            TabButton { active_tab, tab: AppTab::Designers, label: "Designers" }
            TabButton { active_tab, tab: AppTab::Request, label: "Request" }
        }
    }
}

#[component]
fn TabButton(active_tab: Signal<AppTab>, tab: AppTab, label: &'static str) -> Element {
    let mut active_tab = active_tab;
    let class = if active_tab() == tab {
        "tab active"
    } else {
        "tab"
    };
    rsx! {
        button {
            class: class,
            r#type: "button",
            onclick: move |_| active_tab.set(tab),
            "{label}"
        }
    }
}

#[component]
fn SplashScreen() -> Element {
    rsx! {
        div { class: "splash-overlay", aria_hidden: "true",
            div { class: "splash-content",
                div { class: "splash-wordmark", "StyleCraft" }
                p { class: "splash-tagline", "Discover Custom Fashion" }
            }
        }
    }
}
