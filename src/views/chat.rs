use crate::session::ChatSession;
use crate::types::{Message, MessageOrigin, MessageStatus};
use crate::ui::Overlay;
use dioxus::events::Key;
use dioxus::prelude::*;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

const DESIGNER_AVATAR: &str =
    "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=50&h=50&fit=crop&crop=face";

fn format_message_time(timestamp: OffsetDateTime) -> Option<String> {
    let mut datetime = timestamp;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

fn status_label(status: MessageStatus) -> &'static str {
    match status {
        MessageStatus::Sent => "sent",
        MessageStatus::Delivered => "delivered",
        MessageStatus::Read => "read",
    }
}

fn scroll_to_end() {
    let _ = document::eval(
        r#"const list = document.getElementById("chat-list");
           if (list) { list.scrollTop = list.scrollHeight; }"#,
    );
}

#[component]
pub fn ChatView(
    designer_name: String,
    item_name: String,
    overlay: Signal<Vec<Overlay>>,
) -> Element {
    let mut overlay = overlay;
    let session = use_signal({
        let designer = designer_name.clone();
        let item = item_name.clone();
        move || ChatSession::new(designer.clone(), item.clone())
    });
    let mut messages = use_signal(|| session.peek().messages());

    // Replies append from the background; mirror store revisions into the
    // messages signal. Dropping the session (with the component scope)
    // cancels any reply still pending.
    use_effect(move || {
        let mut revisions = session.peek().subscribe();
        let mut messages = messages;
        spawn(async move {
            while revisions.changed().await.is_ok() {
                messages.set(session.peek().messages());
                scroll_to_end();
            }
        });
    });

    let mut send_message = {
        let mut session = session;
        move || {
            if session.with_mut(|s| s.send()).is_ok() {
                messages.set(session.peek().messages());
                scroll_to_end();
            }
        }
    };

    let mut session_for_input = session;
    let draft = session.with(|s| s.draft().to_string());
    let can_send = session.with(|s| s.can_send());
    let message_snapshot = messages();

    rsx! {
        div { class: "chat-screen",
            div { class: "chat-header",
                button {
                    class: "back-btn",
                    onclick: move |_| overlay.with_mut(|stack| { stack.pop(); }),
                    "←"
                }
                img { class: "avatar", src: "{DESIGNER_AVATAR}", alt: "{designer_name}" }
                div {
                    p { class: "chat-header-name", "{designer_name}" }
                    div { class: "chat-presence",
                        span { class: "presence-dot" }
                        span { "Online now" }
                    }
                }
            }

            div { class: "context-banner",
                span { class: "badge", "Discussing" }
                span { "{item_name}" }
            }

            div { id: "chat-list", class: "chat-list",
                for msg in message_snapshot.iter() {
                    MessageBubble { msg: msg.clone(), designer_name: designer_name.clone() }
                }
            }

            div { class: "composer",
                textarea {
                    rows: "1",
                    placeholder: "Type a message...",
                    maxlength: "1000",
                    value: "{draft}",
                    oninput: move |ev| session_for_input.with_mut(|s| s.set_draft(ev.value())),
                    onkeydown: move |ev| {
                        if ev.key() == Key::Enter && !ev.modifiers().shift() {
                            ev.prevent_default();
                            send_message();
                        }
                    },
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: !can_send,
                    onclick: move |_| send_message(),
                    "Send"
                }
            }
        }
    }
}

#[component]
fn MessageBubble(msg: Message, designer_name: String) -> Element {
    let from_user = msg.origin == MessageOrigin::User;
    let row_class = if from_user { "user" } else { "counterpart" };
    let status = status_label(msg.status);

    rsx! {
        div { class: "message-row {row_class}",
            if !from_user {
                img { class: "avatar", src: "{DESIGNER_AVATAR}", alt: "{designer_name}" }
            }
            div { class: "message-stack",
                div { class: "bubble {row_class}", "{msg.text}" }
                div { class: "message-meta",
                    if let Some(time_label) = format_message_time(msg.sent_at) {
                        span { "{time_label}" }
                    }
                    if from_user {
                        span { " • " }
                        span { class: "message-status {status}", "{status}" }
                    }
                }
            }
        }
    }
}
