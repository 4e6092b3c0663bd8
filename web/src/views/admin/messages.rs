//! Contact-message inbox.

use api::models::MessageList;
use dioxus::prelude::*;
use ui::{session, AdminGuard};

use super::AdminShell;

#[component]
pub fn AdminMessages() -> Element {
    rsx! {
        AdminGuard {
            AdminShell {
                title: "Messages",
                MessagesBody {}
            }
        }
    }
}

#[component]
fn MessagesBody() -> Element {
    let mut inbox = use_signal(|| Option::<MessageList>::None);
    let mut error = use_signal(|| Option::<String>::None);

    let _ = use_resource(move || async move {
        let token = session::load_token().unwrap_or_default();
        match api::contact::admin_list_messages(token).await {
            Ok(list) => inbox.set(Some(list)),
            Err(e) => error.set(Some(e.to_string())),
        }
    });

    let mut mark_read = move |id: String| {
        spawn(async move {
            error.set(None);
            let token = session::load_token().unwrap_or_default();
            match api::contact::mark_message_read(id, token).await {
                Ok(updated) => {
                    if let Some(list) = inbox.write().as_mut() {
                        if let Some(row) = list.messages.iter_mut().find(|m| m.id == updated.id)
                        {
                            if !row.is_read {
                                list.unread_count = list.unread_count.saturating_sub(1);
                            }
                            *row = updated;
                        }
                    }
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let mut delete = move |id: String| {
        spawn(async move {
            error.set(None);
            let token = session::load_token().unwrap_or_default();
            match api::contact::delete_message(id.clone(), token).await {
                Ok(()) => {
                    if let Some(list) = inbox.write().as_mut() {
                        if let Some(row) = list.messages.iter().find(|m| m.id == id) {
                            if !row.is_read {
                                list.unread_count = list.unread_count.saturating_sub(1);
                            }
                        }
                        list.messages.retain(|m| m.id != id);
                        list.total = list.messages.len();
                    }
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        if let Some(message) = error() {
            p { class: "form-status error", "{message}" }
        }

        match inbox() {
            None => rsx! {
                p { class: "muted", "Loading…" }
            },
            Some(list) if list.messages.is_empty() => rsx! {
                p { class: "muted", "Inbox zero. Nice." }
            },
            Some(list) => rsx! {
                p {
                    class: "muted",
                    "{list.total} messages, {list.unread_count} unread"
                }
                ul {
                    class: "inbox",
                    for message in list.messages {
                        li {
                            key: "{message.id}",
                            class: if message.is_read { "inbox-item" } else { "inbox-item unread" },
                            div {
                                class: "inbox-item-head",
                                strong { "{message.subject}" }
                                span { class: "muted", "{message.name} <{message.email}>" }
                                span { class: "muted", "{message.created_at}" }
                            }
                            p { "{message.message}" }
                            div {
                                class: "admin-row-actions",
                                if !message.is_read {
                                    button {
                                        class: "button small",
                                        onclick: {
                                            let id = message.id.clone();
                                            move |_| mark_read(id.clone())
                                        },
                                        "Mark read"
                                    }
                                }
                                button {
                                    class: "button small danger",
                                    onclick: {
                                        let id = message.id.clone();
                                        move |_| delete(id.clone())
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            },
        }
    }
}
