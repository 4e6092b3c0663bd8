//! Newsletter management: drafts and the subscriber list.

use api::models::NewsletterStatus;
use api::{Newsletter, Subscriber};
use dioxus::prelude::*;
use ui::{session, AdminGuard};

use super::AdminShell;

#[component]
pub fn AdminNewsletter() -> Element {
    rsx! {
        AdminGuard {
            AdminShell {
                title: "Newsletter",
                NewsletterBody {}
            }
        }
    }
}

#[component]
fn NewsletterBody() -> Element {
    let mut newsletters = use_signal(Vec::<Newsletter>::new);
    let mut subscribers = use_signal(Vec::<Subscriber>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loaded = use_signal(|| false);

    let mut subject = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let _ = use_resource(move || async move {
        let token = session::load_token().unwrap_or_default();
        let drafts = api::newsletter::admin_list_newsletters(token.clone()).await;
        let subs = api::newsletter::admin_list_subscribers(token).await;
        match (drafts, subs) {
            (Ok(drafts), Ok(subs)) => {
                newsletters.set(drafts);
                subscribers.set(subs);
            }
            (Err(e), _) | (_, Err(e)) => error.set(Some(e.to_string())),
        }
        loaded.set(true);
    });

    let create = move |event: FormEvent| {
        event.prevent_default();
        spawn(async move {
            saving.set(true);
            error.set(None);
            let token = session::load_token().unwrap_or_default();
            match api::newsletter::create_newsletter(token, subject(), content()).await {
                Ok(created) => {
                    newsletters.write().insert(0, created);
                    subject.set(String::new());
                    content.set(String::new());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            saving.set(false);
        });
    };

    let mut mark_sent = move |id: String| {
        spawn(async move {
            error.set(None);
            let token = session::load_token().unwrap_or_default();
            match api::newsletter::mark_newsletter_sent(id, token).await {
                Ok(updated) => {
                    if let Some(row) = newsletters.write().iter_mut().find(|n| n.id == updated.id)
                    {
                        *row = updated;
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
            match api::newsletter::delete_newsletter(id.clone(), token).await {
                Ok(()) => newsletters.write().retain(|n| n.id != id),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let mut remove_subscriber = move |id: String| {
        spawn(async move {
            error.set(None);
            let token = session::load_token().unwrap_or_default();
            match api::newsletter::remove_subscriber(id.clone(), token).await {
                Ok(()) => subscribers.write().retain(|s| s.id != id),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        if let Some(message) = error() {
            p { class: "form-status error", "{message}" }
        }

        if !loaded() {
            p { class: "muted", "Loading…" }
        } else {
            div {
                class: "newsletter-columns",

                div {
                    h2 { "Drafts" }
                    form {
                        class: "editor-form",
                        onsubmit: create,
                        label { "Subject"
                            input {
                                value: "{subject}",
                                oninput: move |e| subject.set(e.value()),
                            }
                        }
                        label { "Content"
                            textarea {
                                rows: 6,
                                value: "{content}",
                                oninput: move |e| content.set(e.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "button primary",
                            disabled: saving(),
                            "Create draft"
                        }
                    }

                    if newsletters().is_empty() {
                        p { class: "muted", "No newsletters yet." }
                    }
                    ul {
                        class: "admin-list",
                        for newsletter in newsletters() {
                            li {
                                key: "{newsletter.id}",
                                div {
                                    strong { "{newsletter.subject}" }
                                    span {
                                        class: if newsletter.status == NewsletterStatus::Sent { "badge published" } else { "badge draft" },
                                        {newsletter.status.as_str()}
                                    }
                                }
                                div {
                                    class: "admin-row-actions",
                                    if newsletter.status == NewsletterStatus::Draft {
                                        button {
                                            class: "button small",
                                            onclick: {
                                                let id = newsletter.id.clone();
                                                move |_| mark_sent(id.clone())
                                            },
                                            "Mark sent"
                                        }
                                    }
                                    button {
                                        class: "button small danger",
                                        onclick: {
                                            let id = newsletter.id.clone();
                                            move |_| delete(id.clone())
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    h2 { "Subscribers ({subscribers().len()})" }
                    if subscribers().is_empty() {
                        p { class: "muted", "Nobody has subscribed yet." }
                    }
                    ul {
                        class: "admin-list",
                        for subscriber in subscribers() {
                            li {
                                key: "{subscriber.id}",
                                span { "{subscriber.email}" }
                                button {
                                    class: "button small danger",
                                    onclick: {
                                        let id = subscriber.id.clone();
                                        move |_| remove_subscriber(id.clone())
                                    },
                                    "Remove"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
