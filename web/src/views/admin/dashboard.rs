//! Admin dashboard: headline counts and shortcuts.

use dioxus::prelude::*;
use ui::{session, AdminGuard};

use super::AdminShell;
use crate::Route;

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        AdminGuard {
            AdminShell {
                title: "Dashboard",
                DashboardBody {}
            }
        }
    }
}

#[component]
fn DashboardBody() -> Element {
    let token = session::load_token().unwrap_or_default();

    let stats = use_resource(use_reactive!(|(token,)| async move {
        let posts = api::blog::admin_list_posts(token.clone()).await?;
        let inbox = api::contact::admin_list_messages(token.clone()).await?;
        let subscribers = api::newsletter::admin_list_subscribers(token.clone()).await?;
        let sections = api::sections::get_section_visibility_admin(token).await?;

        let hidden = sections.sections.iter().filter(|s| !s.is_visible).count();
        Ok::<_, ServerFnError>((posts.len(), inbox.unread_count, subscribers.len(), hidden))
    }));

    rsx! {
        match &*stats.read_unchecked() {
            None => rsx! {
                p { class: "muted", "Loading…" }
            },
            Some(Err(e)) => rsx! {
                p { class: "form-status error", "Couldn't load dashboard: {e}" }
            },
            Some(Ok((posts, unread, subscribers, hidden))) => rsx! {
                div {
                    class: "stat-grid",
                    StatCard { label: "Blog posts", value: *posts, to: Route::BlogManager {} }
                    StatCard { label: "Unread messages", value: *unread, to: Route::AdminMessages {} }
                    StatCard { label: "Subscribers", value: *subscribers, to: Route::AdminNewsletter {} }
                    StatCard { label: "Hidden sections", value: *hidden, to: Route::AdminSections {} }
                }
            },
        }

        div {
            class: "dashboard-links",
            h2 { "Quick actions" }
            ul {
                li { Link { to: Route::BlogEditorNew {}, "Write a post" } }
                li { Link { to: Route::AdminSections {}, "Toggle site sections" } }
                li { Link { to: Route::AdminFiles {}, "Upload a file" } }
            }
        }

        ChangePasswordForm {}
    }
}

#[component]
fn ChangePasswordForm() -> Element {
    let mut current = use_signal(String::new);
    let mut new = use_signal(String::new);
    let mut status = use_signal(|| Option::<Result<(), String>>::None);
    let mut saving = use_signal(|| false);

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        spawn(async move {
            saving.set(true);
            status.set(None);
            let token = session::load_token().unwrap_or_default();
            match api::change_password(token, current(), new()).await {
                Ok(()) => {
                    current.set(String::new());
                    new.set(String::new());
                    status.set(Some(Ok(())));
                }
                Err(e) => status.set(Some(Err(e.to_string()))),
            }
            saving.set(false);
        });
    };

    rsx! {
        div {
            class: "dashboard-password",
            h2 { "Change password" }
            form {
                class: "editor-form",
                onsubmit,
                label { "Current password"
                    input {
                        r#type: "password",
                        value: "{current}",
                        oninput: move |e| current.set(e.value()),
                    }
                }
                label { "New password (8+ characters)"
                    input {
                        r#type: "password",
                        value: "{new}",
                        oninput: move |e| new.set(e.value()),
                    }
                }
                button {
                    r#type: "submit",
                    class: "button",
                    disabled: saving(),
                    "Update password"
                }
                match status() {
                    Some(Ok(())) => rsx! {
                        p { class: "form-status success", "Password updated." }
                    },
                    Some(Err(message)) => rsx! {
                        p { class: "form-status error", "{message}" }
                    },
                    None => rsx! {},
                }
            }
        }
    }
}

#[component]
fn StatCard(label: String, value: usize, to: Route) -> Element {
    rsx! {
        Link {
            class: "stat-card",
            to,
            p { class: "stat-value", "{value}" }
            p { class: "stat-label", "{label}" }
        }
    }
}
