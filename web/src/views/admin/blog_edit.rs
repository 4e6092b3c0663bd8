//! Post editor, shared by the new-post and edit-post routes.

use dioxus::prelude::*;
use ui::{session, AdminGuard};

use super::AdminShell;
use crate::Route;

#[component]
pub fn BlogEditor(id: Option<String>) -> Element {
    let title = if id.is_some() { "Edit post" } else { "New post" };

    rsx! {
        AdminGuard {
            AdminShell {
                title: "{title}",
                EditorBody { id }
            }
        }
    }
}

#[component]
fn EditorBody(id: Option<String>) -> Element {
    let nav = use_navigator();
    let mut title = use_signal(String::new);
    let mut excerpt = use_signal(String::new);
    let mut featured_image = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut publish_now = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    // Editing needs the existing post before the form is usable.
    let mut ready = use_signal(|| false);

    let editing = id.clone();
    let _ = use_resource(use_reactive!(|(editing,)| async move {
        let Some(post_id) = editing else {
            ready.set(true);
            return;
        };
        let token = session::load_token().unwrap_or_default();
        match api::blog::admin_get_post(post_id, token).await {
            Ok(post) => {
                title.set(post.title);
                excerpt.set(post.excerpt.unwrap_or_default());
                featured_image.set(post.featured_image.unwrap_or_default());
                content.set(post.content);
                ready.set(true);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    }));

    let existing_id = id.clone();
    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        let existing_id = existing_id.clone();
        spawn(async move {
            saving.set(true);
            error.set(None);

            let token = session::load_token().unwrap_or_default();
            let excerpt_opt = Some(excerpt()).filter(|s| !s.trim().is_empty());
            let image_opt = Some(featured_image()).filter(|s| !s.trim().is_empty());

            let result = match existing_id {
                Some(post_id) => {
                    api::blog::update_post(
                        post_id,
                        token,
                        title(),
                        content(),
                        excerpt_opt,
                        image_opt,
                    )
                    .await
                }
                None => {
                    api::blog::create_post(
                        token,
                        title(),
                        content(),
                        excerpt_opt,
                        image_opt,
                        publish_now(),
                    )
                    .await
                }
            };

            match result {
                Ok(_) => {
                    nav.replace(Route::BlogManager {});
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    saving.set(false);
                }
            }
        });
    };

    rsx! {
        if let Some(message) = error() {
            p { class: "form-status error", "{message}" }
        }

        if !ready() {
            p { class: "muted", "Loading…" }
        } else {
            form {
                class: "editor-form",
                onsubmit,

                label { "Title"
                    input {
                        value: "{title}",
                        oninput: move |e| title.set(e.value()),
                    }
                }
                label { "Excerpt (optional)"
                    input {
                        value: "{excerpt}",
                        oninput: move |e| excerpt.set(e.value()),
                    }
                }
                label { "Featured image URL (optional)"
                    input {
                        value: "{featured_image}",
                        placeholder: "/uploads/…",
                        oninput: move |e| featured_image.set(e.value()),
                    }
                }
                label { "Content"
                    textarea {
                        rows: 18,
                        value: "{content}",
                        oninput: move |e| content.set(e.value()),
                    }
                }

                if id.is_none() {
                    label {
                        class: "editor-publish",
                        input {
                            r#type: "checkbox",
                            checked: publish_now(),
                            onchange: move |e| publish_now.set(e.checked()),
                        }
                        "Publish immediately"
                    }
                }

                div {
                    class: "admin-toolbar",
                    button {
                        r#type: "submit",
                        class: "button primary",
                        disabled: saving(),
                        if saving() { "Saving…" } else { "Save" }
                    }
                    Link { class: "button", to: Route::BlogManager {}, "Cancel" }
                }
            }
        }
    }
}
