//! Blog management: list, publish toggle, delete.

use api::models::PostStatus;
use api::BlogPostSummary;
use dioxus::prelude::*;
use ui::{session, AdminGuard};

use super::AdminShell;
use crate::Route;

#[component]
pub fn BlogManager() -> Element {
    rsx! {
        AdminGuard {
            AdminShell {
                title: "Blog",
                BlogManagerBody {}
            }
        }
    }
}

#[component]
fn BlogManagerBody() -> Element {
    let mut posts = use_signal(Vec::<BlogPostSummary>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loaded = use_signal(|| false);

    let _ = use_resource(move || async move {
        let token = session::load_token().unwrap_or_default();
        match api::blog::admin_list_posts(token).await {
            Ok(list) => posts.set(list),
            Err(e) => error.set(Some(e.to_string())),
        }
        loaded.set(true);
    });

    let mut set_published = move |id: String, publish: bool| {
        spawn(async move {
            error.set(None);
            let token = session::load_token().unwrap_or_default();
            match api::blog::set_post_published(id, token, publish).await {
                Ok(updated) => {
                    if let Some(row) = posts.write().iter_mut().find(|p| p.id == updated.id) {
                        row.status = updated.status;
                        row.published_at = updated.published_at.clone();
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
            match api::blog::delete_post(id.clone(), token).await {
                Ok(()) => posts.write().retain(|p| p.id != id),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        div {
            class: "admin-toolbar",
            Link { class: "button primary", to: Route::BlogEditorNew {}, "New post" }
        }

        if let Some(message) = error() {
            p { class: "form-status error", "{message}" }
        }

        if !loaded() {
            p { class: "muted", "Loading…" }
        } else if posts().is_empty() {
            p { class: "muted", "No posts yet. Write the first one." }
        } else {
            table {
                class: "admin-table",
                thead {
                    tr {
                        th { "Title" }
                        th { "Status" }
                        th { "Created" }
                        th { "" }
                    }
                }
                tbody {
                    for post in posts() {
                        tr {
                            key: "{post.id}",
                            td {
                                Link {
                                    to: Route::BlogEditorEdit { id: post.id.clone() },
                                    "{post.title}"
                                }
                            }
                            td {
                                span {
                                    class: if post.status == PostStatus::Published { "badge published" } else { "badge draft" },
                                    {post.status.as_str()}
                                }
                            }
                            td { class: "muted", "{post.created_at}" }
                            td {
                                class: "admin-row-actions",
                                button {
                                    class: "button small",
                                    onclick: {
                                        let id = post.id.clone();
                                        let publish = post.status != PostStatus::Published;
                                        move |_| set_published(id.clone(), publish)
                                    },
                                    if post.status == PostStatus::Published { "Unpublish" } else { "Publish" }
                                }
                                button {
                                    class: "button small danger",
                                    onclick: {
                                        let id = post.id.clone();
                                        move |_| delete(id.clone())
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
