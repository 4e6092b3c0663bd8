//! Public blog index: published posts only.

use dioxus::prelude::*;
use ui::SectionGate;

use crate::Route;

#[component]
pub fn Blog() -> Element {
    let posts = use_resource(|| async { api::blog::list_published_posts().await });

    rsx! {
        SectionGate {
            name: "blog",
            fallback: rsx! {
                section { class: "page",
                    p { class: "muted", "The blog is taking a break." }
                }
            },
            section {
                class: "page",
                h1 { "Blog" }
                match &*posts.read_unchecked() {
                    None => rsx! {
                        p { class: "muted", "Loading posts…" }
                    },
                    Some(Err(_)) => rsx! {
                        p { class: "form-status error", "Couldn't load posts right now. Try again in a bit." }
                    },
                    Some(Ok(posts)) if posts.is_empty() => rsx! {
                        p { class: "muted", "Nothing published yet." }
                    },
                    Some(Ok(posts)) => rsx! {
                        div {
                            class: "post-list",
                            for post in posts.clone() {
                                article {
                                    class: "post-card",
                                    h2 {
                                        Link {
                                            to: Route::BlogPost { slug: post.slug.clone() },
                                            "{post.title}"
                                        }
                                    }
                                    if let Some(published) = &post.published_at {
                                        p { class: "post-date", "{published}" }
                                    }
                                    if let Some(excerpt) = &post.excerpt {
                                        p { "{excerpt}" }
                                    }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
