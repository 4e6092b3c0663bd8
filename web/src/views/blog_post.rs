//! Single published post, fetched by slug.

use dioxus::prelude::*;
use ui::SectionGate;

use crate::Route;

#[component]
pub fn BlogPost(slug: String) -> Element {
    let post = use_resource(use_reactive!(|(slug,)| async move {
        api::blog::get_post(slug).await
    }));

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
                match &*post.read_unchecked() {
                    None => rsx! {
                        p { class: "muted", "Loading…" }
                    },
                    Some(Err(_)) => rsx! {
                        h1 { "Post not found" }
                        p {
                            Link { to: Route::Blog {}, "← Back to the blog" }
                        }
                    },
                    Some(Ok(post)) => rsx! {
                        article {
                            class: "post-body",
                            h1 { "{post.title}" }
                            if let Some(published) = &post.published_at {
                                p { class: "post-date", "{published}" }
                            }
                            if let Some(image) = &post.featured_image {
                                img { class: "post-image", src: "{image}", alt: "{post.title}" }
                            }
                            // Plain-text content; paragraphs split on blank lines.
                            for paragraph in post.content.split("\n\n") {
                                p { "{paragraph}" }
                            }
                            p {
                                Link { to: Route::Blog {}, "← Back to the blog" }
                            }
                        }
                    },
                }
            }
        }
    }
}
