//! Public site footer with the newsletter signup form.

use dioxus::prelude::*;

use crate::section::SectionGate;

#[component]
pub fn SiteFooter(brand: String) -> Element {
    rsx! {
        footer {
            class: "site-footer",
            SectionGate {
                name: "newsletter",
                NewsletterSignup {}
            }
            p {
                class: "site-footer-copyright",
                "© {brand}. Built with Rust and Dioxus."
            }
        }
    }
}

/// Email capture form. Posts to the public subscribe endpoint and reports
/// the outcome inline; it never blocks the rest of the footer.
#[component]
fn NewsletterSignup() -> Element {
    let mut email = use_signal(String::new);
    let mut status = use_signal(|| Option::<Result<(), String>>::None);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        spawn(async move {
            submitting.set(true);
            status.set(None);
            match api::newsletter::subscribe(email()).await {
                Ok(()) => {
                    email.set(String::new());
                    status.set(Some(Ok(())));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "newsletter subscribe failed");
                    status.set(Some(Err(e.to_string())));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "newsletter-signup",
            h3 { "Stay in the loop" }
            p { "Occasional notes on what I'm building. No spam." }
            form {
                onsubmit,
                input {
                    r#type: "email",
                    placeholder: "you@example.com",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
                button {
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Subscribing…" } else { "Subscribe" }
                }
            }
            match status() {
                Some(Ok(())) => rsx! {
                    p { class: "form-status success", "Thanks — you're subscribed." }
                },
                Some(Err(message)) => rsx! {
                    p { class: "form-status error", "{message}" }
                },
                None => rsx! {},
            }
        }
    }
}
