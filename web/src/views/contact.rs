//! Contact page with the public message form.

use dioxus::prelude::*;
use ui::SectionGate;

#[component]
pub fn Contact() -> Element {
    rsx! {
        SectionGate {
            name: "contact",
            fallback: rsx! {
                section { class: "page",
                    p { class: "muted", "The contact form is currently closed." }
                }
            },
            section {
                class: "page",
                h1 { "Contact" }
                p { "Tell me what you're building. I read everything." }
                ContactForm {}
            }
        }
    }
}

#[component]
fn ContactForm() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut status = use_signal(|| Option::<Result<(), String>>::None);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        spawn(async move {
            submitting.set(true);
            status.set(None);
            let result =
                api::contact::submit_contact(name(), email(), subject(), message()).await;
            match result {
                Ok(()) => {
                    name.set(String::new());
                    email.set(String::new());
                    subject.set(String::new());
                    message.set(String::new());
                    status.set(Some(Ok(())));
                }
                Err(e) => status.set(Some(Err(e.to_string()))),
            }
            submitting.set(false);
        });
    };

    rsx! {
        form {
            class: "contact-form",
            onsubmit,
            label { "Name"
                input {
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
            }
            label { "Email"
                input {
                    r#type: "email",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
            }
            label { "Subject"
                input {
                    value: "{subject}",
                    oninput: move |e| subject.set(e.value()),
                }
            }
            label { "Message"
                textarea {
                    rows: 8,
                    value: "{message}",
                    oninput: move |e| message.set(e.value()),
                }
            }
            button {
                r#type: "submit",
                class: "button primary",
                disabled: submitting(),
                if submitting() { "Sending…" } else { "Send message" }
            }
            match status() {
                Some(Ok(())) => rsx! {
                    p { class: "form-status success", "Thanks — I'll get back to you soon." }
                },
                Some(Err(error)) => rsx! {
                    p { class: "form-status error", "{error}" }
                },
                None => rsx! {},
            }
        }
    }
}
