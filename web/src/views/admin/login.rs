//! Admin login form. Writing the credential pair is this view's job alone;
//! the guard only ever reads or deletes it.

use dioxus::prelude::*;
use ui::session;

use crate::Route;

#[component]
pub fn AdminLogin(redirect: String) -> Element {
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        let redirect = redirect.clone();
        spawn(async move {
            submitting.set(true);
            error.set(None);

            match api::login(username(), password()).await {
                Ok(response) => {
                    session::store_session(&response.access_token, &response.user);
                    // Return to where the guard bounced us from, if anywhere.
                    match redirect.parse::<Route>() {
                        Ok(route) if !redirect.is_empty() => {
                            nav.replace(route);
                        }
                        _ => {
                            nav.replace(Route::AdminDashboard {});
                        }
                    }
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "login-container",
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; padding: 2rem;",

            h1 { style: "margin-bottom: 0.5rem;", "Admin" }
            p {
                style: "margin-bottom: 2rem; color: #787774;",
                "Sign in to manage the site."
            }

            form {
                class: "login-form",
                style: "display: flex; flex-direction: column; gap: 0.75rem; width: 100%; max-width: 320px;",
                onsubmit,

                input {
                    placeholder: "Username",
                    autofocus: true,
                    value: "{username}",
                    oninput: move |e| username.set(e.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                }
                button {
                    r#type: "submit",
                    class: "button primary",
                    disabled: submitting(),
                    if submitting() { "Signing in…" } else { "Sign in" }
                }
                if let Some(message) = error() {
                    p { class: "form-status error", "{message}" }
                }
            }
        }
    }
}
