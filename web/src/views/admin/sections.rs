//! Section visibility toggles.
//!
//! Toggling is optimistic: the switch flips immediately, the row is restored
//! if the backend says no. After any accepted change the shared public store
//! is refreshed so the rest of the page reflects the new state without a
//! reload.

use api::Section;
use dioxus::prelude::*;
use ui::{session, use_section_visibility, AdminGuard};

use super::AdminShell;

#[component]
pub fn AdminSections() -> Element {
    rsx! {
        AdminGuard {
            AdminShell {
                title: "Sections",
                SectionsBody {}
            }
        }
    }
}

#[component]
fn SectionsBody() -> Element {
    let mut sections = use_signal(Vec::<Section>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loaded = use_signal(|| false);
    let store = use_section_visibility();

    // One admin fetch on mount; errors are surfaced as text, not swallowed.
    let _ = use_resource(move || async move {
        let token = session::load_token().unwrap_or_default();
        match api::sections::get_section_visibility_admin(token).await {
            Ok(list) => {
                sections.set(list.sections);
                error.set(None);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
        loaded.set(true);
    });

    let mut toggle = move |name: String, currently_visible: bool| {
        spawn(async move {
            error.set(None);

            // Optimistic flip.
            if let Some(row) = sections
                .write()
                .iter_mut()
                .find(|s| s.section_name == name)
            {
                row.is_visible = !currently_visible;
            }

            let token = session::load_token().unwrap_or_default();
            match api::sections::update_section_visibility(
                name.clone(),
                token,
                !currently_visible,
            )
            .await
            {
                Ok(updated) => {
                    if let Some(row) = sections
                        .write()
                        .iter_mut()
                        .find(|s| s.section_name == updated.section_name)
                    {
                        *row = updated;
                    }
                    let mut store = store;
                    store.refresh().await;
                }
                Err(e) => {
                    // Revert the optimistic flip.
                    if let Some(row) = sections
                        .write()
                        .iter_mut()
                        .find(|s| s.section_name == name)
                    {
                        row.is_visible = currently_visible;
                    }
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let reset = move |_| {
        spawn(async move {
            error.set(None);
            let token = session::load_token().unwrap_or_default();
            match api::sections::reset_section_visibility(token).await {
                Ok(list) => {
                    sections.set(list.sections);
                    let mut store = store;
                    store.refresh().await;
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        p {
            class: "muted",
            "Hidden sections disappear from the public site immediately. "
            "Visitors mid-page keep what they already loaded."
        }

        if let Some(message) = error() {
            p { class: "form-status error", "{message}" }
        }

        if !loaded() {
            p { class: "muted", "Loading…" }
        } else {
            table {
                class: "admin-table",
                thead {
                    tr {
                        th { "Section" }
                        th { "Visible" }
                        th { "Last changed" }
                    }
                }
                tbody {
                    for section in sections() {
                        tr {
                            key: "{section.section_name}",
                            td { "{section.section_name}" }
                            td {
                                button {
                                    class: if section.is_visible { "toggle on" } else { "toggle off" },
                                    onclick: {
                                        let name = section.section_name.clone();
                                        let visible = section.is_visible;
                                        move |_| toggle(name.clone(), visible)
                                    },
                                    if section.is_visible { "Visible" } else { "Hidden" }
                                }
                            }
                            td {
                                class: "muted",
                                {section.updated_at.clone().unwrap_or_else(|| "—".to_string())}
                            }
                        }
                    }
                }
            }

            button {
                class: "button",
                onclick: reset,
                "Reset to defaults"
            }
        }
    }
}
