//! Public site header. The app supplies the nav links as children so this
//! crate stays ignorant of the router's route type.

use dioxus::prelude::*;

#[component]
pub fn SiteHeader(
    /// Site owner's name, shown as the wordmark.
    brand: String,
    children: Element,
) -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        header {
            class: "site-header",
            div {
                class: "site-header-inner",
                a { class: "site-brand", href: "/", "{brand}" }

                nav {
                    class: if menu_open() { "site-nav open" } else { "site-nav" },
                    onclick: move |_| menu_open.set(false),
                    {children}
                }

                button {
                    class: "site-menu-toggle",
                    aria_label: "Toggle menu",
                    onclick: move |_| menu_open.set(!menu_open()),
                    if menu_open() { "✕" } else { "☰" }
                }
            }
        }
    }
}
