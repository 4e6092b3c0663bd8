//! Landing page: hero plus short teasers for the gated sections.

use dioxus::prelude::*;
use ui::SectionGate;

use crate::Route;
use super::SITE_OWNER;

#[component]
pub fn Home() -> Element {
    rsx! {
        section {
            class: "hero",
            p { class: "hero-kicker", "Software engineer" }
            h1 { "Hi, I'm {SITE_OWNER}." }
            p {
                class: "hero-lede",
                "I build reliable backend services and the occasional frontend "
                "to go with them. This site is where I keep my work, my notes, "
                "and a way to reach me."
            }
            div {
                class: "hero-actions",
                Link { class: "button primary", to: Route::Portfolio {}, "See my work" }
                Link { class: "button", to: Route::Contact {}, "Get in touch" }
            }
        }

        SectionGate {
            name: "about",
            section {
                class: "home-teaser",
                h2 { "About" }
                p {
                    "A decade of shipping production systems, from embedded "
                    "firmware to distributed web backends."
                }
                Link { to: Route::About {}, "More about me →" }
            }
        }

        SectionGate {
            name: "portfolio",
            section {
                class: "home-teaser",
                h2 { "Selected work" }
                p { "A few projects I'm proud of, with the stories behind them." }
                Link { to: Route::Portfolio {}, "Browse the portfolio →" }
            }
        }

        SectionGate {
            name: "contact",
            section {
                class: "home-teaser",
                h2 { "Work with me" }
                p { "Open to consulting and interesting full-time problems." }
                Link { to: Route::Contact {}, "Say hello →" }
            }
        }
    }
}
