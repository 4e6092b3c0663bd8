//! About page.

use dioxus::prelude::*;
use ui::SectionGate;

#[component]
pub fn About() -> Element {
    rsx! {
        SectionGate {
            name: "about",
            fallback: rsx! {
                section { class: "page",
                    p { class: "muted", "This section is currently unavailable." }
                }
            },
            section {
                class: "page",
                h1 { "About" }
                p {
                    "I'm a software engineer who likes the unglamorous parts of "
                    "the job: the data model nobody wants to touch, the deploy "
                    "pipeline that pages someone at 3am, the API that has to "
                    "stay compatible for years."
                }
                p {
                    "I've spent most of my career on backend systems — Rust and "
                    "Postgres lately, plenty of Python and Go before that — with "
                    "enough frontend work to hold my own in a design review."
                }
                p {
                    "Away from the keyboard I run trails, fix old bicycles, and "
                    "read more RFCs than is probably healthy."
                }
            }
        }
    }
}
