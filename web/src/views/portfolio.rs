//! Portfolio page: project cards.

use dioxus::prelude::*;
use ui::SectionGate;

struct Project {
    name: &'static str,
    blurb: &'static str,
    stack: &'static [&'static str],
    link: Option<&'static str>,
}

const PROJECTS: &[Project] = &[
    Project {
        name: "driftqueue",
        blurb: "A small, persistent work queue on Postgres with exactly-once \
                handoff semantics and a pleasant CLI.",
        stack: &["Rust", "PostgreSQL", "Tokio"],
        link: Some("https://github.com/example/driftqueue"),
    },
    Project {
        name: "trailmap",
        blurb: "Offline-first trail maps as a PWA; tile caching, GPX import, \
                and elevation profiles in the browser.",
        stack: &["Rust", "WASM", "Dioxus"],
        link: Some("https://github.com/example/trailmap"),
    },
    Project {
        name: "sensor bridge",
        blurb: "Modbus-to-MQTT bridge that has been quietly running in three \
                factories since 2018.",
        stack: &["Go", "MQTT"],
        link: None,
    },
];

#[component]
pub fn Portfolio() -> Element {
    rsx! {
        SectionGate {
            name: "portfolio",
            section {
                class: "page",
                h1 { "Portfolio" }
                p { class: "muted", "Side projects and open source. Work projects live behind NDAs." }
                div {
                    class: "project-grid",
                    for project in PROJECTS {
                        div {
                            class: "project-card",
                            h2 { "{project.name}" }
                            p { "{project.blurb}" }
                            div {
                                class: "project-stack",
                                for tech in project.stack {
                                    span { class: "tag", "{tech}" }
                                }
                            }
                            if let Some(link) = project.link {
                                a { href: "{link}", target: "_blank", "Source →" }
                            }
                        }
                    }
                }
            }
        }
    }
}
