//! Experience page: reverse-chronological timeline.

use dioxus::prelude::*;
use ui::SectionGate;

struct Role {
    period: &'static str,
    title: &'static str,
    company: &'static str,
    summary: &'static str,
}

const ROLES: &[Role] = &[
    Role {
        period: "2022 — present",
        title: "Senior Software Engineer",
        company: "Meridian Data",
        summary: "Own the ingestion platform: a Rust service fleet moving \
                  a few billion events a day into Postgres and object storage.",
    },
    Role {
        period: "2019 — 2022",
        title: "Backend Engineer",
        company: "Fieldnote",
        summary: "Built the sync engine for an offline-first field-work app, \
                  plus most of the REST API around it.",
    },
    Role {
        period: "2016 — 2019",
        title: "Software Engineer",
        company: "Corvid Systems",
        summary: "Firmware and tooling for industrial sensors; learned why \
                  you version your wire formats on day one.",
    },
];

#[component]
pub fn Experience() -> Element {
    rsx! {
        SectionGate {
            name: "experience",
            section {
                class: "page",
                h1 { "Experience" }
                div {
                    class: "timeline",
                    for role in ROLES {
                        div {
                            class: "timeline-entry",
                            p { class: "timeline-period", "{role.period}" }
                            h2 { "{role.title} · {role.company}" }
                            p { "{role.summary}" }
                        }
                    }
                }
            }
        }
    }
}
