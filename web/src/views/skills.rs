//! Skills page: grouped tech lists.

use dioxus::prelude::*;
use ui::SectionGate;

struct SkillGroup {
    title: &'static str,
    items: &'static [&'static str],
}

const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Languages",
        items: &["Rust", "Python", "Go", "TypeScript", "SQL"],
    },
    SkillGroup {
        title: "Backend",
        items: &["PostgreSQL", "Redis", "Axum", "gRPC", "Kafka"],
    },
    SkillGroup {
        title: "Frontend",
        items: &["Dioxus", "React", "WASM", "CSS"],
    },
    SkillGroup {
        title: "Operations",
        items: &["Docker", "Kubernetes", "Terraform", "Grafana", "CI/CD"],
    },
];

#[component]
pub fn Skills() -> Element {
    rsx! {
        SectionGate {
            name: "skills",
            section {
                class: "page",
                h1 { "Skills" }
                p { class: "muted", "Tools I reach for, roughly grouped." }
                div {
                    class: "skills-grid",
                    for group in SKILL_GROUPS {
                        div {
                            class: "skill-group",
                            h2 { "{group.title}" }
                            ul {
                                for item in group.items {
                                    li { "{item}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
