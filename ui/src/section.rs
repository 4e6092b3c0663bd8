//! Visibility gate for one public page section.

use dioxus::prelude::*;

use crate::visibility::use_section_visibility;

/// Renders its children only while the named section is enabled.
///
/// Unknown names render (default-open), so wrapping new page content in a
/// gate is always safe even before the backend knows the section exists.
#[component]
pub fn SectionGate(
    name: String,
    /// Optional element shown instead of hidden content.
    #[props(default)]
    fallback: Option<Element>,
    children: Element,
) -> Element {
    let visibility = use_section_visibility();

    if visibility.is_visible(&name) {
        rsx! {
            {children}
        }
    } else if let Some(fallback) = fallback {
        rsx! {
            {fallback}
        }
    } else {
        rsx! {}
    }
}
