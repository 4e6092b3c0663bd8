//! Shared chrome for every public page: header with nav, footer, outlet.

use dioxus::prelude::*;
use ui::{use_section_visibility, SiteFooter, SiteHeader};

use crate::Route;
use super::SITE_OWNER;

#[component]
pub fn PublicLayout() -> Element {
    let visibility = use_section_visibility();

    rsx! {
        SiteHeader {
            brand: "{SITE_OWNER}",
            Link { to: Route::Home {}, "Home" }
            Link { to: Route::About {}, "About" }
            Link { to: Route::Portfolio {}, "Portfolio" }
            Link { to: Route::Skills {}, "Skills" }
            Link { to: Route::Experience {}, "Experience" }
            // The blog link only exists while the section is enabled; the
            // page itself is gated too, this just keeps the nav honest.
            if visibility.is_visible("blog") {
                Link { to: Route::Blog {}, "Blog" }
            }
            Link { to: Route::Contact {}, "Contact" }
        }

        main {
            class: "site-main",
            Outlet::<Route> {}
        }

        SiteFooter { brand: "{SITE_OWNER}" }
    }
}
