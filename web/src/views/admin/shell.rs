//! Chrome shared by the admin views: side nav, page header, logout.

use dioxus::prelude::*;
use ui::{session, use_admin_session};

use crate::Route;

#[component]
pub fn AdminShell(title: String, children: Element) -> Element {
    let check = use_admin_session();
    let username = check()
        .user()
        .map(|u| u.username.clone())
        .unwrap_or_default();

    rsx! {
        div {
            class: "admin-shell",
            aside {
                class: "admin-nav",
                p { class: "admin-nav-brand", "Admin" }
                Link { to: Route::AdminDashboard {}, "Dashboard" }
                Link { to: Route::AdminSections {}, "Sections" }
                Link { to: Route::BlogManager {}, "Blog" }
                Link { to: Route::AdminNewsletter {}, "Newsletter" }
                Link { to: Route::AdminMessages {}, "Messages" }
                Link { to: Route::AdminFiles {}, "Files" }
                div { class: "admin-nav-spacer" }
                a { href: "/", "View site" }
                LogoutButton {}
            }
            section {
                class: "admin-content",
                header {
                    class: "admin-content-header",
                    h1 { "{title}" }
                    if !username.is_empty() {
                        span { class: "admin-whoami", "Signed in as {username}" }
                    }
                }
                {children}
            }
        }
    }
}

/// Revoke the session server-side, drop the stored credential, leave.
#[component]
fn LogoutButton() -> Element {
    let onclick = move |_| async move {
        if let Some(token) = session::load_token() {
            if let Err(e) = api::logout(token).await {
                // Revocation failing is not a reason to stay logged in.
                tracing::warn!(error = %e, "logout call failed");
            }
        }
        session::clear_session();

        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/admin/login");
            }
        }
    };

    rsx! {
        button {
            class: "admin-logout",
            onclick,
            "Log out"
        }
    }
}
