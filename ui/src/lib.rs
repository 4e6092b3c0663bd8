//! This crate contains all shared UI for the workspace: the admin session
//! guard, the section visibility store, and the public page chrome.

mod auth;
pub use auth::{use_admin_session, AdminGuard, AuthCheck};

pub mod session;

mod visibility;
pub use visibility::{
    use_section_visibility, SectionSet, SectionVisibility, SectionVisibilityProvider,
    VisibilityState,
};

mod section;
pub use section::SectionGate;

mod navbar;
pub use navbar::SiteHeader;

mod footer;
pub use footer::SiteFooter;
