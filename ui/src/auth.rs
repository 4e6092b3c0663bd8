//! # Session guard for the admin console
//!
//! Gates every admin-only view behind a verified bearer credential. The
//! check is a three-state machine and the transitions are deliberate:
//!
//! - no stored token ⇒ [`AuthCheck::Denied`] without any network call;
//! - otherwise exactly one `verify_session` round-trip per mount; a 2xx
//!   answer is the only path to [`AuthCheck::Verified`];
//! - every failure, explicit rejection and transport error alike, purges the
//!   stored credential and lands on `Denied`. Ambiguity never renders
//!   protected content.
//!
//! There are no retries and no timer: a guard instance verifies once when it
//! mounts and its result is the sole authority for that mount. Denied
//! visitors are redirected to the login view with the originally requested
//! path attached, so login can return them where they were headed.

use api::UserInfo;
use dioxus::prelude::*;

use crate::session;

/// Outcome of one credential verification pass.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthCheck {
    /// Verification still in flight.
    Pending,
    /// The backend vouched for the stored credential on this mount.
    Verified(UserInfo),
    /// No credential, or the backend rejected it.
    Denied,
}

impl AuthCheck {
    /// The verified user, if any.
    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            AuthCheck::Verified(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, AuthCheck::Denied)
    }
}

/// What a freshly mounted guard does with the stored credential.
#[derive(Debug, Clone, PartialEq)]
enum MountAction {
    /// Nothing stored: deny immediately, no verification call.
    Deny,
    /// Verify this token against the backend, once.
    Verify(String),
}

fn mount_action(stored: Option<String>) -> MountAction {
    match stored {
        None => MountAction::Deny,
        Some(token) => MountAction::Verify(token),
    }
}

/// Collapse a verification outcome into a terminal state.
///
/// Failure purges the stored credential before reporting `Denied`: a token
/// the backend would not honor must not survive to the next mount.
fn resolve(outcome: Result<UserInfo, String>) -> AuthCheck {
    match outcome {
        Ok(user) => AuthCheck::Verified(user),
        Err(reason) => {
            tracing::warn!(reason, "session verification failed, clearing credential");
            session::clear_session();
            AuthCheck::Denied
        }
    }
}

/// Read the guard's current check from context, inside an [`AdminGuard`].
pub fn use_admin_session() -> Signal<AuthCheck> {
    use_context::<Signal<AuthCheck>>()
}

/// Where the login view lives; `Denied` redirects here.
const LOGIN_PATH: &str = "/admin/login";

#[cfg(target_arch = "wasm32")]
fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        // Preserve the intended destination for the post-login return.
        let from = window.location().pathname().unwrap_or_default();
        let target = if from.is_empty() || from == LOGIN_PATH {
            LOGIN_PATH.to_string()
        } else {
            format!("{LOGIN_PATH}?redirect={from}")
        };
        let _ = window.location().set_href(&target);
    }
}

/// Guard component wrapping every admin-only view.
///
/// Mount it per protected route: each instantiation runs a fresh
/// verification, so a stale credential is caught on the next navigation at
/// the latest.
#[component]
pub fn AdminGuard(children: Element) -> Element {
    let mut check = use_signal(|| AuthCheck::Pending);
    use_context_provider(|| check);

    // At most one verification per mount.
    let _ = use_resource(move || async move {
        match mount_action(session::load_token()) {
            MountAction::Deny => {
                check.set(AuthCheck::Denied);
            }
            MountAction::Verify(token) => {
                let outcome = api::verify_session(token).await.map_err(|e| e.to_string());
                check.set(resolve(outcome));
            }
        }
    });

    match check() {
        AuthCheck::Pending => rsx! {
            div {
                class: "auth-checking",
                style: "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 60vh; gap: 1rem;",
                div { class: "spinner" }
                p { style: "color: #787774;", "Checking authentication…" }
            }
        },
        AuthCheck::Verified(_) => rsx! {
            {children}
        },
        AuthCheck::Denied => {
            #[cfg(target_arch = "wasm32")]
            redirect_to_login();

            rsx! {
                div {
                    class: "auth-denied",
                    style: "display: flex; align-items: center; justify-content: center; min-height: 60vh;",
                    p {
                        "Redirecting to "
                        a { href: LOGIN_PATH, "login" }
                        "…"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> UserInfo {
        UserInfo {
            id: "u-1".into(),
            username: "admin".into(),
            email: "admin@example.org".into(),
            is_active: true,
            created_at: "2025-01-01T00:00:00Z".into(),
            last_login: None,
        }
    }

    #[test]
    fn no_stored_token_denies_without_a_verification_call() {
        assert_eq!(mount_action(None), MountAction::Deny);
        // Anything stored goes to verification instead.
        assert_eq!(
            mount_action(Some("tok".into())),
            MountAction::Verify("tok".into())
        );
    }

    #[test]
    fn verified_leaves_credential_untouched() {
        session::store_session("tok-good", &test_user());

        let check = resolve(Ok(test_user()));
        assert_eq!(check.user().map(|u| u.username.as_str()), Some("admin"));
        assert_eq!(session::load_token().as_deref(), Some("tok-good"));

        session::clear_session();
    }

    #[test]
    fn rejection_purges_credential_and_denies() {
        session::store_session("tok-stale", &test_user());

        let check = resolve(Err("401 Unauthorized".into()));
        assert!(check.is_denied());
        assert!(session::load_token().is_none());
        assert!(session::load_cached_user().is_none());
    }

    #[test]
    fn transport_error_is_treated_like_rejection() {
        session::store_session("tok-unlucky", &test_user());

        let check = resolve(Err("connection refused".into()));
        assert!(check.is_denied());
        assert!(session::load_token().is_none());
    }
}
