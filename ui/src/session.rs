//! # Client-side credential storage
//!
//! The admin credential lives under two fixed keys: [`TOKEN_KEY`] holds the
//! opaque bearer token, [`USER_KEY`] the serialized [`UserInfo`] descriptor
//! cached at login. On wasm this is the browser's localStorage; on other
//! targets a thread-local map stands in (the same fallback role the in-memory
//! store plays elsewhere in this workspace's lineage), which also makes the
//! guard's storage effects testable natively.
//!
//! Ownership is deliberately narrow: the login flow writes the pair, the
//! session guard deletes it when the backend rejects the token, logout
//! deletes it explicitly. Nothing else touches these keys.

use api::UserInfo;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "adminToken";
/// Storage key for the cached user descriptor.
pub const USER_KEY: &str = "adminUser";

#[cfg(target_arch = "wasm32")]
mod backend {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub fn read(key: &str) -> Option<String> {
        storage()?.get_item(key).ok().flatten()
    }

    pub fn write(key: &str, value: &str) {
        if let Some(storage) = storage() {
            if storage.set_item(key, value).is_err() {
                tracing::warn!(key, "could not persist to localStorage");
            }
        }
    }

    pub fn remove(key: &str) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn read(key: &str) -> Option<String> {
        STORE.with(|s| s.borrow().get(key).cloned())
    }

    pub fn write(key: &str, value: &str) {
        STORE.with(|s| s.borrow_mut().insert(key.to_string(), value.to_string()));
    }

    pub fn remove(key: &str) {
        STORE.with(|s| s.borrow_mut().remove(key));
    }
}

/// Read the stored bearer token, if any. Empty strings count as absent.
pub fn load_token() -> Option<String> {
    backend::read(TOKEN_KEY).filter(|t| !t.is_empty())
}

/// Read the cached user descriptor. Garbage in storage reads as absent.
pub fn load_cached_user() -> Option<UserInfo> {
    let raw = backend::read(USER_KEY)?;
    serde_json::from_str(&raw).ok()
}

/// Persist a freshly issued credential pair. Called by the login flow only.
pub fn store_session(token: &str, user: &UserInfo) {
    backend::write(TOKEN_KEY, token);
    match serde_json::to_string(user) {
        Ok(serialized) => backend::write(USER_KEY, &serialized),
        Err(e) => tracing::warn!(error = %e, "could not serialize user descriptor"),
    }
}

/// Delete both keys. Called by the guard on rejection and by logout.
pub fn clear_session() {
    backend::remove(TOKEN_KEY);
    backend::remove(USER_KEY);
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
    fn round_trip_and_clear() {
        store_session("tok-abc", &test_user());
        assert_eq!(load_token().as_deref(), Some("tok-abc"));
        assert_eq!(load_cached_user().unwrap().username, "admin");

        clear_session();
        assert!(load_token().is_none());
        assert!(load_cached_user().is_none());
    }

    #[test]
    fn empty_token_reads_as_absent() {
        backend::write(TOKEN_KEY, "");
        assert!(load_token().is_none());
        clear_session();
    }

    #[test]
    fn garbage_user_descriptor_reads_as_absent() {
        backend::write(USER_KEY, "{not json");
        assert!(load_cached_user().is_none());
        clear_session();
    }
}
