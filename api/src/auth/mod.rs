//! Authentication primitives: password hashing and bearer-session tokens.

#[cfg(feature = "server")]
mod password;
#[cfg(feature = "server")]
mod token;

#[cfg(feature = "server")]
pub use password::{hash_password, verify_password};
#[cfg(feature = "server")]
pub use token::{
    create_session, delete_session, generate_token, require_admin, session_ttl,
    sweep_expired_sessions,
};
