//! # Session token persistence
//!
//! The client keeps exactly one piece of state across page loads: the bearer
//! token returned by the auth API. [`TokenStore`] abstracts where it lives so the
//! same UI code runs against browser `localStorage` ([`crate::LocalTokenStore`])
//! or an in-process slot ([`crate::MemoryTokenStore`]).
//!
//! Implementations never fail: a store that cannot be read behaves as if no
//! token were saved, and a failed write is dropped. The user simply lands on
//! the login page again.

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Persistent slot for the session bearer token.
pub trait TokenStore {
    /// The saved token, if any.
    fn load(&self) -> Option<String>;
    /// Replace the saved token.
    fn save(&self, token: &str);
    /// Forget the saved token (logout).
    fn clear(&self);
}
