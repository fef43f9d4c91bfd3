//! Platform-appropriate token store.
//!
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalTokenStore`]
//! - **Native**: one process-wide [`store::MemoryTokenStore`]

/// Create the token store for this platform.
pub fn make_token_store() -> impl store::TokenStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalTokenStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        static SLOT: std::sync::OnceLock<store::MemoryTokenStore> = std::sync::OnceLock::new();
        SLOT.get_or_init(store::MemoryTokenStore::new).clone()
    }
}
