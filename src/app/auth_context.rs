//! Browser session state backing the [`AuthProvider`] capability.
//!
//! The signed-in user lives in a signal shared via context and is mirrored to
//! localStorage so a reload keeps the session. During SSR there is no storage
//! and every render is a guest render.

use dioxus::prelude::*;

use crate::auth::{AuthProvider, User};

#[cfg(target_arch = "wasm32")]
const SESSION_KEY: &str = "medcenter-session";

/// Global auth state shared via context
#[derive(Clone, Copy)]
pub struct AuthContext {
    user: Signal<Option<User>>,
}

impl AuthContext {
    /// Start a session for `user` and persist it.
    pub fn sign_in(&self, user: User) {
        tracing::info!("signed in as {} (admin: {})", user.name, user.is_admin);

        #[cfg(target_arch = "wasm32")]
        save_session(Some(&user));

        let mut current = self.user;
        current.set(Some(user));
    }
}

impl AuthProvider for AuthContext {
    fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    fn user(&self) -> Option<User> {
        (self.user)()
    }

    fn logout(&self) {
        #[cfg(target_arch = "wasm32")]
        save_session(None);

        let mut current = self.user;
        current.set(None);
    }
}

/// Initialize auth context provider - call once at app root
pub fn use_auth_provider() -> AuthContext {
    let user = use_signal(|| None::<User>);

    let ctx = use_context_provider(|| AuthContext { user });

    // Client-side only: restore the session saved by a previous visit
    #[cfg(target_arch = "wasm32")]
    {
        let mut user = user;
        use_effect(move || {
            if let Some(saved) = load_session() {
                user.set(Some(saved));
            }
        });
    }

    ctx
}

/// Get auth context - use in any component
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

// ============ WASM-only helpers ============

#[cfg(target_arch = "wasm32")]
fn load_session() -> Option<User> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(SESSION_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!("discarding unreadable session: {}", e);
            let _ = storage.remove_item(SESSION_KEY);
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn save_session(user: Option<&User>) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return;
    };
    match user.map(serde_json::to_string) {
        Some(Ok(json)) => {
            let _ = storage.set_item(SESSION_KEY, &json);
        }
        Some(Err(e)) => tracing::warn!("failed to persist session: {}", e),
        None => {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}
