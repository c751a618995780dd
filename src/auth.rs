//! Authentication capability consumed by the navbar.
//!
//! The navbar never knows how a user signed in. It only asks an
//! [`AuthProvider`] whether someone is signed in, whether that user is an
//! admin, and asks it to sign out.

use serde::{Deserialize, Serialize};

/// Signed-in user record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(default, alias = "isAdmin")]
    pub is_admin: bool,
}

/// Source of authentication state.
pub trait AuthProvider {
    fn is_authenticated(&self) -> bool;

    fn user(&self) -> Option<User>;

    fn logout(&self);

    /// Snapshot of the two flags the action panel branches on.
    fn session(&self) -> Session {
        let authenticated = self.is_authenticated();
        let admin = authenticated && self.user().is_some_and(|u| u.is_admin);
        Session {
            authenticated,
            admin,
        }
    }
}

/// Authentication flags for one render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub authenticated: bool,
    pub admin: bool,
}

impl Session {
    pub const GUEST: Session = Session {
        authenticated: false,
        admin: false,
    };

    pub fn user() -> Self {
        Session {
            authenticated: true,
            admin: false,
        }
    }

    pub fn admin() -> Self {
        Session {
            authenticated: true,
            admin: true,
        }
    }
}
