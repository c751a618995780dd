//! Auth-gated action panel.

use crate::auth::{AuthProvider, Session};

pub const LOGIN_PATH: &str = "/login";
pub const ADMIN_LOGIN_PATH: &str = "/admin-login";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";

/// Button styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionStyle {
    Primary,
    /// Indigo button with the shield icon.
    Admin,
}

impl ActionStyle {
    pub fn class(&self) -> &'static str {
        match self {
            ActionStyle::Primary => "action action--primary",
            ActionStyle::Admin => "action action--admin",
        }
    }
}

/// What happens when an action is triggered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Navigate(&'static str),
    /// Sign out, then go to the site root.
    Logout,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavAction {
    /// Stable identifier, rendered as `data-action`.
    pub id: &'static str,
    pub label: &'static str,
    pub kind: ActionKind,
    pub style: ActionStyle,
}

impl NavAction {
    pub const LOGIN: NavAction = NavAction {
        id: "login",
        label: "Login",
        kind: ActionKind::Navigate(LOGIN_PATH),
        style: ActionStyle::Primary,
    };

    pub const ADMIN_LOGIN: NavAction = NavAction {
        id: "admin-login",
        label: "Admin",
        kind: ActionKind::Navigate(ADMIN_LOGIN_PATH),
        style: ActionStyle::Admin,
    };

    pub const USER_DASHBOARD: NavAction = NavAction {
        id: "user-dashboard",
        label: "User Dashboard",
        kind: ActionKind::Navigate(DASHBOARD_PATH),
        style: ActionStyle::Primary,
    };

    pub const ADMIN_DASHBOARD: NavAction = NavAction {
        id: "admin-dashboard",
        label: "Admin Dashboard",
        kind: ActionKind::Navigate(ADMIN_DASHBOARD_PATH),
        style: ActionStyle::Admin,
    };

    pub const LOGOUT: NavAction = NavAction {
        id: "logout",
        label: "Sign Out",
        kind: ActionKind::Logout,
        style: ActionStyle::Primary,
    };

    /// Path the action leads to.
    pub fn target(&self) -> &'static str {
        match self.kind {
            ActionKind::Navigate(path) => path,
            ActionKind::Logout => "/",
        }
    }
}

/// The mutually exclusive button groups of the navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPanel {
    AdminDashboard,
    UserDashboard,
    Guest,
}

impl AuthPanel {
    pub fn for_session(session: Session) -> Self {
        match (session.authenticated, session.admin) {
            (true, true) => AuthPanel::AdminDashboard,
            (true, false) => AuthPanel::UserDashboard,
            (false, _) => AuthPanel::Guest,
        }
    }

    pub fn actions(&self) -> &'static [NavAction] {
        match self {
            AuthPanel::AdminDashboard => &[NavAction::ADMIN_DASHBOARD],
            AuthPanel::UserDashboard => &[NavAction::USER_DASHBOARD],
            AuthPanel::Guest => &[NavAction::LOGIN, NavAction::ADMIN_LOGIN],
        }
    }
}

/// Run `action` against the auth provider and a navigation callback.
pub fn dispatch<A, F>(action: &NavAction, auth: &A, mut navigate: F)
where
    A: AuthProvider + ?Sized,
    F: FnMut(&str),
{
    match action.kind {
        ActionKind::Navigate(path) => {
            tracing::debug!("action {} -> {}", action.id, path);
            navigate(path);
        }
        ActionKind::Logout => {
            auth.logout();
            tracing::info!("signed out");
            navigate("/");
        }
    }
}
