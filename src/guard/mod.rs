//! Role-based route guard
//!
//! Every dashboard path is classified before anything is fetched for it.
//! Public paths pass untouched. Protected paths need a session, and paths
//! inside a role zone need the zone's role. Legacy aliases are rewritten to
//! the session role's final destination in a single redirect.

use std::fmt;

use url::form_urlencoded;

use crate::session::{Role, SessionStore};

/// Role-restricted area of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Swinfy,
    Uwh,
    Trainer,
}

impl Zone {
    pub const ALL: [Zone; 3] = [Zone::Swinfy, Zone::Uwh, Zone::Trainer];

    pub fn prefix(&self) -> &'static str {
        match self {
            Zone::Swinfy => "/swinfy",
            Zone::Uwh => "/uwh",
            Zone::Trainer => "/trainer",
        }
    }

    /// The only role allowed inside this zone.
    pub fn required_role(&self) -> Role {
        match self {
            Zone::Swinfy => Role::Admin,
            Zone::Uwh => Role::Sponsor,
            Zone::Trainer => Role::Trainer,
        }
    }

    pub fn for_role(role: Role) -> Zone {
        match role {
            Role::Admin => Zone::Swinfy,
            Role::Sponsor => Zone::Uwh,
            Role::Trainer => Zone::Trainer,
        }
    }

    /// Zone containing `path`. `/swinfyx` is not inside `/swinfy`.
    pub fn of(path: &str) -> Option<Zone> {
        Zone::ALL.into_iter().find(|zone| {
            path.strip_prefix(zone.prefix())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        })
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// How the current session relates to a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    NoSession,
    WrongRole(Role),
    Authorized(Role),
}

impl GuardState {
    fn of(role: Option<Role>, zone: Zone) -> Self {
        match role {
            None => GuardState::NoSession,
            Some(role) if role == zone.required_role() => GuardState::Authorized(role),
            Some(role) => GuardState::WrongRole(role),
        }
    }
}

/// Guard decision for one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Pass,
    Redirect(String),
}

/// Route guard bound to the application's session store.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    session: SessionStore,
}

impl RouteGuard {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }

    /// Decide whether `path` may be shown to the current session.
    pub fn check(&self, path: &str) -> Navigation {
        let role = self.session.role();
        let decision = decide(strip_query(path), role);
        log::debug!("Guard {} ({:?}): {:?}", path, role, decision);
        decision
    }

    /// Relation of the current session to `zone`.
    pub fn state(&self, zone: Zone) -> GuardState {
        GuardState::of(self.session.role(), zone)
    }
}

fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}

/// Paths served without a session: the landing page, login, API and
/// framework routes, and static assets.
pub fn is_public(path: &str) -> bool {
    if path == "/" || path == "/login" {
        return true;
    }
    if path.starts_with("/api/") || path.starts_with("/_next/") {
        return true;
    }
    path.rsplit('/').next().is_some_and(|last| last.contains('.'))
}

/// Legacy path rewritten for `role`, if `path` is an alias.
fn resolve_alias(path: &str, role: Role) -> Option<&'static str> {
    match path {
        "/admin" => Some("/swinfy/verification"),
        "/dashboard" => Some(role.dashboard_path()),
        _ => None,
    }
}

/// Login page that returns to `path` after signing in.
pub fn login_redirect(path: &str) -> String {
    let callback: String = form_urlencoded::byte_serialize(path.as_bytes()).collect();
    format!("/login?callbackUrl={}", callback)
}

fn decide(path: &str, role: Option<Role>) -> Navigation {
    if is_public(path) {
        return Navigation::Pass;
    }

    let Some(role) = role else {
        return Navigation::Redirect(login_redirect(path));
    };

    if let Some(target) = resolve_alias(path, role) {
        // Role-check the destination so the alias costs a single hop
        return match decide(target, Some(role)) {
            Navigation::Pass => Navigation::Redirect(target.to_string()),
            redirect => redirect,
        };
    }

    match Zone::of(path).map(|zone| GuardState::of(Some(role), zone)) {
        Some(GuardState::WrongRole(role)) => {
            Navigation::Redirect(role.landing_path().to_string())
        }
        _ => Navigation::Pass,
    }
}
