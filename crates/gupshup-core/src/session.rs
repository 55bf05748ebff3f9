//! Session state
//!
//! Holds at most one [`User`]: the logged-in one. Mutated only through
//! [`SessionAction`]s so every change is logged in one place.

use crate::types::User;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Login, registration, OTP verification or profile save succeeded
    SetUser(Option<User>),
    /// Server-side logout succeeded
    Logout,
    /// Drop the pending (unverified) user before the verified one arrives
    CleanUser,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    user: Option<User>,
    access_token: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: SessionAction) {
        match action {
            SessionAction::SetUser(user) => {
                tracing::info!(
                    user = user.as_ref().map(|u| u.id.as_str()).unwrap_or("-"),
                    "Session user set"
                );
                self.user = user;
            }
            SessionAction::Logout => {
                tracing::info!("Session cleared by logout");
                self.user = None;
                self.access_token = None;
            }
            SessionAction::CleanUser => {
                self.user = None;
            }
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn set_access_token(&mut self, token: Option<String>) {
        self.access_token = token;
    }
}

/// Outcome of probing `/user/me` before rendering a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteGate {
    /// Probe in progress
    Loading,
    /// No valid session
    Anonymous,
    /// Session confirmed by the server
    Authenticated(User),
}

impl RouteGate {
    /// Protected pages render only when authenticated.
    pub fn allows_protected(&self) -> bool {
        matches!(self, RouteGate::Authenticated(_))
    }

    /// Public (auth) pages render only for anonymous visitors.
    pub fn allows_public(&self) -> bool {
        matches!(self, RouteGate::Anonymous)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RouteGate::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> User {
        User {
            id: "u1".into(),
            name: "Ana".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_set_and_logout() {
        let mut session = SessionState::new();
        assert!(!session.is_logged_in());

        session.apply(SessionAction::SetUser(Some(ana())));
        session.set_access_token(Some("tkn".into()));
        assert_eq!(session.user_id(), Some("u1"));

        session.apply(SessionAction::Logout);
        assert!(session.user().is_none());
        assert!(session.access_token().is_none());
    }

    #[test]
    fn test_clean_user_keeps_token() {
        let mut session = SessionState::new();
        session.apply(SessionAction::SetUser(Some(ana())));
        session.set_access_token(Some("tkn".into()));

        session.apply(SessionAction::CleanUser);
        assert!(!session.is_logged_in());
        assert_eq!(session.access_token(), Some("tkn"));
    }

    #[test]
    fn test_set_user_none_clears() {
        let mut session = SessionState::new();
        session.apply(SessionAction::SetUser(Some(ana())));
        session.apply(SessionAction::SetUser(None));
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_route_gate() {
        assert!(!RouteGate::Loading.allows_protected());
        assert!(!RouteGate::Loading.allows_public());
        assert!(RouteGate::Anonymous.allows_public());
        assert!(RouteGate::Authenticated(ana()).allows_protected());
        assert!(!RouteGate::Authenticated(ana()).allows_public());
    }
}
