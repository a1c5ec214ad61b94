//! Session and navigation state. Both are explicit values driven by pure
//! functions: the frontend holds them in a reducer-backed context instead
//! of a mutable global, and the storage/network side effects live in the
//! service layer.

use crate::models::User;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated(User),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Unauthenticated => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Login round-trip succeeded.
    LoginSucceeded(User),
    /// A stored token was validated against `/auth/me` at startup.
    Restored(User),
    /// The startup validation failed: the token is expired or bogus.
    SessionInvalid,
    LoggedOut,
}

pub fn reduce_session(_state: &SessionState, event: SessionEvent) -> SessionState {
    match event {
        SessionEvent::LoginSucceeded(user) | SessionEvent::Restored(user) => {
            SessionState::Authenticated(user)
        }
        SessionEvent::SessionInvalid | SessionEvent::LoggedOut => SessionState::Unauthenticated,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Members,
    Expenses,
    Renovation,
    Agenda,
    Shopping,
    Settings,
    Login,
}

impl Route {
    /// Sidebar entries, in display order.
    pub const NAV: [Route; 7] = [
        Route::Dashboard,
        Route::Members,
        Route::Expenses,
        Route::Renovation,
        Route::Agenda,
        Route::Shopping,
        Route::Settings,
    ];

    pub fn requires_auth(self) -> bool {
        !matches!(self, Route::Login)
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Members => "Membri Famiglia",
            Route::Expenses => "Spese Mensili",
            Route::Renovation => "Ristrutturazione",
            Route::Agenda => "Agenda",
            Route::Shopping => "Spesa giornaliera",
            Route::Settings => "Impostazioni",
            Route::Login => "Accedi",
        }
    }
}

/// Gate a requested route against the session: protected routes bounce to
/// login when unauthenticated, and the login route bounces home once
/// authenticated.
pub fn resolve_route(requested: Route, authenticated: bool) -> Route {
    if requested.requires_auth() && !authenticated {
        Route::Login
    } else if requested == Route::Login && authenticated {
        Route::Dashboard
    } else {
        requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "u1".into(),
            email: "anna@esempio.it".into(),
            name: "Anna".into(),
        }
    }

    #[test]
    fn test_login_and_restore_authenticate() {
        let state = SessionState::Unauthenticated;
        let state = reduce_session(&state, SessionEvent::LoginSucceeded(user()));
        assert!(state.is_authenticated());
        assert_eq!(state.user().unwrap().name, "Anna");

        let restored = reduce_session(
            &SessionState::Unauthenticated,
            SessionEvent::Restored(user()),
        );
        assert!(restored.is_authenticated());
    }

    #[test]
    fn test_invalid_session_demotes() {
        let state = SessionState::Authenticated(user());
        let state = reduce_session(&state, SessionEvent::SessionInvalid);
        assert_eq!(state, SessionState::Unauthenticated);
    }

    #[test]
    fn test_logout_clears_user() {
        let state = SessionState::Authenticated(user());
        assert_eq!(
            reduce_session(&state, SessionEvent::LoggedOut),
            SessionState::Unauthenticated
        );
    }

    #[test]
    fn test_protected_route_redirects_to_login() {
        for route in Route::NAV {
            assert_eq!(resolve_route(route, false), Route::Login);
        }
    }

    #[test]
    fn test_login_route_redirects_home_when_authenticated() {
        assert_eq!(resolve_route(Route::Login, true), Route::Dashboard);
        assert_eq!(resolve_route(Route::Login, false), Route::Login);
    }

    #[test]
    fn test_authenticated_routes_pass_through() {
        assert_eq!(resolve_route(Route::Agenda, true), Route::Agenda);
        assert_eq!(resolve_route(Route::Settings, true), Route::Settings);
    }
}
