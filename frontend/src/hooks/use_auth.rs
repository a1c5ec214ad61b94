//! Application-wide session context: an explicit state value driven by the
//! pure reducer in `shared::session`, provided to the tree via
//! `ContextProvider`. Token persistence happens in the action sites, never
//! inside the reducer.

use std::rc::Rc;

use shared::{reduce_session, SessionEvent, SessionState, User};
use yew::prelude::*;

use crate::services::ApiClient;

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub state: SessionState,
    pub token: Option<String>,
    /// False until the startup token check has resolved.
    pub initialized: bool,
}

impl Session {
    /// Session as restored from durable storage at startup: the token is
    /// present but not yet validated against `/auth/me`.
    pub fn from_stored_token(token: Option<String>) -> Self {
        Self {
            initialized: token.is_none(),
            state: SessionState::Unauthenticated,
            token,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user()
    }

    /// Client carrying this session's bearer token.
    pub fn api_client(&self) -> ApiClient {
        ApiClient::new(self.token.clone())
    }
}

pub enum SessionAction {
    LoggedIn(User, String),
    Restored(User),
    Invalidated,
    LoggedOut,
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: SessionAction) -> Rc<Self> {
        let next = match action {
            SessionAction::LoggedIn(user, token) => Session {
                state: reduce_session(&self.state, SessionEvent::LoginSucceeded(user)),
                token: Some(token),
                initialized: true,
            },
            SessionAction::Restored(user) => Session {
                state: reduce_session(&self.state, SessionEvent::Restored(user)),
                token: self.token.clone(),
                initialized: true,
            },
            SessionAction::Invalidated => Session {
                state: reduce_session(&self.state, SessionEvent::SessionInvalid),
                token: None,
                initialized: true,
            },
            SessionAction::LoggedOut => Session {
                state: reduce_session(&self.state, SessionEvent::LoggedOut),
                token: None,
                initialized: true,
            },
        };
        Rc::new(next)
    }
}

pub type SessionHandle = UseReducerHandle<Session>;

#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("session context not mounted")
}
