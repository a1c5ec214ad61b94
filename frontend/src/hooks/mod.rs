//! Per-page state containers. Each hook follows the same contract: load
//! the collection on mount behind a loading flag, keep dialog state as an
//! explicit enum, reload the whole collection after every successful
//! mutation, and on a failed mutation leave the dialog open with the
//! server's message so the user can retry.

pub mod use_agenda;
pub mod use_auth;
pub mod use_dashboard;
pub mod use_expenses;
pub mod use_members;
pub mod use_renovation;
pub mod use_settings;
pub mod use_shopping;

pub use use_auth::{use_session, Session, SessionAction, SessionHandle};

/// Which dialog a CRUD page currently shows for its main entity.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogState<T: PartialEq> {
    Closed,
    Create,
    Edit(T),
    ConfirmDelete(T),
}

impl<T: PartialEq> Default for DialogState<T> {
    fn default() -> Self {
        DialogState::Closed
    }
}

impl<T: PartialEq> DialogState<T> {
    /// Entity backing the create/edit form, when it is an edit.
    pub fn editing(&self) -> Option<&T> {
        match self {
            DialogState::Edit(entity) => Some(entity),
            _ => None,
        }
    }

    pub fn form_open(&self) -> bool {
        matches!(self, DialogState::Create | DialogState::Edit(_))
    }

    pub fn delete_target(&self) -> Option<&T> {
        match self {
            DialogState::ConfirmDelete(entity) => Some(entity),
            _ => None,
        }
    }
}
