//! Explicit UI state containers.
//!
//! # Responsibility
//! - Hold menu, modal and session state that screens share.
//! - Expose each container's transitions as methods instead of ambient
//!   global setters.
//!
//! # Invariants
//! - A closed modal never holds a payload.
//! - A signed-in session always holds a non-blank, trimmed user id.

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Top-level navigation entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuItem {
    #[default]
    Timeline,
    Journal,
    Insights,
    Settings,
}

/// Currently active menu entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    active: MenuItem,
}

impl MenuState {
    pub fn active(&self) -> MenuItem {
        self.active
    }

    /// Activates `item`. Returns whether the active entry changed.
    pub fn select(&mut self, item: MenuItem) -> bool {
        if self.active == item {
            return false;
        }
        debug!(
            "event=menu_select module=state from={:?} to={:?}",
            self.active, item
        );
        self.active = item;
        true
    }
}

/// Modal visibility plus the payload it was opened with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalState<P> {
    payload: Option<P>,
}

impl<P> Default for ModalState<P> {
    fn default() -> Self {
        Self { payload: None }
    }
}

impl<P> ModalState<P> {
    pub fn is_open(&self) -> bool {
        self.payload.is_some()
    }

    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    /// Opens the modal, replacing any payload it already held.
    pub fn open(&mut self, payload: P) -> Option<P> {
        self.payload.replace(payload)
    }

    /// Closes the modal and hands back its payload.
    pub fn close(&mut self) -> Option<P> {
        self.payload.take()
    }
}

/// Signed-in user identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    user_id: Option<String>,
}

impl SessionState {
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user_id.is_some()
    }

    /// Stores `user_id`, replacing any previous identity.
    ///
    /// # Errors
    /// - Returns `SessionError::EmptyUserId` for blank input; state is unchanged.
    pub fn sign_in(&mut self, user_id: &str) -> Result<(), SessionError> {
        let trimmed = user_id.trim();
        if trimmed.is_empty() {
            return Err(SessionError::EmptyUserId);
        }
        self.user_id = Some(trimmed.to_string());
        debug!("event=session_sign_in module=state status=ok");
        Ok(())
    }

    /// Clears the identity and returns the previous one.
    pub fn sign_out(&mut self) -> Option<String> {
        self.user_id.take()
    }
}

/// Session transition errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    EmptyUserId,
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUserId => write!(f, "user id must not be empty"),
        }
    }
}

impl Error for SessionError {}

#[cfg(test)]
mod tests {
    use super::{MenuItem, MenuState, ModalState};

    #[test]
    fn menu_defaults_to_timeline_and_reports_changes() {
        let mut menu = MenuState::default();
        assert_eq!(menu.active(), MenuItem::Timeline);
        assert!(!menu.select(MenuItem::Timeline));
        assert!(menu.select(MenuItem::Insights));
        assert_eq!(menu.active(), MenuItem::Insights);
    }

    #[test]
    fn modal_open_replaces_payload() {
        let mut modal = ModalState::<u32>::default();
        assert!(!modal.is_open());
        assert_eq!(modal.open(1), None);
        assert_eq!(modal.open(2), Some(1));
        assert_eq!(modal.payload(), Some(&2));
        assert_eq!(modal.close(), Some(2));
        assert!(!modal.is_open());
        assert_eq!(modal.close(), None);
    }
}
