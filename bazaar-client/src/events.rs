//! Session lifecycle events
//!
//! Broadcast to every subscriber so any view can force a logged-out
//! state the moment the backend rejects the token.

/// Session lifecycle event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The backend answered 401; the stored token has been cleared
    Expired,
}

impl std::fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionEvent::Expired => write!(f, "session_expired"),
        }
    }
}
