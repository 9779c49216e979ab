//! Session: one conversation's memory and cursors.
//!
//! The engine takes `&mut Session` on every turn. Turns within a session are
//! serialized by that borrow; separate sessions are separate values.

use crate::session_memory::SessionMemory;
use roamer_core::Interaction;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    memory: SessionMemory,
    last_location: Option<String>,
    last_query: Option<String>,
}

impl Session {
    pub fn new(memory_size: usize) -> Self {
        Self {
            id: SessionId::new(),
            memory: SessionMemory::new(memory_size),
            last_location: None,
            last_query: None,
        }
    }

    pub fn memory(&self) -> &SessionMemory {
        &self.memory
    }

    /// The most recently resolved location.
    pub fn last_location(&self) -> Option<&str> {
        self.last_location.as_deref()
    }

    /// The question asked on the previous turn, whatever its outcome.
    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    /// Record a successful resolution. Returns `true` when the location
    /// differs from the previous one.
    pub fn record_resolution(&mut self, location: &str, question: &str) -> bool {
        let changed = self.last_location.as_deref() != Some(location);
        if changed {
            self.last_location = Some(location.to_string());
        }
        self.memory.record(Interaction::new(location, question));
        changed
    }

    /// Close out a turn.
    pub fn finish_turn(&mut self, question: &str) {
        self.last_query = Some(question.to_string());
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(crate::DEFAULT_MEMORY_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_has_no_context() {
        let session = Session::default();
        assert!(session.last_location().is_none());
        assert!(session.last_query().is_none());
        assert!(session.memory().is_empty());
        assert_eq!(session.memory().capacity(), 5);
    }

    #[test]
    fn resolution_reports_location_changes() {
        let mut session = Session::new(5);
        assert!(session.record_resolution("California", "tell me about california"));
        assert!(!session.record_resolution("California", "cost"));
        assert!(session.record_resolution("Texas", "what about texas"));

        assert_eq!(session.last_location(), Some("Texas"));
        assert_eq!(session.memory().len(), 3);
    }

    #[test]
    fn finish_turn_sets_last_query() {
        let mut session = Session::default();
        session.finish_turn("Tell me about Ohio");
        assert_eq!(session.last_query(), Some("Tell me about Ohio"));
    }

    #[test]
    fn sessions_are_independent() {
        let mut a = Session::default();
        let b = Session::default();
        a.record_resolution("Texas", "texas");
        assert_ne!(a.id, b.id);
        assert!(b.last_location().is_none());
        assert!(b.memory().is_empty());
    }
}
