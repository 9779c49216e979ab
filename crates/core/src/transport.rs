//! Transport trait: the outer read/print surface.
//!
//! A Transport delivers raw question lines to the engine and displays the
//! answers. Exit handling and blank-line skipping happen inside the
//! transport, so everything it yields is a real question.

use async_trait::async_trait;
use crate::error::TransportError;

/// One question received from a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbound {
    /// The question text, trimmed and non-empty
    pub content: String,
}

impl Inbound {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// The core Transport trait.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Human-readable transport name (e.g., "cli").
    fn name(&self) -> &str;

    /// Start listening for questions.
    ///
    /// The receiver closes when the user ends the session (`exit`, EOF).
    async fn start(
        &self,
    ) -> std::result::Result<
        tokio::sync::mpsc::Receiver<std::result::Result<Inbound, TransportError>>,
        TransportError,
    >;

    /// Display an answer.
    async fn send(&self, content: &str) -> std::result::Result<(), TransportError>;

    /// Show the prompt that invites the next question.
    async fn prompt(&self) -> std::result::Result<(), TransportError> {
        Ok(()) // No-op default
    }
}
