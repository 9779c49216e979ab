//! Augmenter trait: the optional text polishing step.
//!
//! An Augmenter takes plain text in and hands plain text back. It is never
//! required for a correct answer: callers treat any failure as "use the raw
//! facts instead".
//!
//! Implementations: OpenAI-compatible chat endpoints (`roamer-providers`).

use async_trait::async_trait;
use crate::error::AugmentError;

#[async_trait]
pub trait Augmenter: Send + Sync {
    /// A human-readable name (e.g., "openai", "openrouter").
    fn name(&self) -> &str;

    /// Rewrite `prompt` into conversational prose.
    async fn augment(&self, prompt: &str) -> std::result::Result<String, AugmentError>;
}
