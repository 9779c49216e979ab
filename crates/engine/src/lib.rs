//! The query resolution engine: the heart of Roamer.
//!
//! Every turn runs the same pipeline:
//!
//! 1. **Rewrite** the raw question using session context ([`rewriter`])
//! 2. **Resolve** it to one known location, first match in store order ([`resolver`])
//! 3. **Aggregate** that location's facts, one block per category ([`aggregate`])
//! 4. **Compose** the answer, optionally through an augmenter ([`composer`])
//!
//! Memory questions ("which locations did I ask about?") skip steps 2 and 3
//! and are answered from the session log ([`recall`]).

pub mod aggregate;
pub mod composer;
pub mod engine;
pub mod format;
pub mod recall;
pub mod resolver;
pub mod rewriter;
pub mod serve;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use composer::{Composer, Composition, DEFAULT_AUGMENT_TIMEOUT};
pub use engine::{Answer, Findings, Outcome, QueryEngine};
pub use resolver::{first_match, resolve};
pub use rewriter::{rewrite, ContextReason, QueryContext, ResolvedQuery, Rewrite};
pub use serve::serve;
