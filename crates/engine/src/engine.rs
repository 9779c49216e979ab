//! Query engine: one question in, one answer out.
//!
//! The engine itself never fails a turn: misses and augmentation failures
//! both come back as ordinary answer text.

use crate::aggregate::aggregate;
use crate::composer::Composer;
use crate::format::{TOPIC_MENU, follow_up_prompt};
use crate::recall::summarize;
use crate::resolver::resolve;
use crate::rewriter::{Rewrite, rewrite};
use roamer_memory::Session;
use roamer_store::RecordStore;
use std::sync::Arc;
use tracing::{debug, info};

/// How a turn was answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A location was resolved. `new_location` is false on a repeat.
    Resolved { location: String, new_location: bool },
    /// The session's memory was summarized.
    Recall,
    /// No location matched.
    Miss,
}

/// The raw material for an answer, before composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Findings {
    pub main: String,
    pub follow_up: Option<String>,
    pub outcome: Outcome,
}

/// A finished answer.
#[derive(Debug, Clone)]
pub struct Answer {
    pub text: String,
    pub outcome: Outcome,

    /// Why augmentation was skipped, when an augmenter was configured
    pub warning: Option<String>,
}

/// Answers questions against one shared, read-only store.
///
/// Cheap to share across sessions; all per-conversation state lives in the
/// [`Session`] passed to each call.
pub struct QueryEngine {
    store: Arc<RecordStore>,
    composer: Composer,
}

impl QueryEngine {
    pub fn new(store: Arc<RecordStore>, composer: Composer) -> Self {
        Self { store, composer }
    }

    /// Gather the facts for `raw` and update the session's memory.
    ///
    /// Does not touch `last_query`; that is closed out by [`QueryEngine::answer`].
    pub fn find_relevant(&self, raw: &str, session: &mut Session) -> Findings {
        let query = match rewrite(raw, session) {
            Rewrite::Recall => {
                return Findings {
                    main: summarize(session.memory()),
                    follow_up: None,
                    outcome: Outcome::Recall,
                };
            }
            Rewrite::Lookup(query) => query,
        };

        let Some(location) = resolve(&query, &self.store) else {
            return Findings {
                main: self.miss_message(session),
                follow_up: None,
                outcome: Outcome::Miss,
            };
        };

        let main = aggregate(location, &self.store).join("\n");
        let new_location = session.record_resolution(location, raw);
        if new_location {
            debug!(session = %session.id, location, "Location changed");
        }

        Findings {
            main,
            follow_up: new_location.then(|| follow_up_prompt(location)),
            outcome: Outcome::Resolved {
                location: location.to_string(),
                new_location,
            },
        }
    }

    fn miss_message(&self, session: &Session) -> String {
        match session.last_location() {
            Some(last) => format!(
                "I assume you're asking about {last}, but I don't have that specific information. Try asking about:\n{TOPIC_MENU}"
            ),
            None => format!(
                "No information found. Available locations: {}",
                self.store.locations().join(", ")
            ),
        }
    }

    /// Run one full turn.
    pub async fn answer(&self, raw: &str, session: &mut Session) -> Answer {
        let prior = session.last_query().map(str::to_string);
        let findings = self.find_relevant(raw, session);
        let follow_up = findings.follow_up.as_deref().unwrap_or_default();

        let composition = self
            .composer
            .composition(&findings.main, follow_up, raw, prior.as_deref())
            .await;
        session.finish_turn(raw);

        info!(session = %session.id, outcome = ?findings.outcome, "Turn answered");
        Answer {
            text: composition.text,
            outcome: findings.outcome,
            warning: composition.fallback.map(|e| e.to_string()),
        }
    }
}
