//! Query rewriter: turns a follow-up into a location-qualified query.
//!
//! Applied in order to the lowercased, trimmed question:
//!
//! 1. Memory questions short-circuit to [`Rewrite::Recall`].
//! 2. Topic words (cost, price, attractions, visit, tax) pull in the last location.
//! 3. A leading "what about" / "how about" is stripped.
//! 4. Queries of one or two words pull in the last location unless they already name it.
//!
//! Every step is a best-effort heuristic; rewriting never fails.

use roamer_memory::Session;
use tracing::debug;

const RECALL_WORDS: [&str; 4] = ["previous", "history", "locations", "remember"];
const TOPIC_WORDS: [&str; 5] = ["cost", "price", "attractions", "visit", "tax"];
const FOLLOW_UP_PREFIXES: [&str; 2] = ["what about", "how about"];

/// What the engine should do with a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// Summarize the session's memory instead of looking anything up.
    Recall,
    /// Resolve a location for this query.
    Lookup(ResolvedQuery),
}

/// Which rewrite step pulled in the session's last location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextReason {
    /// The question named a topic ("cost", "tax") but no place.
    Topic,
    /// The question was too short to stand on its own.
    ShortQuery,
}

/// The session location prepended to a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryContext {
    pub location: String,
    pub reason: ContextReason,
}

/// A rewritten query, ready for location resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedQuery {
    /// The full rewritten text, context prefix included
    pub rewritten_text: String,

    /// The session location prepended as context, if any
    pub context: Option<QueryContext>,
}

impl ResolvedQuery {
    /// The prepended context location, if any.
    pub fn context_location(&self) -> Option<&str> {
        self.context.as_ref().map(|c| c.location.as_str())
    }

    /// The rewritten text without the prepended context location.
    pub fn own_text(&self) -> &str {
        self.context_location()
            .and_then(|loc| self.rewritten_text.strip_prefix(loc))
            .map(str::trim_start)
            .unwrap_or(&self.rewritten_text)
    }
}

/// Whether the question asks about the session itself.
pub fn is_recall_query(query: &str) -> bool {
    RECALL_WORDS.iter().any(|w| query.contains(w))
        || (query.contains("which") && query.contains("ask"))
}

/// Rewrite `raw` using `session`'s context.
pub fn rewrite(raw: &str, session: &Session) -> Rewrite {
    let mut query = raw.trim().to_lowercase();

    if is_recall_query(&query) {
        debug!(query = %query, "Memory recall requested");
        return Rewrite::Recall;
    }

    let last_location = session.last_location();
    let mut context = None;

    if let Some(last) = last_location
        && TOPIC_WORDS.iter().any(|w| query.contains(w))
    {
        query = format!("{last} {query}");
        context = Some(QueryContext {
            location: last.to_string(),
            reason: ContextReason::Topic,
        });
    }

    if let Some(rest) = FOLLOW_UP_PREFIXES
        .iter()
        .find_map(|prefix| query.strip_prefix(prefix))
    {
        query = rest.trim().to_string();
    }

    if let Some(last) = last_location
        && query.split_whitespace().count() <= 2
        && !query.to_lowercase().contains(&last.to_lowercase())
    {
        query = format!("{last} {query}");
        context = Some(QueryContext {
            location: last.to_string(),
            reason: ContextReason::ShortQuery,
        });
    }

    debug!(raw = %raw, rewritten = %query, context = ?context, "Query rewritten");
    Rewrite::Lookup(ResolvedQuery {
        rewritten_text: query,
        context,
    })
}
