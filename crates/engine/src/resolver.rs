//! Location resolver: lexical first-match over the record store.
//!
//! A fact matches when its lowercased location contains any query token as a
//! substring. The first matching fact in store order wins, not the best one:
//! short or common tokens ("me", "new") can select an unintended location.
//! Tokens are split on whitespace and lose surrounding ASCII punctuation, so
//! "Texas?" still matches Texas.

use roamer_store::RecordStore;
use tracing::debug;

use crate::rewriter::{ContextReason, ResolvedQuery};

/// Lowercased whitespace tokens with surrounding punctuation removed.
fn tokens(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|t| t.trim_matches(|c: char| c.is_ascii_punctuation()).to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// The first location in store order containing any token of `text`.
pub fn first_match<'s>(text: &str, store: &'s RecordStore) -> Option<&'s str> {
    let tokens = tokens(text);
    if tokens.is_empty() {
        return None;
    }

    store
        .iter()
        .find(|fact| {
            let location = fact.location.to_lowercase();
            tokens.iter().any(|t| location.contains(t.as_str()))
        })
        .map(|fact| fact.location.as_str())
}

/// The first location in store order whose full name appears in `text`.
fn named_location<'s>(text: &str, store: &'s RecordStore) -> Option<&'s str> {
    let text = text.to_lowercase();
    store
        .locations()
        .into_iter()
        .find(|location| text.contains(&location.to_lowercase()))
}

/// The stored spelling of `location`, if the store knows it.
fn known_location<'s>(location: &str, store: &'s RecordStore) -> Option<&'s str> {
    store
        .iter()
        .find(|fact| fact.location.eq_ignore_ascii_case(location))
        .map(|fact| fact.location.as_str())
}

/// Resolve a rewritten query to one location.
///
/// How the prepended context location is used depends on why it was added:
///
/// - A topic follow-up ("what is the tax rate?") stays on the context
///   location unless the user spelled out another location in full.
/// - A short follow-up ("what about Texas") is matched on the user's own
///   words first; the context location only fills in when they match nothing.
pub fn resolve<'s>(query: &ResolvedQuery, store: &'s RecordStore) -> Option<&'s str> {
    let resolved = match &query.context {
        None => first_match(&query.rewritten_text, store),
        Some(context) => match context.reason {
            ContextReason::Topic => named_location(query.own_text(), store)
                .or_else(|| known_location(&context.location, store)),
            ContextReason::ShortQuery => first_match(query.own_text(), store)
                .or_else(|| known_location(&context.location, store)),
        },
    };

    debug!(query = %query.rewritten_text, location = ?resolved, "Location resolution");
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewriter::QueryContext;
    use roamer_core::{Category, Fact};

    fn store() -> RecordStore {
        vec![
            Fact::new("Travis County", Category::Tax, "tax_policies_2023.pdf")
                .with_attribute("tax_rate", "1.9%"),
            Fact::new("Williamson County", Category::Tax, "tax_records_2023.csv")
                .with_attribute("tax_rate", "2.1%"),
            Fact::new("Travis Heights", Category::Tax, "local_rates.pdf")
                .with_attribute("tax_rate", "1.8%"),
        ]
        .into_iter()
        .collect()
    }

    fn plain(text: &str) -> ResolvedQuery {
        ResolvedQuery {
            rewritten_text: text.into(),
            context: None,
        }
    }

    fn with_context(text: &str, location: &str, reason: ContextReason) -> ResolvedQuery {
        ResolvedQuery {
            rewritten_text: format!("{location} {text}"),
            context: Some(QueryContext {
                location: location.into(),
                reason,
            }),
        }
    }

    #[test]
    fn exact_match() {
        assert_eq!(first_match("travis county", &store()), Some("Travis County"));
    }

    #[test]
    fn partial_and_case_insensitive_match_first_in_store_order() {
        let store = store();
        assert_eq!(first_match("Travis", &store), Some("Travis County"));
        assert_eq!(first_match("TRAVIS", &store), Some("Travis County"));
        assert_eq!(first_match("heights", &store), Some("Travis Heights"));
        assert_eq!(first_match("Williamson", &store), Some("Williamson County"));
    }

    #[test]
    fn first_match_not_best_match() {
        // "county" appears in two locations; store order decides.
        assert_eq!(
            first_match("williamson county", &store()),
            Some("Travis County")
        );
    }

    #[test]
    fn no_match_and_empty_query() {
        let store = store();
        assert_eq!(first_match("dallas", &store), None);
        assert_eq!(first_match("", &store), None);
        assert_eq!(first_match("  ?! ", &store), None);
    }

    #[test]
    fn punctuation_is_trimmed() {
        assert_eq!(first_match("williamson?", &store()), Some("Williamson County"));
    }

    #[test]
    fn short_follow_up_prefers_own_words() {
        let query = with_context("williamson", "Travis County", ContextReason::ShortQuery);
        assert_eq!(resolve(&query, &store()), Some("Williamson County"));
    }

    #[test]
    fn short_follow_up_falls_back_to_context() {
        let query = with_context("cost", "Travis Heights", ContextReason::ShortQuery);
        assert_eq!(resolve(&query, &store()), Some("Travis Heights"));
    }

    #[test]
    fn topic_follow_up_stays_on_context_despite_stray_substrings() {
        // "is" occurs in both Travis locations.
        let query = with_context("what is the tax rate?", "Williamson County", ContextReason::Topic);
        assert_eq!(resolve(&query, &store()), Some("Williamson County"));
    }

    #[test]
    fn topic_follow_up_switches_when_another_location_is_named() {
        let query = with_context(
            "what is the tax rate in travis heights?",
            "Williamson County",
            ContextReason::Topic,
        );
        assert_eq!(resolve(&query, &store()), Some("Travis Heights"));
    }

    #[test]
    fn unknown_context_is_a_miss() {
        let query = with_context("cost", "Atlantis", ContextReason::Topic);
        assert_eq!(resolve(&query, &store()), None);
        assert_eq!(resolve(&plain("dallas"), &store()), None);
    }
}
