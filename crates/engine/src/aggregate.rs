//! Fact aggregation: every category block for one location.

use roamer_core::Category;
use roamer_store::RecordStore;

use crate::format::render;

/// Render the facts about `location` in store order, at most one block per
/// category. Later duplicates of a category are ignored.
pub fn aggregate(location: &str, store: &RecordStore) -> Vec<String> {
    let mut seen: Vec<&Category> = Vec::new();
    let mut blocks = Vec::new();

    for fact in store.facts_for(location) {
        if seen.contains(&&fact.category) {
            continue;
        }
        seen.push(&fact.category);
        blocks.push(render(fact));
    }

    blocks
}
