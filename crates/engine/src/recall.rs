//! Memory recall: answers "which locations have I asked about?".

use roamer_memory::SessionMemory;
use std::fmt::Write;

pub const NOTHING_ASKED: &str = "You haven't asked about any locations yet.";

/// Summarize the session log: distinct locations newest first, then the
/// location of the most recent interaction.
pub fn summarize(memory: &SessionMemory) -> String {
    let Some(latest) = memory.latest() else {
        return NOTHING_ASKED.to_string();
    };

    let mut out = String::from("Recent locations you've asked about:\n");
    out.push_str("\nUnique locations discussed:\n");
    for location in memory.distinct_locations() {
        let _ = writeln!(out, "- {location}");
    }
    let _ = writeln!(out, "\nMost recent query was about: {}", latest.location);
    out
}
