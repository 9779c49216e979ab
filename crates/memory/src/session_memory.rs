//! Bounded interaction log, newest first.

use roamer_core::Interaction;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::trace;

/// How many interactions a session keeps unless configured otherwise.
pub const DEFAULT_MEMORY_SIZE: usize = 5;

/// Interactions ordered newest first, never longer than its capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMemory {
    interactions: VecDeque<Interaction>,
    capacity: usize,
}

impl SessionMemory {
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            interactions: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Insert at the front; the oldest entries fall off the tail.
    pub fn record(&mut self, interaction: Interaction) {
        self.interactions.push_front(interaction);
        while self.interactions.len() > self.capacity {
            if let Some(evicted) = self.interactions.pop_back() {
                trace!(location = %evicted.location, "Evicted interaction");
            }
        }
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Interaction> {
        self.interactions.iter()
    }

    pub fn latest(&self) -> Option<&Interaction> {
        self.interactions.front()
    }

    pub fn len(&self) -> usize {
        self.interactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Distinct locations, newest first.
    pub fn distinct_locations(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for interaction in &self.interactions {
            if !seen.contains(&interaction.location.as_str()) {
                seen.push(&interaction.location);
            }
        }
        seen
    }
}

impl Default for SessionMemory {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_SIZE)
    }
}
