use std::{collections::HashMap, hash::Hash};

/// How long a "copied" indicator stays on.
pub const COPIED_RESET_MS: u32 = 2_000;

pub const COPY_FAILED: &str = "Could not copy the URL to the clipboard.";

/// Identifies one copy action; only the most recent action per key may clear the flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyTicket<K> {
    pub key: K,
    generation: u64,
}

/// Per-key transient "copied" flags.
#[derive(Debug)]
pub struct CopiedIndicators<K> {
    active: HashMap<K, u64>,
    generation: u64,
}

impl<K> Default for CopiedIndicators<K> {
    fn default() -> Self {
        Self {
            active: HashMap::new(),
            generation: 0,
        }
    }
}

impl<K: Eq + Hash + Clone> CopiedIndicators<K> {
    /// Turns the flag on for `key`, superseding any earlier timer for the same key.
    pub fn mark(&mut self, key: K) -> CopyTicket<K> {
        self.generation += 1;
        self.active.insert(key.clone(), self.generation);

        CopyTicket {
            key,
            generation: self.generation,
        }
    }

    /// Called when the timer of `ticket` fires; returns whether the flag was cleared.
    pub fn expire(&mut self, ticket: &CopyTicket<K>) -> bool {
        match self.active.get(&ticket.key) {
            Some(generation) if *generation == ticket.generation => {
                self.active.remove(&ticket.key);
                true
            }
            _ => false,
        }
    }

    pub fn is_copied(&self, key: &K) -> bool {
        self.active.contains_key(key)
    }
}
