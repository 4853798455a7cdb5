//! Scripted command replay.

use homestead_core::ScriptEntry;

/// Scripted commands ordered by tick, consumed as the run advances.
#[derive(Debug, Clone)]
pub struct Script {
    entries: Vec<ScriptEntry>,
    next: usize,
}

impl Script {
    /// Sort `entries` by tick, keeping file order within a tick.
    pub fn new(mut entries: Vec<ScriptEntry>) -> Self {
        entries.sort_by_key(|entry| entry.tick);
        Self { entries, next: 0 }
    }

    /// Entries due at or before `tick` that have not been returned yet.
    pub fn due(&mut self, tick: u64) -> &[ScriptEntry] {
        let start = self.next;
        let pending = self.entries.get(start..).unwrap_or_default();
        let count = pending.iter().take_while(|entry| entry.tick <= tick).count();
        self.next = start.saturating_add(count);
        pending.get(..count).unwrap_or_default()
    }

    /// Entries not returned yet.
    pub fn remaining(&self) -> usize {
        self.entries.len().saturating_sub(self.next)
    }
}
