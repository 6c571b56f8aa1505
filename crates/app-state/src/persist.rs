//! Outcomes of best-effort persistence
//!
//! Storage failures never propagate out of a state container. These values
//! let callers and tests see what happened without turning it into an error.

/// Result of writing or deleting a container's durable entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOutcome {
    /// Durable storage now matches memory
    Saved,
    /// Storage rejected the operation; memory is still authoritative
    Failed,
}

impl PersistOutcome {
    /// Whether storage accepted the operation
    pub fn is_saved(&self) -> bool {
        matches!(self, PersistOutcome::Saved)
    }
}

/// Result of reading a container's durable entry at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// A stored value was applied
    Restored,
    /// Nothing stored; defaults kept
    Absent,
    /// Stored value could not be parsed; defaults kept
    Corrupt,
    /// Storage read failed; defaults kept
    Unavailable,
}

impl RestoreOutcome {
    /// Whether a stored value was applied
    pub fn is_restored(&self) -> bool {
        matches!(self, RestoreOutcome::Restored)
    }
}
