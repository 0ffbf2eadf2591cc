use serde::Serialize;

/// Result of a delete guarded by dependent-row checks.
///
/// Refusal is a normal outcome, not an error: callers decide how to report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    /// Rows still reference the target; it was left in place.
    InUse { activities: i64, entries: i64 },
}

impl DeleteOutcome {
    pub fn is_deleted(self) -> bool {
        matches!(self, Self::Deleted)
    }
}
