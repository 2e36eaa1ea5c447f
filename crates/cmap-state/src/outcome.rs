//! Result of feeding an event to a state container.

use crate::facets::NormalizeError;

/// What an updater did with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// State was replaced and persisted.
    Applied,
    /// Event was a no-op; nothing was written.
    Ignored(IgnoreReason),
}

impl ChangeOutcome {
    #[inline]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Why an event was a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// No facet by that name.
    UnknownFacet(String),
    /// No preference flag by that name.
    UnknownFlag(String),
    /// Payload did not have the shape its facet expects.
    Malformed(NormalizeError),
    /// Free-text course entry was blank.
    BlankCourse,
    /// Free-text course entry is already selected.
    DuplicateCourse(String),
    /// Course removal index past the end of the list.
    IndexOutOfRange(usize),
}
