/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Comparison summary.
//!
//! A [`CompareSummary`] tallies the events delivered by one comparison. It
//! keeps counts only, never items.

use super::event::EventKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of events of each kind delivered by a comparison.
///
/// # Examples
///
/// ```
/// use icmp::compare;
///
/// let summary = compare(vec![1, 2, 4], vec![1, 3, 4], |_| {});
/// assert_eq!(summary.matched, 2);
/// assert_eq!(summary.added, 1);
/// assert_eq!(summary.removed, 1);
/// assert_eq!(summary.current_len(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompareSummary {
    /// Events pairing an item from each sequence.
    pub matched: usize,

    /// Items found only in the current sequence.
    pub added: usize,

    /// Items found only in the previous sequence.
    pub removed: usize,
}

impl CompareSummary {
    /// Counts one delivered event.
    #[inline]
    pub(crate) fn record(&mut self, kind: EventKind) {
        match kind {
            EventKind::Matched => self.matched = self.matched.saturating_add(1),
            EventKind::Added => self.added = self.added.saturating_add(1),
            EventKind::Removed => self.removed = self.removed.saturating_add(1),
        }
    }

    /// Total number of events delivered.
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.matched
            .saturating_add(self.added)
            .saturating_add(self.removed)
    }

    /// Number of items consumed from the current sequence.
    #[inline]
    #[must_use]
    pub fn current_len(&self) -> usize {
        self.matched.saturating_add(self.added)
    }

    /// Number of items consumed from the previous sequence.
    #[inline]
    #[must_use]
    pub fn previous_len(&self) -> usize {
        self.matched.saturating_add(self.removed)
    }

    /// Returns `true` when every item was matched.
    #[inline]
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}

impl fmt::Display for CompareSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} matched, {} added, {} removed",
            self.matched, self.added, self.removed
        )
    }
}
