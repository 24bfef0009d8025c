/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Comparison event types.
//!
//! This module defines the events delivered to the caller for every
//! classified element while two sorted sequences are compared.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Event emitted for each classified element of a comparison.
///
/// Events are delivered in ascending key order and moved into the caller's
/// handler. The comparator keeps no event history.
///
/// # Examples
///
/// ```
/// use icmp::CompareEvent;
///
/// let event = CompareEvent::Matched(1, 1);
/// assert!(event.is_matched());
/// assert_eq!(event.current(), Some(&1));
/// assert_eq!(event.previous(), Some(&1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareEvent<T> {
    /// Items with equal keys present in both sequences: `(current, previous)`.
    Matched(T, T),

    /// Item present only in the current sequence.
    Added(T),

    /// Item present only in the previous sequence.
    Removed(T),
}

impl<T> CompareEvent<T> {
    /// Returns the classification of this event without its payload.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Matched(..) => EventKind::Matched,
            Self::Added(_) => EventKind::Added,
            Self::Removed(_) => EventKind::Removed,
        }
    }

    /// Returns `true` if the event pairs an item from each sequence.
    #[inline]
    #[must_use]
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(..))
    }

    /// Returns `true` if the item exists only in the current sequence.
    #[inline]
    #[must_use]
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added(_))
    }

    /// Returns `true` if the item exists only in the previous sequence.
    #[inline]
    #[must_use]
    pub fn is_removed(&self) -> bool {
        matches!(self, Self::Removed(_))
    }

    /// The item taken from the current sequence, if any.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        match self {
            Self::Matched(current, _) | Self::Added(current) => Some(current),
            Self::Removed(_) => None,
        }
    }

    /// The item taken from the previous sequence, if any.
    #[must_use]
    pub fn previous(&self) -> Option<&T> {
        match self {
            Self::Matched(_, previous) | Self::Removed(previous) => Some(previous),
            Self::Added(_) => None,
        }
    }

    /// Splits the event into its `(current, previous)` halves.
    ///
    /// Absent sides are `None`.
    #[must_use]
    pub fn into_parts(self) -> (Option<T>, Option<T>) {
        match self {
            Self::Matched(current, previous) => (Some(current), Some(previous)),
            Self::Added(current) => (Some(current), None),
            Self::Removed(previous) => (None, Some(previous)),
        }
    }

    /// Converts `&CompareEvent<T>` into `CompareEvent<&T>`.
    #[must_use]
    pub fn as_ref(&self) -> CompareEvent<&T> {
        match self {
            Self::Matched(current, previous) => CompareEvent::Matched(current, previous),
            Self::Added(current) => CompareEvent::Added(current),
            Self::Removed(previous) => CompareEvent::Removed(previous),
        }
    }

    /// Maps the payload of the event, keeping its classification.
    pub fn map<U, F>(self, mut f: F) -> CompareEvent<U>
    where
        F: FnMut(T) -> U,
    {
        match self {
            Self::Matched(current, previous) => CompareEvent::Matched(f(current), f(previous)),
            Self::Added(current) => CompareEvent::Added(f(current)),
            Self::Removed(previous) => CompareEvent::Removed(f(previous)),
        }
    }
}

/// Payload-free classification of a [`CompareEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Present in both sequences.
    Matched,
    /// Present only in the current sequence.
    Added,
    /// Present only in the previous sequence.
    Removed,
}

impl EventKind {
    /// Short event name: `"compare"`, `"added"` or `"removed"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Matched => "compare",
            Self::Added => "added",
            Self::Removed => "removed",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
