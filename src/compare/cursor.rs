/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Two-cursor merge over sorted sequences.
//!
//! [`CompareIter`] is the single implementation of the merge. It looks at
//! most one item ahead on each side, so both inputs may be single-pass
//! sources. The callback entry points in [`core`](super::core) drive it to
//! completion; callers that prefer to pull can iterate it directly.
//!
//! # Examples
//!
//! ```
//! use icmp::{CompareEvent, events};
//!
//! let collected: Vec<_> = events(vec![1, 2], vec![2, 3]).collect();
//! assert_eq!(
//!     collected,
//!     vec![
//!         CompareEvent::Added(1),
//!         CompareEvent::Matched(2, 2),
//!         CompareEvent::Removed(3),
//!     ]
//! );
//! ```

use super::event::CompareEvent;
use super::order::{By, ByKey, KeyOrder, Natural};
use super::summary::CompareSummary;
use std::cmp::Ordering;
use std::iter::{FusedIterator, Peekable};
use tracing::trace;

/// Lazy stream of [`CompareEvent`]s for two sorted sequences.
///
/// Each call to [`next`](Iterator::next) classifies the heads of both
/// sequences and consumes one item from one or both of them. Once both are
/// exhausted the iterator keeps returning `None`.
pub struct CompareIter<C, P, O>
where
    C: Iterator,
    P: Iterator<Item = C::Item>,
{
    /// Read cursor into the current sequence.
    current: Peekable<C>,

    /// Read cursor into the previous sequence.
    previous: Peekable<P>,

    /// Classifies the two heads.
    order: O,

    /// Events yielded so far.
    summary: CompareSummary,
}

impl<C, P, O> CompareIter<C, P, O>
where
    C: Iterator,
    P: Iterator<Item = C::Item>,
{
    /// Creates an event stream over two iterators with the given key order.
    #[must_use]
    pub fn new(current: C, previous: P, order: O) -> Self {
        Self {
            current: current.peekable(),
            previous: previous.peekable(),
            order,
            summary: CompareSummary::default(),
        }
    }

    /// Counts of the events yielded so far.
    #[inline]
    #[must_use]
    pub fn summary(&self) -> CompareSummary {
        self.summary
    }
}

impl<C, P, O> Iterator for CompareIter<C, P, O>
where
    C: Iterator,
    P: Iterator<Item = C::Item>,
    O: KeyOrder<C::Item>,
{
    type Item = CompareEvent<C::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let ordering = match (self.current.peek(), self.previous.peek()) {
            (Some(current), Some(previous)) => self.order.order(current, previous),
            // One side is exhausted: drain the other in its original order.
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => return None,
        };

        let event = match ordering {
            Ordering::Equal => {
                let current = self.current.next()?;
                let previous = self.previous.next()?;
                CompareEvent::Matched(current, previous)
            }
            Ordering::Less => CompareEvent::Added(self.current.next()?),
            Ordering::Greater => CompareEvent::Removed(self.previous.next()?),
        };

        let kind = event.kind();
        self.summary.record(kind);
        trace!(kind = %kind, seq = self.summary.total(), "classified element");

        Some(event)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (current_low, current_high) = self.current.size_hint();
        let (previous_low, previous_high) = self.previous.size_hint();

        // An event consumes at most one item per side and at least one overall.
        let low = current_low.max(previous_low);
        let high = match (current_high, previous_high) {
            (Some(c), Some(p)) => c.checked_add(p),
            _ => None,
        };
        (low, high)
    }
}

impl<C, P, O> FusedIterator for CompareIter<C, P, O>
where
    C: Iterator,
    P: Iterator<Item = C::Item>,
    O: KeyOrder<C::Item>,
{
}

/// Streams the events of comparing two sequences by their natural order.
///
/// # Examples
///
/// ```
/// use icmp::events;
///
/// let added = events(vec![1, 2, 3], vec![2]).filter(|e| e.is_added()).count();
/// assert_eq!(added, 2);
/// ```
#[must_use]
pub fn events<C, P>(current: C, previous: P) -> CompareIter<C::IntoIter, P::IntoIter, Natural>
where
    C: IntoIterator,
    C::Item: PartialOrd,
    P: IntoIterator<Item = C::Item>,
{
    CompareIter::new(current.into_iter(), previous.into_iter(), Natural)
}

/// Streams the events of comparing two sequences by an extracted key.
#[must_use]
pub fn events_by_key<C, P, F, K>(
    current: C,
    previous: P,
    key_of: F,
) -> CompareIter<C::IntoIter, P::IntoIter, ByKey<F>>
where
    C: IntoIterator,
    P: IntoIterator<Item = C::Item>,
    F: Fn(&C::Item) -> K,
    K: PartialOrd,
{
    CompareIter::new(current.into_iter(), previous.into_iter(), ByKey(key_of))
}

/// Streams the events of comparing two sequences with a custom comparator.
#[must_use]
pub fn events_by<C, P, F>(
    current: C,
    previous: P,
    order: F,
) -> CompareIter<C::IntoIter, P::IntoIter, By<F>>
where
    C: IntoIterator,
    P: IntoIterator<Item = C::Item>,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    CompareIter::new(current.into_iter(), previous.into_iter(), By(order))
}
