/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Callback entry points for the comparison.
//!
//! The free functions take the handler as an argument and can never run
//! without one. [`Comparator`] is the builder form: sequences first, then an
//! optional key order, then the handler, then [`run`](Comparator::run).

use super::cursor::CompareIter;
use super::error::{CompareError, SequenceSide};
use super::event::CompareEvent;
use super::order::{By, ByKey, KeyOrder, Natural};
use super::summary::CompareSummary;
use std::cmp::Ordering;
use tracing::debug;

/// Handler type of a [`Comparator`] with no callback registered.
pub type NoHandler<T> = fn(CompareEvent<T>);

/// Compares two sequences sorted by their natural order.
///
/// `on_event` is invoked exactly once per classified element, in ascending
/// order. Returns the counts of the delivered events.
///
/// # Examples
///
/// ```
/// use icmp::{CompareEvent, compare};
///
/// let mut log = Vec::new();
/// compare([1, 2], [1, 2], |event| log.push(event));
/// assert_eq!(log, vec![CompareEvent::Matched(1, 1), CompareEvent::Matched(2, 2)]);
/// ```
pub fn compare<C, P, H>(current: C, previous: P, on_event: H) -> CompareSummary
where
    C: IntoIterator,
    C::Item: PartialOrd,
    P: IntoIterator<Item = C::Item>,
    H: FnMut(CompareEvent<C::Item>),
{
    drive(
        CompareIter::new(current.into_iter(), previous.into_iter(), Natural),
        on_event,
    )
}

/// Compares two sequences sorted by the key `key_of` extracts.
///
/// Both inputs must be non-decreasing by key. Unsorted input produces a
/// meaningless but finite event stream, never a panic.
///
/// # Examples
///
/// ```
/// use icmp::{CompareEvent, compare_by_key};
///
/// let current = [(1, "accept"), (2, "new"), (4, "canceled")];
/// let previous = [(1, "new"), (3, "in_progress"), (4, "canceled")];
///
/// let mut changed = Vec::new();
/// compare_by_key(&current, &previous, |item| item.0, |event| {
///     if let CompareEvent::Matched(now, before) = event {
///         if now.1 != before.1 {
///             changed.push(now.0);
///         }
///     }
/// });
/// assert_eq!(changed, vec![1]);
/// ```
pub fn compare_by_key<C, P, F, K, H>(
    current: C,
    previous: P,
    key_of: F,
    on_event: H,
) -> CompareSummary
where
    C: IntoIterator,
    P: IntoIterator<Item = C::Item>,
    F: Fn(&C::Item) -> K,
    K: PartialOrd,
    H: FnMut(CompareEvent<C::Item>),
{
    drive(
        CompareIter::new(current.into_iter(), previous.into_iter(), ByKey(key_of)),
        on_event,
    )
}

/// Compares two sequences with a custom comparator.
///
/// `order(current, previous)` returning `Less` reports the current head as
/// added, `Greater` reports the previous head as removed and `Equal` pairs
/// them.
pub fn compare_by<C, P, F, H>(current: C, previous: P, order: F, on_event: H) -> CompareSummary
where
    C: IntoIterator,
    P: IntoIterator<Item = C::Item>,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
    H: FnMut(CompareEvent<C::Item>),
{
    drive(
        CompareIter::new(current.into_iter(), previous.into_iter(), By(order)),
        on_event,
    )
}

/// Runs an event stream to completion, handing each event to `on_event`.
fn drive<C, P, O, H>(mut events: CompareIter<C, P, O>, mut on_event: H) -> CompareSummary
where
    C: Iterator,
    P: Iterator<Item = C::Item>,
    O: KeyOrder<C::Item>,
    H: FnMut(CompareEvent<C::Item>),
{
    debug!("starting comparison");

    for event in events.by_ref() {
        on_event(event);
    }

    let summary = events.summary();
    debug!(
        matched = summary.matched,
        added = summary.added,
        removed = summary.removed,
        "comparison finished"
    );
    summary
}

/// Builder for a single comparison.
///
/// Created with the two sequences, optionally given a key order, then a
/// handler. Running without a handler is an error reported before either
/// sequence is touched.
///
/// # Examples
///
/// ```
/// use icmp::{Comparator, CompareError};
///
/// let current = vec![(1, 'a'), (3, 'c')];
/// let previous = vec![(1, 'a'), (2, 'b')];
///
/// let mut removed: Vec<&(i32, char)> = Vec::new();
/// let summary = Comparator::new(&current, &previous)
///     .by_key(|item| item.0)
///     .on_event(|event| {
///         if event.is_removed() {
///             removed.extend(event.previous().copied());
///         }
///     })
///     .run()?;
///
/// assert_eq!(summary.matched, 1);
/// assert_eq!(removed, vec![&(2, 'b')]);
/// # Ok::<(), CompareError>(())
/// ```
pub struct Comparator<C, P, O, H> {
    /// Newer sequence.
    current: C,

    /// Older sequence.
    previous: P,

    /// Key order used to classify the heads.
    order: O,

    /// Callback for each event; `None` until registered.
    handler: Option<H>,
}

impl<C, P> Comparator<C, P, Natural, NoHandler<C::Item>>
where
    C: IntoIterator,
    P: IntoIterator<Item = C::Item>,
{
    /// Creates a comparator ordering items by their natural order.
    ///
    /// # Arguments
    ///
    /// * `current` - The newer sequence; surplus items are reported as added
    /// * `previous` - The older sequence; surplus items are reported as removed
    #[must_use]
    pub fn new(current: C, previous: P) -> Self {
        Self {
            current,
            previous,
            order: Natural,
            handler: None,
        }
    }

    /// Creates a comparator from sequences that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::MissingSequence`] naming the first absent side.
    pub fn try_new(current: Option<C>, previous: Option<P>) -> Result<Self, CompareError> {
        let current = current.ok_or(CompareError::MissingSequence {
            side: SequenceSide::Current,
        })?;
        let previous = previous.ok_or(CompareError::MissingSequence {
            side: SequenceSide::Previous,
        })?;
        Ok(Self::new(current, previous))
    }
}

impl<C, P, O, H> Comparator<C, P, O, H>
where
    C: IntoIterator,
    P: IntoIterator<Item = C::Item>,
{
    /// Orders items by the key `key_of` extracts.
    #[must_use]
    pub fn by_key<F, K>(self, key_of: F) -> Comparator<C, P, ByKey<F>, H>
    where
        F: Fn(&C::Item) -> K,
        K: PartialOrd,
    {
        self.with_order(ByKey(key_of))
    }

    /// Orders items with a custom comparator.
    #[must_use]
    pub fn by<F>(self, order: F) -> Comparator<C, P, By<F>, H>
    where
        F: FnMut(&C::Item, &C::Item) -> Ordering,
    {
        self.with_order(By(order))
    }

    /// Orders items with any [`KeyOrder`] implementation.
    #[must_use]
    pub fn with_order<Q>(self, order: Q) -> Comparator<C, P, Q, H>
    where
        Q: KeyOrder<C::Item>,
    {
        Comparator {
            current: self.current,
            previous: self.previous,
            order,
            handler: self.handler,
        }
    }

    /// Registers the callback invoked once per classified element.
    ///
    /// Replaces any previously registered callback.
    #[must_use]
    pub fn on_event<G>(self, handler: G) -> Comparator<C, P, O, G>
    where
        G: FnMut(CompareEvent<C::Item>),
    {
        Comparator {
            current: self.current,
            previous: self.previous,
            order: self.order,
            handler: Some(handler),
        }
    }

    /// Returns `true` if a callback has been registered.
    #[inline]
    #[must_use]
    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Runs the comparison, delivering every event to the callback.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::MissingCallback`] if no callback was
    /// registered. Neither sequence is iterated in that case.
    pub fn run(self) -> Result<CompareSummary, CompareError>
    where
        O: KeyOrder<C::Item>,
        H: FnMut(CompareEvent<C::Item>),
    {
        let Some(handler) = self.handler else {
            return Err(CompareError::MissingCallback);
        };

        Ok(drive(
            CompareIter::new(self.current.into_iter(), self.previous.into_iter(), self.order),
            handler,
        ))
    }

    /// Turns the comparator into a lazy event stream.
    ///
    /// Any registered callback is dropped; the caller pulls events instead.
    #[must_use]
    pub fn into_events(self) -> CompareIter<C::IntoIter, P::IntoIter, O> {
        CompareIter::new(self.current.into_iter(), self.previous.into_iter(), self.order)
    }
}
