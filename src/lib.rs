/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # icmp
//!
//! Interactive, key-based comparison of two sorted sequences.
//!
//! Given a `current` and a `previous` sequence, both sorted ascending by the
//! same key, `icmp` reports every element exactly once as one of:
//!
//! - **matched**: an item in each sequence with equal keys,
//! - **added**: an item only in `current`,
//! - **removed**: an item only in `previous`.
//!
//! Events arrive in key order through a callback, or lazily through an
//! iterator. The comparison is one linear pass, `O(n + m)`, and holds at
//! most one look-ahead item per sequence, so it works on streams that
//! cannot be rewound.
//!
//! Inputs are not sorted or validated. Equal-key runs pair up one to one in
//! encounter order; the surplus of the longer run is reported as added or
//! removed.
//!
//! ## Example
//!
//! ```
//! use icmp::{CompareEvent, compare_by_key};
//!
//! let current = [(1, "accept"), (2, "new"), (4, "canceled")];
//! let previous = [(1, "new"), (3, "in_progress"), (4, "canceled")];
//!
//! let mut lines = Vec::new();
//! compare_by_key(&current, &previous, |item| item.0, |event| {
//!     let line = match event {
//!         CompareEvent::Matched(now, before) if now.1 != before.1 => {
//!             format!("{}: {} -> {}", now.0, before.1, now.1)
//!         }
//!         CompareEvent::Matched(now, _) => format!("{}: unchanged", now.0),
//!         CompareEvent::Added(now) => format!("{}: added as {}", now.0, now.1),
//!         CompareEvent::Removed(before) => format!("{}: removed, was {}", before.0, before.1),
//!     };
//!     lines.push(line);
//! });
//!
//! assert_eq!(
//!     lines,
//!     vec![
//!         "1: new -> accept",
//!         "2: added as new",
//!         "3: removed, was in_progress",
//!         "4: unchanged",
//!     ]
//! );
//! ```
//!
//! ## Logging
//!
//! The crate logs through [`tracing`]: one `debug` record when a callback
//! comparison starts and one with the final counts, plus a `trace` record per
//! classified element. No subscriber is installed by the library.

pub mod compare;

pub use compare::{
    By, ByKey, Comparator, CompareError, CompareEvent, CompareIter, CompareSummary, EventKind,
    KeyOrder, Natural, NoHandler, SequenceSide, compare, compare_by, compare_by_key, events,
    events_by, events_by_key,
};

/// Commonly used items.
pub mod prelude {
    pub use crate::compare::{
        Comparator, CompareError, CompareEvent, CompareSummary, EventKind, KeyOrder, compare,
        compare_by, compare_by_key, events, events_by_key,
    };
}
