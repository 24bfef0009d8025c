/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Interactive comparison of two sequences sorted by a common key.
//!
//! The comparison walks both sequences once, front to back, and classifies
//! every element as matched (present in both), added (only in `current`)
//! or removed (only in `previous`). Each classification is handed to the
//! caller as a [`CompareEvent`] in ascending key order.
//!
//! # Architecture
//!
//! - [`CompareIter`] holds one read cursor per sequence and performs the merge
//! - [`KeyOrder`] decides how two head items compare
//! - [`compare`], [`compare_by_key`] and [`compare_by`] push events to a callback
//! - [`Comparator`] is the builder form, with run-time precondition checks
//! - [`CompareSummary`] counts what was delivered
//!
//! # Examples
//!
//! ```
//! use icmp::compare::{CompareEvent, compare_by_key};
//!
//! #[derive(Debug, PartialEq)]
//! struct Row {
//!     id: f64,
//! }
//!
//! let current = vec![Row { id: -1.0 }, Row { id: 1.0 }, Row { id: 4.0 }];
//! let previous = vec![Row { id: 0.0 }, Row { id: 1.0 }];
//!
//! let mut events = Vec::new();
//! let summary = compare_by_key(&current, &previous, |row| row.id, |event| {
//!     events.push(event.map(|row| row.id));
//! });
//!
//! assert_eq!(
//!     events,
//!     vec![
//!         CompareEvent::Added(-1.0),
//!         CompareEvent::Removed(0.0),
//!         CompareEvent::Matched(1.0, 1.0),
//!         CompareEvent::Added(4.0),
//!     ]
//! );
//! assert_eq!(summary.total(), 4);
//! ```

pub mod core;
pub mod cursor;
pub mod error;
pub mod event;
pub mod order;
pub mod summary;


// Re-export main types
pub use self::core::{Comparator, NoHandler, compare, compare_by, compare_by_key};
pub use cursor::{CompareIter, events, events_by, events_by_key};
pub use error::{CompareError, SequenceSide};
pub use event::{CompareEvent, EventKind};
pub use order::{By, ByKey, KeyOrder, Natural};
pub use summary::CompareSummary;
