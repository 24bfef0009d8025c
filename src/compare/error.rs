/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Errors raised before a comparison starts.
//!
//! Every error here is a precondition failure. It is reported before either
//! sequence is traversed, so no event is ever delivered ahead of an error.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when running a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompareError {
    /// The comparison was run without an event handler.
    #[error("no event handler registered: a comparison needs a callback to report to")]
    MissingCallback,

    /// One of the two input sequences was not supplied.
    #[error("{side} sequence is missing")]
    MissingSequence {
        /// Which input was absent.
        side: SequenceSide,
    },
}

/// Identifies one of the two compared sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceSide {
    /// The newer sequence; its surplus items are reported as added.
    Current,

    /// The older sequence; its surplus items are reported as removed.
    Previous,
}

impl fmt::Display for SequenceSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current => write!(f, "current"),
            Self::Previous => write!(f, "previous"),
        }
    }
}
