/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Key orders used to classify the heads of the two sequences.
//!
//! The merge only needs to know whether the current head sorts before,
//! together with, or after the previous head. [`KeyOrder`] is that seam.
//! [`ByKey`] wraps a key extractor; [`Natural`] uses the items themselves.

use std::cmp::Ordering;

/// Classifies the current head against the previous head.
///
/// `Equal` yields a match, `Less` an addition and `Greater` a removal.
pub trait KeyOrder<T> {
    /// Orders `current` relative to `previous`.
    fn order(&mut self, current: &T, previous: &T) -> Ordering;
}

/// Orders two keys using only `==` and `<`.
///
/// Anything that is neither equal nor less counts as greater, so keys
/// without a total order (`f64::NAN`) never panic; they classify as
/// removals.
#[inline]
pub(crate) fn order_keys<K: PartialOrd + ?Sized>(current: &K, previous: &K) -> Ordering {
    if current == previous {
        Ordering::Equal
    } else if current < previous {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Uses the items themselves as keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: PartialOrd> KeyOrder<T> for Natural {
    #[inline]
    fn order(&mut self, current: &T, previous: &T) -> Ordering {
        order_keys(current, previous)
    }
}

/// Orders items by a key extracted with a pure function.
///
/// The extractor may be called again on an item that stays at the head of
/// its sequence across several steps.
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, K, F> KeyOrder<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    #[inline]
    fn order(&mut self, current: &T, previous: &T) -> Ordering {
        order_keys(&(self.0)(current), &(self.0)(previous))
    }
}

/// Orders items with a caller-supplied comparator.
#[derive(Debug, Clone, Copy)]
pub struct By<F>(pub F);

impl<T, F> KeyOrder<T> for By<F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    #[inline]
    fn order(&mut self, current: &T, previous: &T) -> Ordering {
        (self.0)(current, previous)
    }
}
