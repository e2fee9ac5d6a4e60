// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index remapping and the owned item sequence.
//!
//! A move removes the dragged item first and then reinserts it, so the insertion
//! index is expressed in the shortened sequence. [`insertion_index`] is the only
//! place that knows the rule; every other function here is built on it.

use alloc::vec::Vec;

use crate::{Half, ReorderError};

/// Compute where the dragged item is reinserted after being removed.
///
/// - `source < target`: `target - 1` for [`Half::Top`], `target` for [`Half::Bottom`].
/// - `source >= target`: `target` for [`Half::Top`], `target + 1` for [`Half::Bottom`].
///
/// `source == target` is not special-cased: a `Top` drop on oneself keeps the
/// position and a `Bottom` drop shifts the item down by one.
///
/// ```rust
/// use understory_sortable::{Half, insertion_index};
///
/// assert_eq!(insertion_index(0, 2, Half::Top), 1);
/// assert_eq!(insertion_index(3, 1, Half::Bottom), 2);
/// ```
#[must_use]
pub const fn insertion_index(source: usize, target: usize, half: Half) -> usize {
    if source < target {
        match half {
            Half::Top => target - 1,
            Half::Bottom => target,
        }
    } else {
        match half {
            Half::Top => target,
            Half::Bottom => target.saturating_add(1),
        }
    }
}

/// Move the item at `source` next to `target` in place.
///
/// Returns the final index of the moved item, or `None` when `source` does not
/// address an item (the sequence is left untouched). An insertion index past
/// the end of the shortened sequence appends the item.
pub fn reorder_in_place<T>(
    items: &mut Vec<T>,
    source: usize,
    target: usize,
    half: Half,
) -> Option<usize> {
    if source >= items.len() {
        return None;
    }
    let item = items.remove(source);
    let to = insertion_index(source, target, half).min(items.len());
    items.insert(to, item);
    Some(to)
}

/// Return a reordered copy of `items`; see [`reorder_in_place`].
///
/// ```rust
/// use understory_sortable::{Half, reorder};
///
/// let seq = ['A', 'B', 'C', 'D'];
/// assert_eq!(reorder(&seq, 0, 2, Half::Bottom), ['B', 'C', 'A', 'D']);
/// assert_eq!(reorder(&seq, 3, 1, Half::Top), ['A', 'D', 'B', 'C']);
/// ```
#[must_use]
pub fn reorder<T: Clone>(items: &[T], source: usize, target: usize, half: Half) -> Vec<T> {
    let mut out = items.to_vec();
    reorder_in_place(&mut out, source, target, half);
    out
}

/// Checked variant of [`reorder_in_place`].
///
/// Fails instead of clamping: both indices must address items and the insertion
/// slot must exist in the shortened sequence. On error `items` is unchanged.
pub fn try_reorder_in_place<T>(
    items: &mut Vec<T>,
    source: usize,
    target: usize,
    half: Half,
) -> Result<usize, ReorderError> {
    let len = items.len();
    if source >= len {
        return Err(ReorderError::SourceOutOfBounds { index: source, len });
    }
    if target >= len {
        return Err(ReorderError::TargetOutOfBounds { index: target, len });
    }
    let to = insertion_index(source, target, half);
    if to > len - 1 {
        return Err(ReorderError::InsertionOutOfBounds {
            index: to,
            len: len - 1,
        });
    }
    let item = items.remove(source);
    items.insert(to, item);
    Ok(to)
}

/// Checked variant of [`reorder`].
pub fn try_reorder<T: Clone>(
    items: &[T],
    source: usize,
    target: usize,
    half: Half,
) -> Result<Vec<T>, ReorderError> {
    let mut out = items.to_vec();
    try_reorder_in_place(&mut out, source, target, half)?;
    Ok(out)
}

/// Move an item identified by key rather than by position.
///
/// Positions of `source` and `target` are looked up with `key_of` at call time,
/// then the move follows [`insertion_index`]. Returns the final index of the
/// moved item, or `None` if either key is missing.
///
/// ```rust
/// use understory_sortable::{Half, move_by_key};
///
/// let mut rows = vec![(10, "a"), (11, "b"), (12, "c")];
/// let to = move_by_key(&mut rows, |row| row.0, &12, &10, Half::Top);
/// assert_eq!(to, Some(0));
/// assert_eq!(rows, [(12, "c"), (10, "a"), (11, "b")]);
/// ```
pub fn move_by_key<T, K, F>(
    items: &mut Vec<T>,
    key_of: F,
    source: &K,
    target: &K,
    half: Half,
) -> Option<usize>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let from = items.iter().position(|item| key_of(item) == *source)?;
    let onto = items.iter().position(|item| key_of(item) == *target)?;
    reorder_in_place(items, from, onto, half)
}

/// An owned, ordered sequence of opaque items.
///
/// Order is the display order. Items are only ever moved; nothing in this type
/// adds, drops or duplicates an item except [`OrderStore::set_items`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderStore<T> {
    items: Vec<T>,
}

impl<T> OrderStore<T> {
    /// Creates a store holding `items` in iteration order.
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Current items in display order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the store holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Replaces the whole sequence.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = T>) {
        self.items = items.into_iter().collect();
    }

    /// Consumes the store and returns the items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Applies [`reorder_in_place`] to the stored sequence.
    pub fn reorder(&mut self, source: usize, target: usize, half: Half) -> Option<usize> {
        reorder_in_place(&mut self.items, source, target, half)
    }

    /// Applies [`try_reorder_in_place`] to the stored sequence.
    pub fn try_reorder(
        &mut self,
        source: usize,
        target: usize,
        half: Half,
    ) -> Result<usize, ReorderError> {
        try_reorder_in_place(&mut self.items, source, target, half)
    }
}

impl<T> From<Vec<T>> for OrderStore<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}
