// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the checked entry points.
//!
//! The event-driven path ([`SortableList::on_drop`](crate::SortableList::on_drop) and
//! friends) never fails; it trusts the host to pass indices of rendered rows. The
//! `try_*` functions validate instead and report what was wrong.

/// A reorder or session operation that was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReorderError {
    /// The dragged index does not address an item.
    #[error("source index {index} is out of bounds for {len} items")]
    SourceOutOfBounds {
        /// Offending index.
        index: usize,
        /// Length of the sequence.
        len: usize,
    },
    /// The drop target index does not address an item.
    #[error("target index {index} is out of bounds for {len} items")]
    TargetOutOfBounds {
        /// Offending index.
        index: usize,
        /// Length of the sequence.
        len: usize,
    },
    /// The computed insertion slot lies past the end of the shortened sequence.
    ///
    /// This happens for a [`Half::Bottom`](crate::Half::Bottom) drop of the last
    /// item onto itself. The unchecked path appends in that case.
    #[error("insertion index {index} is past the end of {len} remaining items")]
    InsertionOutOfBounds {
        /// Computed insertion index.
        index: usize,
        /// Length of the sequence after removing the dragged item.
        len: usize,
    },
    /// A drop was requested while no drag was in progress.
    #[error("no drag is in progress")]
    NoActiveDrag,
    /// A drag start was refused because another drag is still active.
    #[error("a drag of item {active} is already in progress")]
    DragInProgress {
        /// Index of the item being dragged by the active session.
        active: usize,
    },
}
