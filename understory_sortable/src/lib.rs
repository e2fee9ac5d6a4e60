// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sortable --heading-base-level=0

//! Understory Sortable: a headless drag-to-reorder engine for lists.
//!
//! This crate implements the logic behind a reorderable list: the user drags one
//! item and drops it on the upper or lower half of another, and the list order is
//! updated to match. It does not render anything and does not know about any
//! particular UI framework or event system.
//!
//! The core concepts are:
//!
//! - [`Half`]: which half of a candidate item's box the pointer occupies, computed
//!   from a pointer position and the item's bounds with [`Half::classify`].
//! - [`insertion_index`], [`reorder`] and [`reorder_in_place`]: the index remapping
//!   that moves the dragged item next to the drop target. [`OrderStore`] owns a
//!   sequence and applies the same operation.
//! - [`DragSession`]: the transient drag state (dragged index, hovered index and
//!   half) as a plain value, advanced by [`DragSession::apply`] with [`DragEvent`]s.
//! - [`SortableList`]: a small controller that owns the items, the current
//!   [`DragSession`] and a [`SortableConfig`], and exposes one method per gesture
//!   phase.
//! - [`Indicator`] and [`RowFlags`]: per-row answers a renderer needs to draw a
//!   drop marker above or below the hovered item.
//!
//! Host frameworks are responsible for:
//!
//! - Translating their drag events into [`SortableList::on_drag_start`],
//!   [`SortableList::on_drag_over`] and [`SortableList::on_drop`], with the index
//!   of the row the event hit and that row's bounds.
//! - Re-rendering rows from [`SortableList::items`] after a drop.
//! - Drawing markers where [`SortableList::indicator_at`] says so.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_sortable::{DropOutcome, Indicator, SortableList};
//!
//! let mut list = SortableList::new(["a", "b", "c", "d"]);
//!
//! // Rows are 40 logical pixels tall, stacked from y = 0.
//! let row = |i: usize| Rect::new(0.0, 40.0 * i as f64, 200.0, 40.0 * (i + 1) as f64);
//!
//! // Drag "a" over the upper half of "c".
//! list.on_drag_start(0);
//! list.on_drag_over(Point::new(10.0, 85.0), row(2), 2);
//! assert_eq!(list.indicator_at(2), Some(Indicator::Above));
//!
//! // Drop: "a" lands right before "c".
//! let outcome = list.on_drop(2);
//! assert_eq!(outcome, DropOutcome::Moved { from: 0, to: 1 });
//! assert_eq!(list.items(), &["b", "a", "c", "d"]);
//! assert!(list.session().is_idle());
//! ```
//!
//! ## Drop semantics
//!
//! The item is first removed, then reinserted at an index that depends on the
//! direction of the move and on the half:
//!
//! - moving down (`source < target`): `target - 1` for [`Half::Top`], `target` for [`Half::Bottom`];
//! - otherwise: `target` for [`Half::Top`], `target + 1` for [`Half::Bottom`].
//!
//! There is no special case for dropping an item onto itself, so a drop on the
//! lower half of the dragged row shifts it down by one.
//!
//! ## Logging
//!
//! [`SortableList`] emits `tracing` events: `debug` for drag start, drop,
//! cancellation and restarts, `trace` for every drag-over.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod half;
mod list;
mod order;
mod row;
mod session;

pub use config::{RestartPolicy, SortableConfig};
pub use error::ReorderError;
pub use half::{Axis, Half};
pub use list::{DropOutcome, SortableList};
pub use order::{
    OrderStore, insertion_index, move_by_key, reorder, reorder_in_place, try_reorder,
    try_reorder_in_place,
};
pub use row::{Indicator, RowFlags};
pub use session::{DragEvent, DragSession, DropRequest, Hover, Phase, Transition};
