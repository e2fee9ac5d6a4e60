// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The list controller: items, the current drag session, and configuration.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use tracing::{debug, trace, warn};

use crate::{
    DragEvent, DragSession, DropRequest, Indicator, OrderStore, ReorderError, RowFlags,
    SortableConfig, Transition,
};

/// Result of a drop on a [`SortableList`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DropOutcome {
    /// The dragged item moved from `from` to `to`.
    Moved {
        /// Index of the item before the drop.
        from: usize,
        /// Index of the item after the drop.
        to: usize,
    },
    /// A drag was active but the order did not change.
    Unchanged,
    /// No drag was active.
    NoSession,
}

/// A reorderable list controller.
///
/// Owns the items and a [`DragSession`], and exposes one method per gesture
/// phase. Indices passed in are positions in [`SortableList::items`] at the time
/// of the call; the controller does not validate them on the event path.
///
/// `T` is opaque: it is moved around but never inspected.
#[derive(Clone, Debug)]
pub struct SortableList<T> {
    store: OrderStore<T>,
    session: DragSession,
    config: SortableConfig,
}

impl<T> SortableList<T> {
    /// Creates a controller with the default [`SortableConfig`].
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self::with_config(items, SortableConfig::default())
    }

    /// Creates a controller with a custom configuration.
    pub fn with_config(items: impl IntoIterator<Item = T>, config: SortableConfig) -> Self {
        Self {
            store: OrderStore::new(items),
            session: DragSession::new(),
            config,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &SortableConfig {
        &self.config
    }

    /// Items in display order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        self.store.items()
    }

    /// The underlying order store.
    #[must_use]
    pub fn store(&self) -> &OrderStore<T> {
        &self.store
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Replaces the items and drops any session, whose indices would be stale.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = T>) {
        self.store.set_items(items);
        self.session = DragSession::new();
    }

    /// Consumes the controller and returns the items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.store.into_items()
    }

    /// Snapshot of the current drag session.
    #[must_use]
    pub fn session(&self) -> DragSession {
        self.session
    }

    /// Feed one event through the session and apply any resulting reorder.
    pub fn dispatch(&mut self, event: DragEvent) -> Transition {
        let transition = self.step(event);
        if let Transition::Dropped(request) = transition {
            self.apply_drop(request);
        }
        transition
    }

    /// The item at `index` started being dragged.
    pub fn on_drag_start(&mut self, index: usize) -> Transition {
        self.step(DragEvent::Start { index })
    }

    /// Checked variant of [`SortableList::on_drag_start`].
    ///
    /// Fails if `index` does not address an item, or if the start was refused
    /// under [`RestartPolicy::Reject`](crate::RestartPolicy::Reject).
    pub fn try_drag_start(&mut self, index: usize) -> Result<Transition, ReorderError> {
        let len = self.len();
        if index >= len {
            return Err(ReorderError::SourceOutOfBounds { index, len });
        }
        match self.step(DragEvent::Start { index }) {
            Transition::Rejected { active } => Err(ReorderError::DragInProgress { active }),
            transition => Ok(transition),
        }
    }

    /// The pointer is at `pointer` over the item at `index`, whose box is `bounds`.
    ///
    /// Call this for every pointer move over a row; the latest call wins.
    pub fn on_drag_over(&mut self, pointer: Point, bounds: Rect, index: usize) -> Transition {
        self.step(DragEvent::Over {
            index,
            pointer,
            bounds,
        })
    }

    /// The dragged item was released over the item at `index`.
    ///
    /// Reorders using the hovered row and half when a hover was recorded, and
    /// `index` otherwise. The session is idle afterwards in every case.
    pub fn on_drop(&mut self, index: usize) -> DropOutcome {
        match self.step(DragEvent::Drop { index }) {
            Transition::Dropped(request) => self.apply_drop(request),
            _ => DropOutcome::NoSession,
        }
    }

    /// Checked variant of [`SortableList::on_drop`].
    ///
    /// The session ends either way. On error the items are unchanged.
    pub fn try_drop(&mut self, index: usize) -> Result<DropOutcome, ReorderError> {
        let request = match self.step(DragEvent::Drop { index }) {
            Transition::Dropped(request) => request,
            _ => return Err(ReorderError::NoActiveDrag),
        };
        let DropRequest {
            source,
            target,
            half,
        } = request;
        let to = self.store.try_reorder(source, target, half)?;
        Ok(Self::outcome(source, to))
    }

    /// A drop delivered to the container rather than to a row.
    ///
    /// Drops at the hovered row when there is one. Returns `None` and leaves the
    /// session untouched when nothing is hovered.
    pub fn on_container_drop(&mut self) -> Option<DropOutcome> {
        let index = self.session.hover_index()?;
        Some(self.on_drop(index))
    }

    /// Abandon the current drag without reordering.
    pub fn cancel(&mut self) -> Transition {
        self.step(DragEvent::Cancel)
    }

    /// The single active drop marker as `(row, indicator)`, if any.
    #[must_use]
    pub fn marker(&self) -> Option<(usize, Indicator)> {
        self.session.marker()
    }

    /// Drop marker to draw at row `index`, if any.
    #[must_use]
    pub fn indicator_at(&self, index: usize) -> Option<Indicator> {
        self.session.indicator_at(index)
    }

    /// Presentation state of row `index`.
    #[must_use]
    pub fn row_flags(&self, index: usize) -> RowFlags {
        self.session.row_flags(index)
    }

    fn step(&mut self, event: DragEvent) -> Transition {
        let (session, transition) = self.session.apply(event, &self.config);
        self.session = session;
        match transition {
            Transition::Started { source } => debug!(source, "drag started"),
            Transition::Restarted { previous, source } => {
                debug!(previous, source, "drag restarted over an active session");
            }
            Transition::Rejected { active } => {
                debug!(active, "drag start rejected, a drag is already active");
            }
            Transition::Hovered(hover) => {
                trace!(index = hover.index, half = ?hover.half, "drag over");
            }
            Transition::Dropped(request) => debug!(
                source = request.source,
                target = request.target,
                half = ?request.half,
                "drop"
            ),
            Transition::DropIgnored => debug!("drop without an active drag ignored"),
            Transition::Canceled { source } => debug!(?source, "drag canceled"),
        }
        transition
    }

    fn apply_drop(&mut self, request: DropRequest) -> DropOutcome {
        let DropRequest {
            source,
            target,
            half,
        } = request;
        match self.store.reorder(source, target, half) {
            Some(to) => Self::outcome(source, to),
            None => {
                warn!(
                    source,
                    len = self.len(),
                    "dragged index out of range, order unchanged"
                );
                DropOutcome::Unchanged
            }
        }
    }

    fn outcome(from: usize, to: usize) -> DropOutcome {
        if from == to {
            DropOutcome::Unchanged
        } else {
            debug!(from, to, "item moved");
            DropOutcome::Moved { from, to }
        }
    }
}

impl<T> Default for SortableList<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
