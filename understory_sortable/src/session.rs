// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session state machine.
//!
//! A [`DragSession`] is a small `Copy` value. It never changes in place; each
//! [`DragEvent`] produces the next session plus a [`Transition`] describing what
//! happened:
//!
//! ```text
//! Idle --Start--> Dragging --Over--> Dragging --Drop--> Idle
//! ```
//!
//! The session does not own the items. A drop yields a [`DropRequest`] carrying
//! the indices and half to hand to [`reorder_in_place`](crate::reorder_in_place)
//! or [`OrderStore::reorder`](crate::OrderStore::reorder).
//!
//! ## Usage
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_sortable::{
//!     DragEvent, DragSession, DropRequest, Half, SortableConfig, Transition,
//! };
//!
//! let config = SortableConfig::default();
//! let session = DragSession::new();
//!
//! let (session, _) = session.apply(DragEvent::Start { index: 3 }, &config);
//! let over = DragEvent::Over {
//!     index: 1,
//!     pointer: Point::new(4.0, 70.0),
//!     bounds: Rect::new(0.0, 40.0, 100.0, 80.0),
//! };
//! let (session, _) = session.apply(over, &config);
//! assert_eq!(session.half(), Some(Half::Bottom));
//!
//! let (session, transition) = session.apply(DragEvent::Drop { index: 1 }, &config);
//! assert_eq!(
//!     transition,
//!     Transition::Dropped(DropRequest { source: 3, target: 1, half: Half::Bottom })
//! );
//! assert!(session.is_idle());
//! ```

use kurbo::{Point, Rect};

use crate::{Half, RestartPolicy, SortableConfig};

/// The item under the pointer and which half of it the pointer is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hover {
    /// Index of the hovered item.
    pub index: usize,
    /// Half of the hovered item the pointer occupies.
    pub half: Half,
}

/// Coarse state of a [`DragSession`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No item is being dragged.
    Idle,
    /// An item is being dragged.
    Dragging,
}

/// Input to [`DragSession::apply`], one per gesture phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    /// The item at `index` started being dragged.
    Start {
        /// Index of the dragged item in the current sequence.
        index: usize,
    },
    /// The pointer moved over the item at `index`.
    Over {
        /// Index of the item under the pointer.
        index: usize,
        /// Pointer position.
        pointer: Point,
        /// Bounds of the item under the pointer, in the same space as `pointer`.
        bounds: Rect,
    },
    /// The dragged item was released over the item at `index`.
    Drop {
        /// Index of the item the drop was delivered to.
        index: usize,
    },
    /// The drag was abandoned.
    Cancel,
}

/// A completed drop, ready to be applied to the item sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DropRequest {
    /// Index of the dragged item.
    pub source: usize,
    /// Index of the item it was dropped on.
    pub target: usize,
    /// Half of the target the pointer was over.
    pub half: Half,
}

/// What a [`DragEvent`] did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// A drag started from an idle session.
    Started {
        /// Index of the dragged item.
        source: usize,
    },
    /// A drag started while another one was active and replaced it.
    Restarted {
        /// Dragged index of the replaced session.
        previous: usize,
        /// Dragged index of the new session.
        source: usize,
    },
    /// A drag start was refused under [`RestartPolicy::Reject`].
    Rejected {
        /// Dragged index of the session that stays active.
        active: usize,
    },
    /// Hover target and half were updated.
    Hovered(Hover),
    /// A drop completed and the items should be reordered.
    Dropped(DropRequest),
    /// A drop arrived without an active drag; nothing to reorder.
    DropIgnored,
    /// The session was cleared without reordering.
    Canceled {
        /// Dragged index of the cleared session, if there was one.
        source: Option<usize>,
    },
}

/// Transient drag state: the dragged item, and the hovered item with its half.
///
/// Hover index and half are stored together as a [`Hover`], so they are always
/// set and cleared as a pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DragSession {
    source: Option<usize>,
    hover: Option<Hover>,
}

impl DragSession {
    /// Creates an idle session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            source: None,
            hover: None,
        }
    }

    /// Advance the session by one event.
    ///
    /// - `Start` records the dragged index, subject to `config.restart` when a
    ///   drag is already active.
    /// - `Over` records the hovered index and classifies the pointer into a
    ///   [`Half`] using `config.axis` and `config.split`. It is accepted while
    ///   idle too; indicators stay hidden until a drag starts.
    /// - `Drop` returns an idle session. If a drag was active, the transition
    ///   carries a [`DropRequest`] targeting the hovered item when there is one
    ///   and the `Drop` index otherwise.
    /// - `Cancel` returns an idle session.
    #[must_use]
    pub fn apply(self, event: DragEvent, config: &SortableConfig) -> (Self, Transition) {
        match event {
            DragEvent::Start { index } => self.start(index, config.restart),
            DragEvent::Over {
                index,
                pointer,
                bounds,
            } => {
                let half = Half::classify(pointer, bounds, config.axis, config.split);
                self.over(Hover { index, half })
            }
            DragEvent::Drop { index } => self.drop_on(index),
            DragEvent::Cancel => (
                Self::new(),
                Transition::Canceled {
                    source: self.source,
                },
            ),
        }
    }

    fn start(self, index: usize, restart: RestartPolicy) -> (Self, Transition) {
        let Some(previous) = self.source else {
            return (
                Self {
                    source: Some(index),
                    ..self
                },
                Transition::Started { source: index },
            );
        };
        match restart {
            RestartPolicy::Overwrite => (
                Self {
                    source: Some(index),
                    ..self
                },
                Transition::Restarted {
                    previous,
                    source: index,
                },
            ),
            RestartPolicy::Reject => (self, Transition::Rejected { active: previous }),
            RestartPolicy::CancelThenStart => (
                Self {
                    source: Some(index),
                    hover: None,
                },
                Transition::Restarted {
                    previous,
                    source: index,
                },
            ),
        }
    }

    fn over(self, hover: Hover) -> (Self, Transition) {
        (
            Self {
                hover: Some(hover),
                ..self
            },
            Transition::Hovered(hover),
        )
    }

    fn drop_on(self, index: usize) -> (Self, Transition) {
        let Some(source) = self.source else {
            return (Self::new(), Transition::DropIgnored);
        };
        // Without a recorded hover there is no half either; a missing half
        // takes the `Bottom` branch of the insertion rule.
        let (target, half) = match self.hover {
            Some(hover) => (hover.index, hover.half),
            None => (index, Half::Bottom),
        };
        (
            Self::new(),
            Transition::Dropped(DropRequest {
                source,
                target,
                half,
            }),
        )
    }

    /// Index of the dragged item, if a drag is active.
    #[must_use]
    pub const fn source(&self) -> Option<usize> {
        self.source
    }

    /// The hovered item and half, if any.
    #[must_use]
    pub const fn hover(&self) -> Option<Hover> {
        self.hover
    }

    /// Index of the hovered item, if any.
    #[must_use]
    pub fn hover_index(&self) -> Option<usize> {
        self.hover.map(|hover| hover.index)
    }

    /// Half of the hovered item the pointer occupies, if any.
    #[must_use]
    pub fn half(&self) -> Option<Half> {
        self.hover.map(|hover| hover.half)
    }

    /// Coarse state of the session.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self.source {
            Some(_) => Phase::Dragging,
            None => Phase::Idle,
        }
    }

    /// Returns `true` if an item is being dragged.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.source.is_some()
    }

    /// Returns `true` if the session holds no state at all.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        self.source.is_none() && self.hover.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SortableConfig {
        SortableConfig::default()
    }

    fn row(index: usize) -> Rect {
        let top = 40.0 * index as f64;
        Rect::new(0.0, top, 200.0, top + 40.0)
    }

    /// An `Over` event with the pointer `offset` pixels into row `index`.
    fn over(index: usize, offset: f64) -> DragEvent {
        let bounds = row(index);
        DragEvent::Over {
            index,
            pointer: Point::new(10.0, bounds.y0 + offset),
            bounds,
        }
    }

    fn run(events: &[DragEvent], config: &SortableConfig) -> (DragSession, Transition) {
        let mut session = DragSession::new();
        let mut last = Transition::DropIgnored;
        for event in events {
            let (next, transition) = session.apply(*event, config);
            session = next;
            last = transition;
        }
        (session, last)
    }

    #[test]
    fn new_session_is_idle() {
        let session = DragSession::new();
        assert!(session.is_idle());
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.source(), None);
        assert_eq!(session.hover_index(), None);
        assert_eq!(session.half(), None);
        assert_eq!(session, DragSession::default());
    }

    #[test]
    fn start_records_source() {
        let (session, transition) = run(&[DragEvent::Start { index: 2 }], &config());
        assert_eq!(transition, Transition::Started { source: 2 });
        assert_eq!(session.source(), Some(2));
        assert_eq!(session.phase(), Phase::Dragging);
        assert!(session.is_dragging());
    }

    #[test]
    fn over_classifies_half() {
        let events = [DragEvent::Start { index: 0 }, over(2, 15.0)];
        let (session, transition) = run(&events, &config());
        let hover = Hover {
            index: 2,
            half: Half::Top,
        };
        assert_eq!(transition, Transition::Hovered(hover));
        assert_eq!(session.hover(), Some(hover));

        let (session, _) = session.apply(over(2, 35.0), &config());
        assert_eq!(session.half(), Some(Half::Bottom));
        let (session, _) = session.apply(over(2, 20.0), &config());
        assert_eq!(session.half(), Some(Half::Bottom));
    }

    #[test]
    fn latest_over_wins() {
        let (session, _) = run(
            &[
                DragEvent::Start { index: 0 },
                over(1, 5.0),
                over(3, 30.0),
                over(2, 1.0),
            ],
            &config(),
        );
        assert_eq!(session.hover_index(), Some(2));
        assert_eq!(session.half(), Some(Half::Top));
    }

    #[test]
    fn over_while_idle_records_hover_only() {
        let (session, _) = run(&[over(1, 5.0)], &config());
        assert_eq!(session.source(), None);
        assert_eq!(session.hover_index(), Some(1));
        assert_eq!(session.phase(), Phase::Idle);
        assert!(!session.is_idle());
    }

    #[test]
    fn drop_uses_hover_and_resets() {
        let (session, transition) = run(
            &[
                DragEvent::Start { index: 0 },
                over(2, 10.0),
                DragEvent::Drop { index: 2 },
            ],
            &config(),
        );
        assert_eq!(
            transition,
            Transition::Dropped(DropRequest {
                source: 0,
                target: 2,
                half: Half::Top,
            })
        );
        assert!(session.is_idle());
        assert_eq!(session.source(), None);
        assert_eq!(session.hover_index(), None);
        assert_eq!(session.half(), None);
    }

    #[test]
    fn drop_prefers_hover_over_event_index() {
        let (_, transition) = run(
            &[
                DragEvent::Start { index: 0 },
                over(3, 30.0),
                DragEvent::Drop { index: 1 },
            ],
            &config(),
        );
        assert_eq!(
            transition,
            Transition::Dropped(DropRequest {
                source: 0,
                target: 3,
                half: Half::Bottom,
            })
        );
    }

    #[test]
    fn drop_without_hover_targets_event_index_bottom() {
        let (_, transition) = run(
            &[DragEvent::Start { index: 3 }, DragEvent::Drop { index: 1 }],
            &config(),
        );
        assert_eq!(
            transition,
            Transition::Dropped(DropRequest {
                source: 3,
                target: 1,
                half: Half::Bottom,
            })
        );
    }

    #[test]
    fn drop_without_drag_is_ignored_and_resets() {
        let events = [over(1, 5.0), DragEvent::Drop { index: 1 }];
        let (session, transition) = run(&events, &config());
        assert_eq!(transition, Transition::DropIgnored);
        assert!(session.is_idle());
    }

    #[test]
    fn overwrite_keeps_hover() {
        let (session, transition) = run(
            &[
                DragEvent::Start { index: 0 },
                over(2, 5.0),
                DragEvent::Start { index: 3 },
            ],
            &config(),
        );
        assert_eq!(
            transition,
            Transition::Restarted {
                previous: 0,
                source: 3,
            }
        );
        assert_eq!(session.source(), Some(3));
        assert_eq!(session.hover_index(), Some(2));
    }

    #[test]
    fn reject_keeps_active_session() {
        let config = config().with_restart(RestartPolicy::Reject);
        let (session, transition) = run(
            &[
                DragEvent::Start { index: 0 },
                over(2, 5.0),
                DragEvent::Start { index: 3 },
            ],
            &config,
        );
        assert_eq!(transition, Transition::Rejected { active: 0 });
        assert_eq!(session.source(), Some(0));
        assert_eq!(session.hover_index(), Some(2));
    }

    #[test]
    fn cancel_then_start_clears_hover() {
        let config = config().with_restart(RestartPolicy::CancelThenStart);
        let (session, transition) = run(
            &[
                DragEvent::Start { index: 0 },
                over(2, 5.0),
                DragEvent::Start { index: 3 },
            ],
            &config,
        );
        assert_eq!(
            transition,
            Transition::Restarted {
                previous: 0,
                source: 3,
            }
        );
        assert_eq!(session.source(), Some(3));
        assert_eq!(session.hover(), None);
    }

    #[test]
    fn cancel_clears_everything() {
        let (session, transition) = run(
            &[
                DragEvent::Start { index: 1 },
                over(0, 5.0),
                DragEvent::Cancel,
            ],
            &config(),
        );
        assert_eq!(transition, Transition::Canceled { source: Some(1) });
        assert!(session.is_idle());

        let (_, transition) = session.apply(DragEvent::Cancel, &config());
        assert_eq!(transition, Transition::Canceled { source: None });
    }

    #[test]
    fn abandoned_drag_keeps_source() {
        // No drop and no cancel: the session stays in `Dragging`.
        let events = [DragEvent::Start { index: 1 }, over(0, 5.0)];
        let (session, _) = run(&events, &config());
        assert_eq!(session.phase(), Phase::Dragging);
        assert_eq!(session.source(), Some(1));
    }
}
