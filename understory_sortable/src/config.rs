// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration.

use crate::{Axis, Half};

/// What a drag start does while another drag session is still active.
///
/// Hosts that never see a drop for an abandoned drag (the pointer was released
/// outside every row) end up with a stale session; the policy decides how the
/// next drag start treats it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RestartPolicy {
    /// Replace the dragged index and keep the hover state.
    #[default]
    Overwrite,
    /// Ignore the new start until the active session is dropped or canceled.
    Reject,
    /// Clear the active session, hover included, then start the new one.
    CancelThenStart,
}

/// Configuration for a [`SortableList`](crate::SortableList) or a bare
/// [`DragSession`](crate::DragSession).
///
/// ```rust
/// use understory_sortable::{Axis, RestartPolicy, SortableConfig};
///
/// let config = SortableConfig::default()
///     .with_axis(Axis::Horizontal)
///     .with_restart(RestartPolicy::Reject);
/// assert_eq!(config.split, 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SortableConfig {
    /// Behavior of a drag start during an active session.
    pub restart: RestartPolicy,
    /// Main axis of the list.
    pub axis: Axis,
    /// Fraction of the item extent below which the pointer counts as [`Half::Top`].
    pub split: f64,
}

impl SortableConfig {
    /// Returns a copy using `restart`.
    #[must_use]
    pub const fn with_restart(mut self, restart: RestartPolicy) -> Self {
        self.restart = restart;
        self
    }

    /// Returns a copy using `axis`.
    #[must_use]
    pub const fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Returns a copy using `split`.
    ///
    /// Values are expected in `0.0..=1.0`.
    #[must_use]
    pub fn with_split(mut self, split: f64) -> Self {
        debug_assert!(
            (0.0..=1.0).contains(&split),
            "split must be a fraction in 0..=1; got {split}"
        );
        self.split = split;
        self
    }
}

impl Default for SortableConfig {
    fn default() -> Self {
        Self {
            restart: RestartPolicy::Overwrite,
            axis: Axis::Vertical,
            split: Half::DEFAULT_SPLIT,
        }
    }
}
