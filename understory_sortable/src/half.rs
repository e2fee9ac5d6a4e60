// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-over classification: which half of a candidate row the pointer is in.

use kurbo::{Point, Rect};

/// Which half of a candidate item's box the pointer occupies.
///
/// For vertical lists this is the upper or lower half. For horizontal lists
/// `Top` is the leading half and `Bottom` the trailing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Half {
    /// Insert before the hovered item.
    Top,
    /// Insert after the hovered item.
    Bottom,
}

/// Main axis of a list, used to pick the pointer coordinate that decides the half.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Rows are stacked top to bottom; the `y` coordinate decides.
    #[default]
    Vertical,
    /// Items are laid out left to right; the `x` coordinate decides.
    Horizontal,
}

impl Half {
    /// Default boundary between the two halves, as a fraction of the item extent.
    pub const DEFAULT_SPLIT: f64 = 0.5;

    /// Classify a fraction of the item extent.
    ///
    /// The boundary is exclusive on the `Top` side: `fraction == split` is `Bottom`.
    /// A NaN fraction (for example from a zero-sized box) is `Bottom` as well.
    #[must_use]
    pub fn from_fraction(fraction: f64, split: f64) -> Self {
        if fraction < split {
            Self::Top
        } else {
            Self::Bottom
        }
    }

    /// Classify `pointer` against the `bounds` of a candidate item.
    ///
    /// Both values must live in the same coordinate space. The pointer does not
    /// need to be inside `bounds`; positions before the box are `Top`, positions
    /// past its middle are `Bottom`.
    ///
    /// ```rust
    /// use kurbo::{Point, Rect};
    /// use understory_sortable::{Axis, Half};
    ///
    /// let row = Rect::new(0.0, 100.0, 300.0, 140.0);
    /// let classify = |y| {
    ///     let pointer = Point::new(5.0, y);
    ///     Half::classify(pointer, row, Axis::Vertical, Half::DEFAULT_SPLIT)
    /// };
    ///
    /// assert_eq!(classify(115.0), Half::Top);
    /// assert_eq!(classify(120.0), Half::Bottom);
    /// assert_eq!(classify(135.0), Half::Bottom);
    /// ```
    #[must_use]
    pub fn classify(pointer: Point, bounds: Rect, axis: Axis, split: f64) -> Self {
        let (position, start, extent) = match axis {
            Axis::Vertical => (pointer.y, bounds.y0, bounds.height()),
            Axis::Horizontal => (pointer.x, bounds.x0, bounds.width()),
        };
        Self::from_fraction((position - start) / extent, split)
    }
}
