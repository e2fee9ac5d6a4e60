// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-row presentation queries derived from a [`DragSession`].
//!
//! Renderers ask, for each row, whether to draw a drop marker and where. A
//! marker is shown only at the hovered row, only while a drag is active, and
//! never when the pointer hovers the dragged row itself.

use crate::{DragSession, Half};

/// Where a drop marker is drawn relative to a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Indicator {
    /// Marker before the row: the dragged item would land in front of it.
    Above,
    /// Marker after the row: the dragged item would land behind it.
    Below,
}

impl From<Half> for Indicator {
    fn from(half: Half) -> Self {
        match half {
            Half::Top => Self::Above,
            Half::Bottom => Self::Below,
        }
    }
}

bitflags::bitflags! {
    /// Presentation state of a single row during a drag.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RowFlags: u8 {
        /// The row is the item being dragged.
        const DRAGGING     = 0b0000_0001;
        /// The pointer is over the row.
        const HOVERED      = 0b0000_0010;
        /// A drop marker is drawn above the row.
        const INSERT_ABOVE = 0b0000_0100;
        /// A drop marker is drawn below the row.
        const INSERT_BELOW = 0b0000_1000;
    }
}

impl RowFlags {
    /// The marker encoded in these flags, if any.
    #[must_use]
    pub fn indicator(self) -> Option<Indicator> {
        if self.contains(Self::INSERT_ABOVE) {
            Some(Indicator::Above)
        } else if self.contains(Self::INSERT_BELOW) {
            Some(Indicator::Below)
        } else {
            None
        }
    }
}

impl DragSession {
    /// The single active marker as `(row, indicator)`, if any.
    ///
    /// Requires an active drag, a hovered row, and the hovered row differing
    /// from the dragged one.
    #[must_use]
    pub fn marker(&self) -> Option<(usize, Indicator)> {
        let source = self.source()?;
        let hover = self.hover()?;
        if source == hover.index {
            return None;
        }
        Some((hover.index, hover.half.into()))
    }

    /// Marker to draw at row `index`, if any.
    #[must_use]
    pub fn indicator_at(&self, index: usize) -> Option<Indicator> {
        self.marker()
            .and_then(|(row, indicator)| (row == index).then_some(indicator))
    }

    /// Full presentation state of row `index`.
    #[must_use]
    pub fn row_flags(&self, index: usize) -> RowFlags {
        let mut flags = RowFlags::empty();
        flags.set(RowFlags::DRAGGING, self.source() == Some(index));
        flags.set(RowFlags::HOVERED, self.hover_index() == Some(index));
        match self.indicator_at(index) {
            Some(Indicator::Above) => flags.insert(RowFlags::INSERT_ABOVE),
            Some(Indicator::Below) => flags.insert(RowFlags::INSERT_BELOW),
            None => {}
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::*;
    use crate::{DragEvent, SortableConfig};

    /// Session dragging `source`, hovering `hover` on `half`.
    fn session(source: usize, hover: usize, half: Half) -> DragSession {
        let config = SortableConfig::default();
        let top = 40.0 * hover as f64;
        let y = match half {
            Half::Top => top + 5.0,
            Half::Bottom => top + 35.0,
        };
        let events = [
            DragEvent::Start { index: source },
            DragEvent::Over {
                index: hover,
                pointer: Point::new(0.0, y),
                bounds: Rect::new(0.0, top, 100.0, top + 40.0),
            },
        ];
        events.into_iter().fold(DragSession::new(), |session, event| {
            session.apply(event, &config).0
        })
    }

    #[test]
    fn only_hovered_row_shows_above() {
        let s = session(0, 2, Half::Top);
        assert_eq!(s.marker(), Some((2, Indicator::Above)));
        for ix in 0..4 {
            let expected = (ix == 2).then_some(Indicator::Above);
            assert_eq!(s.indicator_at(ix), expected);
        }
    }

    #[test]
    fn bottom_half_shows_below() {
        let s = session(3, 1, Half::Bottom);
        assert_eq!(s.indicator_at(1), Some(Indicator::Below));
        assert_eq!(s.indicator_at(2), None);
    }

    #[test]
    fn hovering_self_shows_nothing() {
        for half in [Half::Top, Half::Bottom] {
            let s = session(1, 1, half);
            assert_eq!(s.marker(), None);
            for ix in 0..4 {
                assert_eq!(s.indicator_at(ix), None);
            }
        }
    }

    #[test]
    fn no_marker_without_drag() {
        let config = SortableConfig::default();
        let (s, _) = DragSession::new().apply(
            DragEvent::Over {
                index: 1,
                pointer: Point::new(0.0, 41.0),
                bounds: Rect::new(0.0, 40.0, 100.0, 80.0),
            },
            &config,
        );
        assert_eq!(s.marker(), None);
        assert_eq!(s.row_flags(1), RowFlags::HOVERED);
    }

    #[test]
    fn no_marker_without_hover() {
        let config = SortableConfig::default();
        let (s, _) = DragSession::new().apply(DragEvent::Start { index: 0 }, &config);
        assert_eq!(s.marker(), None);
        assert_eq!(s.row_flags(0), RowFlags::DRAGGING);
        assert_eq!(s.row_flags(1), RowFlags::empty());
    }

    #[test]
    fn row_flags_combine() {
        let s = session(0, 2, Half::Bottom);
        let below = RowFlags::HOVERED | RowFlags::INSERT_BELOW;
        assert_eq!(s.row_flags(0), RowFlags::DRAGGING);
        assert_eq!(s.row_flags(2), below);
        assert_eq!(s.row_flags(2).indicator(), Some(Indicator::Below));
        assert_eq!(s.row_flags(1), RowFlags::empty());
        assert_eq!(s.row_flags(1).indicator(), None);

        let own = session(1, 1, Half::Top);
        assert_eq!(own.row_flags(1), RowFlags::DRAGGING | RowFlags::HOVERED);
    }
}
